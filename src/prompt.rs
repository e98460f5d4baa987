//! Interactive Prompter Module
//! Blocking read-validate-retry loops over terminal input. Invalid input
//! is re-solicited forever; the only genuine failure is stdin closing.

use crate::data::Table;
use std::io::{self, BufRead, Write};

/// Ask until the answer matches one of `options` (case-insensitive,
/// surrounding whitespace ignored). Returns the lower-cased choice.
pub fn prompt_choice(message: &str, options: &[&str]) -> io::Result<String> {
    read_choice(&mut io::stdin().lock(), &mut io::stdout(), message, options)
}

/// Ask until the answer is an exact (case-sensitive) column name of
/// `table`. Returns the trimmed name.
pub fn prompt_column(message: &str, table: &Table) -> io::Result<String> {
    read_column(&mut io::stdin().lock(), &mut io::stdout(), message, table)
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a valid answer was given",
        ));
    }
    Ok(line)
}

fn read_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    options: &[&str],
) -> io::Result<String> {
    loop {
        write!(output, "{message}")?;
        output.flush()?;

        let choice = read_line(input)?.trim().to_lowercase();
        if options.iter().any(|opt| opt.to_lowercase() == choice) {
            return Ok(choice);
        }

        let allowed: Vec<String> = options.iter().map(|opt| opt.to_lowercase()).collect();
        writeln!(output, "Please choose one of: {}", allowed.join(", "))?;
    }
}

fn read_column<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    table: &Table,
) -> io::Result<String> {
    loop {
        write!(output, "{message}")?;
        output.flush()?;

        let column = read_line(input)?.trim().to_string();
        if table.has_column(&column) {
            return Ok(column);
        }

        writeln!(
            output,
            "Column not found. Please pick from the columns listed above."
        )?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;
    use std::path::Path;

    fn sales() -> Table {
        Table::load(Path::new("tests/data/sales.csv")).unwrap()
    }

    #[rstest]
    #[case("bar\n", "bar")]
    #[case("PIE\n", "pie")]
    #[case("  Bar  \n", "bar")]
    #[case("circle\npie\n", "pie")]
    fn choice_accepts_only_listed_options(#[case] input: &str, #[case] expected: &str) {
        let mut output = Vec::new();
        let choice = read_choice(
            &mut Cursor::new(input),
            &mut output,
            "Which chart would you like to create? (bar/pie): ",
            &["bar", "pie"],
        )
        .unwrap();
        assert_eq!(choice, expected);
    }

    #[test]
    fn choice_reprints_allowed_set_on_mismatch() {
        let mut output = Vec::new();
        read_choice(
            &mut Cursor::new("maybe\nno\n"),
            &mut output,
            "Use a numeric column for bar heights? (yes/no): ",
            &["yes", "no"],
        )
        .unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Please choose one of: yes, no"));
    }

    #[test]
    fn choice_fails_on_closed_input() {
        let mut output = Vec::new();
        let err =
            read_choice(&mut Cursor::new(""), &mut output, "pick: ", &["bar", "pie"]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn column_requires_exact_name() {
        let table = sales();
        let mut output = Vec::new();
        // Column names are case-sensitive, so the first two answers miss
        let column = read_column(
            &mut Cursor::new("CATEGORY\nprice\n category \n"),
            &mut output,
            "Enter the column to use for categories: ",
            &table,
        )
        .unwrap();
        assert_eq!(column, "category");
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Column not found"));
    }
}
