//! csvchart - Interactive CSV chart builder
//!
//! Guides the user through selecting a CSV file and turning it into a bar
//! or pie chart: native file dialog, a short terminal Q&A, then a rendered
//! chart opened in the system image viewer.

mod charts;
mod data;
mod dialog;
mod prompt;

use anyhow::Result;
use data::Table;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Unable to create chart: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let path = dialog::select_csv_file()?;
    let table = Table::load(&path)?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    println!("Loaded {} rows from '{}'.\n", table.height(), file_name);

    let chart_type = prompt::prompt_choice(
        "Which chart would you like to create? (bar/pie): ",
        &["bar", "pie"],
    )?;

    if chart_type == "bar" {
        build_bar_chart(&table)?;
    } else {
        build_pie_chart(&table)?;
    }

    Ok(())
}

fn print_columns(table: &Table) {
    println!("Available columns:");
    for (name, kind) in table.column_kinds() {
        println!(" - {name} ({kind})");
    }
}

/// Bar chart flow: pick a category column, then either count rows per
/// category or sum a numeric column the user picks.
fn build_bar_chart(table: &Table) -> Result<()> {
    print_columns(table);
    let category = prompt::prompt_column("Enter the column to use for categories: ", table)?;

    let mut value_col = None;
    if table.numeric_columns().is_empty() {
        println!("No numeric columns detected; bar heights will use row counts.");
    } else {
        let answer = prompt::prompt_choice(
            "Use a numeric column for bar heights? (yes/no): ",
            &["yes", "no"],
        )?;
        if answer == "yes" {
            value_col =
                Some(prompt::prompt_column("Enter the numeric column for bar heights: ", table)?);
        }
    }

    let (entries, y_label) = match &value_col {
        Some(col) => (
            data::sum_by_category(table, &category, col)?,
            format!("Sum of {col}"),
        ),
        None => (
            data::count_by_category(table, &category)?,
            "Count".to_string(),
        ),
    };

    let out = charts::output_path("bar_chart.png");
    charts::render_bar_chart(&entries, &category, &y_label, &out)?;
    finish_chart(&out)
}

/// Pie chart flow: pick a category column for slice labels and a numeric
/// column whose per-category sums give the slice sizes.
fn build_pie_chart(table: &Table) -> Result<()> {
    print_columns(table);
    let category = prompt::prompt_column("Enter the column to use for slice labels: ", table)?;
    let value_col = prompt::prompt_column("Enter the numeric column for slice sizes: ", table)?;

    let entries = data::sum_by_category(table, &category, &value_col)?;

    let out = charts::output_path("pie_chart.png");
    charts::render_pie_chart(&entries, &out)?;
    finish_chart(&out)
}

fn finish_chart(out: &Path) -> Result<()> {
    charts::show_chart(out)?;
    println!("Chart saved to '{}' and opened in your image viewer.", out.display());
    Ok(())
}
