//! File Selection Module
//! Opens a native file dialog for choosing the CSV to chart.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DialogError {
    #[error("No file selected. Please choose a CSV file to continue.")]
    Cancelled,
}

/// Ask the user to pick a CSV file with the native file dialog.
///
/// The dialog filters to `.csv` by default but does not enforce the
/// extension. Fails with [`DialogError::Cancelled`] when the dialog is
/// dismissed without a choice.
pub fn select_csv_file() -> Result<PathBuf, DialogError> {
    println!("Please select a CSV file to load.");

    rfd::FileDialog::new()
        .set_title("Select a CSV file")
        .add_filter("CSV Files", &["csv"])
        .add_filter("All Files", &["*"])
        .pick_file()
        .ok_or(DialogError::Cancelled)
}
