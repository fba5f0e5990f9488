//! CLI command for CSV export
//!
//! Reads records from a JSON file and either prints the CSV or saves it
//! through the filesystem download host.

use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use tracing::warn;

use crate::config::{ExportPaths, Settings};
use crate::download::{download_csv, FileSystemHost};
use crate::error::ExportResult;
use crate::export::convert_to_csv;
use crate::file_io::read_json_required;
use crate::models::Record;

/// Arguments of `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// JSON file holding an array of transaction records
    pub input: PathBuf,

    /// File name to save the export under (default: <prefix>_<today>.csv)
    #[arg(short = 'n', long)]
    pub output_name: Option<String>,

    /// Directory to save into (default: settings, then the user's downloads)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Print the CSV to stdout instead of saving a file
    #[arg(long)]
    pub stdout: bool,
}

/// Handle the export command
pub fn handle_export_command(
    paths: &ExportPaths,
    settings: &Settings,
    args: ExportArgs,
) -> ExportResult<()> {
    let records: Vec<Record> = read_json_required(&args.input)?;
    let csv = convert_to_csv(Some(&records));

    if args.stdout {
        if !csv.is_empty() {
            println!("{}", csv);
        }
        return Ok(());
    }

    if records.is_empty() {
        warn!(input = %args.input.display(), "no records found, saving an empty file");
    }

    let file_name = args
        .output_name
        .unwrap_or_else(|| settings.file_name_for(Local::now().date_naive()));
    let dir = args
        .dir
        .unwrap_or_else(|| settings.resolve_download_dir(paths));

    let mut host = FileSystemHost::new(dir);
    download_csv(&mut host, &csv, &file_name)?;

    if let Some(saved) = host.saved().last() {
        println!("Exported {} records to: {}", records.len(), saved.display());
    }

    Ok(())
}
