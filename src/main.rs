use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_export::cli::{handle_export_command, handle_summary_command, ExportArgs, SummaryArgs};
use expense_export::config::{ExportPaths, Settings};
use expense_export::logging::init_cli_logger;
use expense_export::models::format_currency;

#[derive(Parser)]
#[command(
    name = "expense-export",
    version,
    about = "Export expense-tracker transactions to CSV",
    long_about = "Converts transaction records into CSV files, summarizes monthly \
                  expenses, and formats amounts as Malaysian Ringgit."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export records from a JSON file to CSV
    Export(ExportArgs),

    /// Format an amount as Ringgit
    Format {
        /// Amount to format (e.g., 1234.5 or -5)
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Show expense totals per category for a month
    Summary(SummaryArgs),

    /// Show current configuration and paths
    Config,
}

fn load_config() -> Result<(ExportPaths, Settings)> {
    let paths = ExportPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    Ok((paths, settings))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    match cli.command {
        Some(Commands::Export(args)) => {
            let (paths, settings) = load_config()?;
            handle_export_command(&paths, &settings, args)?;
        }
        Some(Commands::Format { amount }) => {
            println!("{}", format_currency(amount));
        }
        Some(Commands::Summary(args)) => {
            handle_summary_command(args)?;
        }
        Some(Commands::Config) => {
            let (paths, settings) = load_config()?;
            println!("expense-export Configuration");
            println!("============================");
            println!("Config directory:   {}", paths.base_dir().display());
            println!("Settings file:      {}", paths.settings_file().display());
            println!(
                "Download directory: {}",
                settings.resolve_download_dir(&paths).display()
            );
            println!("File name prefix:   {}", settings.file_name_prefix);
        }
        None => {
            println!("expense-export - CSV export for expense-tracker transactions");
            println!();
            println!("Run 'expense-export --help' for usage information.");
        }
    }

    Ok(())
}
