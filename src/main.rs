use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use finreport::cli::{handle_categories_command, handle_report_command, ReportCommands};
use finreport::config::{paths::FinreportPaths, settings::Settings};
use finreport::storage::Storage;

#[derive(Parser)]
#[command(
    name = "finreport",
    version,
    about = "P&L and cashflow statements from income and expense documents",
    long_about = "finreport builds Profit & Loss and Cashflow statements from stored \
                  income and expense documents, bucketed by year or by month and \
                  optionally filtered to a single location."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a financial statement
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show the expense category tree
    Categories,

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    finreport::logging::init_tracing(cli.verbose);

    let paths = FinreportPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Report(cmd)) => {
            let mut storage = Storage::new(paths)?;
            storage.load_all()?;
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Categories) => {
            let mut storage = Storage::new(paths)?;
            storage.load_all()?;
            handle_categories_command(&storage)?;
        }
        Some(Commands::Init) => {
            println!("Initializing finreport at: {}", paths.base_dir().display());
            finreport::storage::init::initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Income documents:   {}", paths.income_file().display());
            println!("Expense documents:  {}", paths.expenses_file().display());
            println!("Categories:         {}", paths.categories_file().display());
            println!();
            println!("Run 'finreport categories' to see the starter category tree.");
        }
        Some(Commands::Config) => {
            println!("finreport Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Default format:          {}", settings.default_format);
            println!("  Default location:        {}", settings.default_location);
            println!("  Default opening balance: {:.2}", settings.default_opening_balance);
            println!("  Currency symbol:         {}", settings.currency_symbol);
            println!("  Input date format:       {}", settings.input_date_format);
        }
        None => {
            println!("finreport - P&L and cashflow statements");
            println!();
            println!("Run 'finreport --help' for usage information.");
            println!("Run 'finreport report pnl --start 01/01/2025 --end 31/12/2025' for a yearly P&L.");
        }
    }

    Ok(())
}
