use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expenses::cli::{handle_expense_command, ExpenseCommands};
use expenses::config::{paths::ExpensePaths, settings::Settings};
use expenses::models::ExpenseCategory;
use expenses::storage::open_file_store;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Record expenses with a name, amount and category, then list, \
                  sort, filter and delete them. Data is stored locally as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show current configuration and paths, optionally updating settings
    Config {
        /// Category used by `add` when --category is omitted
        #[arg(long)]
        default_category: Option<ExpenseCategory>,

        /// Symbol printed in front of amounts
        #[arg(long)]
        currency: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let mut store = open_file_store(&paths)?;
            handle_expense_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Config {
            default_category,
            currency,
        }) => {
            if default_category.is_some() || currency.is_some() {
                if let Some(category) = default_category {
                    settings.default_category = category;
                }
                if let Some(symbol) = currency {
                    settings.currency_symbol = symbol;
                }
                settings.save(&paths)?;
                tracing::info!(path = %paths.settings_file().display(), "Saved settings");
            }

            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data file:       {}", paths.expenses_file().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Default category: {}", settings.default_category);
        }
        None => {
            println!("Expenses - terminal expense tracker");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses add Coffee 4.50 --category Food' to record an expense.");
        }
    }

    Ok(())
}
