//! Expense CLI commands
//!
//! Implements the add/list/sort/delete commands on top of the expense
//! service.

use clap::{Subcommand, ValueEnum};

use crate::config::Settings;
use crate::display::{format_categories, format_expense_details, format_expense_list, format_summary};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::CategoryFilter;
use crate::services::ExpenseService;
use crate::storage::ExpenseStore;

/// Sort direction for `sort`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortDirection {
    /// Smallest amount first
    Asc,
    /// Largest amount first
    Desc,
}

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Expense name
        name: String,
        /// Amount, e.g. 4.50 or -3
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (Food, Travel, Shopping, Other)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List expenses
    #[command(alias = "ls")]
    List {
        /// Only show one category ("All" shows everything)
        #[arg(short, long, default_value = "All")]
        category: CategoryFilter,
    },
    /// Reorder the stored expenses by amount
    Sort {
        /// Direction
        #[arg(value_enum)]
        direction: SortDirection,
    },
    /// Delete expenses by ID or by list position
    #[command(alias = "rm")]
    Delete {
        /// Expense IDs (full or short form)
        ids: Vec<String>,
        /// Row numbers as shown by `list` with the same --category
        #[arg(short, long = "position", conflicts_with = "ids")]
        positions: Vec<usize>,
        /// Filter the positions refer to
        #[arg(short, long, default_value = "All")]
        category: CategoryFilter,
    },
    /// Show totals per category
    Summary {
        /// Only total one category ("All" totals everything)
        #[arg(short, long, default_value = "All")]
        category: CategoryFilter,
    },
    /// List the available categories
    Categories,
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &mut ExpenseStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let mut service = ExpenseService::new(store);

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
        } => {
            let category =
                category.unwrap_or_else(|| settings.default_category.as_str().to_string());
            let expense = service.add_from_input(&name, &amount, &category)?;

            println!("Added expense:");
            print!("{}", format_expense_details(&expense, symbol));
        }

        ExpenseCommands::List { category } => {
            print!(
                "{}",
                format_expense_list(&service.visible(category), category, symbol)
            );
        }

        ExpenseCommands::Sort { direction } => {
            let ascending = direction == SortDirection::Asc;
            service.sort(ascending);

            println!(
                "Sorted expenses by amount ({})",
                if ascending { "ascending" } else { "descending" }
            );
        }

        ExpenseCommands::Delete {
            ids,
            positions,
            category,
        } => {
            let removed = if !ids.is_empty() {
                service.delete_by_id_text(&ids)?
            } else if !positions.is_empty() {
                service.delete_visible(category, &positions)?
            } else {
                return Err(ExpenseError::Validation(
                    "Specify expense IDs or --position".into(),
                ));
            };

            for expense in &removed {
                println!("Deleted expense: {} ({})", expense.name, expense.id);
            }
        }

        ExpenseCommands::Summary { category } => {
            print!("{}", format_summary(&service.summary(category), symbol));
        }

        ExpenseCommands::Categories => {
            print!("{}", format_categories());
        }
    }

    Ok(())
}
