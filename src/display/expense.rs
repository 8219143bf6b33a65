//! Expense display formatting
//!
//! Formats expenses for terminal output: the numbered list view, single
//! record details and category totals.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{CategoryFilter, Expense, ExpenseCategory};
use crate::services::ExpenseSummary;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct TotalRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
}

/// Format the list view
///
/// Row numbers are positions within the shown (filtered) list, which is
/// what `delete --position` expects together with the same filter.
pub fn format_expense_list(expenses: &[Expense], filter: CategoryFilter, symbol: &str) -> String {
    let mut output = format!("Filtering by: {}\n", filter);

    if expenses.is_empty() {
        output.push_str("No expenses found.\n");
        return output;
    }

    let rows = expenses.iter().enumerate().map(|(position, e)| ExpenseRow {
        position,
        id: e.id.to_string(),
        name: display_name(&e.name),
        category: e.category.clone(),
        amount: e.amount.format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(4), Alignment::right());

    let total: crate::models::Money = expenses.iter().map(|e| e.amount).sum();

    output.push_str(&table.to_string());
    output.push('\n');
    output.push_str(&format!(
        "\n{} expense(s), total {}\n",
        expenses.len(),
        total.format_with_symbol(symbol)
    ));
    output
}

/// Format a single expense for display
pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:  {}\n", expense.id));
    output.push_str(&format!("Name:     {}\n", display_name(&expense.name)));
    output.push_str(&format!(
        "Amount:   {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Category: {}\n", expense.category));
    output
}

/// Format category totals
pub fn format_summary(summary: &ExpenseSummary, symbol: &str) -> String {
    let rows = summary.by_category.iter().map(|t| TotalRow {
        category: t.category.clone(),
        count: t.count,
        total: t.total.format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(2), Alignment::right());

    format!(
        "Filtering by: {}\n{}\n\n{} expense(s), total {}\n",
        summary.filter,
        table,
        summary.count,
        summary.total.format_with_symbol(symbol)
    )
}

/// Format the category vocabulary, with the `All` filter sentinel
pub fn format_categories() -> String {
    let mut output = String::from("Categories:\n");
    for category in ExpenseCategory::ALL {
        output.push_str(&format!("  {}\n", category));
    }
    output.push_str(&format!(
        "\nUse '{}' as a filter to show every category.\n",
        CategoryFilter::ALL_LABEL
    ));
    output
}

fn display_name(name: &str) -> String {
    if name.is_empty() {
        "(unnamed)".to_string()
    } else {
        name.to_string()
    }
}
