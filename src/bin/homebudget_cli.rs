use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process::ExitCode;

use homebudget::{
    config::ConfigManager,
    errors::Result,
    ledger::{transactions_in_month, MonthKey, Transaction, TransactionKind},
    planner::{self, Severity},
    stats,
    storage::{JsonStore, StorageBackend},
};

#[derive(Debug, Parser)]
#[command(
    name = "homebudget",
    about = "Local-first monthly budgets, category limits, and spending advice",
    version
)]
struct Args {
    /// Month to operate on (YYYY-MM), defaults to the current month.
    #[arg(long, global = true)]
    month: Option<MonthKey>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the active budget and per-category spending status.
    Status,
    /// Print long-run recommendations for the active budget.
    Recommend,
    /// Income, expense, and per-category totals for the month.
    Summary,
    /// Set the month's overall spending ceiling.
    SetCap { amount: f64 },
    /// Set or update a category limit.
    SetLimit { category: String, cap: f64 },
    /// Remove a category limit.
    RemoveLimit { category: String },
    /// Record a transaction.
    Add {
        #[arg(long, value_enum, default_value_t = KindArg::Expense)]
        kind: KindArg,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        category: String,
        /// Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, default_value = "")]
        concept: String,
    },
    /// List the month's transactions.
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Expense,
    Income,
}

impl From<KindArg> for TransactionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Expense => TransactionKind::Expense,
            KindArg::Income => TransactionKind::Income,
        }
    }
}

fn main() -> ExitCode {
    homebudget::init();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let store = JsonStore::new_default()?;
    let today = Local::now().date_naive();
    let month = args.month.unwrap_or_else(|| MonthKey::from_date(today));
    // Any date inside the month resolves the same budget.
    let reference = month.start_date();

    match args.command {
        Command::Status => status(&store, month, reference),
        Command::Recommend => recommend(&store, reference),
        Command::Summary => summary(&store, month),
        Command::SetCap { amount } => {
            let mut budget = planner::resolve(&store.load_budgets()?, reference).into_owned();
            budget.overall_cap = amount;
            store.upsert_budget(budget)?;
            println!("Overall cap for {month} set to {amount:.2}.");
            Ok(())
        }
        Command::SetLimit { category, cap } => {
            let mut budget = planner::resolve(&store.load_budgets()?, reference).into_owned();
            budget.set_limit(category.clone(), cap);
            store.upsert_budget(budget)?;
            println!("Limit for \"{category}\" in {month} set to {cap:.2}.");
            Ok(())
        }
        Command::RemoveLimit { category } => {
            let mut budget = planner::resolve(&store.load_budgets()?, reference).into_owned();
            if budget.remove_limit(&category) {
                store.upsert_budget(budget)?;
                println!("Removed the \"{category}\" limit from {month}.");
            } else {
                println!("{month} has no limit for \"{category}\".");
            }
            Ok(())
        }
        Command::Add {
            kind,
            amount,
            category,
            date,
            concept,
        } => {
            let mut transaction =
                Transaction::new(amount, kind.into(), category, date.unwrap_or(today));
            transaction.concept = concept;
            store.append_transaction(transaction)?;
            println!("Recorded.");
            Ok(())
        }
        Command::List => list(&store, month),
    }
}

fn status(store: &JsonStore, month: MonthKey, reference: NaiveDate) -> Result<()> {
    let config = ConfigManager::new()?.load()?;
    let book = store.load_budgets()?;
    let budget = planner::resolve(&book, reference);
    let transactions = store.load_transactions()?;
    let month_transactions = transactions_in_month(&transactions, month);

    println!(
        "{} {} ({})",
        "Budget for".bold(),
        budget.month,
        config.currency
    );
    if budget.overall_cap > 0.0 {
        println!("Overall cap: {:.2}", budget.overall_cap);
    }
    if budget.category_limits.is_empty() {
        println!("No category limits defined for this month.");
        return Ok(());
    }

    for entry in planner::evaluate(&budget, &month_transactions) {
        println!(
            "  {:<16} {:>10.2} / {:<10.2} {}",
            entry.category,
            entry.spent,
            entry.cap,
            severity_label(entry.severity)
        );
    }
    if let Some(overall) = planner::evaluate_overall(&budget, &month_transactions) {
        println!(
            "  {:<16} {:>10.2} / {:<10.2} {}",
            "Total".bold(),
            overall.spent,
            overall.cap,
            severity_label(overall.severity)
        );
    }
    Ok(())
}

fn recommend(store: &JsonStore, reference: NaiveDate) -> Result<()> {
    let book = store.load_budgets()?;
    let budget = planner::resolve(&book, reference);
    let transactions = store.load_transactions()?;
    let messages = planner::recommend(&budget, &transactions);
    if messages.is_empty() {
        println!("Spending is in line with the current limits.");
    }
    for message in messages {
        println!("- {message}");
    }
    Ok(())
}

fn summary(store: &JsonStore, month: MonthKey) -> Result<()> {
    let transactions = store.load_transactions()?;
    let totals = stats::monthly_totals(&transactions, month);
    let net = format!("{:+.2}", totals.net);
    println!("{} {}", "Summary for".bold(), month);
    println!("  Income:   {:>12.2}", totals.income);
    println!("  Expenses: {:>12.2}", totals.expenses);
    println!(
        "  Net:      {:>12}",
        if totals.net < 0.0 { net.red() } else { net.green() }
    );

    let month_transactions = transactions_in_month(&transactions, month);
    let by_category = stats::expense_by_category(&month_transactions);
    if !by_category.is_empty() {
        println!("  By category:");
        for (category, total) in by_category {
            println!("    {category:<16} {total:>10.2}");
        }
    }
    Ok(())
}

fn list(store: &JsonStore, month: MonthKey) -> Result<()> {
    let transactions = store.load_transactions()?;
    let selected = transactions_in_month(&transactions, month);
    if selected.is_empty() {
        println!("No transactions in {month}.");
        return Ok(());
    }
    for txn in selected {
        let amount = match txn.kind {
            TransactionKind::Income => format!("+{:.2}", txn.amount).green(),
            TransactionKind::Expense => format!("-{:.2}", txn.amount).red(),
        };
        println!("  {}  {:>12}  {:<16} {}", txn.date, amount, txn.category, txn.concept);
    }
    Ok(())
}

fn severity_label(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::Ok => "ok".green(),
        Severity::Warning => "warning".yellow(),
        Severity::Over => "over".red(),
    }
}
