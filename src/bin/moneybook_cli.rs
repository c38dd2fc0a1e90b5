//! Thin command-line front-end for the finance store. Owns input validation
//! and confirmation prompts; all state changes go through `FinanceStore`.

use std::{env, error::Error, fs, process};

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use colored::Colorize;
use dialoguer::Confirm;

use moneybook::domain::{
    BudgetDraft, CategoryDraft, EntryKind, SettingsPatch, SnapshotOverlay, TransactionDraft,
};
use moneybook::storage::JsonFileStorage;
use moneybook::store::FinanceStore;

type CliResult = Result<(), Box<dyn Error>>;

fn main() {
    moneybook::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = run(args) {
        eprintln!("{} {err}", "error:".red().bold());
        process::exit(1);
    }
}

fn run(mut args: Vec<String>) -> CliResult {
    if args.is_empty() {
        print_usage();
        return Ok(());
    }
    let command = args.remove(0);
    if matches!(command.as_str(), "help" | "--help" | "-h") {
        print_usage();
        return Ok(());
    }

    let storage = JsonFileStorage::open_default()?;
    let mut store = FinanceStore::open(Box::new(storage));

    match command.as_str() {
        "add" => cmd_add(&mut store, args),
        "list" => cmd_list(&store, args),
        "summary" => cmd_summary(&store),
        "trend" => cmd_trend(&store, args),
        "budgets" => cmd_budgets(&store),
        "set-budget" => cmd_set_budget(&mut store, args),
        "categories" => cmd_categories(&store, args),
        "add-category" => cmd_add_category(&mut store, args),
        "settings" => cmd_settings(&mut store, args),
        "export" => cmd_export(&store, args),
        "import" => cmd_import(&mut store, args),
        "reset" => cmd_reset(&mut store, args),
        other => Err(format!("unknown command `{other}`, try `help`").into()),
    }
}

fn cmd_add(store: &mut FinanceStore, mut args: Vec<String>) -> CliResult {
    let date = take_flag(&mut args, "--date");
    let notes = take_flag(&mut args, "--notes");
    if args.len() < 4 {
        return Err("usage: add <income|expense> <amount> <category-id> <description...>".into());
    }
    let kind = EntryKind::parse(&args[0]).ok_or("type must be `income` or `expense`")?;
    let amount: f64 = args[1]
        .parse()
        .map_err(|_| "amount must be a positive number")?;
    if amount <= 0.0 || !amount.is_finite() {
        return Err("amount must be a positive number".into());
    }
    let mut draft = TransactionDraft::new(kind, amount, args[2].clone(), args[3..].join(" "));
    if let Some(raw) = date {
        draft = draft.on_date(parse_local_date(&raw)?);
    }
    if let Some(text) = notes {
        draft = draft.with_notes(text);
    }
    let txn = store.add_transaction(draft)?;
    println!(
        "{} {} {}: {}",
        "recorded".green().bold(),
        txn.kind.to_string().to_lowercase(),
        money(txn.amount, store),
        txn.description
    );
    Ok(())
}

fn cmd_list(store: &FinanceStore, mut args: Vec<String>) -> CliResult {
    let limit = match take_flag(&mut args, "--limit") {
        Some(raw) => raw.parse().map_err(|_| "--limit must be a number")?,
        None => 20,
    };
    let transactions = store.recent_transactions(limit);
    if transactions.is_empty() {
        println!("no transactions yet");
        return Ok(());
    }
    for txn in transactions {
        let amount = match txn.kind {
            EntryKind::Income => format!("+{}", money(txn.amount, store)).green(),
            EntryKind::Expense => format!("-{}", money(txn.amount, store)).red(),
        };
        println!(
            "{}  {:>14}  {:<18}  {}",
            txn.local_date(),
            amount,
            store.snapshot().categories.name_for(&txn.category_id),
            txn.description
        );
    }
    Ok(())
}

fn cmd_summary(store: &FinanceStore) -> CliResult {
    let totals = store.monthly_totals();
    println!("{}", Local::now().format("%B %Y").to_string().bold());
    println!("  income    {}", money(totals.income, store).green());
    println!("  expenses  {}", money(totals.expenses, store).red());
    let balance = money(totals.balance, store);
    if totals.balance >= 0.0 {
        println!("  balance   {}", balance.green());
    } else {
        println!("  balance   {}", balance.red());
    }

    let breakdown = store.expenses_by_category();
    if !breakdown.is_empty() {
        println!("\n{}", "spending by category".bold());
        for row in breakdown {
            println!(
                "  {} {:<18} {:>12}  {:>5.1}%",
                row.category.icon,
                row.category.name,
                money(row.amount, store),
                row.percentage
            );
        }
    }
    Ok(())
}

fn cmd_trend(store: &FinanceStore, mut args: Vec<String>) -> CliResult {
    let days = match take_flag(&mut args, "--days") {
        Some(raw) => raw.parse().map_err(|_| "--days must be a number")?,
        None => 7,
    };
    let trend = store.spending_trend(days);
    let peak = trend.iter().map(|day| day.amount).fold(0.0_f64, f64::max);
    for day in trend {
        let width = if peak > 0.0 {
            ((day.amount / peak) * 30.0).round() as usize
        } else {
            0
        };
        println!(
            "{}  {:>12}  {}",
            day.date.format("%a %b %d"),
            money(day.amount, store),
            "▇".repeat(width)
        );
    }
    Ok(())
}

fn cmd_budgets(store: &FinanceStore) -> CliResult {
    let progress = store.budget_status();
    if progress.is_empty() {
        println!("no budgets configured, try `set-budget`");
        return Ok(());
    }
    for row in progress {
        let name = row
            .category
            .as_ref()
            .map(|category| category.name.clone())
            .unwrap_or_else(|| "Unknown".into());
        let status = if row.is_over_budget {
            "OVER".red().bold()
        } else {
            format!("{:.0}%", row.percentage).normal()
        };
        println!(
            "{:<18} {:>12} of {:>12}  {:>6}  remaining {}",
            name,
            money(row.spent, store),
            money(row.budget.amount, store),
            status,
            money(row.remaining, store)
        );
    }
    Ok(())
}

fn cmd_set_budget(store: &mut FinanceStore, args: Vec<String>) -> CliResult {
    if args.len() != 2 {
        return Err("usage: set-budget <category-id> <amount>".into());
    }
    let amount: f64 = args[1]
        .parse()
        .map_err(|_| "amount must be a non-negative number")?;
    if amount < 0.0 || !amount.is_finite() {
        return Err("amount must be a non-negative number".into());
    }
    let budget = store.set_budget(BudgetDraft::monthly(args[0].clone(), amount))?;
    println!(
        "{} monthly budget for `{}` set to {}",
        "saved".green().bold(),
        budget.category_id,
        money(budget.amount, store)
    );
    Ok(())
}

fn cmd_categories(store: &FinanceStore, args: Vec<String>) -> CliResult {
    let groups: Vec<EntryKind> = match args.first().map(String::as_str) {
        Some(token) => vec![EntryKind::parse(token).ok_or("group must be `income` or `expense`")?],
        None => vec![EntryKind::Expense, EntryKind::Income],
    };
    for kind in groups {
        println!("{}", kind.to_string().bold());
        for category in store.snapshot().categories.group(kind) {
            println!("  {} {:<18} ({})", category.icon, category.name, category.id);
        }
    }
    Ok(())
}

fn cmd_add_category(store: &mut FinanceStore, mut args: Vec<String>) -> CliResult {
    let icon = take_flag(&mut args, "--icon").unwrap_or_else(|| "📌".into());
    let color = take_flag(&mut args, "--color").unwrap_or_else(|| "#6b7280".into());
    if args.len() < 2 {
        return Err("usage: add-category <income|expense> <name...> [--icon E] [--color HEX]".into());
    }
    let kind = EntryKind::parse(&args[0]).ok_or("group must be `income` or `expense`")?;
    let name = args[1..].join(" ");
    let category = store.add_category(kind, CategoryDraft::new(name, icon, color))?;
    println!(
        "{} {} category `{}` ({})",
        "added".green().bold(),
        kind.to_string().to_lowercase(),
        category.name,
        category.id
    );
    Ok(())
}

fn cmd_settings(store: &mut FinanceStore, args: Vec<String>) -> CliResult {
    if args.is_empty() {
        let settings = &store.snapshot().settings;
        println!("theme         {}", settings.theme);
        println!("currency      {}", settings.currency);
        println!("notifications {}", settings.notifications);
        println!("budgetAlerts  {}", settings.budget_alerts);
        for (key, value) in &settings.extra {
            println!("{key:<13} {value}");
        }
        return Ok(());
    }
    if args.len() != 2 {
        return Err("usage: settings [<key> <value>]".into());
    }
    let mut patch = SettingsPatch::default();
    let value = args[1].clone();
    match args[0].as_str() {
        "theme" => patch.theme = Some(value),
        "currency" => patch.currency = Some(value),
        "notifications" => patch.notifications = Some(parse_bool(&value)?),
        "budgetAlerts" => patch.budget_alerts = Some(parse_bool(&value)?),
        other => {
            patch.extra.insert(other.to_string(), value.into());
        }
    }
    store.update_settings(patch)?;
    println!("{} settings updated", "saved".green().bold());
    Ok(())
}

fn cmd_export(store: &FinanceStore, args: Vec<String>) -> CliResult {
    let path = args.first().ok_or("usage: export <path>")?;
    let bundle = store.export_data();
    fs::write(path, serde_json::to_string_pretty(&bundle)?)?;
    println!("{} exported to {path}", "done".green().bold());
    Ok(())
}

fn cmd_import(store: &mut FinanceStore, args: Vec<String>) -> CliResult {
    let path = args.first().ok_or("usage: import <path>")?;
    let raw = fs::read_to_string(path)?;
    // Parse fully before dispatching so a bad file never mutates state.
    let overlay: SnapshotOverlay = serde_json::from_str(&raw)
        .map_err(|err| format!("import file is not valid: {err}"))?;
    store.import_data(overlay)?;
    println!("{} imported {path}", "done".green().bold());
    Ok(())
}

fn cmd_reset(store: &mut FinanceStore, args: Vec<String>) -> CliResult {
    let confirmed = args.iter().any(|arg| arg == "--yes")
        || Confirm::new()
            .with_prompt("Reset all data? This action cannot be undone.")
            .default(false)
            .interact()?;
    if !confirmed {
        println!("aborted");
        return Ok(());
    }
    store.reset_data()?;
    println!("{} all data reset to defaults", "done".green().bold());
    Ok(())
}

fn money(amount: f64, store: &FinanceStore) -> String {
    format!("{:.2} {}", amount, store.snapshot().settings.currency)
}

fn parse_bool(raw: &str) -> Result<bool, Box<dyn Error>> {
    match raw {
        "true" | "on" | "yes" => Ok(true),
        "false" | "off" | "no" => Ok(false),
        _ => Err("expected `true` or `false`".into()),
    }
}

fn parse_local_date(raw: &str) -> Result<DateTime<Utc>, Box<dyn Error>> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| "--date must look like 2025-06-15")?;
    let noon = date.and_hms_opt(12, 0, 0).unwrap();
    let local = Local
        .from_local_datetime(&noon)
        .earliest()
        .ok_or("--date does not exist in the local timezone")?;
    Ok(local.with_timezone(&Utc))
}

/// Removes `--name value` from the argument list, returning the value.
fn take_flag(args: &mut Vec<String>, name: &str) -> Option<String> {
    let index = args.iter().position(|arg| arg == name)?;
    if index + 1 >= args.len() {
        args.remove(index);
        return None;
    }
    let value = args.remove(index + 1);
    args.remove(index);
    Some(value)
}

fn print_usage() {
    println!("{}", "moneybook, a personal finance tracker".bold());
    println!();
    println!("Usage: moneybook_cli <command> [args]");
    println!();
    println!("  add <income|expense> <amount> <category-id> <description...>");
    println!("      [--date YYYY-MM-DD] [--notes TEXT]");
    println!("  list [--limit N]          recent transactions");
    println!("  summary                   this month's totals and breakdown");
    println!("  trend [--days N]          trailing daily spending");
    println!("  budgets                   budget progress");
    println!("  set-budget <category-id> <amount>");
    println!("  categories [income|expense]");
    println!("  add-category <income|expense> <name...> [--icon E] [--color HEX]");
    println!("  settings [<key> <value>]");
    println!("  export <path> / import <path>");
    println!("  reset [--yes]             restore defaults (asks first)");
}
