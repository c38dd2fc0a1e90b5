//! End-to-end derived-read behavior over a live store, including the
//! orphaned-category fallback path.

use moneybook::domain::{EntryKind, TransactionDraft, UNKNOWN_CATEGORY};
use moneybook::storage::MemoryStorage;
use moneybook::store::FinanceStore;

fn fresh_store() -> FinanceStore {
    FinanceStore::open(Box::new(MemoryStorage::new()))
}

#[test]
fn lone_expense_dominates_breakdown_and_budget_progress() {
    let mut store = fresh_store();
    store
        .add_transaction(TransactionDraft::new(EntryKind::Expense, 50.0, "food", "Lunch"))
        .expect("add");

    assert_eq!(store.monthly_totals().expenses, 50.0);

    let breakdown = store.expenses_by_category();
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0].category.id, "food");
    assert_eq!(breakdown[0].amount, 50.0);
    assert_eq!(breakdown[0].percentage, 100.0);

    // The seeded food budget is 500 monthly.
    let food = store
        .budget_status()
        .into_iter()
        .find(|row| row.budget.category_id == "food")
        .expect("food budget");
    assert_eq!(food.spent, 50.0);
    assert_eq!(food.remaining, 450.0);
    assert_eq!(food.percentage, 10.0);
    assert!(!food.is_over_budget);
    assert_eq!(food.category.as_ref().expect("resolved").name, "Food & Dining");
}

#[test]
fn overspending_flips_the_over_budget_flag() {
    let mut store = fresh_store();
    store
        .add_transaction(TransactionDraft::new(EntryKind::Expense, 600.0, "food", "Feast"))
        .expect("add");

    let food = store
        .budget_status()
        .into_iter()
        .find(|row| row.budget.category_id == "food")
        .expect("food budget");
    assert!(food.is_over_budget);
    assert_eq!(food.remaining, -100.0);
    assert_eq!(food.percentage, 120.0);
}

#[test]
fn deleting_a_category_orphans_but_never_breaks_references() {
    let mut store = fresh_store();
    let txn = store
        .add_transaction(TransactionDraft::new(EntryKind::Expense, 25.0, "food", "Lunch"))
        .expect("add");
    store
        .delete_category(EntryKind::Expense, "food")
        .expect("delete category");

    // The transaction survives and still counts toward totals.
    assert_eq!(store.snapshot().transactions[0].id, txn.id);
    assert_eq!(store.monthly_totals().expenses, 25.0);

    // Name resolution degrades to the fallback instead of failing.
    assert_eq!(store.snapshot().categories.name_for("food"), UNKNOWN_CATEGORY);

    // The seeded food budget is now orphaned: progress still computes, the
    // category is simply absent.
    let food = store
        .budget_status()
        .into_iter()
        .find(|row| row.budget.category_id == "food")
        .expect("food budget");
    assert!(food.category.is_none());
    assert_eq!(food.spent, 25.0);

    // The breakdown only reports known expense categories.
    assert!(store.expenses_by_category().is_empty());
}

#[test]
fn recent_transactions_follow_insertion_order() {
    let mut store = fresh_store();
    for n in 1..=4 {
        store
            .add_transaction(TransactionDraft::new(
                EntryKind::Expense,
                n as f64,
                "food",
                format!("entry {n}"),
            ))
            .expect("add");
    }

    let recent = store.recent_transactions(3);
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].description, "entry 4");
    assert_eq!(recent[2].description, "entry 2");
}

#[test]
fn trend_includes_today_and_pads_quiet_days() {
    let mut store = fresh_store();
    store
        .add_transaction(TransactionDraft::new(EntryKind::Expense, 18.0, "food", "Lunch"))
        .expect("add");

    let trend = store.spending_trend(7);
    assert_eq!(trend.len(), 7);
    assert_eq!(trend[6].amount, 18.0);
    assert!(trend[..6].iter().all(|day| day.amount == 0.0));
}
