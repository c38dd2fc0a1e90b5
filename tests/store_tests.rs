use moneybook::domain::{
    BudgetDraft, EntryKind, SettingsPatch, Snapshot, SnapshotOverlay, TransactionDraft,
};
use moneybook::storage::{KeyValueStorage, MemoryStorage};
use moneybook::store::{Command, FinanceStore, DATA_KEY};

fn fresh_store() -> (FinanceStore, MemoryStorage) {
    let storage = MemoryStorage::new();
    let store = FinanceStore::open(Box::new(storage.clone()));
    (store, storage)
}

#[test]
fn added_transaction_shows_up_in_totals_exactly_once() {
    let (mut store, _) = fresh_store();
    store
        .add_transaction(TransactionDraft::new(EntryKind::Income, 1200.0, "salary", "Pay"))
        .expect("add income");
    store
        .add_transaction(TransactionDraft::new(EntryKind::Expense, 80.0, "food", "Groceries"))
        .expect("add expense");

    let totals = store.monthly_totals();
    assert_eq!(totals.income, 1200.0);
    assert_eq!(totals.expenses, 80.0);
    assert_eq!(totals.balance, 1120.0);
}

#[test]
fn deleting_a_transaction_removes_it_from_derived_sums() {
    let (mut store, _) = fresh_store();
    let txn = store
        .add_transaction(TransactionDraft::new(EntryKind::Expense, 45.0, "food", "Dinner"))
        .expect("add");
    store.delete_transaction(&txn.id).expect("delete");

    let totals = store.monthly_totals();
    assert_eq!(totals.expenses, 0.0);
    assert!(store.snapshot().transactions.is_empty());
}

#[test]
fn every_mutation_overwrites_the_persisted_snapshot() {
    let (mut store, storage) = fresh_store();
    assert!(storage.get(DATA_KEY).expect("read").is_none());

    store
        .add_transaction(TransactionDraft::new(EntryKind::Expense, 9.0, "food", "Coffee"))
        .expect("add");
    let raw = storage.get(DATA_KEY).expect("read").expect("persisted");
    let persisted: Snapshot = serde_json::from_str(&raw).expect("parse persisted snapshot");
    assert_eq!(persisted.transactions.len(), 1);
    assert_eq!(persisted, *store.snapshot());
}

#[test]
fn transient_commands_skip_persistence() {
    let (mut store, storage) = fresh_store();
    store.dispatch(Command::SetLoading(true)).expect("dispatch");
    store
        .dispatch(Command::SetError(Some("boom".into())))
        .expect("dispatch");

    assert!(store.state().loading);
    assert_eq!(store.state().error.as_deref(), Some("boom"));
    assert!(storage.get(DATA_KEY).expect("read").is_none());
}

#[test]
fn set_budget_upserts_by_id() {
    let (mut store, _) = fresh_store();
    let seeded = store.snapshot().budgets.len();

    // The default food budget has id `food`, so a drafted `food_monthly`
    // budget appends rather than replacing it.
    let drafted = store
        .set_budget(BudgetDraft::monthly("food", 650.0))
        .expect("set");
    assert_eq!(drafted.id, "food_monthly");
    assert_eq!(store.snapshot().budgets.len(), seeded + 1);

    // Upserting the same draft again replaces in place.
    store
        .set_budget(BudgetDraft::monthly("food", 700.0))
        .expect("set");
    assert_eq!(store.snapshot().budgets.len(), seeded + 1);
    let slot = store
        .snapshot()
        .budgets
        .iter()
        .find(|budget| budget.id == "food_monthly")
        .expect("budget present");
    assert_eq!(slot.amount, 700.0);
}

#[test]
fn settings_updates_merge_and_persist() {
    let (mut store, storage) = fresh_store();
    store
        .update_settings(SettingsPatch {
            theme: Some("dark".into()),
            ..SettingsPatch::default()
        })
        .expect("update");

    assert_eq!(store.snapshot().settings.theme, "dark");
    assert_eq!(store.snapshot().settings.currency, "USD");

    let raw = storage.get(DATA_KEY).expect("read").expect("persisted");
    let persisted: Snapshot = serde_json::from_str(&raw).expect("parse");
    assert_eq!(persisted.settings.theme, "dark");
}

#[test]
fn import_of_export_leaves_state_unchanged() {
    let (mut store, _) = fresh_store();
    store
        .add_transaction(
            TransactionDraft::new(EntryKind::Expense, 33.0, "transport", "Fuel")
                .with_notes("station on 5th"),
        )
        .expect("add");
    store
        .set_budget(BudgetDraft::monthly("travel", 250.0))
        .expect("set");

    let bundle = store.export_data();
    let json = serde_json::to_string(&bundle).expect("serialize export");
    let overlay: SnapshotOverlay = serde_json::from_str(&json).expect("parse export");
    store.import_data(overlay).expect("import");

    assert_eq!(*store.snapshot(), bundle.data);
}

#[test]
fn import_replaces_only_supplied_fields() {
    let (mut store, _) = fresh_store();
    let overlay: SnapshotOverlay =
        serde_json::from_str(r#"{"budgets": [], "settings": {"currency": "EUR"}}"#)
            .expect("parse overlay");
    store.import_data(overlay).expect("import");

    assert!(store.snapshot().budgets.is_empty());
    assert_eq!(store.snapshot().settings.currency, "EUR");
    // Categories were absent from the overlay and keep their seeds.
    assert_eq!(store.snapshot().categories.expense.len(), 10);
}

#[test]
fn reset_restores_defaults_and_clears_storage() {
    let (mut store, storage) = fresh_store();
    store
        .add_transaction(TransactionDraft::new(EntryKind::Expense, 10.0, "food", "Snack"))
        .expect("add");
    assert!(storage.get(DATA_KEY).expect("read").is_some());

    store.reset_data().expect("reset");
    assert_eq!(*store.snapshot(), Snapshot::default());
    assert!(storage.get(DATA_KEY).expect("read").is_none());
}

#[test]
fn update_of_missing_ids_never_errors() {
    let (mut store, _) = fresh_store();
    let ghost = {
        let mut txn = store
            .add_transaction(TransactionDraft::new(EntryKind::Expense, 5.0, "food", "Gum"))
            .expect("add");
        store.delete_transaction(&txn.id).expect("delete");
        txn.amount = 6.0;
        txn
    };

    store.update_transaction(ghost).expect("silent no-op");
    store.delete_transaction("never-existed").expect("silent no-op");
    assert!(store.snapshot().transactions.is_empty());
}
