//! Facade that coordinates store state, command dispatch, and persistence.

use chrono::{Local, Utc};

use crate::core::services::{BudgetService, SummaryService};
use crate::domain::{
    Budget, BudgetDraft, BudgetProgress, Category, CategoryDraft, CategorySpend, DailySpend,
    EntryKind, ExportBundle, MonthlyTotals, SettingsPatch, Snapshot, SnapshotOverlay, Transaction,
    TransactionDraft, EXPORT_VERSION,
};
use crate::errors::StoreError;
use crate::storage::KeyValueStorage;
use crate::store::{apply, Command, FinanceState};

/// The single durable key the whole snapshot is persisted under.
pub const DATA_KEY: &str = "moneyManagerData";

/// Owns the in-memory state and the storage backend. Every non-transient
/// command overwrites the persisted snapshot; readers always see the state
/// produced by the last completed dispatch.
pub struct FinanceStore {
    state: FinanceState,
    storage: Box<dyn KeyValueStorage>,
}

impl FinanceStore {
    /// Opens the store, rehydrating from storage when a readable snapshot
    /// exists. Unreadable or absent data falls back to compiled-in defaults;
    /// this never fails.
    pub fn open(storage: Box<dyn KeyValueStorage>) -> Self {
        let mut state = FinanceState::default();
        match storage.get(DATA_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<SnapshotOverlay>(&raw) {
                Ok(overlay) => state.data.merge_overlay(overlay),
                Err(err) => {
                    tracing::warn!("discarding unreadable saved data, starting fresh: {err}");
                }
            },
            Ok(None) => {}
            Err(err) => tracing::warn!("could not read saved data, starting fresh: {err}"),
        }
        Self { state, storage }
    }

    pub fn state(&self) -> &FinanceState {
        &self.state
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.state.data
    }

    /// Applies a command and synchronizes storage: resets clear the persisted
    /// key, transient commands skip the write, everything else overwrites the
    /// snapshot.
    pub fn dispatch(&mut self, command: Command) -> Result<(), StoreError> {
        let transient = command.is_transient();
        let reset = matches!(command, Command::ResetData);
        self.state = apply(&self.state, command);
        if reset {
            self.storage.remove(DATA_KEY)
        } else if transient {
            Ok(())
        } else {
            self.persist()
        }
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.state.data)?;
        self.storage.set(DATA_KEY, &json)
    }

    // -- mutation helpers -------------------------------------------------

    /// Materializes and stores a transaction, returning the stored record.
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Result<Transaction, StoreError> {
        let transaction = Transaction::from_draft(draft, Utc::now());
        self.dispatch(Command::AddTransaction(transaction.clone()))?;
        Ok(transaction)
    }

    pub fn update_transaction(&mut self, transaction: Transaction) -> Result<(), StoreError> {
        self.dispatch(Command::UpdateTransaction(transaction))
    }

    pub fn delete_transaction(&mut self, id: &str) -> Result<(), StoreError> {
        self.dispatch(Command::DeleteTransaction(id.to_string()))
    }

    pub fn add_category(
        &mut self,
        kind: EntryKind,
        draft: CategoryDraft,
    ) -> Result<Category, StoreError> {
        let category = Category::from_draft(draft);
        self.dispatch(Command::AddCategory {
            kind,
            category: category.clone(),
        })?;
        Ok(category)
    }

    pub fn update_category(
        &mut self,
        kind: EntryKind,
        category: Category,
    ) -> Result<(), StoreError> {
        self.dispatch(Command::UpdateCategory { kind, category })
    }

    pub fn delete_category(&mut self, kind: EntryKind, id: &str) -> Result<(), StoreError> {
        self.dispatch(Command::DeleteCategory {
            kind,
            id: id.to_string(),
        })
    }

    pub fn set_budget(&mut self, draft: BudgetDraft) -> Result<Budget, StoreError> {
        let budget = Budget::from_draft(draft);
        self.dispatch(Command::SetBudget(budget.clone()))?;
        Ok(budget)
    }

    pub fn update_settings(&mut self, patch: SettingsPatch) -> Result<(), StoreError> {
        self.dispatch(Command::UpdateSettings(patch))
    }

    /// Merges externally supplied data into the state. The overlay is trusted
    /// as-is; parse failures belong to the caller's boundary.
    pub fn import_data(&mut self, overlay: SnapshotOverlay) -> Result<(), StoreError> {
        self.dispatch(Command::ImportData(overlay))
    }

    /// Unconditionally restores defaults and clears the persisted key. Any
    /// user confirmation belongs to the presentation boundary.
    pub fn reset_data(&mut self) -> Result<(), StoreError> {
        self.dispatch(Command::ResetData)
    }

    /// Pure read: the snapshot packaged for download, stamped with the export
    /// instant and schema version.
    pub fn export_data(&self) -> ExportBundle {
        ExportBundle {
            data: self.state.data.clone(),
            export_date: Utc::now(),
            version: EXPORT_VERSION.into(),
        }
    }

    // -- derived reads, anchored at the invocation instant ----------------

    pub fn monthly_totals(&self) -> MonthlyTotals {
        SummaryService::monthly_totals(&self.state.data, Local::now())
    }

    pub fn budget_status(&self) -> Vec<BudgetProgress> {
        BudgetService::progress(&self.state.data, Local::now())
    }

    pub fn expenses_by_category(&self) -> Vec<CategorySpend> {
        BudgetService::expenses_by_category(&self.state.data, Local::now())
    }

    pub fn spending_trend(&self, days: u32) -> Vec<DailySpend> {
        SummaryService::daily_trend(&self.state.data, Local::now(), days)
    }

    pub fn recent_transactions(&self, limit: usize) -> &[Transaction] {
        SummaryService::recent(&self.state.data, limit)
    }
}
