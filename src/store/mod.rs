//! The finance store: complete state, tagged mutation commands, and the pure
//! transition function. Persistence lives in [`manager`].

pub mod manager;

pub use manager::{FinanceStore, DATA_KEY};

use crate::domain::{
    Budget, Category, EntryKind, SettingsPatch, Snapshot, SnapshotOverlay, Transaction,
};

#[derive(Debug, Clone, Default, PartialEq)]
/// Full store state: the persisted snapshot plus transient presentation flags.
/// `loading` and `error` never reach storage.
pub struct FinanceState {
    pub data: Snapshot,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
/// Every mutation the store supports, one variant per operation.
pub enum Command {
    SetLoading(bool),
    SetError(Option<String>),
    AddTransaction(Transaction),
    UpdateTransaction(Transaction),
    DeleteTransaction(String),
    AddCategory { kind: EntryKind, category: Category },
    UpdateCategory { kind: EntryKind, category: Category },
    DeleteCategory { kind: EntryKind, id: String },
    SetBudget(Budget),
    UpdateSettings(SettingsPatch),
    ImportData(SnapshotOverlay),
    ResetData,
}

impl Command {
    /// Transient commands touch only presentation flags and skip persistence.
    pub fn is_transient(&self) -> bool {
        matches!(self, Command::SetLoading(_) | Command::SetError(_))
    }
}

/// Pure state transition: consumes the previous state, yields the next one.
/// Never fails for well-formed input; lookups that miss are silent no-ops.
pub fn apply(state: &FinanceState, command: Command) -> FinanceState {
    let mut next = state.clone();
    match command {
        Command::SetLoading(loading) => next.loading = loading,
        Command::SetError(error) => next.error = error,
        Command::AddTransaction(transaction) => {
            // Most-recent-first: insertion order is the list's natural order.
            next.data.transactions.insert(0, transaction);
        }
        Command::UpdateTransaction(transaction) => {
            if let Some(slot) = next
                .data
                .transactions
                .iter_mut()
                .find(|existing| existing.id == transaction.id)
            {
                *slot = transaction;
            }
        }
        Command::DeleteTransaction(id) => {
            next.data.transactions.retain(|txn| txn.id != id);
        }
        Command::AddCategory { kind, category } => {
            next.data.categories.group_mut(kind).push(category);
        }
        Command::UpdateCategory { kind, category } => {
            if let Some(slot) = next
                .data
                .categories
                .group_mut(kind)
                .iter_mut()
                .find(|existing| existing.id == category.id)
            {
                *slot = category;
            }
        }
        Command::DeleteCategory { kind, id } => {
            // Transactions and budgets referencing the id are left untouched;
            // readers resolve them as unknown.
            next.data
                .categories
                .group_mut(kind)
                .retain(|category| category.id != id);
        }
        Command::SetBudget(budget) => {
            match next
                .data
                .budgets
                .iter_mut()
                .find(|existing| existing.id == budget.id)
            {
                Some(slot) => *slot = budget,
                None => next.data.budgets.push(budget),
            }
        }
        Command::UpdateSettings(patch) => next.data.settings.merge(patch),
        Command::ImportData(overlay) => next.data.merge_overlay(overlay),
        Command::ResetData => next = FinanceState::default(),
    }
    next
}
