//! Income/expense totals and trends over a snapshot. All reads are pure
//! functions of the snapshot plus an explicit reference instant and are
//! recomputed on every call.

use chrono::{DateTime, Duration, Local};

use crate::domain::{DailySpend, DateWindow, EntryKind, MonthlyTotals, Snapshot, Transaction};

pub struct SummaryService;

impl SummaryService {
    /// Transactions whose local calendar date falls in the month containing
    /// `now`, in insertion order.
    pub fn current_month<'a>(snapshot: &'a Snapshot, now: DateTime<Local>) -> Vec<&'a Transaction> {
        let window = DateWindow::month_of(now.date_naive());
        snapshot
            .transactions
            .iter()
            .filter(|txn| window.contains(txn.local_date()))
            .collect()
    }

    pub fn income_total(transactions: &[&Transaction]) -> f64 {
        Self::total_of(transactions, EntryKind::Income)
    }

    pub fn expense_total(transactions: &[&Transaction]) -> f64 {
        Self::total_of(transactions, EntryKind::Expense)
    }

    pub fn balance(transactions: &[&Transaction]) -> f64 {
        Self::income_total(transactions) - Self::expense_total(transactions)
    }

    /// Income, expenses, and balance for the month containing `now`.
    pub fn monthly_totals(snapshot: &Snapshot, now: DateTime<Local>) -> MonthlyTotals {
        let month = Self::current_month(snapshot, now);
        let income = Self::income_total(&month);
        let expenses = Self::expense_total(&month);
        MonthlyTotals {
            income,
            expenses,
            balance: income - expenses,
        }
    }

    /// Per-day expense totals for the trailing `days` days ending at `now`,
    /// oldest bucket first.
    pub fn daily_trend(snapshot: &Snapshot, now: DateTime<Local>, days: u32) -> Vec<DailySpend> {
        let today = now.date_naive();
        (0..days)
            .rev()
            .map(|offset| {
                let date = today - Duration::days(offset as i64);
                let amount = snapshot
                    .transactions
                    .iter()
                    .filter(|txn| txn.kind == EntryKind::Expense && txn.local_date() == date)
                    .map(|txn| txn.amount)
                    .sum();
                DailySpend { date, amount }
            })
            .collect()
    }

    /// The `limit` most recently inserted transactions.
    pub fn recent(snapshot: &Snapshot, limit: usize) -> &[Transaction] {
        let end = limit.min(snapshot.transactions.len());
        &snapshot.transactions[..end]
    }

    fn total_of(transactions: &[&Transaction], kind: EntryKind) -> f64 {
        transactions
            .iter()
            .filter(|txn| txn.kind == kind)
            .map(|txn| txn.amount)
            .sum()
    }
}
