//! Budget progress and per-category spending breakdowns.

use std::cmp::Ordering;

use chrono::{DateTime, Local};

use crate::core::services::SummaryService;
use crate::domain::{BudgetPeriod, BudgetProgress, CategorySpend, EntryKind, Snapshot};

pub struct BudgetService;

impl BudgetService {
    /// Expense total for one category inside the period window anchored at
    /// `now`. Scans the full transaction list; volumes are a single user's
    /// manual entries.
    pub fn category_spending(
        snapshot: &Snapshot,
        category_id: &str,
        period: BudgetPeriod,
        now: DateTime<Local>,
    ) -> f64 {
        let window = period.window(now.date_naive());
        snapshot
            .transactions
            .iter()
            .filter(|txn| {
                txn.kind == EntryKind::Expense
                    && txn.category_id == category_id
                    && window.contains(txn.local_date())
            })
            .map(|txn| txn.amount)
            .sum()
    }

    /// Every budget joined with its realized spending. Orphaned category
    /// references surface as `category: None` rather than an error.
    pub fn progress(snapshot: &Snapshot, now: DateTime<Local>) -> Vec<BudgetProgress> {
        snapshot
            .budgets
            .iter()
            .map(|budget| {
                let spent =
                    Self::category_spending(snapshot, &budget.category_id, budget.period, now);
                let percentage = if budget.amount > 0.0 {
                    spent / budget.amount * 100.0
                } else {
                    0.0
                };
                BudgetProgress {
                    budget: budget.clone(),
                    spent,
                    remaining: budget.amount - spent,
                    percentage,
                    is_over_budget: spent > budget.amount,
                    category: snapshot
                        .categories
                        .find(EntryKind::Expense, &budget.category_id)
                        .cloned(),
                }
            })
            .collect()
    }

    /// Current-month spend per expense category, descending by amount, with
    /// each category's share of the month's expenses. Categories without
    /// spend are omitted entirely.
    pub fn expenses_by_category(snapshot: &Snapshot, now: DateTime<Local>) -> Vec<CategorySpend> {
        let month = SummaryService::current_month(snapshot, now);
        let mut rows: Vec<CategorySpend> = snapshot
            .categories
            .group(EntryKind::Expense)
            .iter()
            .filter_map(|category| {
                let amount: f64 = month
                    .iter()
                    .filter(|txn| {
                        txn.kind == EntryKind::Expense && txn.category_id == category.id
                    })
                    .map(|txn| txn.amount)
                    .sum();
                (amount > 0.0).then(|| CategorySpend {
                    category: category.clone(),
                    amount,
                    percentage: 0.0,
                })
            })
            .collect();

        let total: f64 = rows.iter().map(|row| row.amount).sum();
        if total > 0.0 {
            for row in &mut rows {
                row.percentage = row.amount / total * 100.0;
            }
        }
        rows.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
        rows
    }
}
