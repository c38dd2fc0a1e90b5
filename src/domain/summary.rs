//! Result types produced by the derived-read services.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{budget::Budget, category::Category};

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MonthlyTotals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// A budget joined with its realized spending for the period window.
pub struct BudgetProgress {
    #[serde(flatten)]
    pub budget: Budget,
    pub spent: f64,
    pub remaining: f64,
    pub percentage: f64,
    pub is_over_budget: bool,
    /// Resolved expense category; `None` when the reference is orphaned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
/// Current-month spend for one expense category. Only categories with nonzero
/// spend are reported.
pub struct CategorySpend {
    #[serde(flatten)]
    pub category: Category,
    pub amount: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
/// One bucket of the trailing spending trend.
pub struct DailySpend {
    pub date: NaiveDate,
    pub amount: f64,
}
