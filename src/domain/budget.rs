//! Monthly budget definitions keyed by category.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::DateWindow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub category_id: String,
    pub amount: f64,
    pub period: BudgetPeriod,
}

impl Budget {
    /// Materializes a draft. The default id is `{categoryId}_{period}`, which
    /// makes category + period the natural de-duplication key for upserts.
    pub fn from_draft(draft: BudgetDraft) -> Self {
        let id = draft
            .id
            .unwrap_or_else(|| format!("{}_{}", draft.category_id, draft.period.key()));
        Self {
            id,
            category_id: draft.category_id,
            amount: draft.amount,
            period: draft.period,
        }
    }

    /// The seed budgets a fresh store starts from.
    pub fn defaults() -> Vec<Budget> {
        let seed = |id: &str, amount: f64| Budget {
            id: id.into(),
            category_id: id.into(),
            amount,
            period: BudgetPeriod::Monthly,
        };
        vec![
            seed("food", 500.0),
            seed("transport", 200.0),
            seed("entertainment", 150.0),
            seed("shopping", 300.0),
        ]
    }
}

#[derive(Debug, Clone, Default)]
/// Caller-supplied budget input; `id` is optional.
pub struct BudgetDraft {
    pub id: Option<String>,
    pub category_id: String,
    pub amount: f64,
    pub period: BudgetPeriod,
}

impl BudgetDraft {
    pub fn monthly(category_id: impl Into<String>, amount: f64) -> Self {
        Self {
            id: None,
            category_id: category_id.into(),
            amount,
            period: BudgetPeriod::Monthly,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    #[default]
    Monthly,
    /// Catch-all for periods persisted by other versions. Only monthly
    /// aggregation exists, so these resolve to the current month window.
    #[serde(other)]
    Other,
}

impl BudgetPeriod {
    pub fn key(self) -> &'static str {
        match self {
            BudgetPeriod::Monthly => "monthly",
            BudgetPeriod::Other => "other",
        }
    }

    /// Aggregation window for the period, anchored at `today`.
    pub fn window(self, today: NaiveDate) -> DateWindow {
        DateWindow::month_of(today)
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetPeriod::Monthly => "Monthly",
            BudgetPeriod::Other => "Other",
        };
        f.write_str(label)
    }
}
