//! The persisted aggregate: everything the store writes to durable storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    budget::Budget, category::CategorySet, settings::Settings, transaction::Transaction,
};

/// Schema tag stamped onto export files.
pub const EXPORT_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub categories: CategorySet,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub settings: Settings,
}

impl Snapshot {
    /// Applies an overlay field-by-field: present fields replace wholesale,
    /// absent fields keep the current value. Overlay data is trusted as-is.
    pub fn merge_overlay(&mut self, overlay: SnapshotOverlay) {
        if let Some(transactions) = overlay.transactions {
            self.transactions = transactions;
        }
        if let Some(categories) = overlay.categories {
            self.categories = categories;
        }
        if let Some(budgets) = overlay.budgets {
            self.budgets = budgets;
        }
        if let Some(settings) = overlay.settings {
            self.settings = settings;
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            categories: CategorySet::default(),
            budgets: Budget::defaults(),
            settings: Settings::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Externally supplied snapshot data for import and rehydration. Any subset of
/// the persisted fields may be present; unknown keys are ignored.
pub struct SnapshotOverlay {
    #[serde(default)]
    pub transactions: Option<Vec<Transaction>>,
    #[serde(default)]
    pub categories: Option<CategorySet>,
    #[serde(default)]
    pub budgets: Option<Vec<Budget>>,
    #[serde(default)]
    pub settings: Option<Settings>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
/// Downloadable export: the snapshot plus provenance metadata.
pub struct ExportBundle {
    #[serde(flatten)]
    pub data: Snapshot,
    pub export_date: DateTime<Utc>,
    pub version: String,
}
