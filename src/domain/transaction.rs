//! Domain model for logged income and expense transactions.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::domain::common::EntryKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(deserialize_with = "flexible_amount")]
    pub amount: f64,
    pub category_id: String,
    pub description: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Materializes a draft: assigns a fresh id and defaults `date`/`createdAt`
    /// to `now` when the caller left them unset.
    pub fn from_draft(draft: TransactionDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind: draft.kind,
            amount: draft.amount,
            category_id: draft.category_id,
            description: draft.description,
            date: draft.date.unwrap_or(now),
            notes: draft.notes,
            created_at: now,
        }
    }

    /// Calendar date of the transaction in the local timezone. All monthly and
    /// daily aggregation windows operate on this.
    pub fn local_date(&self) -> NaiveDate {
        self.date.with_timezone(&Local).date_naive()
    }
}

#[derive(Debug, Clone)]
/// Caller-supplied transaction input before ids and timestamps are assigned.
pub struct TransactionDraft {
    pub kind: EntryKind,
    pub amount: f64,
    pub category_id: String,
    pub description: String,
    pub date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl TransactionDraft {
    pub fn new(
        kind: EntryKind,
        amount: f64,
        category_id: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            amount,
            category_id: category_id.into(),
            description: description.into(),
            date: None,
            notes: None,
        }
    }

    pub fn on_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Accepts amounts stored either as JSON numbers or numeric strings.
fn flexible_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}
