//! Categories partitioned into income and expense groups, plus the seed set
//! a fresh store starts from.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::EntryKind;

pub const UNKNOWN_CATEGORY: &str = "Unknown";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl Category {
    /// Materializes a draft, assigning a fresh id when the caller omitted one.
    pub fn from_draft(draft: CategoryDraft) -> Self {
        Self {
            id: draft.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: draft.name,
            icon: draft.icon,
            color: draft.color,
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Caller-supplied category input; `id` is optional.
pub struct CategoryDraft {
    pub id: Option<String>,
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl CategoryDraft {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// The two disjoint category groups. Referential integrity with transactions
/// and budgets is deliberately not enforced; lookups tolerate missing ids.
pub struct CategorySet {
    #[serde(default)]
    pub income: Vec<Category>,
    #[serde(default)]
    pub expense: Vec<Category>,
}

impl CategorySet {
    pub fn group(&self, kind: EntryKind) -> &Vec<Category> {
        match kind {
            EntryKind::Income => &self.income,
            EntryKind::Expense => &self.expense,
        }
    }

    pub fn group_mut(&mut self, kind: EntryKind) -> &mut Vec<Category> {
        match kind {
            EntryKind::Income => &mut self.income,
            EntryKind::Expense => &mut self.expense,
        }
    }

    pub fn find(&self, kind: EntryKind, id: &str) -> Option<&Category> {
        self.group(kind).iter().find(|category| category.id == id)
    }

    /// Looks the id up in either group, expense first.
    pub fn find_any(&self, id: &str) -> Option<&Category> {
        self.find(EntryKind::Expense, id)
            .or_else(|| self.find(EntryKind::Income, id))
    }

    /// Display name for a category id, falling back for orphaned references.
    pub fn name_for(&self, id: &str) -> &str {
        self.find_any(id)
            .map(|category| category.name.as_str())
            .unwrap_or(UNKNOWN_CATEGORY)
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        DEFAULT_CATEGORIES.clone()
    }
}

fn seed(id: &str, name: &str, icon: &str, color: &str) -> Category {
    Category {
        id: id.into(),
        name: name.into(),
        icon: icon.into(),
        color: color.into(),
    }
}

static DEFAULT_CATEGORIES: Lazy<CategorySet> = Lazy::new(|| CategorySet {
    expense: vec![
        seed("food", "Food & Dining", "🍽️", "#ef4444"),
        seed("transport", "Transportation", "🚗", "#3b82f6"),
        seed("shopping", "Shopping", "🛒", "#8b5cf6"),
        seed("entertainment", "Entertainment", "🎬", "#f59e0b"),
        seed("bills", "Bills & Utilities", "📄", "#10b981"),
        seed("healthcare", "Healthcare", "🏥", "#ec4899"),
        seed("education", "Education", "📚", "#6366f1"),
        seed("travel", "Travel", "✈️", "#14b8a6"),
        seed("personal", "Personal Care", "💄", "#f97316"),
        seed("other_expense", "Other Expenses", "📋", "#6b7280"),
    ],
    income: vec![
        seed("salary", "Salary", "💼", "#10b981"),
        seed("freelance", "Freelance", "💻", "#3b82f6"),
        seed("investment", "Investment", "📈", "#8b5cf6"),
        seed("business", "Business", "🏢", "#f59e0b"),
        seed("gift", "Gift", "🎁", "#ec4899"),
        seed("other_income", "Other Income", "💰", "#6b7280"),
    ],
});
