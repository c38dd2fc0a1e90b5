//! User preferences, shallow-merged on update. Unknown keys survive in the
//! flattened extras map so imported data is never stripped.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_true")]
    pub notifications: bool,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_true")]
    pub budget_alerts: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Settings {
    /// Shallow merge: fields present in the patch replace, everything else is
    /// kept. Extras merge key-by-key.
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(notifications) = patch.notifications {
            self.notifications = notifications;
        }
        if let Some(currency) = patch.currency {
            self.currency = currency;
        }
        if let Some(budget_alerts) = patch.budget_alerts {
            self.budget_alerts = budget_alerts;
        }
        for (key, value) in patch.extra {
            self.extra.insert(key, value);
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            notifications: true,
            currency: default_currency(),
            budget_alerts: true,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Partial settings update; absent fields leave the current value untouched.
pub struct SettingsPatch {
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub notifications: Option<bool>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub budget_alerts: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_theme() -> String {
    "light".into()
}

fn default_currency() -> String {
    "USD".into()
}

fn default_true() -> bool {
    true
}
