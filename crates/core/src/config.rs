//! Dashboard configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.
//! The browser reads an optional JSON block from the host page.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::format::Locale;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// BCP-47 tag used for thousands grouping
    pub locale: String,
    pub currency_label: String,
    /// Storage key of the `[today, total, target]` array
    pub revenue_key: String,
    pub theme_key: String,
    /// Page-load count-up
    pub intro_duration_ms: u32,
    /// Count from old to new value after an edit
    pub update_duration_ms: u32,
    pub bar_duration_ms: u32,
    /// Delay before the skeleton is swapped for the dashboard
    pub reveal_delay_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            locale: "id-ID".to_string(),
            currency_label: "Rp".to_string(),
            revenue_key: "revenues_array".to_string(),
            theme_key: "dashboard_theme".to_string(),
            intro_duration_ms: 700,
            update_duration_ms: 600,
            bar_duration_ms: 800,
            reveal_delay_ms: 600,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn locale(&self) -> Locale {
        Locale::from_tag(&self.locale)
    }
}
