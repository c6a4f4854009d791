//! Global application settings - the singleton document.
//!
//! Settings are edited and submitted as one form, so persistence is always
//! a whole-document replace. Partial-merge semantics would silently
//! resurrect stale sub-fields from a previous save if the in-memory
//! settings object were incomplete.

use serde::{Deserialize, Serialize};

use crate::ids::CampaignId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub title: String,
    pub welcome_text: Option<String>,
    pub allow_registration: bool,
    pub default_campaign_id: Option<CampaignId>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            title: "Lorekeeper".to_string(),
            welcome_text: None,
            allow_registration: true,
            default_campaign_id: None,
        }
    }
}
