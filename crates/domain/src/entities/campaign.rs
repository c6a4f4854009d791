//! Campaign record - a game table run by one master.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CampaignId, UserId};
use crate::record::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    pub description: Option<String>,
    /// The user running this campaign. Pages resolve the display name by
    /// joining against the users collection.
    pub master_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDraft {
    pub name: String,
    pub description: Option<String>,
    pub master_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl CampaignDraft {
    pub fn new(name: impl Into<String>, master_id: UserId) -> Self {
        Self {
            name: name.into(),
            description: None,
            master_id,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_id: Option<UserId>,
}

impl Record for Campaign {
    const COLLECTION: &'static str = "campaigns";
    type Id = CampaignId;
    type Draft = CampaignDraft;
    type Patch = CampaignPatch;

    fn record_id(&self) -> CampaignId {
        self.id
    }
}
