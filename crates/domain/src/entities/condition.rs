//! Condition record (blinded, grappled, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::ConditionId;
use crate::record::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub id: ConditionId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionDraft {
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ConditionDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Record for Condition {
    const COLLECTION: &'static str = "conditions";
    type Id = ConditionId;
    type Draft = ConditionDraft;
    type Patch = ConditionPatch;

    fn record_id(&self) -> ConditionId {
        self.id
    }
}
