//! Spell record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::SpellId;
use crate::record::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    pub id: SpellId,
    pub name: String,
    /// 0 for cantrips.
    pub level: u8,
    pub school: Option<String>,
    pub casting_time: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellDraft {
    pub name: String,
    pub level: u8,
    pub school: Option<String>,
    pub casting_time: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SpellDraft {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level,
            school: None,
            casting_time: None,
            description: None,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub casting_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Record for Spell {
    const COLLECTION: &'static str = "spells";
    type Id = SpellId;
    type Draft = SpellDraft;
    type Patch = SpellPatch;

    fn record_id(&self) -> SpellId {
        self.id
    }
}
