//! Item record - compendium entries edited on the admin pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::character::Currency;
use crate::ids::ItemId;
use crate::record::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    /// Type of item (e.g., "Weapon", "Armor", "Wondrous")
    pub item_type: Option<String>,
    pub rarity: Option<String>,
    pub cost: Option<Currency>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub name: String,
    pub description: Option<String>,
    pub item_type: Option<String>,
    pub rarity: Option<String>,
    pub cost: Option<Currency>,
    pub created_at: DateTime<Utc>,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            item_type: None,
            rarity: None,
            cost: None,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Currency>,
}

impl Record for Item {
    const COLLECTION: &'static str = "items";
    type Id = ItemId;
    type Draft = ItemDraft;
    type Patch = ItemPatch;

    fn record_id(&self) -> ItemId {
        self.id
    }
}
