//! Rule categories and the reference entries filed under them.
//!
//! The cascading parent/child pair: a `RuleReference` carries a foreign
//! `category_id` and must never outlive its `RuleCategory`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{RuleCategoryId, RuleReferenceId};
use crate::record::{ChildOf, Record};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleCategory {
    pub id: RuleCategoryId,
    pub name: String,
    #[serde(default)]
    pub sort_order: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleCategoryDraft {
    pub name: String,
    pub sort_order: u32,
    pub created_at: DateTime<Utc>,
}

impl RuleCategoryDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sort_order: 0,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleCategoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<u32>,
}

impl Record for RuleCategory {
    const COLLECTION: &'static str = "rule_categories";
    type Id = RuleCategoryId;
    type Draft = RuleCategoryDraft;
    type Patch = RuleCategoryPatch;

    fn record_id(&self) -> RuleCategoryId {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleReference {
    pub id: RuleReferenceId,
    pub category_id: RuleCategoryId,
    pub title: String,
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleReferenceDraft {
    pub category_id: RuleCategoryId,
    pub title: String,
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RuleReferenceDraft {
    pub fn new(category_id: RuleCategoryId, title: impl Into<String>) -> Self {
        Self {
            category_id,
            title: title.into(),
            body: None,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleReferencePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<RuleCategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Record for RuleReference {
    const COLLECTION: &'static str = "rule_references";
    type Id = RuleReferenceId;
    type Draft = RuleReferenceDraft;
    type Patch = RuleReferencePatch;

    fn record_id(&self) -> RuleReferenceId {
        self.id
    }
}

impl ChildOf<RuleCategory> for RuleReference {
    fn parent_id(&self) -> RuleCategoryId {
        self.category_id
    }
}
