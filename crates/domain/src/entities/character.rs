//! Character record and the value objects the derived-stats engine reads.
//!
//! A character sheet must stay renderable at every stage of creation, so
//! every stat-bearing field is optional or defaulted: the stats engine
//! degrades to neutral values instead of failing on partial data.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CampaignId, CharacterId, UserId};
use crate::record::Record;

/// The six abilities. Serialized as short lowercase keys ("str", "dex", ...)
/// so they can key JSON maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Str,
    Dex,
    Con,
    Int,
    Wis,
    Cha,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Str,
        Ability::Dex,
        Ability::Con,
        Ability::Int,
        Ability::Wis,
        Ability::Cha,
    ];
}

/// The eighteen skills, each governed by a fixed ability (see
/// [`crate::stats::skill_ability`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Skill {
    Acrobatics,
    AnimalHandling,
    Arcana,
    Athletics,
    Deception,
    History,
    Insight,
    Intimidation,
    Investigation,
    Medicine,
    Nature,
    Perception,
    Performance,
    Persuasion,
    Religion,
    SleightOfHand,
    Stealth,
    Survival,
}

impl Skill {
    pub const ALL: [Skill; 18] = [
        Skill::Acrobatics,
        Skill::AnimalHandling,
        Skill::Arcana,
        Skill::Athletics,
        Skill::Deception,
        Skill::History,
        Skill::Insight,
        Skill::Intimidation,
        Skill::Investigation,
        Skill::Medicine,
        Skill::Nature,
        Skill::Perception,
        Skill::Performance,
        Skill::Persuasion,
        Skill::Religion,
        Skill::SleightOfHand,
        Skill::Stealth,
        Skill::Survival,
    ];
}

/// A stored ability score. Only the base value is persisted; modifiers are
/// always derived on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityScore {
    pub base: i32,
}

impl AbilityScore {
    pub fn new(base: i32) -> Self {
        Self { base }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillProficiency {
    #[serde(default)]
    pub proficient: bool,
    #[serde(default)]
    pub expertise: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProficiency {
    #[serde(default)]
    pub proficient: bool,
}

/// Hit points. Both values absent until the sheet is filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitPoints {
    pub current: Option<i32>,
    pub max: Option<i32>,
}

/// Coin purse by denomination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    #[serde(default)]
    pub platinum: i64,
    #[serde(default)]
    pub gold: i64,
    #[serde(default)]
    pub electrum: i64,
    #[serde(default)]
    pub silver: i64,
    #[serde(default)]
    pub copper: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub owner_id: UserId,
    pub campaign_id: Option<CampaignId>,
    pub name: String,
    pub class: Option<String>,
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default = "default_proficiency_bonus")]
    pub proficiency_bonus: i32,
    #[serde(default)]
    pub stats: HashMap<Ability, AbilityScore>,
    #[serde(default)]
    pub skills: HashMap<Skill, SkillProficiency>,
    #[serde(default)]
    pub saving_throws: HashMap<Ability, SaveProficiency>,
    #[serde(default)]
    pub hit_points: HitPoints,
    #[serde(default)]
    pub currency: Option<Currency>,
    pub created_at: DateTime<Utc>,
}

fn default_level() -> u8 {
    1
}

fn default_proficiency_bonus() -> i32 {
    2
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDraft {
    pub owner_id: UserId,
    pub campaign_id: Option<CampaignId>,
    pub name: String,
    pub class: Option<String>,
    pub level: u8,
    pub proficiency_bonus: i32,
    #[serde(default)]
    pub stats: HashMap<Ability, AbilityScore>,
    #[serde(default)]
    pub skills: HashMap<Skill, SkillProficiency>,
    #[serde(default)]
    pub saving_throws: HashMap<Ability, SaveProficiency>,
    #[serde(default)]
    pub hit_points: HitPoints,
    #[serde(default)]
    pub currency: Option<Currency>,
    pub created_at: DateTime<Utc>,
}

impl CharacterDraft {
    pub fn new(owner_id: UserId, name: impl Into<String>) -> Self {
        Self {
            owner_id,
            campaign_id: None,
            name: name.into(),
            class: None,
            level: default_level(),
            proficiency_bonus: default_proficiency_bonus(),
            stats: HashMap::new(),
            skills: HashMap::new(),
            saving_throws: HashMap::new(),
            hit_points: HitPoints::default(),
            currency: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_stat(mut self, ability: Ability, base: i32) -> Self {
        self.stats.insert(ability, AbilityScore::new(base));
        self
    }

    pub fn with_skill(mut self, skill: Skill, proficient: bool, expertise: bool) -> Self {
        self.skills.insert(
            skill,
            SkillProficiency {
                proficient,
                expertise,
            },
        );
        self
    }

    pub fn with_save(mut self, ability: Ability, proficient: bool) -> Self {
        self.saving_throws
            .insert(ability, SaveProficiency { proficient });
        self
    }
}

/// Field-level update payload. A supplied map field replaces that map as a
/// whole; the merge granularity is the record field, not the map entry.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<CampaignId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proficiency_bonus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<HashMap<Ability, AbilityScore>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<HashMap<Skill, SkillProficiency>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saving_throws: Option<HashMap<Ability, SaveProficiency>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hit_points: Option<HitPoints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

impl Record for Character {
    const COLLECTION: &'static str = "characters";
    type Id = CharacterId;
    type Draft = CharacterDraft;
    type Patch = CharacterPatch;

    fn record_id(&self) -> CharacterId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_serializes_only_supplied_fields() {
        let patch = CharacterPatch {
            name: Some("Mordai".to_string()),
            level: Some(4),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).expect("patch serializes");
        let obj = value.as_object().expect("patch is an object");
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["name"], "Mordai");
        assert_eq!(obj["level"], 4);
    }

    #[test]
    fn ability_keys_serialize_as_short_names() {
        let mut stats = HashMap::new();
        stats.insert(Ability::Dex, AbilityScore::new(14));
        let value = serde_json::to_value(&stats).expect("map serializes");
        assert_eq!(value["dex"]["base"], 14);
    }

    #[test]
    fn character_deserializes_with_missing_stat_maps() {
        let raw = serde_json::json!({
            "id": uuid::Uuid::new_v4().to_string(),
            "ownerId": "auth0|u1",
            "campaignId": null,
            "name": "Half-finished",
            "class": null,
            "createdAt": Utc::now(),
        });
        let character: Character = serde_json::from_value(raw).expect("partial sheet loads");
        assert!(character.stats.is_empty());
        assert_eq!(character.level, 1);
        assert_eq!(character.proficiency_bonus, 2);
        assert_eq!(character.hit_points, HitPoints::default());
    }
}
