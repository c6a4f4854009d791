//! Lorekeeper domain: record types for every collection of the campaign
//! manager, typed identifiers, the generic [`Record`] contract the store
//! layer is built on, and the pure derived-stats engine.

pub mod entities;
pub mod error;
pub mod ids;
pub mod record;
pub mod stats;

pub use entities::{
    Ability, AbilityScore, AppSettings, Campaign, CampaignDraft, CampaignPatch, Character,
    CharacterDraft, CharacterPatch, Condition, ConditionDraft, ConditionPatch, Currency,
    HitPoints, Item, ItemDraft, ItemPatch, RuleCategory, RuleCategoryDraft, RuleCategoryPatch,
    RuleReference, RuleReferenceDraft, RuleReferencePatch, SaveProficiency, Skill,
    SkillProficiency, Spell, SpellDraft, SpellPatch, User, UserDraft, UserPatch,
};
pub use error::DomainError;
pub use ids::{
    CampaignId, CharacterId, ConditionId, ItemId, RecordId, RuleCategoryId, RuleReferenceId,
    SpellId, UserId,
};
pub use record::{ChildOf, Record};
