//! Record types, one module per collection.

mod campaign;
mod character;
mod condition;
mod item;
mod rules;
mod settings;
mod spell;
mod user;

pub use campaign::{Campaign, CampaignDraft, CampaignPatch};
pub use character::{
    Ability, AbilityScore, Character, CharacterDraft, CharacterPatch, Currency, HitPoints,
    SaveProficiency, Skill, SkillProficiency,
};
pub use condition::{Condition, ConditionDraft, ConditionPatch};
pub use item::{Item, ItemDraft, ItemPatch};
pub use rules::{
    RuleCategory, RuleCategoryDraft, RuleCategoryPatch, RuleReference, RuleReferenceDraft,
    RuleReferencePatch,
};
pub use settings::AppSettings;
pub use spell::{Spell, SpellDraft, SpellPatch};
pub use user::{User, UserDraft, UserPatch};
