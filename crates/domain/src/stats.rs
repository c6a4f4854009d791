//! Derived character statistics.
//!
//! Every function here is a pure, total function of the stored character
//! snapshot: derived values are recomputed on every read and never
//! persisted, so they can never go stale. Absent input degrades to neutral
//! defaults instead of failing, because a half-finished character sheet
//! must still render.

use crate::entities::{Ability, Character, Currency, Skill};

/// Ability modifier: `floor((base - 10) / 2)`.
///
/// An absent score is treated as the neutral 10, so the modifier is 0.
/// Rust's `/` truncates toward zero, so negative differences need explicit
/// floor division.
pub fn ability_modifier(base: Option<i32>) -> i32 {
    let diff = base.unwrap_or(10) - 10;
    if diff >= 0 {
        diff / 2
    } else {
        (diff - 1) / 2
    }
}

/// The stored base score for one ability, if the sheet has it.
pub fn ability_base(character: &Character, ability: Ability) -> Option<i32> {
    character.stats.get(&ability).map(|score| score.base)
}

/// Saving-throw bonus: ability modifier, plus the proficiency bonus when
/// the character is proficient in that save. Missing stats or save flags
/// contribute 0.
pub fn saving_throw_bonus(character: &Character, ability: Ability) -> i32 {
    let modifier = ability_modifier(ability_base(character, ability));
    let proficient = character
        .saving_throws
        .get(&ability)
        .map(|save| save.proficient)
        .unwrap_or(false);
    if proficient {
        modifier + character.proficiency_bonus
    } else {
        modifier
    }
}

/// The fixed ability governing each skill.
pub fn skill_ability(skill: Skill) -> Ability {
    match skill {
        Skill::Athletics => Ability::Str,
        Skill::Acrobatics | Skill::SleightOfHand | Skill::Stealth => Ability::Dex,
        Skill::Arcana
        | Skill::History
        | Skill::Investigation
        | Skill::Nature
        | Skill::Religion => Ability::Int,
        Skill::AnimalHandling
        | Skill::Insight
        | Skill::Medicine
        | Skill::Perception
        | Skill::Survival => Ability::Wis,
        Skill::Deception | Skill::Intimidation | Skill::Performance | Skill::Persuasion => {
            Ability::Cha
        }
    }
}

/// Skill bonus: governing ability modifier, plus the proficiency bonus when
/// proficient, plus the proficiency bonus *again* when the character has
/// expertise.
///
/// Proficiency and expertise stack additively here - the table's house rule
/// double-counts the bonus rather than replacing it. Do not "fix" this to a
/// single doubled application without a rules decision.
pub fn skill_bonus(character: &Character, skill: Skill) -> i32 {
    let modifier = ability_modifier(ability_base(character, skill_ability(skill)));
    let proficiency = character
        .skills
        .get(&skill)
        .copied()
        .unwrap_or_default();
    let mut bonus = modifier;
    if proficiency.proficient {
        bonus += character.proficiency_bonus;
    }
    if proficiency.expertise {
        bonus += character.proficiency_bonus;
    }
    bonus
}

/// Passive score: `10 + skill bonus`.
pub fn passive_score(character: &Character, skill: Skill) -> i32 {
    10 + skill_bonus(character, skill)
}

/// Total purse value in gold pieces:
/// `pp*10 + gp + ep*0.5 + sp*0.1 + cp*0.01`. An absent purse is worth 0.
pub fn total_gold_value(currency: Option<&Currency>) -> f64 {
    match currency {
        Some(c) => {
            c.platinum as f64 * 10.0
                + c.gold as f64
                + c.electrum as f64 * 0.5
                + c.silver as f64 * 0.1
                + c.copper as f64 * 0.01
        }
        None => 0.0,
    }
}

/// Fraction of hit points remaining, clamped to `[0, 1]`.
///
/// Absent HP or a non-positive maximum yields 0 so health bars render for
/// incomplete sheets.
pub fn hit_point_ratio(character: &Character) -> f64 {
    match (character.hit_points.current, character.hit_points.max) {
        (Some(current), Some(max)) if max > 0 => (current as f64 / max as f64).clamp(0.0, 1.0),
        _ => 0.0,
    }
}
