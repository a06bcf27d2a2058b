//! # Portfolio Data Context
//!
//! Holds the portfolio payload fetched at startup. `None` until the fetch
//! lands (or forever, when the API is down); panels fall back to their
//! built-in defaults in that case, so the page is never empty.

use leptos::prelude::*;
use shared::{PortfolioData, Skill, SkillType};

#[derive(Clone, Copy)]
pub struct PortfolioContext {
    pub data: RwSignal<Option<PortfolioData>>,
}

impl PortfolioContext {
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(None),
        }
    }
}

impl Default for PortfolioContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide portfolio context to the app. Call once at the root.
pub fn provide_portfolio_context() {
    provide_context(PortfolioContext::new());
}

/// Get portfolio context. Panics if called outside the app tree.
pub fn use_portfolio_context() -> PortfolioContext {
    expect_context::<PortfolioContext>()
}

/// One entry in a skills grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillEntry {
    pub name: String,
    pub icon: Option<String>,
}

/// Merge API skills into the default grid without duplicating names.
///
/// Defaults always come first. `tech_bucket` selects which half of the API
/// list joins the grid: `SkillType::Tech` entries, or everything else.
pub fn merge_skills(defaults: &[(&str, &str)], api: &[Skill], tech_bucket: bool) -> Vec<SkillEntry> {
    let mut entries: Vec<SkillEntry> = defaults
        .iter()
        .map(|(name, icon)| SkillEntry {
            name: name.to_string(),
            icon: Some(icon.to_string()),
        })
        .collect();

    for skill in api {
        let is_tech = skill.skill_type == SkillType::Tech;
        if is_tech != tech_bucket {
            continue;
        }
        let name = skill.name.trim();
        if name.is_empty() {
            continue;
        }
        if entries.iter().any(|e| e.name.eq_ignore_ascii_case(name)) {
            continue;
        }
        entries.push(SkillEntry {
            name: name.to_string(),
            icon: skill.icon.clone(),
        });
    }

    entries
}

/// Highest-proficiency skills, for the hero skill bars.
pub fn top_skills(api: &[Skill], count: usize) -> Vec<Skill> {
    let mut skills = api.to_vec();
    skills.sort_by(|a, b| b.proficiency.cmp(&a.proficiency));
    skills.truncate(count);
    skills
}
