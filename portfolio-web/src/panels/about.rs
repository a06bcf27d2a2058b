//! # About Panel
//!
//! Bio plus a tabbed skills grid. API skills are merged into the default
//! cards rather than replacing them, so the grid never thins out when the
//! backend returns a short list.

use leptos::prelude::*;

use crate::state::portfolio::{merge_skills, use_portfolio_context, SkillEntry};
use crate::utils::constants::{DEFAULT_BIO, DEFAULT_TECH_SKILLS, DEFAULT_TOOL_SKILLS};
use crate::utils::icons::skill_logo;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SkillTab {
    Tech,
    Tools,
}

#[component]
pub fn AboutPanel() -> impl IntoView {
    let portfolio = use_portfolio_context();
    let (tab, set_tab) = signal(SkillTab::Tech);

    let bio = move || {
        portfolio.data.with(|data| {
            data.as_ref()
                .and_then(|d| d.profile.as_ref())
                .and_then(|p| p.bio.clone())
                .filter(|b| !b.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BIO.to_string())
        })
    };

    let grid = move |tech: bool| {
        portfolio.data.with(|data| {
            let api = data
                .as_ref()
                .and_then(|d| d.skills.as_deref())
                .unwrap_or(&[]);
            let defaults = if tech {
                DEFAULT_TECH_SKILLS
            } else {
                DEFAULT_TOOL_SKILLS
            };
            merge_skills(defaults, api, tech)
        })
    };

    view! {
        <div class="about">
            <h2 class="section-title">"About Me"</h2>
            <p class="about-bio">{bio}</p>

            <div class="skill-tabs">
                <button
                    class="tab-btn"
                    class:active=move || tab.get() == SkillTab::Tech
                    on:click=move |_| set_tab.set(SkillTab::Tech)
                >
                    "Tech Stack"
                </button>
                <button
                    class="tab-btn"
                    class:active=move || tab.get() == SkillTab::Tools
                    on:click=move |_| set_tab.set(SkillTab::Tools)
                >
                    "Tools"
                </button>
            </div>

            <div
                class="skills-grid"
                style=move || grid_display(tab.get() == SkillTab::Tech)
            >
                {move || skill_cards(grid(true))}
            </div>
            <div
                class="skills-grid"
                style=move || grid_display(tab.get() == SkillTab::Tools)
            >
                {move || skill_cards(grid(false))}
            </div>
        </div>
    }
}

fn grid_display(visible: bool) -> &'static str {
    if visible {
        "display: grid;"
    } else {
        "display: none;"
    }
}

fn skill_cards(entries: Vec<SkillEntry>) -> impl IntoView {
    entries
        .into_iter()
        .map(|entry| {
            let logo = skill_logo(&entry.name, entry.icon.as_deref());
            let fallback = entry.icon.clone().unwrap_or_default();
            view! {
                <div class="tech-card">
                    <img
                        class="tech-logo"
                        src=logo
                        alt=entry.name.clone()
                        onerror="this.style.display='none'; this.nextElementSibling.style.display='inline';"
                    />
                    <span class="tech-icon" style="display: none;">{fallback}</span>
                    <span class="tech-name">{entry.name}</span>
                </div>
            }
        })
        .collect_view()
}
