//! # Home Panel
//!
//! Hero slide: avatar, name, rotating role line, top skill bars, CTA.
//! Renders its defaults immediately and swaps in API data when it arrives.

use leptos::prelude::*;
use shared::utils::display_name;

use crate::components::Typewriter;
use crate::state::portfolio::{top_skills, use_portfolio_context};
use crate::state::slider::use_slider_context;
use crate::utils::constants::{DEFAULT_HEADER_SKILLS, DEFAULT_NAME};

#[component]
pub fn HomePanel() -> impl IntoView {
    let portfolio = use_portfolio_context();
    let slider = use_slider_context();

    let name = move || {
        portfolio.data.with(|data| {
            data.as_ref()
                .and_then(|d| d.profile.as_ref())
                .and_then(|p| p.user.as_ref())
                .map(|u| display_name(u.first_name.as_deref(), u.last_name.as_deref()))
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| DEFAULT_NAME.to_string())
        })
    };

    let avatar = move || {
        portfolio.data.with(|data| {
            data.as_ref()
                .and_then(|d| d.profile.as_ref())
                .and_then(|p| p.avatar.clone())
        })
    };

    let header_skills = move || {
        let api = portfolio.data.with(|data| {
            data.as_ref()
                .and_then(|d| d.skills.clone())
                .unwrap_or_default()
        });
        if api.is_empty() {
            DEFAULT_HEADER_SKILLS
                .iter()
                .map(|(name, pct)| (name.to_string(), *pct))
                .collect::<Vec<_>>()
        } else {
            top_skills(&api, 3)
                .into_iter()
                .map(|s| (s.name, s.proficiency))
                .collect()
        }
    };

    let (avatar_loaded, set_avatar_loaded) = signal(false);

    view! {
        <div class="hero">
            <div
                class="hero-avatar"
                class=("has-img", move || avatar_loaded.get())
            >
                {move || {
                    avatar()
                        .map(|src| {
                            view! {
                                <img
                                    src=src
                                    alt="avatar"
                                    on:load=move |_| set_avatar_loaded.set(true)
                                    on:error=move |_| set_avatar_loaded.set(false)
                                />
                            }
                        })
                }}
            </div>
            <h1 class="hero-name">{name}</h1>
            <p class="hero-role">
                "I am a " <Typewriter/>
            </p>
            <div class="hero-skills">
                {move || {
                    header_skills()
                        .into_iter()
                        .map(|(name, pct)| {
                            view! {
                                <div class="skill-bar">
                                    <span class="skill-bar-name">{name}</span>
                                    <div class="bar">
                                        <div
                                            class="bar-fill"
                                            style=format!("width: {}%;", pct)
                                        ></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <button
                class="cta-button"
                on:click=move |_| slider.go_to_hash("#projects")
            >
                "View My Work"
            </button>
        </div>
    }
}
