//! # Experience Panel
//!
//! Work history timeline. Absent section keeps the built-in entries; an
//! explicitly empty list from the API shows an empty-state message instead.

use leptos::prelude::*;
use shared::Experience;

use crate::state::portfolio::use_portfolio_context;
use crate::utils::format::date_range;

struct DefaultExperience {
    title: &'static str,
    company: &'static str,
    period: &'static str,
    description: &'static str,
    skills: &'static [&'static str],
}

const DEFAULT_EXPERIENCES: &[DefaultExperience] = &[
    DefaultExperience {
        title: "Security Engineer",
        company: "Tech Company",
        period: "2023 - Present",
        description: "Web application penetration testing and secure code review.",
        skills: &["Web Security", "Python", "Burp Suite"],
    },
    DefaultExperience {
        title: "Junior Developer",
        company: "Startup",
        period: "2021 - 2023",
        description: "Full-stack development with Python and JavaScript.",
        skills: &["Python", "JavaScript", "React"],
    },
];

#[component]
pub fn ExperiencePanel() -> impl IntoView {
    let portfolio = use_portfolio_context();

    let experiences = move || {
        portfolio
            .data
            .with(|data| data.as_ref().and_then(|d| d.experiences.clone()))
    };

    view! {
        <div class="experience">
            <h2 class="section-title">"Experience"</h2>
            <div class="timeline">
                {move || match experiences() {
                    None => default_timeline().into_any(),
                    Some(items) if items.is_empty() => view! {
                        <p class="empty-message">"No experience entries yet."</p>
                    }
                    .into_any(),
                    Some(items) => items
                        .into_iter()
                        .map(timeline_item)
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </div>
    }
}

fn default_timeline() -> impl IntoView {
    DEFAULT_EXPERIENCES
        .iter()
        .map(|exp| {
            view! {
                <div class="timeline-item">
                    <span class="timeline-date">{exp.period}</span>
                    <h3 class="timeline-title">{exp.title}</h3>
                    <span class="timeline-company">{exp.company}</span>
                    <p class="timeline-description">{exp.description}</p>
                    <div class="timeline-skills">
                        {exp.skills
                            .iter()
                            .map(|&s| view! { <span class="skill-chip">{s}</span> })
                            .collect_view()}
                    </div>
                </div>
            }
        })
        .collect_view()
}

fn timeline_item(exp: Experience) -> impl IntoView {
    let period = date_range(exp.start_date, exp.end_date, exp.current);
    let location = exp.location.unwrap_or_default();

    view! {
        <div class="timeline-item">
            <span class="timeline-date">{period}</span>
            <h3 class="timeline-title">{exp.title}</h3>
            <span class="timeline-company">
                {exp.company}
                {(!location.is_empty()).then(|| format!(" \u{2022} {}", location))}
            </span>
            <p class="timeline-description">{exp.description}</p>
            <div class="timeline-skills">
                {exp.skills_used
                    .into_iter()
                    .map(|s| view! { <span class="skill-chip">{s.name}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
