//! # Projects Panel
//!
//! Project cards. A non-empty API list replaces the defaults entirely;
//! anything else leaves the defaults on screen.

use leptos::prelude::*;
use shared::Project;

use crate::state::portfolio::use_portfolio_context;
use crate::utils::icons::placeholder_image;

struct DefaultProject {
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
}

const DEFAULT_PROJECTS: &[DefaultProject] = &[
    DefaultProject {
        title: "Vulnerability Scanner",
        description: "Automated web vulnerability scanner with reporting.",
        tags: &["Python", "Flask", "Security"],
    },
    DefaultProject {
        title: "Portfolio Site",
        description: "This site. Single-page app with an animated canvas background.",
        tags: &["Rust", "WebAssembly", "Canvas"],
    },
    DefaultProject {
        title: "CTF Toolkit",
        description: "Helper scripts for capture-the-flag competitions.",
        tags: &["Python", "CTF"],
    },
];

#[component]
pub fn ProjectsPanel() -> impl IntoView {
    let portfolio = use_portfolio_context();

    let projects = move || {
        portfolio
            .data
            .with(|data| data.as_ref().and_then(|d| d.projects.clone()))
            .filter(|p| !p.is_empty())
    };

    view! {
        <div class="projects">
            <h2 class="section-title">"Projects"</h2>
            <div class="projects-grid">
                {move || match projects() {
                    Some(items) => items.into_iter().map(project_card).collect_view().into_any(),
                    None => default_cards().into_any(),
                }}
            </div>
        </div>
    }
}

fn default_cards() -> impl IntoView {
    DEFAULT_PROJECTS
        .iter()
        .map(|project| {
            view! {
                <div class="project-card">
                    <img class="project-image" src=placeholder_image(project.title) alt=project.title/>
                    <h3 class="project-title">{project.title}</h3>
                    <p class="project-description">{project.description}</p>
                    <div class="project-tags">
                        {project
                            .tags
                            .iter()
                            .map(|&t| view! { <span class="tag">{t}</span> })
                            .collect_view()}
                    </div>
                </div>
            }
        })
        .collect_view()
}

fn project_card(project: Project) -> impl IntoView {
    let image = project
        .image
        .clone()
        .unwrap_or_else(|| placeholder_image(&project.title));

    view! {
        <div class="project-card">
            <img class="project-image" src=image alt=project.title.clone()/>
            <h3 class="project-title">{project.title}</h3>
            <p class="project-description">{project.description}</p>
            <div class="project-tags">
                {project
                    .technologies
                    .into_iter()
                    .map(|s| view! { <span class="tag">{s.name}</span> })
                    .collect_view()}
            </div>
            <div class="project-actions">
                {project.url.map(|url| view! {
                    <a class="project-link" href=url target="_blank" rel="noopener">"Live Demo"</a>
                })}
                {project.github_url.map(|url| view! {
                    <a class="project-link" href=url target="_blank" rel="noopener">"Source"</a>
                })}
            </div>
        </div>
    }
}
