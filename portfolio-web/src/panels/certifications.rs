//! # Certifications Panel
//!
//! Three tabs: certifications, achievements, education. Each tab has its own
//! default card, empty-state message, and API rendering.

use leptos::prelude::*;
use shared::{Achievement, Certification, Education};

use crate::state::portfolio::use_portfolio_context;
use crate::utils::format::{cert_date_info, date_range, format_day};

#[derive(Clone, Copy, PartialEq, Eq)]
enum CredTab {
    Certs,
    Achievements,
    Education,
}

#[component]
pub fn CertificationsPanel() -> impl IntoView {
    let portfolio = use_portfolio_context();
    let (tab, set_tab) = signal(CredTab::Certs);

    let certs = move || {
        portfolio
            .data
            .with(|data| data.as_ref().and_then(|d| d.certifications.clone()))
    };
    let achievements = move || {
        portfolio
            .data
            .with(|data| data.as_ref().and_then(|d| d.achievements.clone()))
    };
    let education = move || {
        portfolio
            .data
            .with(|data| data.as_ref().and_then(|d| d.education.clone()))
    };

    view! {
        <div class="certifications">
            <h2 class="section-title">"Credentials"</h2>

            <div class="cred-tabs">
                <button
                    class="tab-btn"
                    class:active=move || tab.get() == CredTab::Certs
                    on:click=move |_| set_tab.set(CredTab::Certs)
                >
                    "Certifications"
                </button>
                <button
                    class="tab-btn"
                    class:active=move || tab.get() == CredTab::Achievements
                    on:click=move |_| set_tab.set(CredTab::Achievements)
                >
                    "Achievements"
                </button>
                <button
                    class="tab-btn"
                    class:active=move || tab.get() == CredTab::Education
                    on:click=move |_| set_tab.set(CredTab::Education)
                >
                    "Education"
                </button>
            </div>

            <div class="cred-grid">
                {move || match tab.get() {
                    CredTab::Certs => match certs() {
                        None => default_cert().into_any(),
                        Some(items) if items.is_empty() => {
                            empty_message("No certifications yet.").into_any()
                        }
                        Some(items) => items.into_iter().map(cert_card).collect_view().into_any(),
                    },
                    CredTab::Achievements => match achievements() {
                        None => default_achievement().into_any(),
                        Some(items) if items.is_empty() => {
                            empty_message("No achievements yet.").into_any()
                        }
                        Some(items) => {
                            items.into_iter().map(achievement_card).collect_view().into_any()
                        }
                    },
                    CredTab::Education => match education() {
                        None => default_education().into_any(),
                        Some(items) if items.is_empty() => {
                            empty_message("No education entries yet.").into_any()
                        }
                        Some(items) => {
                            items.into_iter().map(education_card).collect_view().into_any()
                        }
                    },
                }}
            </div>
        </div>
    }
}

fn empty_message(text: &'static str) -> impl IntoView {
    view! { <p class="empty-message">{text}</p> }
}

fn default_cert() -> impl IntoView {
    view! {
        <div class="cred-card">
            <h3 class="cred-title">"CompTIA Security+"</h3>
            <span class="cred-issuer">"CompTIA"</span>
            <p class="cred-dates">"Issued: 2023"</p>
        </div>
    }
}

fn default_achievement() -> impl IntoView {
    view! {
        <div class="cred-card">
            <h3 class="cred-title">"CTF Finalist"</h3>
            <span class="cred-issuer">"National Cybersecurity Competition"</span>
            <p class="cred-description">"Top 10 finish in the national finals."</p>
        </div>
    }
}

fn default_education() -> impl IntoView {
    view! {
        <div class="cred-card">
            <h3 class="cred-title">"B.Sc. Computer Science"</h3>
            <span class="cred-issuer">"University of Technology"</span>
            <p class="cred-dates">"2018 - 2022"</p>
        </div>
    }
}

fn cert_card(cert: Certification) -> impl IntoView {
    view! {
        <div class="cred-card">
            <h3 class="cred-title">{cert.name}</h3>
            <span class="cred-issuer">{cert.issuer}</span>
            <p class="cred-dates">{cert_date_info(cert.issue_date, cert.expiry_date)}</p>
            {cert.description.map(|d| view! { <p class="cred-description">{d}</p> })}
            {cert.credential_url.map(|url| view! {
                <a class="cred-link" href=url target="_blank" rel="noopener">"Verify"</a>
            })}
        </div>
    }
}

fn achievement_card(item: Achievement) -> impl IntoView {
    view! {
        <div class="cred-card">
            <h3 class="cred-title">{item.title}</h3>
            {item.organization.map(|org| view! { <span class="cred-issuer">{org}</span> })}
            {item.date.map(|d| view! { <p class="cred-dates">{format_day(d)}</p> })}
            <p class="cred-description">{item.description}</p>
            {item.url.map(|url| view! {
                <a class="cred-link" href=url target="_blank" rel="noopener">"Details"</a>
            })}
        </div>
    }
}

fn education_card(item: Education) -> impl IntoView {
    let period = date_range(item.start_date, item.end_date, item.current);
    view! {
        <div class="cred-card">
            <h3 class="cred-title">{format!("{} in {}", item.degree, item.field_of_study)}</h3>
            <span class="cred-issuer">{item.institution}</span>
            <p class="cred-dates">{period}</p>
            {item.gpa.map(|gpa| view! { <p class="cred-gpa">{format!("GPA: {:.2}", gpa)}</p> })}
            {item.description.map(|d| view! { <p class="cred-description">{d}</p> })}
        </div>
    }
}
