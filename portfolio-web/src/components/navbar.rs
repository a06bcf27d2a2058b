//! Navigation Bar Component

use leptos::prelude::*;

use crate::state::slider::use_slider_context;
use crate::utils::constants::{SECTION_HASHES, SECTION_LABELS};

#[component]
pub fn Navbar() -> impl IntoView {
    let slider = use_slider_context();

    view! {
        <nav class="navbar">
            <div class="nav-inner">
                <a href="#home" class="nav-brand" on:click=move |ev| {
                    ev.prevent_default();
                    slider.go_to_hash("#home");
                }>
                    <span class="brand-accent">"TA"</span><span>"Portfolio"</span>
                </a>
                <ul class="nav-menu">
                    {SECTION_HASHES
                        .iter()
                        .zip(SECTION_LABELS)
                        .enumerate()
                        .map(|(i, (&hash, &label))| {
                            view! {
                                <li>
                                    <a
                                        href=hash
                                        class="nav-link"
                                        class:active=move || slider.current() == i
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            slider.go_to_hash(hash);
                                        }
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}
