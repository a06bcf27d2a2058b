//! Root application component.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Navbar, SlideDeck, Starfield};
use crate::services::portfolio::fetch_portfolio;
use crate::state::portfolio::{provide_portfolio_context, use_portfolio_context};
use crate::state::slider::provide_slider_context;

#[component]
pub fn App() -> impl IntoView {
    provide_slider_context();
    provide_portfolio_context();

    let portfolio = use_portfolio_context();
    spawn_local(async move {
        match fetch_portfolio().await {
            Ok(data) => {
                log::info!("Portfolio data loaded");
                portfolio.data.set(Some(data));
            }
            Err(e) => {
                // Default content stays up when the API is unreachable.
                log::error!("Failed to load portfolio data: {}", e);
            }
        }
    });

    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <Starfield/>
        <Navbar/>
        <main>
            <SlideDeck/>
        </main>
        <footer class="footer">
            <p>{format!("\u{A9} {} Tuan Anh. All rights reserved.", year)}</p>
        </footer>
    }
}
