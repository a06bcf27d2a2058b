//! # Slide Deck
//!
//! Horizontal full-viewport slider. The track translates by whole viewport
//! widths; outgoing and incoming panels carry animation classes for the
//! duration of a transition. Wheel and arrow-key listeners are installed at
//! the document level so navigation works wherever the cursor sits.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, KeyboardEvent, WheelEvent};

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_utils::document;

use crate::state::machine::{Direction, SliderMachine};
use crate::state::slider::use_slider_context;
use crate::utils::constants::{SECTION_HASHES, WHEEL_DEBOUNCE_MS};

use crate::panels::{
    AboutPanel, BlogPanel, CertificationsPanel, ContactPanel, ExperiencePanel, HomePanel,
    ProjectsPanel,
};

#[component]
pub fn SlideDeck() -> impl IntoView {
    let slider = use_slider_context();

    // One physical scroll gesture produces a burst of wheel events; the
    // debounce window collapses the burst to a single transition.
    let wheel_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    {
        let wheel_timer = wheel_timer.clone();
        let on_wheel = Closure::wrap(Box::new(move |ev: WheelEvent| {
            // Locked deck: bail before touching the debounce window or the
            // page's default scroll.
            if !slider.wheel_accepts() {
                return;
            }
            ev.prevent_default();

            // The window closes 300ms after the accepted event; replacing
            // the timeout cancels the previous one.
            *wheel_timer.borrow_mut() = Some(Timeout::new(WHEEL_DEBOUNCE_MS, move || {
                slider.close_wheel_window();
            }));

            if let Some(direction) = slider.wheel(ev.delta_y()) {
                slider.go_by(direction);
            }
        }) as Box<dyn FnMut(WheelEvent)>);

        let opts = AddEventListenerOptions::new();
        opts.set_passive(false);
        if let Err(e) = document().add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            on_wheel.as_ref().unchecked_ref(),
            &opts,
        ) {
            log::error!("Failed to install wheel listener: {:?}", e);
        }
        on_wheel.forget();
    }

    {
        let on_keydown = Closure::wrap(Box::new(move |ev: KeyboardEvent| {
            match ev.key().as_str() {
                "ArrowLeft" => slider.go_by(Direction::Prev),
                "ArrowRight" => slider.go_by(Direction::Next),
                _ => {}
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        if let Err(e) = document()
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
        {
            log::error!("Failed to install keydown listener: {:?}", e);
        }
        on_keydown.forget();
    }

    let touch_start_x = StoredValue::new(0.0_f64);

    view! {
        <div
            class="slider"
            style=move || {
                format!(
                    "transform: translateX({}vw);",
                    -(slider.current() as i64) * 100
                )
            }
            on:touchstart=move |ev| {
                if let Some(touch) = ev.touches().get(0) {
                    touch_start_x.set_value(touch.client_x() as f64);
                }
            }
            on:touchend=move |ev| {
                if let Some(touch) = ev.changed_touches().get(0) {
                    let end_x = touch.client_x() as f64;
                    if let Some(direction) =
                        SliderMachine::swipe_direction(touch_start_x.get_value(), end_x)
                    {
                        slider.go_by(direction);
                    }
                }
            }
        >
            <Panel index=0><HomePanel/></Panel>
            <Panel index=1><AboutPanel/></Panel>
            <Panel index=2><ExperiencePanel/></Panel>
            <Panel index=3><ProjectsPanel/></Panel>
            <Panel index=4><CertificationsPanel/></Panel>
            <Panel index=5><ContactPanel/></Panel>
            <Panel index=6><BlogPanel/></Panel>
        </div>
        <SlideControls/>
        <SlideDots/>
    }
}

/// One full-viewport slide. Animation classes apply only while this panel is
/// part of the active transition.
#[component]
pub fn Panel(index: usize, children: Children) -> impl IntoView {
    let slider = use_slider_context();
    let class = move || {
        let mut class = String::from("panel");
        if let Some(t) = slider.transition() {
            if t.from == index {
                class.push_str(match t.direction {
                    Direction::Next => " slide-out-left",
                    Direction::Prev => " slide-out-right",
                });
            }
            if t.to == index {
                class.push_str(match t.direction {
                    Direction::Next => " slide-in-right",
                    Direction::Prev => " slide-in-left",
                });
            }
        }
        class
    };

    view! {
        <section class=class id=SECTION_HASHES[index].trim_start_matches('#')>
            {children()}
        </section>
    }
}

/// Previous/next arrow buttons, disabled at the ends of the deck.
#[component]
pub fn SlideControls() -> impl IntoView {
    let slider = use_slider_context();

    view! {
        <div class="slide-controls">
            <button
                class="slide-btn"
                id="prevBtn"
                disabled=move || slider.current() == 0
                on:click=move |_| slider.go_by(Direction::Prev)
            >
                "\u{2039}"
            </button>
            <button
                class="slide-btn"
                id="nextBtn"
                disabled=move || slider.current() + 1 == slider.total()
                on:click=move |_| slider.go_by(Direction::Next)
            >
                "\u{203A}"
            </button>
        </div>
    }
}

/// Dot indicators; clicking a dot jumps straight to that slide.
#[component]
pub fn SlideDots() -> impl IntoView {
    let slider = use_slider_context();

    view! {
        <div class="slide-dots">
            {(0..slider.total())
                .map(|i| {
                    view! {
                        <button
                            class="dot"
                            class:active=move || slider.current() == i
                            on:click=move |_| slider.go_to(i as isize, slider.direction_to(i))
                        ></button>
                    }
                })
                .collect_view()}
        </div>
    }
}
