//! # Slider Context
//!
//! Reactive wrapper around [`SliderMachine`], provided app-wide via Leptos
//! context. Components read the current index and pending transition from
//! here; all navigation entry points (buttons, dots, wheel, keys, swipes,
//! menu links) funnel through [`SliderContext::go_to`].

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::machine::{Direction, SliderMachine, Transition};
use crate::utils::constants::{SECTION_HASHES, SLIDE_COMMIT_DELAY_MS, SLIDE_SETTLE_DELAY_MS};

#[derive(Clone, Copy)]
pub struct SliderContext {
    machine: RwSignal<SliderMachine>,
}

impl SliderContext {
    pub fn new() -> Self {
        Self {
            machine: RwSignal::new(SliderMachine::new(SECTION_HASHES.len())),
        }
    }

    pub fn current(&self) -> usize {
        self.machine.with(|m| m.current())
    }

    pub fn total(&self) -> usize {
        self.machine.with(|m| m.total())
    }

    pub fn transition(&self) -> Option<Transition> {
        self.machine.with(|m| m.active())
    }

    pub fn direction_to(&self, target: usize) -> Direction {
        self.machine.with(|m| m.direction_to(target))
    }

    pub fn wheel_accepts(&self) -> bool {
        self.machine.with(|m| m.wheel_accepts())
    }

    pub fn close_wheel_window(&self) {
        self.machine.update(|m| m.close_wheel_window());
    }

    /// Arbitrate a wheel event, opening the debounce window on acceptance.
    pub fn wheel(&self, delta_y: f64) -> Option<Direction> {
        self.machine
            .try_update(|m| m.accept_wheel(delta_y))
            .flatten()
    }

    /// Run a full transition: request now, commit after the animation classes
    /// have applied, settle once the track has moved.
    pub fn go_to(&self, target: isize, direction: Direction) {
        let accepted = self
            .machine
            .try_update(|m| m.request(target, direction))
            .flatten();
        if accepted.is_none() {
            return;
        }

        let machine = self.machine;
        spawn_local(async move {
            TimeoutFuture::new(SLIDE_COMMIT_DELAY_MS).await;
            machine.update(|m| {
                m.commit();
            });
            TimeoutFuture::new(SLIDE_SETTLE_DELAY_MS).await;
            machine.update(|m| m.settle());
        });
    }

    /// Step one slide in `direction`.
    pub fn go_by(&self, direction: Direction) {
        let target = self.machine.with(|m| m.target_for(direction));
        self.go_to(target, direction);
    }

    /// Navigate to the slide a menu hash points at.
    pub fn go_to_hash(&self, hash: &str) {
        if let Some(index) = SliderMachine::index_for_hash(hash) {
            let direction = self.direction_to(index);
            self.go_to(index as isize, direction);
        }
    }
}

impl Default for SliderContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide slider context to the app. Call once at the root.
pub fn provide_slider_context() {
    provide_context(SliderContext::new());
}

/// Get slider context. Panics if called outside the app tree.
pub fn use_slider_context() -> SliderContext {
    expect_context::<SliderContext>()
}
