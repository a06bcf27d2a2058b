//! # Typewriter
//!
//! Hero role rotator. The character stepping lives in [`TypewriterState`] so
//! the type/erase/hold sequence is testable; the component just replays it
//! against a signal with real delays.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::utils::constants::{
    ERASE_SPEED_MS, HOLD_DELAY_MS, ROLES, SWITCH_DELAY_MS, TYPE_SPEED_MS,
};

/// One role being typed out or erased, character by character.
#[derive(Debug, Clone, Copy)]
pub struct TypewriterState {
    role: usize,
    chars: usize,
    typing: bool,
}

impl TypewriterState {
    pub fn new() -> Self {
        Self {
            role: 0,
            chars: 0,
            typing: true,
        }
    }

    /// Advance one step. Returns the text to display and the delay before
    /// the next step, in milliseconds.
    pub fn tick(&mut self) -> (&'static str, u32) {
        let word = ROLES[self.role];
        if self.typing {
            self.chars += 1;
            let shown = &word[..self.chars];
            if self.chars == word.len() {
                self.typing = false;
                (shown, HOLD_DELAY_MS)
            } else {
                (shown, TYPE_SPEED_MS)
            }
        } else {
            self.chars = self.chars.saturating_sub(1);
            let shown = &word[..self.chars];
            if self.chars == 0 {
                self.typing = true;
                self.role = (self.role + 1) % ROLES.len();
                (shown, SWITCH_DELAY_MS)
            } else {
                (shown, ERASE_SPEED_MS)
            }
        }
    }
}

impl Default for TypewriterState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Typewriter() -> impl IntoView {
    let (text, set_text) = signal(String::new());

    let stopped = Arc::new(AtomicBool::new(false));
    let stop = stopped.clone();
    on_cleanup(move || stop.store(true, Ordering::Relaxed));

    spawn_local(async move {
        let mut state = TypewriterState::new();
        loop {
            if stopped.load(Ordering::Relaxed) {
                break;
            }
            let (shown, delay) = state.tick();
            set_text.set(shown.to_string());
            TimeoutFuture::new(delay).await;
        }
    });

    view! {
        <span class="typewriter" id="roleText">{text}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_first_role_character_by_character() {
        let mut state = TypewriterState::new();
        let first = ROLES[0];
        for i in 1..first.len() {
            let (shown, delay) = state.tick();
            assert_eq!(shown, &first[..i]);
            assert_eq!(delay, TYPE_SPEED_MS);
        }
        // Final character holds the full word on screen.
        let (shown, delay) = state.tick();
        assert_eq!(shown, first);
        assert_eq!(delay, HOLD_DELAY_MS);
    }

    #[test]
    fn erases_then_switches_to_next_role() {
        let mut state = TypewriterState::new();
        let first = ROLES[0];
        for _ in 0..first.len() {
            state.tick();
        }

        // Erase back down to one character.
        for i in (1..first.len()).rev() {
            let (shown, delay) = state.tick();
            assert_eq!(shown, &first[..i]);
            assert_eq!(delay, ERASE_SPEED_MS);
        }

        // Last erase step clears the text and pauses before the next role.
        let (shown, delay) = state.tick();
        assert_eq!(shown, "");
        assert_eq!(delay, SWITCH_DELAY_MS);

        // Next tick starts typing the second role.
        let (shown, delay) = state.tick();
        assert_eq!(shown, &ROLES[1][..1]);
        assert_eq!(delay, TYPE_SPEED_MS);
    }

    #[test]
    fn wraps_around_after_last_role() {
        let mut state = TypewriterState::new();
        // One full type+erase cycle per role.
        for _ in 0..ROLES.len() {
            loop {
                let (shown, delay) = state.tick();
                if shown.is_empty() && delay == SWITCH_DELAY_MS {
                    break;
                }
            }
        }
        let (shown, _) = state.tick();
        assert_eq!(shown, &ROLES[0][..1]);
    }
}
