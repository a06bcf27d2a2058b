//! # Slide Machine
//!
//! Pure navigation state for the horizontal slide deck. No DOM access here;
//! timers and signal plumbing live in [`crate::state::slider`], which keeps
//! this module testable on the host.
//!
//! A transition goes through three phases:
//!
//! 1. `request` - locks the deck and records the pending transition so the
//!    outgoing/incoming slides can pick up their animation classes
//! 2. `commit` - the current index actually moves (the track translates)
//! 3. `settle` - the lock and animation classes are released
//!
//! While locked, every further navigation request is dropped, not queued.

use crate::utils::constants::{SECTION_HASHES, SWIPE_THRESHOLD_PX, WHEEL_DELTA_THRESHOLD};

/// Which way the deck is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// A pending slide change, alive from `request` until `settle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

/// Navigation state machine for the slide deck.
#[derive(Debug, Clone, Copy)]
pub struct SliderMachine {
    current: usize,
    total: usize,
    transitioning: bool,
    wheeling: bool,
    active: Option<Transition>,
}

impl SliderMachine {
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total,
            transitioning: false,
            wheeling: false,
            active: None,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn active(&self) -> Option<Transition> {
        self.active
    }

    /// Ask for a move to `target`. Returns the transition when accepted, or
    /// `None` when the deck is locked or `target` is out of bounds.
    pub fn request(&mut self, target: isize, direction: Direction) -> Option<Transition> {
        if self.transitioning {
            return None;
        }
        if target < 0 || target as usize >= self.total {
            return None;
        }
        let transition = Transition {
            from: self.current,
            to: target as usize,
            direction,
        };
        self.transitioning = true;
        self.active = Some(transition);
        Some(transition)
    }

    /// Move the current index to the pending target. Returns the new index.
    pub fn commit(&mut self) -> Option<usize> {
        let transition = self.active?;
        self.current = transition.to;
        Some(self.current)
    }

    /// Release the lock and clear the pending transition.
    pub fn settle(&mut self) {
        self.active = None;
        self.transitioning = false;
    }

    /// Whether a wheel event may trigger navigation right now.
    pub fn wheel_accepts(&self) -> bool {
        !self.transitioning && !self.wheeling
    }

    pub fn open_wheel_window(&mut self) {
        self.wheeling = true;
    }

    pub fn close_wheel_window(&mut self) {
        self.wheeling = false;
    }

    /// Arbitrate a wheel event. A locked deck ignores it without touching
    /// the debounce window; an accepted event opens the window whether or
    /// not the delta reaches the navigation threshold.
    pub fn accept_wheel(&mut self, delta_y: f64) -> Option<Direction> {
        if !self.wheel_accepts() {
            return None;
        }
        self.open_wheel_window();
        Self::wheel_direction(delta_y)
    }

    /// Interpret a wheel delta. Scrolling down advances the deck.
    pub fn wheel_direction(delta_y: f64) -> Option<Direction> {
        if delta_y.abs() <= WHEEL_DELTA_THRESHOLD {
            return None;
        }
        Some(if delta_y > 0.0 {
            Direction::Next
        } else {
            Direction::Prev
        })
    }

    /// Interpret a horizontal swipe. Swiping left (finger moves toward the
    /// start of the screen) advances the deck.
    pub fn swipe_direction(start_x: f64, end_x: f64) -> Option<Direction> {
        let diff = start_x - end_x;
        if diff.abs() <= SWIPE_THRESHOLD_PX {
            return None;
        }
        Some(if diff > 0.0 {
            Direction::Next
        } else {
            Direction::Prev
        })
    }

    /// Direction implied by jumping straight to `target` (dots, menu links).
    /// Only a strictly higher index counts as forward.
    pub fn direction_to(&self, target: usize) -> Direction {
        if target > self.current {
            Direction::Next
        } else {
            Direction::Prev
        }
    }

    /// Neighbour index in the given direction; may be out of bounds, which
    /// `request` then rejects.
    pub fn target_for(&self, direction: Direction) -> isize {
        match direction {
            Direction::Next => self.current as isize + 1,
            Direction::Prev => self.current as isize - 1,
        }
    }

    /// Slide index for a location hash like `#projects`.
    pub fn index_for_hash(hash: &str) -> Option<usize> {
        SECTION_HASHES.iter().position(|&h| h == hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_slide_unlocked() {
        let machine = SliderMachine::new(7);
        assert_eq!(machine.current(), 0);
        assert_eq!(machine.total(), 7);
        assert!(!machine.transitioning());
        assert!(machine.active().is_none());
    }

    #[test]
    fn request_below_zero_is_rejected() {
        let mut machine = SliderMachine::new(7);
        assert!(machine.request(-1, Direction::Prev).is_none());
        assert!(!machine.transitioning());
        assert_eq!(machine.current(), 0);
    }

    #[test]
    fn request_past_last_slide_is_rejected() {
        let mut machine = SliderMachine::new(7);
        assert!(machine.request(7, Direction::Next).is_none());
        assert!(!machine.transitioning());
    }

    #[test]
    fn request_while_locked_is_dropped() {
        let mut machine = SliderMachine::new(7);
        assert!(machine.request(1, Direction::Next).is_some());
        assert!(machine.request(2, Direction::Next).is_none());
        // The original transition is untouched.
        assert_eq!(machine.active().unwrap().to, 1);
    }

    #[test]
    fn request_commit_settle_cycle() {
        let mut machine = SliderMachine::new(7);
        let t = machine.request(3, Direction::Next).unwrap();
        assert_eq!(t.from, 0);
        assert_eq!(t.to, 3);
        assert_eq!(t.direction, Direction::Next);
        assert!(machine.transitioning());

        // Current does not move until commit.
        assert_eq!(machine.current(), 0);
        assert_eq!(machine.commit(), Some(3));
        assert_eq!(machine.current(), 3);
        assert!(machine.transitioning());

        machine.settle();
        assert!(!machine.transitioning());
        assert!(machine.active().is_none());
        assert_eq!(machine.current(), 3);
    }

    #[test]
    fn commit_without_request_is_a_noop() {
        let mut machine = SliderMachine::new(7);
        assert!(machine.commit().is_none());
        assert_eq!(machine.current(), 0);
    }

    #[test]
    fn walking_next_to_the_end_stops_there() {
        let mut machine = SliderMachine::new(7);
        for _ in 0..10 {
            let target = machine.target_for(Direction::Next);
            if machine.request(target, Direction::Next).is_some() {
                machine.commit();
                machine.settle();
            }
        }
        assert_eq!(machine.current(), 6);
    }

    #[test]
    fn walking_prev_from_start_stays_at_zero() {
        let mut machine = SliderMachine::new(7);
        let target = machine.target_for(Direction::Prev);
        assert!(machine.request(target, Direction::Prev).is_none());
        assert_eq!(machine.current(), 0);
    }

    #[test]
    fn wheel_direction_threshold() {
        assert_eq!(SliderMachine::wheel_direction(51.0), Some(Direction::Next));
        assert_eq!(SliderMachine::wheel_direction(-51.0), Some(Direction::Prev));
        assert_eq!(SliderMachine::wheel_direction(50.0), None);
        assert_eq!(SliderMachine::wheel_direction(-50.0), None);
        assert_eq!(SliderMachine::wheel_direction(0.0), None);
    }

    #[test]
    fn swipe_direction_threshold() {
        // Finger moves left: start > end, advance.
        assert_eq!(
            SliderMachine::swipe_direction(300.0, 200.0),
            Some(Direction::Next)
        );
        assert_eq!(
            SliderMachine::swipe_direction(200.0, 300.0),
            Some(Direction::Prev)
        );
        assert_eq!(SliderMachine::swipe_direction(300.0, 260.0), None);
    }

    #[test]
    fn wheel_window_collapses_a_burst() {
        let mut machine = SliderMachine::new(7);
        assert!(machine.wheel_accepts());
        machine.open_wheel_window();
        assert!(!machine.wheel_accepts());
        machine.close_wheel_window();
        assert!(machine.wheel_accepts());
    }

    #[test]
    fn wheel_rejected_while_transitioning() {
        let mut machine = SliderMachine::new(7);
        machine.request(1, Direction::Next);
        assert!(!machine.wheel_accepts());
    }

    #[test]
    fn wheel_during_transition_leaves_window_untouched() {
        let mut machine = SliderMachine::new(7);
        machine.request(1, Direction::Next);
        assert!(machine.accept_wheel(120.0).is_none());
        machine.commit();
        machine.settle();
        // The rejected event never opened the debounce window, so the next
        // gesture is accepted immediately.
        assert!(machine.wheel_accepts());
        assert_eq!(machine.accept_wheel(120.0), Some(Direction::Next));
    }

    #[test]
    fn accepted_wheel_opens_window_even_below_threshold() {
        let mut machine = SliderMachine::new(7);
        assert_eq!(machine.accept_wheel(10.0), None);
        assert!(!machine.wheel_accepts());
        machine.close_wheel_window();
        assert_eq!(machine.accept_wheel(-120.0), Some(Direction::Prev));
    }

    #[test]
    fn direction_inferred_from_target() {
        let mut machine = SliderMachine::new(7);
        machine.request(3, Direction::Next);
        machine.commit();
        machine.settle();
        assert_eq!(machine.direction_to(5), Direction::Next);
        assert_eq!(machine.direction_to(1), Direction::Prev);
        // A click on the current slide's own dot or menu link counts as
        // backward, so the panel animates with the prev class pair.
        assert_eq!(machine.direction_to(3), Direction::Prev);
    }

    #[test]
    fn hash_lookup() {
        assert_eq!(SliderMachine::index_for_hash("#home"), Some(0));
        assert_eq!(SliderMachine::index_for_hash("#projects"), Some(3));
        assert_eq!(SliderMachine::index_for_hash("#blog"), Some(6));
        assert_eq!(SliderMachine::index_for_hash("#nope"), None);
        assert_eq!(SliderMachine::index_for_hash(""), None);
    }
}
