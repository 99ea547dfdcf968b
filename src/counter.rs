//! Counter state and event-loop core.
//!
//! All behavior is a function of the current state and a key event.
//! The async plumbing in `main.rs` owns the locking and the redraw
//! signalling; everything here is pure and host-testable.

use crate::config::{FLASH_RENDER_CYCLES, MAX_COUNT};
use crate::ui::Key;

/// What the event loop must do after a key has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Keep running and request a redraw.
    Redraw,
    /// Tear down and stop the loop.
    Exit,
}

/// Shared counter state.
///
/// A single instance lives behind the state mutex on target; the event
/// loop mutates it through [`Counter::handle_key`] and the render path
/// reads it (and decays the flash window) through [`Counter::take_flash`].
/// Invariant: `count` stays within `0..=MAX_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    count: u8,
    flash_pending: bool,
    flash_timer: u8,
}

impl Counter {
    /// Fresh state: count 0, no flash pending.
    pub const fn new() -> Self {
        Self {
            count: 0,
            flash_pending: false,
            flash_timer: 0,
        }
    }

    /// Current count.
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Apply one dequeued key event.
    ///
    /// Up and Ok increment, Down decrements, both saturating at the
    /// count bounds; an accepted change arms the flash animation.
    /// Back is the sole terminal transition. Everything else leaves the
    /// state untouched but still yields [`Step::Redraw`] - the screen is
    /// repainted after every non-Back event.
    pub fn handle_key(&mut self, key: Key) -> Step {
        match key {
            Key::Back => return Step::Exit,
            Key::Up | Key::Ok if self.count < MAX_COUNT => {
                self.count += 1;
                self.arm_flash();
            }
            Key::Down if self.count != 0 => {
                self.count -= 1;
                self.arm_flash();
            }
            _ => {}
        }
        Step::Redraw
    }

    fn arm_flash(&mut self) {
        self.flash_pending = true;
        self.flash_timer = FLASH_RENDER_CYCLES;
    }

    /// Render-side query: does this frame draw the flash?
    ///
    /// The sole place the animation window decays. Call exactly once per
    /// render cycle, under the state lock: clears the pending flag and
    /// counts the timer down, so an accepted press flashes for
    /// `FLASH_RENDER_CYCLES` consecutive frames.
    pub fn take_flash(&mut self) -> bool {
        if self.flash_pending || self.flash_timer > 0 {
            self.flash_pending = false;
            self.flash_timer = self.flash_timer.saturating_sub(1);
            true
        } else {
            false
        }
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_and_ok_increment() {
        let mut c = Counter::new();
        assert_eq!(c.handle_key(Key::Up), Step::Redraw);
        assert_eq!(c.count(), 1);
        assert_eq!(c.handle_key(Key::Ok), Step::Redraw);
        assert_eq!(c.count(), 2);
    }

    #[test]
    fn down_decrements() {
        let mut c = Counter::new();
        c.handle_key(Key::Up);
        c.handle_key(Key::Up);
        assert_eq!(c.handle_key(Key::Down), Step::Redraw);
        assert_eq!(c.count(), 1);
    }

    #[test]
    fn count_saturates_at_max() {
        let mut c = Counter::new();
        for _ in 0..100 {
            c.handle_key(Key::Up);
        }
        assert_eq!(c.count(), MAX_COUNT);

        // Further presses are no-ops but still repaint.
        assert_eq!(c.handle_key(Key::Up), Step::Redraw);
        assert_eq!(c.count(), MAX_COUNT);
    }

    #[test]
    fn down_at_zero_is_a_no_op() {
        let mut c = Counter::new();
        assert_eq!(c.handle_key(Key::Down), Step::Redraw);
        assert_eq!(c.count(), 0);
    }

    #[test]
    fn up_presses_reach_min_of_n_and_max() {
        for n in [0usize, 1, 50, 99, 100, 250] {
            let mut c = Counter::new();
            for _ in 0..n {
                c.handle_key(Key::Up);
            }
            assert_eq!(c.count() as usize, n.min(MAX_COUNT as usize));
        }
    }

    #[test]
    fn down_presses_reach_saturating_difference() {
        for (start, n) in [(5u8, 3usize), (5, 5), (5, 9), (99, 200)] {
            let mut c = Counter::new();
            for _ in 0..start {
                c.handle_key(Key::Up);
            }
            for _ in 0..n {
                c.handle_key(Key::Down);
            }
            let expected = (i32::from(start) - n as i32).max(0) as u8;
            assert_eq!(c.count(), expected);
        }
    }

    #[test]
    fn back_exits_from_any_count() {
        for presses in [0u8, 1, 99] {
            let mut c = Counter::new();
            for _ in 0..presses {
                c.handle_key(Key::Up);
            }
            assert_eq!(c.handle_key(Key::Back), Step::Exit);
            // Back mutates nothing; teardown happens in the loop.
            assert_eq!(c.count(), presses);
        }
    }

    #[test]
    fn accepted_press_flashes_for_two_frames() {
        let mut c = Counter::new();
        c.handle_key(Key::Up);
        assert!(c.take_flash());
        assert!(c.take_flash());
        assert!(!c.take_flash());
        assert!(!c.take_flash());
    }

    #[test]
    fn rejected_press_does_not_flash() {
        let mut c = Counter::new();
        c.handle_key(Key::Down); // at zero: ignored
        assert!(!c.take_flash());
    }

    #[test]
    fn press_mid_flash_rearms_the_window() {
        let mut c = Counter::new();
        c.handle_key(Key::Up);
        assert!(c.take_flash());
        c.handle_key(Key::Up); // second press before the window closed
        assert!(c.take_flash());
        assert!(c.take_flash());
        assert!(!c.take_flash());
    }
}
