//! Pocket tally counter firmware.
//!
//! A four-button handheld counter: UP and OK increment, DOWN decrements
//! (bounded to 0..=99), BACK exits. An accepted press flashes the counter
//! box for two render cycles on the 128×64 OLED.
//!
//! Data flow:
//!
//! ```text
//! buttons → input queue → event loop → shared state → redraw → OLED
//! ```
//!
//! The pure modules (counter state machine, press classification, screen
//! scene) build and test on the host: `cargo test`.
//!
//! The embedded binary uses main.rs with #![no_std] and #![no_main] and
//! requires `--features embedded` plus an nRF52840 target.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod counter;
pub mod error;
pub mod ui;

#[cfg(feature = "embedded")]
pub mod channels;

/// Terminate the application.
///
/// With probe-rs attached the breakpoint loop ends the session with exit
/// code 0; on a free-standing device it simply halts.
#[cfg(feature = "embedded")]
pub fn exit() -> ! {
    loop {
        cortex_m::asm::bkpt();
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
