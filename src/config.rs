//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and screen layout
//! constants live here so they can be tuned in one place.

// Counter

/// Upper bound for the count; the lower bound is 0.
pub const MAX_COUNT: u8 = 99;

/// Number of render cycles the flash animation stays visible after an
/// accepted press.
pub const FLASH_RENDER_CYCLES: u8 = 2;

// Screen layout (logical pixels)

/// Display resolution.
pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 64;

/// Side length of the rounded box the count is drawn in.
pub const BOX_SIZE: u32 = 30;

/// Corner radius of the rounded box and its flash frames.
pub const BOX_CORNER_RADIUS: u32 = 5;

/// Vertical offset of the box below the screen center, leaving room for
/// the title row.
pub const BOX_OFFSET_Y: i32 = 9;

/// Title label drawn above the count.
pub const SCREEN_TITLE: &str = "Tally :)";

/// Baseline row of the title label.
pub const TITLE_Y: i32 = 10;

// Input

/// Capacity of the key event queue between the button tasks and the
/// event loop. Events arriving while it is full are dropped.
pub const INPUT_QUEUE_CAPACITY: usize = 8;

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Presses held at least this long are classified as holds, not short
/// presses, and never reach the event queue.
pub const LONG_PRESS_MS: u64 = 400;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button UP      → P0.11
//   Button DOWN    → P0.12
//   Button OK      → P0.24
//   Button BACK    → P0.25
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
