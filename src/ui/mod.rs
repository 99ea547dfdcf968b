//! User interface subsystem - OLED display + physical buttons.
//!
//! Button tasks classify raw GPIO activity into [`KeyEvent`]s and relay
//! short presses into the bounded input queue; the render task paints the
//! counter screen whenever the event loop asks for a redraw.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Buttons**: 4 tactile switches with debouncing (UP, DOWN, OK, BACK)

pub mod input_logic;
pub mod screen;

#[cfg(feature = "embedded")]
pub mod buttons;
#[cfg(feature = "embedded")]
pub mod display;

/// Physical key identities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// Increment.
    Up,
    /// Decrement.
    Down,
    /// Increment (center key doubles as Up).
    Ok,
    /// Exit the application.
    Back,
}

/// How long a key was held before release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Press {
    /// Quick press-and-release.
    Short,
    /// Press-and-hold.
    Long,
}

/// A classified key event, as carried by the input queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub key: Key,
    pub press: Press,
}
