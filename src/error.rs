//! Unified error type for tally.
//!
//! We avoid `alloc` - all variants carry only fixed-size data.
//! Deliberately narrow: ignored keys and dropped queue events are normal
//! operation, not errors, and everything that can genuinely fail does so
//! at startup where the only sane response is to abort.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// I²C transaction to the display failed during bring-up.
    Display,
}
