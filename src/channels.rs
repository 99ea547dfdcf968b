//! Inter-task communication primitives.
//!
//! Defines the static channels, signals, and the shared counter state
//! used between the Embassy tasks. Uses embassy-sync primitives for safe
//! cross-task communication.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use crate::config::INPUT_QUEUE_CAPACITY;
use crate::counter::Counter;
use crate::ui::KeyEvent;

/// Classified key events from the button tasks to the event loop.
/// Bounded; producers drop events when it is full.
pub static INPUT_QUEUE: Channel<CriticalSectionRawMutex, KeyEvent, INPUT_QUEUE_CAPACITY> =
    Channel::new();

/// Signal that the screen must be repainted.
pub static REDRAW: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Signal that the application is tearing down; the render task releases
/// the panel and stops.
pub static SHUTDOWN: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Signal from the render task that the panel has been released.
pub static RELEASED: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Counter state shared between the event loop and the render task.
///
/// Both sides access it through short `lock` closures that never await.
pub static STATE: Mutex<CriticalSectionRawMutex, RefCell<Counter>> =
    Mutex::new(RefCell::new(Counter::new()));
