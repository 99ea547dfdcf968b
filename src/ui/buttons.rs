//! GPIO button input with async debouncing and press classification.
//!
//! Four physical buttons (active-low with internal pull-up):
//!   - UP   - increment
//!   - DOWN - decrement
//!   - OK   - increment (center key)
//!   - BACK - exit the application
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! debounces it, measures how long the key stays down, and relays the
//! classified event into the input queue.

use crate::config::{BUTTON_DEBOUNCE_MS, INPUT_QUEUE_CAPACITY, LONG_PRESS_MS};
use crate::ui::{input_logic, Key, KeyEvent};
use defmt::{info, warn};
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Instant, Timer};

/// Run a single button sampling loop.
///
/// Waits for the pin to go low (pressed), debounces, waits for release,
/// classifies the press by hold time, and relays short presses into the
/// queue. Enqueueing never blocks: when the queue is full the event is
/// dropped.
pub async fn button_task(
    pin: AnyPin,
    key: Key,
    tx: &Sender<'static, CriticalSectionRawMutex, KeyEvent, INPUT_QUEUE_CAPACITY>,
) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        if btn.is_low() {
            let pressed_at = Instant::now();
            btn.wait_for_rising_edge().await;

            let held_ms = pressed_at.elapsed().as_millis();
            let event = KeyEvent {
                key,
                press: input_logic::classify_press(held_ms, LONG_PRESS_MS),
            };
            info!("Button: {} ({})", event.key, event.press);

            if let Some(event) = input_logic::forward(event) {
                if tx.try_send(event).is_err() {
                    warn!("Input queue full, dropping {}", event.key);
                }
            }

            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        }
    }
}
