use crate::ui::{KeyEvent, Press};

/// Classify a completed press by how long the key was held.
pub fn classify_press(held_ms: u64, long_press_ms: u64) -> Press {
    if held_ms >= long_press_ms {
        Press::Long
    } else {
        Press::Short
    }
}

/// Input relay filter: only deliberate short presses reach the event
/// queue; holds are dropped at the edge.
pub fn forward(event: KeyEvent) -> Option<KeyEvent> {
    match event.press {
        Press::Short => Some(event),
        Press::Long => None,
    }
}
