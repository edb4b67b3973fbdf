//! Results reported by confirm actions
//!
//! Confirm actions run inside dialog callbacks or on the action runtime, so
//! they cannot touch the app directly. They send `DemoEvent`s instead, which
//! the app drains at the start of every frame.

use chrono::Local;
use std::time::Instant;

use super::DemoApp;

/// Events sent from confirm actions to the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoEvent {
    /// An action finished
    Completed(String),
    /// An action failed; the dialog stays open for a retry
    Failed(String),
}

impl DemoEvent {
    fn status_line(&self) -> String {
        let time = Local::now().format("%H:%M:%S");
        match self {
            DemoEvent::Completed(what) => format!("[{}] ✔ {}", time, what),
            DemoEvent::Failed(why) => format!("[{}] ✖ {}", time, why),
        }
    }
}

impl DemoApp {
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.status_messages
                .push((event.status_line(), Instant::now()));
        }
    }
}
