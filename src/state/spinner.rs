//! Busy indicator for the submit button

use std::time::{Duration, Instant};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// Spinner that advances with wall-clock time
#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    start_time: Instant,
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn frame(&self) -> &'static str {
        Self::frame_at(self.start_time.elapsed())
    }

    pub fn frame_at(elapsed: Duration) -> &'static str {
        let index = (elapsed.as_millis() / FRAME_INTERVAL.as_millis()) as usize;
        FRAMES[index % FRAMES.len()]
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}
