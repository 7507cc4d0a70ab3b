//! Staggered slide-up animation played when the form first appears

use std::time::{Duration, Instant};

/// Elements that slide into place, each with its own start delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealElement {
    Heading,
    Status,
    Form,
}

impl RevealElement {
    /// Delay before this element starts moving
    pub fn delay(&self) -> Duration {
        match self {
            Self::Heading => Duration::from_millis(200),
            Self::Status => Duration::from_millis(300),
            Self::Form => Duration::from_millis(400),
        }
    }
}

/// Enter animation state
#[derive(Debug)]
pub struct RevealState {
    /// When the animation started
    pub start_time: Instant,
    complete: bool,
}

impl RevealState {
    /// How long each element takes to settle
    const ANIMATION_DURATION: Duration = Duration::from_millis(600);
    /// Rows below its final position an element starts from
    pub const RISE_ROWS: u16 = 4;

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            complete: false,
        }
    }

    /// Mark the animation finished once the last element has settled
    pub fn update(&mut self) {
        if !self.complete {
            let last = RevealElement::Form.delay() + Self::ANIMATION_DURATION;
            self.complete = self.start_time.elapsed() >= last;
        }
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.complete = true;
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Current offset of an element, `None` while it is still hidden
    pub fn offset(&self, element: RevealElement) -> Option<u16> {
        if self.complete {
            return Some(0);
        }
        Self::offset_at(self.start_time.elapsed(), element.delay())
    }

    /// Offset in rows below the resting position after `elapsed` time
    pub fn offset_at(elapsed: Duration, delay: Duration) -> Option<u16> {
        if elapsed < delay {
            return None;
        }
        let progress = ((elapsed - delay).as_secs_f32()
            / Self::ANIMATION_DURATION.as_secs_f32())
        .min(1.0);
        // Cubic ease-out for smooth deceleration
        let eased = simple_easing::cubic_out(progress);
        Some(((1.0 - eased) * Self::RISE_ROWS as f32).round() as u16)
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_are_staggered() {
        assert!(RevealElement::Heading.delay() < RevealElement::Status.delay());
        assert!(RevealElement::Status.delay() < RevealElement::Form.delay());
    }

    #[test]
    fn test_hidden_before_delay() {
        let offset = RevealState::offset_at(
            Duration::from_millis(100),
            RevealElement::Heading.delay(),
        );
        assert_eq!(offset, None);
    }

    #[test]
    fn test_starts_fully_lowered() {
        let delay = RevealElement::Form.delay();
        assert_eq!(
            RevealState::offset_at(delay, delay),
            Some(RevealState::RISE_ROWS)
        );
    }

    #[test]
    fn test_settles_after_duration() {
        let delay = RevealElement::Status.delay();
        let elapsed = delay + Duration::from_secs(5);
        assert_eq!(RevealState::offset_at(elapsed, delay), Some(0));
    }

    #[test]
    fn test_offset_never_increases() {
        let delay = RevealElement::Heading.delay();
        let mut previous = RevealState::RISE_ROWS;
        for ms in (200..=900).step_by(50) {
            let offset = RevealState::offset_at(Duration::from_millis(ms), delay).unwrap();
            assert!(offset <= previous);
            previous = offset;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn test_new_is_not_complete() {
        let mut state = RevealState::new();
        state.update();
        assert!(!state.is_complete());
    }

    #[test]
    fn test_skip_shows_everything() {
        let mut state = RevealState::new();
        state.skip();
        assert!(state.is_complete());
        assert_eq!(state.offset(RevealElement::Heading), Some(0));
        assert_eq!(state.offset(RevealElement::Form), Some(0));
    }
}
