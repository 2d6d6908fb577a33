//! Animated stat counters for the home screen

use std::time::{Duration, Instant};

/// One hero stat, counting up from zero to its target when first shown
#[derive(Debug, Clone)]
pub struct StatCounter {
    pub label: &'static str,
    pub target: u32,
    pub suffix: &'static str,
    /// Set when the counter first becomes visible; the animation runs once
    started_at: Option<Instant>,
}

impl StatCounter {
    /// Count-up duration (2 seconds)
    const DURATION: Duration = Duration::from_millis(2000);

    pub fn new(label: &'static str, target: u32, suffix: &'static str) -> Self {
        Self {
            label,
            target,
            suffix,
            started_at: None,
        }
    }

    /// Start the count-up. Subsequent calls are no-ops; the animation
    /// never re-runs.
    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    /// Current displayed value, eased with cubic ease-out
    pub fn value(&self) -> u32 {
        let Some(started_at) = self.started_at else {
            return 0;
        };
        let elapsed = started_at.elapsed();
        if elapsed >= Self::DURATION {
            return self.target;
        }
        let progress = elapsed.as_secs_f32() / Self::DURATION.as_secs_f32();
        let eased = simple_easing::cubic_out(progress);
        (self.target as f32 * eased).floor() as u32
    }

    /// True while the count-up is still running
    pub fn is_animating(&self) -> bool {
        self.started_at
            .is_some_and(|t| t.elapsed() < Self::DURATION)
    }

    /// Rendered text, e.g. "350+"
    pub fn display(&self) -> String {
        format!("{}{}", self.value(), self.suffix)
    }
}

/// The hero stats shown on the home screen
pub fn hero_counters() -> Vec<StatCounter> {
    vec![
        StatCounter::new("Coaches on board", 350, "+"),
        StatCounter::new("Athletes tracked", 4800, "+"),
        StatCounter::new("Satisfaction", 98, "%"),
    ]
}
