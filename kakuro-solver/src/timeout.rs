//! Cooperative cancellation: a deadline checked between propagation passes
//! and at the entry/exit of each search branch, never pre-empted mid-step.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    pub fn after(duration: Duration) -> Self {
        Deadline { at: Instant::now() + duration }
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_deadline_is_already_expired() {
        let deadline = Deadline::after(Duration::from_secs(0));
        std::thread::sleep(Duration::from_millis(1));
        assert!(deadline.expired());
    }

    #[test]
    fn generous_deadline_is_not_expired_immediately() {
        let deadline = Deadline::after(Duration::from_secs(60));
        assert!(!deadline.expired());
    }
}
