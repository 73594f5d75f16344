use std::time::Duration;

use tokio::time::Instant;

/// Single-slot debounce: arming replaces any pending query, last write wins.
#[derive(Debug)]
pub struct DebounceTimer {
    quiet: Duration,
    min_len: usize,
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    deadline: Instant,
    query: String,
}

impl DebounceTimer {
    pub fn new(quiet: Duration, min_len: usize) -> Self {
        Self {
            quiet,
            min_len,
            pending: None,
        }
    }

    /// Records new input. Input below the length threshold disarms the timer.
    pub fn input(&mut self, query: &str, now: Instant) -> bool {
        if query.trim().chars().count() < self.min_len {
            self.pending = None;
            return false;
        }

        self.pending = Some(Pending {
            deadline: now + self.quiet,
            query: query.to_string(),
        });

        true
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Takes the pending query if its quiet period has elapsed.
    pub fn fire(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if pending.deadline <= now => self.pending.take().map(|p| p.query),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(300);

    #[test]
    fn fires_once_with_last_input() {
        let start = Instant::now();
        let mut timer = DebounceTimer::new(QUIET, 2);

        timer.input("mu", start);
        timer.input("mus", start + Duration::from_millis(100));
        timer.input("muse", start + Duration::from_millis(200));

        assert_eq!(timer.fire(start + Duration::from_millis(400)), None);
        assert_eq!(
            timer.fire(start + Duration::from_millis(500)),
            Some("muse".to_string())
        );
        assert_eq!(timer.fire(start + Duration::from_millis(900)), None);
    }

    #[test]
    fn short_input_disarms() {
        let start = Instant::now();
        let mut timer = DebounceTimer::new(QUIET, 2);

        assert!(timer.input("par", start));
        assert!(!timer.input("p", start + Duration::from_millis(50)));
        assert!(timer.deadline().is_none());
        assert_eq!(timer.fire(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn cancel_discards_pending_query() {
        let start = Instant::now();
        let mut timer = DebounceTimer::new(QUIET, 0);

        timer.input("x", start);
        timer.cancel();
        assert_eq!(timer.fire(start + QUIET), None);
    }
}
