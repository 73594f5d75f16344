/// Monotonic request tags; only the latest tag's response is applied.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Makes every outstanding tag stale without issuing a new one.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest
    }
}

#[test]
fn only_latest_request_is_current() {
    let mut sequence = RequestSequence::default();

    let first = sequence.next();
    let second = sequence.next();
    assert!(!sequence.is_current(first));
    assert!(sequence.is_current(second));

    sequence.invalidate();
    assert!(!sequence.is_current(second));
}
