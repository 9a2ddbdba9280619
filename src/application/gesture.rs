use std::time::{Duration, Instant};

/// Counts hotkey presses inside a rolling window.
///
/// A gap longer than `window` restarts the count at 1. Reaching `presses`
/// completes the gesture and resets the detector.
#[derive(Debug)]
pub struct GestureDetector {
    presses: u32,
    window: Duration,
    count: u32,
    last: Option<Instant>,
}

impl GestureDetector {
    pub fn new(presses: u32, window: Duration) -> Self {
        Self {
            presses: presses.max(1),
            window,
            count: 0,
            last: None,
        }
    }

    /// Record one press; true when it completes a gesture
    pub fn press(&mut self, at: Instant) -> bool {
        self.count = match self.last {
            Some(last) if at.saturating_duration_since(last) <= self.window => self.count + 1,
            _ => 1,
        };
        self.last = Some(at);

        if self.count >= self.presses {
            self.reset();
            return true;
        }
        false
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.last = None;
    }
}

impl Default for GestureDetector {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn three_quick_presses_complete_once() {
        let mut d = GestureDetector::default();
        let t0 = Instant::now();
        assert!(!d.press(t0));
        assert!(!d.press(t0 + ms(300)));
        assert!(d.press(t0 + ms(600)));
        assert_eq!(d.count(), 0);
    }

    #[test]
    fn gap_of_exactly_one_second_still_counts() {
        let mut d = GestureDetector::default();
        let t0 = Instant::now();
        d.press(t0);
        d.press(t0 + ms(1000));
        assert!(d.press(t0 + ms(2000)));
    }

    #[test]
    fn long_gap_resets_to_one() {
        let mut d = GestureDetector::default();
        let t0 = Instant::now();
        d.press(t0);
        d.press(t0 + ms(500));
        assert!(!d.press(t0 + ms(1600)));
        assert_eq!(d.count(), 1);

        assert!(!d.press(t0 + ms(2000)));
        assert!(d.press(t0 + ms(2500)));
    }

    #[test]
    fn six_quick_presses_make_two_gestures() {
        let mut d = GestureDetector::default();
        let t0 = Instant::now();
        let fired = (0..6)
            .filter(|i| d.press(t0 + ms(100 * i)))
            .count();
        assert_eq!(fired, 2);
    }

    #[test]
    fn slow_presses_never_fire() {
        let mut d = GestureDetector::default();
        let t0 = Instant::now();
        for i in 0..10 {
            assert!(!d.press(t0 + ms(1500 * i)));
        }
    }

    #[test]
    fn custom_press_count() {
        let mut d = GestureDetector::new(2, ms(500));
        let t0 = Instant::now();
        assert!(!d.press(t0));
        assert!(d.press(t0 + ms(400)));
    }
}
