use std::time::{Duration, Instant};

pub const ONBOARDING_INTERVAL: Duration = Duration::from_millis(2500);

/// Shortest accepted slide interval; shorter values are raised to it.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingStep {
    pub title: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
}

pub const ONBOARDING_STEPS: &[OnboardingStep] = &[
    OnboardingStep {
        title: "Customize your brand",
        text: "Logo, colors, invoice templates with GST & QR",
        icon: "◈",
    },
    OnboardingStep {
        title: "Add products & parties",
        text: "Import via Excel/CSV and start billing",
        icon: "✔",
    },
    OnboardingStep {
        title: "Share & get paid",
        text: "WhatsApp/Email invoices with UPI QR",
        icon: "➤",
    },
];

/// Auto-advancing slide index driven by UI ticks.
#[derive(Debug)]
pub struct Carousel {
    steps: &'static [OnboardingStep],
    index: usize,
    interval: Duration,
    last_advance: Instant,
}

impl Carousel {
    pub fn new(steps: &'static [OnboardingStep], interval: Duration, now: Instant) -> Self {
        Self {
            steps,
            index: 0,
            interval: interval.max(MIN_INTERVAL),
            last_advance: now,
        }
    }

    pub fn onboarding(now: Instant) -> Self {
        Self::new(ONBOARDING_STEPS, ONBOARDING_INTERVAL, now)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn current(&self) -> Option<&OnboardingStep> {
        self.steps.get(self.index)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Advances once per elapsed interval. Returns whether it advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.steps.is_empty() {
            return false;
        }

        let elapsed = now.saturating_duration_since(self.last_advance).as_nanos();
        let interval = self.interval.as_nanos();
        let steps = elapsed / interval;
        if steps == 0 {
            return false;
        }

        let len = self.steps.len();
        self.index = (self.index + (steps % len as u128) as usize) % len;
        // Carry the partial interval over
        let remainder = u64::try_from(elapsed % interval).unwrap_or(u64::MAX);
        self.last_advance = now
            .checked_sub(Duration::from_nanos(remainder))
            .unwrap_or(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advances_on_interval() {
        let start = Instant::now();
        let mut carousel = Carousel::onboarding(start);
        assert_eq!(carousel.current().unwrap().title, "Customize your brand");

        assert!(!carousel.tick(start + Duration::from_millis(2499)));
        assert_eq!(carousel.index(), 0);

        assert!(carousel.tick(start + Duration::from_millis(2500)));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_wraps_around() {
        let start = Instant::now();
        let mut carousel = Carousel::onboarding(start);

        carousel.tick(start + ONBOARDING_INTERVAL * 3);
        assert_eq!(carousel.index(), 0);

        carousel.tick(start + ONBOARDING_INTERVAL * 5);
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.current().unwrap().title, "Share & get paid");
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let start = Instant::now();
        let mut carousel = Carousel::new(ONBOARDING_STEPS, Duration::ZERO, start);
        assert_eq!(carousel.interval(), MIN_INTERVAL);

        assert!(!carousel.tick(start));
        assert!(carousel.tick(start + Duration::from_millis(5)));
        assert_eq!(carousel.index(), 2);
        assert!(!carousel.tick(start + Duration::from_millis(5)));
    }

    #[test]
    fn test_long_gap_advances_in_one_step() {
        let start = Instant::now();
        let mut carousel = Carousel::new(ONBOARDING_STEPS, MIN_INTERVAL, start);

        // One hour of 1 ms slides: 3_600_001 % 3 == 1
        assert!(carousel.tick(start + Duration::from_millis(3_600_001)));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_keeps_cadence_after_late_tick() {
        let start = Instant::now();
        let mut carousel = Carousel::onboarding(start);

        assert!(carousel.tick(start + Duration::from_millis(3000)));
        assert_eq!(carousel.index(), 1);
        assert!(!carousel.tick(start + Duration::from_millis(4999)));
        assert!(carousel.tick(start + Duration::from_millis(5000)));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_empty_never_moves() {
        let start = Instant::now();
        let mut carousel = Carousel::new(&[], ONBOARDING_INTERVAL, start);
        assert!(!carousel.tick(start + Duration::from_secs(60)));
        assert!(carousel.current().is_none());
    }
}
