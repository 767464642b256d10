// tests/antispam/config_tests.rs

#[cfg(test)]
mod tests {
    use crate::fixtures::test_clock::TestClock;
    use antispam::{AntiSpam, AntiSpamConfig, AntiSpamError, DEFAULT_INTERVALS, Interval};
    use std::time::Duration;

    // Config validation tests
    #[test]
    fn config_rejects_empty_intervals() {
        let config = AntiSpamConfig::empty();
        assert_eq!(config.validate(), Err(AntiSpamError::NoIntervals));
    }

    #[test]
    fn config_rejects_zero_window() {
        let config = AntiSpamConfig::empty()
            .interval(Duration::from_secs(5), 3)
            .interval(Duration::ZERO, 1);
        assert_eq!(
            config.validate(),
            Err(AntiSpamError::InvalidWindow { index: 1 })
        );
    }

    #[test]
    fn config_rejects_zero_limit() {
        let config = AntiSpamConfig::empty().interval(Duration::from_secs(5), 0);
        assert_eq!(
            config.validate(),
            Err(AntiSpamError::InvalidLimit { index: 0 })
        );
    }

    #[test]
    fn config_accepts_valid_intervals() {
        let config = AntiSpamConfig::new([
            Interval::new(Duration::from_secs(1), 1),
            Interval::new(Duration::from_secs(60), 30),
        ]);
        assert!(config.validate().is_ok());
        assert_eq!(config.intervals().len(), 2);
    }

    #[test]
    fn config_builder_preserves_order() {
        let config = AntiSpamConfig::empty()
            .interval(Duration::from_secs(3600), 10)
            .interval(Duration::from_secs(5), 3);

        let windows: Vec<u64> = config
            .intervals()
            .iter()
            .map(|interval| interval.window().as_secs())
            .collect();
        assert_eq!(windows, vec![3600, 5]);
    }

    #[test]
    fn interval_converts_from_tuple() {
        let interval: Interval = (Duration::from_secs(5), 3u32).into();
        assert_eq!(interval.window(), Duration::from_secs(5));
        assert_eq!(interval.limit(), 3);
    }

    // Constructor tests
    #[test]
    fn with_config_rejects_empty_config() {
        let result = AntiSpam::with_config(AntiSpamConfig::empty(), TestClock::new(0.0));
        assert!(matches!(result, Err(AntiSpamError::NoIntervals)));
    }

    #[test]
    fn new_with_empty_list_uses_defaults() {
        let tracker = AntiSpam::new(Vec::<Interval>::new(), TestClock::new(0.0)).unwrap();
        assert_eq!(tracker.intervals(), &DEFAULT_INTERVALS[..]);
        assert_eq!(tracker.discard_after(), Duration::from_secs(24 * 60 * 60));
    }

    #[test]
    fn new_validates_non_empty_list() {
        let result = AntiSpam::new(
            [Interval::new(Duration::from_secs(5), 0)],
            TestClock::new(0.0),
        );
        assert!(matches!(result, Err(AntiSpamError::InvalidLimit { index: 0 })));
    }

    #[test]
    fn discard_after_is_largest_window_regardless_of_order() {
        let tracker = AntiSpam::new(
            [
                Interval::new(Duration::from_secs(60), 5),
                Interval::new(Duration::from_secs(3600), 10),
                Interval::new(Duration::from_secs(5), 3),
            ],
            TestClock::new(0.0),
        )
        .unwrap();
        assert_eq!(tracker.discard_after(), Duration::from_secs(3600));
    }

    #[test]
    fn error_display_formatting() {
        let error = AntiSpamError::InvalidWindow { index: 2 };
        let message = error.to_string();
        assert!(message.contains("Interval 2"));
        assert!(message.contains("window"));
        assert!(!AntiSpamError::NoIntervals.to_string().is_empty());
    }
}
