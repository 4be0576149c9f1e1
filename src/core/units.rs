/// Elapsed time since launch. Stored in milliseconds; every query method
/// takes this one type so callers never have to track which entry point
/// wants milliseconds and which wants seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Elapsed {
    ms: f64,
}

impl Elapsed {
    pub fn from_millis(ms: f64) -> Self {
        Self { ms }
    }

    pub fn from_secs(secs: f64) -> Self {
        Self { ms: secs * 1000.0 }
    }

    pub fn as_millis(self) -> f64 {
        self.ms
    }

    /// Seconds rounded to 3 decimal places. Negative durations are
    /// mathematically valid and pass through unchanged.
    pub fn as_secs_rounded(self) -> f64 {
        round_to_3(self.ms / 1000.0)
    }
}

pub(crate) fn round_to_3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::Elapsed;

    #[test]
    fn millis_round_to_three_decimal_seconds() {
        assert_eq!(Elapsed::from_millis(1000.0).as_secs_rounded(), 1.0);
        assert_eq!(Elapsed::from_millis(1.0).as_secs_rounded(), 0.001);
        assert_eq!(Elapsed::from_millis(1234.5678).as_secs_rounded(), 1.235);
        assert_eq!(Elapsed::from_millis(0.4).as_secs_rounded(), 0.0);
    }

    #[test]
    fn negative_durations_are_accepted() {
        assert_eq!(Elapsed::from_millis(-500.0).as_secs_rounded(), -0.5);
    }

    #[test]
    fn seconds_and_millis_constructors_agree() {
        for secs in [0.0, 0.25, 1.0, 3.125, 60.0] {
            assert_eq!(Elapsed::from_secs(secs), Elapsed::from_millis(secs * 1000.0));
        }
    }
}
