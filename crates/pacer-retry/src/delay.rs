use std::time::Duration;

use rand_distr::{Distribution, StandardNormal};
use tracing::warn;

/// Blocks the caller for a computed delay.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Records requested delays instead of sleeping.
#[derive(Debug, Clone, Default)]
pub struct RecordingSleeper {
    slept: Vec<Duration>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slept(&self) -> &[Duration] {
        &self.slept
    }

    pub fn total(&self) -> Duration {
        self.slept.iter().sum()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&mut self, duration: Duration) {
        self.slept.push(duration);
    }
}

/// Turns a delivered value (seconds) into a sleep duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Delay {
    /// Standard deviation (seconds) of gaussian variability around the delay.
    pub jitter_sd_secs: Option<f64>,
}

impl Delay {
    pub fn new(jitter_sd_secs: Option<f64>) -> Self {
        Self { jitter_sd_secs }
    }

    /// Samples `N(secs, sd)` when jitter is set, then clamps at zero.
    /// Non-finite delays are logged and become zero.
    pub fn duration(&self, secs: f64) -> Duration {
        if !secs.is_finite() {
            warn!(secs, "non-finite delay replaced by zero");
            return Duration::ZERO;
        }
        let mut secs = secs;
        if let Some(sd) = self.jitter_sd_secs.filter(|sd| *sd > 0.0) {
            let z: f64 = StandardNormal.sample(&mut rand::thread_rng());
            secs += sd * z;
        }
        Duration::from_secs_f64(secs.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_delay_is_exact() {
        let delay = Delay::default();
        assert_eq!(delay.duration(1.5), Duration::from_millis(1500));
    }

    #[test]
    fn negative_and_non_finite_delays_are_zero() {
        let delay = Delay::default();
        assert_eq!(delay.duration(-2.0), Duration::ZERO);
        assert_eq!(delay.duration(f64::NAN), Duration::ZERO);
        assert_eq!(delay.duration(f64::INFINITY), Duration::ZERO);
    }

    #[test]
    fn jitter_centres_on_the_delay() {
        let delay = Delay::new(Some(0.5));
        let n = 2000;
        let mean = (0..n)
            .map(|_| delay.duration(10.0).as_secs_f64())
            .sum::<f64>()
            / f64::from(n);
        // standard error of the mean is ~0.011
        assert!((mean - 10.0).abs() < 0.1, "{mean}");
    }

    #[test]
    fn wide_jitter_is_clamped_at_zero() {
        let delay = Delay::new(Some(10.0));
        let samples: Vec<Duration> = (0..200).map(|_| delay.duration(0.1)).collect();
        assert!(samples.iter().any(|d| d.is_zero()));
        assert!(samples.iter().any(|d| !d.is_zero()));
    }

    #[test]
    fn zero_sd_is_exact() {
        let delay = Delay::new(Some(0.0));
        assert_eq!(delay.duration(2.5), Duration::from_millis(2500));
    }

    #[test]
    fn recording_sleeper_keeps_every_request() {
        let mut sleeper = RecordingSleeper::new();
        sleeper.sleep(Duration::from_secs(1));
        sleeper.sleep(Duration::from_secs(2));
        assert_eq!(sleeper.slept().len(), 2);
        assert_eq!(sleeper.total(), Duration::from_secs(3));
    }
}
