use std::time::Duration;

/// Step schedule for the count-up animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountUpConfig {
    pub duration: Duration,
    pub steps: u32,
}

impl Default for CountUpConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(2000),
            steps: 60,
        }
    }
}

impl CountUpConfig {
    /// Fixed tick interval for the driving timer.
    pub fn interval(&self) -> Duration {
        self.duration / self.steps.max(1)
    }
}

/// Counts from 0 up to a target value in a fixed number of steps.
///
/// Each tick advances a floating-point accumulator by `target / steps` and
/// shows the floored value; the final step snaps exactly to the target so
/// rounding drift can neither overshoot nor stop one short. Once done,
/// further ticks are no-ops.
pub struct CountUp {
    target: u64,
    step: f64,
    steps: u32,
    ticks: u32,
    acc: f64,
    shown: u64,
    done: bool,
}

impl CountUp {
    pub fn new(target: u64, config: CountUpConfig) -> Self {
        let steps = config.steps.max(1);
        Self {
            target,
            step: target as f64 / f64::from(steps),
            steps,
            ticks: 0,
            acc: 0.0,
            shown: 0,
            done: target == 0,
        }
    }

    /// The value to display right now.
    pub fn value(&self) -> u64 {
        self.shown
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advances one step. Returns `true` once the target is reached, which
    /// is the driver's cue to clear its timer.
    pub fn tick(&mut self) -> bool {
        if self.done {
            return true;
        }
        self.ticks += 1;
        self.acc += self.step;
        if self.ticks >= self.steps || self.acc >= self.target as f64 {
            self.shown = self.target;
            self.done = true;
        } else {
            self.shown = self.acc.floor() as u64;
        }
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(counter: &mut CountUp) -> u32 {
        let mut ticks = 0;
        while !counter.tick() {
            ticks += 1;
            assert!(ticks <= 10_000, "counter never finished");
        }
        ticks + 1
    }

    #[test]
    fn reaches_exactly_the_headline_target() {
        let config = CountUpConfig::default();
        let mut counter = CountUp::new(25707, config);
        let ticks = run_to_completion(&mut counter);
        assert_eq!(counter.value(), 25707);
        assert!(ticks <= config.steps);
    }

    #[test]
    fn value_is_monotonic_and_never_overshoots() {
        for target in [1u64, 5, 14, 60, 61, 25707, 1_000_000] {
            let mut counter = CountUp::new(target, CountUpConfig::default());
            let mut last = 0;
            while !counter.is_done() {
                counter.tick();
                assert!(counter.value() >= last, "target {target}");
                assert!(counter.value() <= target, "target {target}");
                last = counter.value();
            }
            assert_eq!(counter.value(), target);
        }
    }

    #[test]
    fn completes_within_the_configured_step_count() {
        let config = CountUpConfig {
            duration: Duration::from_millis(1200),
            steps: 40,
        };
        for target in [3u64, 39, 40, 41, 9999] {
            let mut counter = CountUp::new(target, config);
            let ticks = run_to_completion(&mut counter);
            assert!(ticks <= config.steps, "target {target} took {ticks} ticks");
        }
    }

    #[test]
    fn ticks_after_completion_change_nothing() {
        let mut counter = CountUp::new(500, CountUpConfig::default());
        run_to_completion(&mut counter);
        for _ in 0..10 {
            assert!(counter.tick());
            assert_eq!(counter.value(), 500);
        }
    }

    #[test]
    fn zero_target_is_done_immediately() {
        let counter = CountUp::new(0, CountUpConfig::default());
        assert!(counter.is_done());
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn interval_splits_the_duration_across_steps() {
        let even = CountUpConfig {
            duration: Duration::from_millis(1200),
            steps: 40,
        };
        assert_eq!(even.interval(), Duration::from_millis(30));

        // 2000ms / 60 truncates to whole nanoseconds.
        let config = CountUpConfig::default();
        assert_eq!(config.interval(), Duration::from_nanos(33_333_333));

        // A degenerate step count must not divide by zero.
        let degenerate = CountUpConfig {
            duration: Duration::from_millis(100),
            steps: 0,
        };
        assert_eq!(degenerate.interval(), Duration::from_millis(100));
    }

    #[test]
    fn small_targets_hold_at_floor_until_the_snap() {
        // target < steps means most ticks floor to the same value.
        let mut counter = CountUp::new(5, CountUpConfig::default());
        let mut last = 0;
        while !counter.tick() {
            assert!(counter.value() >= last);
            last = counter.value();
        }
        assert_eq!(counter.value(), 5);
    }
}
