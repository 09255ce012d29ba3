use std::time::Duration;

/// Linear poll back-off: `base_delay + progress * step_per_percent`, capped at `max_delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub base_delay: Duration,
    pub step_per_percent: Duration,
    pub max_delay: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            base_delay: Duration::from_millis(1000),
            step_per_percent: Duration::from_millis(20),
            max_delay: Duration::from_millis(3000),
        }
    }
}

impl PollPolicy {
    pub fn delay_for(&self, percent: u8) -> Duration {
        let ramp = self
            .step_per_percent
            .saturating_mul(u32::from(percent.min(100)));
        self.base_delay.saturating_add(ramp).min(self.max_delay)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    pub poll: PollPolicy,
    /// Pause between showing completion and navigating to the result view.
    pub redirect_delay: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            poll: PollPolicy::default(),
            redirect_delay: Duration::from_millis(1000),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::PollPolicy;

    #[test]
    fn delay_ramps_from_base() {
        let policy = PollPolicy::default();
        assert_eq!(policy.delay_for(0), Duration::from_millis(1000));
        assert_eq!(policy.delay_for(50), Duration::from_millis(2000));
    }

    #[test]
    fn delay_is_capped() {
        let policy = PollPolicy {
            base_delay: Duration::from_millis(500),
            step_per_percent: Duration::from_millis(100),
            max_delay: Duration::from_millis(2500),
        };
        assert_eq!(policy.delay_for(10), Duration::from_millis(1500));
        assert_eq!(policy.delay_for(20), Duration::from_millis(2500));
        assert_eq!(policy.delay_for(100), Duration::from_millis(2500));
    }

    #[test]
    fn delay_never_decreases_with_progress() {
        let policy = PollPolicy::default();
        let delays: Vec<_> = (0..=100).map(|p| policy.delay_for(p)).collect();
        assert!(delays.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(delays.iter().all(|d| *d <= policy.max_delay));
    }
}
