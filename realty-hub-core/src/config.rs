//! Timing configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What a navigation to the page already shown does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReentryPolicy {
    /// Re-enter loading and restart the settle timer
    #[default]
    Restart,
    /// No-op whenever the target is the current page
    Ignore,
}

/// Delays of the three timed transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub settle_delay_ms: u64,
    pub toast_duration_ms: u64,
    pub copy_revert_ms: u64,
    pub reentry: ReentryPolicy,
}

impl TimingConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn copy_revert(&self) -> Duration {
        Duration::from_millis(self.copy_revert_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 400,
            toast_duration_ms: 2000,
            copy_revert_ms: 1500,
            reentry: ReentryPolicy::Restart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: TimingConfig = serde_json::from_str(r#"{ "toast_duration_ms": 500 }"#).unwrap();
        assert_eq!(cfg.toast_duration(), Duration::from_millis(500));
        assert_eq!(cfg.settle_delay(), Duration::from_millis(400));
        assert_eq!(cfg.copy_revert(), Duration::from_millis(1500));
        assert_eq!(cfg.reentry, ReentryPolicy::Restart);
    }

    #[test]
    fn reentry_policy_is_lowercase() {
        let cfg: TimingConfig = serde_json::from_str(r#"{ "reentry": "ignore" }"#).unwrap();
        assert_eq!(cfg.reentry, ReentryPolicy::Ignore);
    }
}
