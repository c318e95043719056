//! Which update source drives the widget.

use std::fmt;

use tracing::debug;

use crate::model::constants::{POLICY_INTERVAL, POLICY_MOTION};

/// How pupil updates are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdatePolicy {
    /// Poll the pointer on a fixed-interval timer, moving or not.
    #[default]
    Interval,
    /// Sample only while the pointer moves; the host suspends sampling when idle.
    Motion,
}

impl UpdatePolicy {
    /// Parse the `update-policy` setting. Unknown values select [`UpdatePolicy::Interval`].
    pub fn from_setting(value: &str) -> Self {
        match value.trim() {
            POLICY_INTERVAL => UpdatePolicy::Interval,
            POLICY_MOTION => UpdatePolicy::Motion,
            other => {
                debug!("Unknown update policy {:?}, using interval", other);
                UpdatePolicy::Interval
            }
        }
    }

    /// The setting value for this policy.
    pub fn as_str(self) -> &'static str {
        match self {
            UpdatePolicy::Interval => POLICY_INTERVAL,
            UpdatePolicy::Motion => POLICY_MOTION,
        }
    }
}

impl fmt::Display for UpdatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_known_policies() {
        assert_eq!(UpdatePolicy::from_setting("interval"), UpdatePolicy::Interval);
        assert_eq!(UpdatePolicy::from_setting(" motion "), UpdatePolicy::Motion);
    }

    #[test]
    fn test_unknown_policy_falls_back_to_interval() {
        assert_eq!(UpdatePolicy::from_setting("vsync"), UpdatePolicy::Interval);
        assert_eq!(UpdatePolicy::from_setting(""), UpdatePolicy::Interval);
    }

    #[test]
    fn test_as_str_round_trips() {
        for policy in [UpdatePolicy::Interval, UpdatePolicy::Motion] {
            assert_eq!(UpdatePolicy::from_setting(policy.as_str()), policy);
        }
    }
}
