//! Typed names for the persisted configuration keys.

use std::fmt;
use std::str::FromStr;

use super::constants::*;

/// One persisted configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    EyeWidth,
    EyeHeight,
    EyeSpacing,
    PupilRatio,
    UpdateInterval,
    EyeColor,
    PupilColor,
    OutlineColor,
    UpdatePolicy,
}

impl SettingKey {
    /// Every key, in preferences-window order.
    pub const ALL: [SettingKey; 9] = [
        SettingKey::EyeWidth,
        SettingKey::EyeHeight,
        SettingKey::EyeSpacing,
        SettingKey::PupilRatio,
        SettingKey::UpdateInterval,
        SettingKey::EyeColor,
        SettingKey::PupilColor,
        SettingKey::OutlineColor,
        SettingKey::UpdatePolicy,
    ];

    /// The kebab-case key as stored on disk.
    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::EyeWidth => PREF_EYE_WIDTH,
            SettingKey::EyeHeight => PREF_EYE_HEIGHT,
            SettingKey::EyeSpacing => PREF_EYE_SPACING,
            SettingKey::PupilRatio => PREF_PUPIL_RATIO,
            SettingKey::UpdateInterval => PREF_UPDATE_INTERVAL,
            SettingKey::EyeColor => PREF_EYE_COLOR,
            SettingKey::PupilColor => PREF_PUPIL_COLOR,
            SettingKey::OutlineColor => PREF_OUTLINE_COLOR,
            SettingKey::UpdatePolicy => PREF_UPDATE_POLICY,
        }
    }

    /// Returns true if a change to this key requires re-creating the update source.
    pub fn affects_scheduler(self) -> bool {
        matches!(self, SettingKey::UpdateInterval | SettingKey::UpdatePolicy)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_strings() {
        for key in SettingKey::ALL {
            assert_eq!(key.as_str().parse::<SettingKey>(), Ok(key));
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!("eye-size".parse::<SettingKey>().is_err());
    }

    #[test]
    fn test_only_interval_and_policy_affect_scheduler() {
        let affecting: Vec<_> = SettingKey::ALL
            .into_iter()
            .filter(|k| k.affects_scheduler())
            .collect();
        assert_eq!(
            affecting,
            vec![SettingKey::UpdateInterval, SettingKey::UpdatePolicy]
        );
    }
}
