//! Ranges and labels for the numeric settings, as shown by a preferences editor.

use super::constants::*;
use super::setting_key::SettingKey;
use crate::clamp;

/// Editor description of one numeric setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingSpec {
    pub key: SettingKey,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub lower: f64,
    pub upper: f64,
    pub step: f64,
    /// Decimal digits shown by the editor.
    pub digits: u32,
}

impl SettingSpec {
    /// Clamp a value into this setting's range.
    pub fn clamp(&self, value: f64) -> f64 {
        clamp(value, self.lower, self.upper)
    }

    /// Clamp a value and snap it to the nearest step above `lower`.
    pub fn snap(&self, value: f64) -> f64 {
        let steps = ((self.clamp(value) - self.lower) / self.step).round();
        self.clamp(self.lower + steps * self.step)
    }

    /// Look up the spec for a numeric key.
    pub fn for_key(key: SettingKey) -> Option<&'static SettingSpec> {
        NUMERIC_SETTINGS.iter().find(|spec| spec.key == key)
    }
}

/// Numeric settings, grouped as in the preferences window (size, then performance).
pub const NUMERIC_SETTINGS: [SettingSpec; 5] = [
    SettingSpec {
        key: SettingKey::EyeWidth,
        title: "Eye Width",
        subtitle: "Width of each eye in pixels",
        lower: MIN_EYE_WIDTH as f64,
        upper: MAX_EYE_WIDTH as f64,
        step: EYE_WIDTH_STEP as f64,
        digits: 0,
    },
    SettingSpec {
        key: SettingKey::EyeHeight,
        title: "Eye Height",
        subtitle: "Height of each eye in pixels",
        lower: MIN_EYE_HEIGHT as f64,
        upper: MAX_EYE_HEIGHT as f64,
        step: EYE_HEIGHT_STEP as f64,
        digits: 0,
    },
    SettingSpec {
        key: SettingKey::EyeSpacing,
        title: "Eye Spacing",
        subtitle: "Space between eyes in pixels",
        lower: MIN_EYE_SPACING as f64,
        upper: MAX_EYE_SPACING as f64,
        step: EYE_SPACING_STEP as f64,
        digits: 0,
    },
    SettingSpec {
        key: SettingKey::PupilRatio,
        title: "Pupil Size Ratio",
        subtitle: "Pupil size relative to eye (0.1 - 0.5)",
        lower: MIN_PUPIL_RATIO,
        upper: MAX_PUPIL_RATIO,
        step: PUPIL_RATIO_STEP,
        digits: 2,
    },
    SettingSpec {
        key: SettingKey::UpdateInterval,
        title: "Update Interval",
        subtitle: "Milliseconds between updates (lower = smoother)",
        lower: MIN_UPDATE_INTERVAL_MS as f64,
        upper: MAX_UPDATE_INTERVAL_MS as f64,
        step: UPDATE_INTERVAL_STEP as f64,
        digits: 0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_keys_have_no_numeric_spec() {
        assert!(SettingSpec::for_key(SettingKey::EyeColor).is_none());
        assert!(SettingSpec::for_key(SettingKey::UpdatePolicy).is_none());
    }

    #[test]
    fn test_interval_spec_clamps_to_sixty_fps() {
        let spec = SettingSpec::for_key(SettingKey::UpdateInterval).unwrap();
        assert_eq!(spec.clamp(1.0), 16.0);
        assert_eq!(spec.clamp(10_000.0), 500.0);
    }

    #[test]
    fn test_snap_rounds_to_step() {
        let width = SettingSpec::for_key(SettingKey::EyeWidth).unwrap();
        assert_eq!(width.snap(13.0), 14.0);
        assert_eq!(width.snap(100.0), 40.0);

        let ratio = SettingSpec::for_key(SettingKey::PupilRatio).unwrap();
        assert!((ratio.snap(0.33) - 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_ranges_are_ordered() {
        for spec in NUMERIC_SETTINGS {
            assert!(spec.lower < spec.upper, "{}", spec.key);
            assert!(spec.step > 0.0);
        }
    }
}
