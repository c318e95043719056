//! Configuration constants and default values.
//!
//! This module contains all application constants including visual defaults,
//! configuration keys, and validation limits.

// === Visual Defaults ===

/// Default width of one eye in surface units.
pub const DEFAULT_EYE_WIDTH: i32 = 14;

/// Default height of one eye in surface units.
pub const DEFAULT_EYE_HEIGHT: i32 = 18;

/// Default gap between the two eyes.
pub const DEFAULT_EYE_SPACING: i32 = 4;

/// Default pupil radius as a fraction of the smaller eye radius.
pub const DEFAULT_PUPIL_RATIO: f64 = 0.35;

/// Default update period in milliseconds.
pub const DEFAULT_UPDATE_INTERVAL_MS: i32 = 50;

/// Default sclera color.
pub const DEFAULT_EYE_COLOR: &str = "rgba(255,255,255,1.0)";

/// Default pupil color.
pub const DEFAULT_PUPIL_COLOR: &str = "rgba(0,0,0,1.0)";

/// Default outline color.
pub const DEFAULT_OUTLINE_COLOR: &str = "rgba(0,0,0,1.0)";

/// Default update policy name.
pub const DEFAULT_UPDATE_POLICY: &str = POLICY_INTERVAL;

/// Outline stroke width, independent of eye scale.
pub const OUTLINE_WIDTH: f64 = 1.5;

/// Smallest pupil travel radius ever used.
pub const MIN_MAX_MOVEMENT: f64 = 1.0;

// === Configuration Keys ===

/// Key for eye width.
pub const PREF_EYE_WIDTH: &str = "eye-width";

/// Key for eye height.
pub const PREF_EYE_HEIGHT: &str = "eye-height";

/// Key for the gap between eyes.
pub const PREF_EYE_SPACING: &str = "eye-spacing";

/// Key for pupil size ratio.
pub const PREF_PUPIL_RATIO: &str = "pupil-ratio";

/// Key for update period in milliseconds.
pub const PREF_UPDATE_INTERVAL: &str = "update-interval";

/// Key for sclera color.
pub const PREF_EYE_COLOR: &str = "eye-color";

/// Key for pupil color.
pub const PREF_PUPIL_COLOR: &str = "pupil-color";

/// Key for outline color.
pub const PREF_OUTLINE_COLOR: &str = "outline-color";

/// Key for update policy (`interval` or `motion`).
pub const PREF_UPDATE_POLICY: &str = "update-policy";

// === Update Policies ===

/// Fixed-interval polling.
pub const POLICY_INTERVAL: &str = "interval";

/// Motion-triggered sampling that idles when the pointer rests.
pub const POLICY_MOTION: &str = "motion";

// === Validation Limits ===

/// Minimum eye width.
pub const MIN_EYE_WIDTH: i32 = 8;

/// Maximum eye width.
pub const MAX_EYE_WIDTH: i32 = 40;

/// Eye width spin step.
pub const EYE_WIDTH_STEP: i32 = 2;

/// Minimum eye height.
pub const MIN_EYE_HEIGHT: i32 = 8;

/// Maximum eye height.
pub const MAX_EYE_HEIGHT: i32 = 30;

/// Eye height spin step.
pub const EYE_HEIGHT_STEP: i32 = 2;

/// Minimum gap between eyes.
pub const MIN_EYE_SPACING: i32 = 1;

/// Maximum gap between eyes.
pub const MAX_EYE_SPACING: i32 = 20;

/// Eye spacing spin step.
pub const EYE_SPACING_STEP: i32 = 1;

/// Minimum pupil ratio.
pub const MIN_PUPIL_RATIO: f64 = 0.1;

/// Maximum pupil ratio.
pub const MAX_PUPIL_RATIO: f64 = 0.5;

/// Pupil ratio spin step.
pub const PUPIL_RATIO_STEP: f64 = 0.05;

/// Minimum update interval (~60 FPS).
pub const MIN_UPDATE_INTERVAL_MS: i32 = 16;

/// Maximum update interval (2 FPS).
pub const MAX_UPDATE_INTERVAL_MS: i32 = 500;

/// Update interval spin step.
pub const UPDATE_INTERVAL_STEP: i32 = 10;

// === Host Defaults ===

/// Idle time after which a motion watch stops sampling.
pub const DEFAULT_IDLE_COOLDOWN_MS: u64 = 1000;

/// Config directory name under the XDG config home.
pub const CONFIG_DIR_NAME: &str = "xeyes-indicator";

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "config.json";
