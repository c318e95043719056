//! Application domain model.
//!
//! This module contains pure data definitions (no host dependencies):
//! eye dimensions, derived geometry, configuration keys and constants.
//!
//! Persistence lives in [`crate::settings`].

pub mod constants;
pub mod eye_config;
pub mod setting_key;
pub mod setting_spec;

pub use constants::*;
pub use eye_config::{EyeColors, EyeConfig, EyeGeometry};
pub use setting_key::SettingKey;
pub use setting_spec::{SettingSpec, NUMERIC_SETTINGS};
