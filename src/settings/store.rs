//! Settings store with change notifications.
//!
//! Uses an in-memory cache to avoid disk I/O on every editor change.
//! Call [`Settings::flush`] to persist changes to disk.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::config::{default_config_path, read_config, write_config, Config};
use crate::color::{parse_color, Color};
use crate::error::Result;
use crate::events::{EventBus, SettingsEvent, Subscription};
use crate::model::constants::*;
use crate::model::{EyeColors, EyeConfig, SettingKey, SettingSpec};
use crate::scheduler::UpdatePolicy;

/// Persistent configuration shared by the widgets of one process.
pub struct Settings {
    path: Option<PathBuf>,
    cache: RefCell<Config>,
    dirty: Cell<bool>,
    bus: EventBus,
}

impl Settings {
    /// A store with default values and no backing file.
    pub fn in_memory() -> Self {
        Self::with_config(None, Config::default())
    }

    /// Load settings from `path`, returning defaults if the file is missing or invalid.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = if path.exists() {
            match read_config(&path) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to load config {}: {}", path.display(), e);
                    Config::default()
                }
            }
        } else {
            debug!("No config at {}, using defaults", path.display());
            Config::default()
        };
        Self::with_config(Some(path), config)
    }

    /// Load settings from the default per-user location.
    pub fn load_default() -> Self {
        Self::load(default_config_path())
    }

    fn with_config(path: Option<PathBuf>, config: Config) -> Self {
        Self {
            path,
            cache: RefCell::new(config),
            dirty: Cell::new(false),
            bus: EventBus::new(),
        }
    }

    /// Backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns true if there are changes not yet written to disk.
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    // === Change notifications ===

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> Subscription {
        self.bus.subscribe()
    }

    /// Release a subscription.
    pub fn unsubscribe(&self, subscription: Subscription) {
        self.bus.unsubscribe(subscription);
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.bus.subscriber_count()
    }

    // === Raw access by key ===

    /// Read an integer (from cache).
    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        let config = self.cache.borrow();
        match key {
            PREF_EYE_WIDTH => config.eye_width,
            PREF_EYE_HEIGHT => config.eye_height,
            PREF_EYE_SPACING => config.eye_spacing,
            PREF_UPDATE_INTERVAL => config.update_interval,
            _ => default,
        }
    }

    /// Read a double (from cache).
    pub fn get_double(&self, key: &str, default: f64) -> f64 {
        let config = self.cache.borrow();
        match key {
            PREF_PUPIL_RATIO => config.pupil_ratio,
            _ => default,
        }
    }

    /// Read a string (from cache).
    pub fn get_string(&self, key: &str, default: &str) -> String {
        let config = self.cache.borrow();
        match key {
            PREF_EYE_COLOR => config.eye_color.clone(),
            PREF_PUPIL_COLOR => config.pupil_color.clone(),
            PREF_OUTLINE_COLOR => config.outline_color.clone(),
            PREF_UPDATE_POLICY => config.update_policy.clone(),
            _ => default.to_string(),
        }
    }

    /// Write an integer (to cache, flush later).
    pub fn set_int(&self, key: &str, val: i32) {
        let changed = {
            let mut config = self.cache.borrow_mut();
            let slot = match key {
                PREF_EYE_WIDTH => &mut config.eye_width,
                PREF_EYE_HEIGHT => &mut config.eye_height,
                PREF_EYE_SPACING => &mut config.eye_spacing,
                PREF_UPDATE_INTERVAL => &mut config.update_interval,
                _ => {
                    debug!("Ignoring integer write to {}", key);
                    return;
                }
            };
            std::mem::replace(slot, val) != val
        };
        self.after_write(key, changed);
    }

    /// Write a double (to cache, flush later).
    pub fn set_double(&self, key: &str, val: f64) {
        let changed = {
            let mut config = self.cache.borrow_mut();
            let slot = match key {
                PREF_PUPIL_RATIO => &mut config.pupil_ratio,
                _ => {
                    debug!("Ignoring double write to {}", key);
                    return;
                }
            };
            std::mem::replace(slot, val) != val
        };
        self.after_write(key, changed);
    }

    /// Write a string (to cache, flush later).
    pub fn set_string(&self, key: &str, val: &str) {
        let changed = {
            let mut config = self.cache.borrow_mut();
            let slot = match key {
                PREF_EYE_COLOR => &mut config.eye_color,
                PREF_PUPIL_COLOR => &mut config.pupil_color,
                PREF_OUTLINE_COLOR => &mut config.outline_color,
                PREF_UPDATE_POLICY => &mut config.update_policy,
                _ => {
                    debug!("Ignoring string write to {}", key);
                    return;
                }
            };
            if *slot == val {
                false
            } else {
                *slot = val.to_string();
                true
            }
        };
        self.after_write(key, changed);
    }

    /// Write a numeric setting the way a preferences editor does: clamped to
    /// its range and snapped to its step. Non-numeric keys are ignored.
    pub fn set_numeric(&self, key: SettingKey, value: f64) {
        let Some(spec) = SettingSpec::for_key(key) else {
            debug!("{} is not a numeric setting", key);
            return;
        };
        let value = spec.snap(value);
        if spec.digits == 0 {
            self.set_int(key.as_str(), value.round() as i32);
        } else {
            self.set_double(key.as_str(), value);
        }
    }

    /// Write a color as `rgba(...)`.
    pub fn set_color(&self, key: &str, color: Color) {
        self.set_string(key, &color.to_css());
    }

    fn after_write(&self, key: &str, changed: bool) {
        if !changed {
            return;
        }
        self.dirty.set(true);
        // Only known keys reach this point.
        if let Ok(key) = key.parse::<SettingKey>() {
            self.bus.publish(SettingsEvent::Changed(key));
        }
    }

    // === Typed views ===

    /// Current eye dimensions, validated.
    pub fn eye_config(&self) -> EyeConfig {
        let config = self.cache.borrow();
        let mut eyes = EyeConfig {
            eye_width: config.eye_width as f64,
            eye_height: config.eye_height as f64,
            eye_spacing: config.eye_spacing as f64,
            pupil_ratio: config.pupil_ratio,
        };
        eyes.validate();
        eyes
    }

    /// Current colors; malformed strings parse to white.
    pub fn colors(&self) -> EyeColors {
        let config = self.cache.borrow();
        EyeColors {
            eye: parse_color(&config.eye_color),
            pupil: parse_color(&config.pupil_color),
            outline: parse_color(&config.outline_color),
        }
    }

    /// Update period in milliseconds, clamped to the allowed range.
    pub fn update_interval_ms(&self) -> u32 {
        let interval = self.cache.borrow().update_interval;
        interval.clamp(MIN_UPDATE_INTERVAL_MS, MAX_UPDATE_INTERVAL_MS) as u32
    }

    /// Selected update policy.
    pub fn update_policy(&self) -> UpdatePolicy {
        UpdatePolicy::from_setting(&self.cache.borrow().update_policy)
    }

    // === Persistence ===

    /// Re-read the backing file and publish a change for every key that differs.
    ///
    /// The file wins: edits not yet flushed are discarded. On error the cached
    /// values are left untouched.
    pub fn reload(&self) -> Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        let fresh = read_config(path)?;
        if self.dirty.get() {
            debug!("Reload of {} discards unflushed settings", path.display());
        }
        let changed = changed_keys(&self.cache.borrow(), &fresh);
        *self.cache.borrow_mut() = fresh;
        self.dirty.set(false);

        for key in changed {
            self.bus.publish(SettingsEvent::Changed(key));
        }
        Ok(())
    }

    /// Flush the cache to disk if dirty.
    ///
    /// Call this when the editor closes or the process exits.
    pub fn flush(&self) -> Result<()> {
        if !self.dirty.get() {
            return Ok(());
        }
        if let Some(path) = self.path.as_deref() {
            write_config(path, &self.cache.borrow())?;
            debug!("Settings written to {}", path.display());
        }
        self.dirty.set(false);
        Ok(())
    }
}

fn changed_keys(old: &Config, new: &Config) -> Vec<SettingKey> {
    let checks = [
        (SettingKey::EyeWidth, old.eye_width != new.eye_width),
        (SettingKey::EyeHeight, old.eye_height != new.eye_height),
        (SettingKey::EyeSpacing, old.eye_spacing != new.eye_spacing),
        (SettingKey::PupilRatio, old.pupil_ratio != new.pupil_ratio),
        (SettingKey::UpdateInterval, old.update_interval != new.update_interval),
        (SettingKey::EyeColor, old.eye_color != new.eye_color),
        (SettingKey::PupilColor, old.pupil_color != new.pupil_color),
        (SettingKey::OutlineColor, old.outline_color != new.outline_color),
        (SettingKey::UpdatePolicy, old.update_policy != new.update_policy),
    ];
    checks
        .into_iter()
        .filter(|(_, differs)| *differs)
        .map(|(key, _)| key)
        .collect()
}
