//! Settings change notifications.
//!
//! Events are published by the settings store whenever a persisted value
//! changes and drained by the indicator on the loop thread.

use crate::model::SettingKey;

/// Notification that the persisted configuration changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsEvent {
    /// The value stored under a key changed.
    Changed(SettingKey),
}

impl SettingsEvent {
    /// The key this event refers to.
    pub fn key(&self) -> SettingKey {
        match self {
            SettingsEvent::Changed(key) => *key,
        }
    }

    /// Returns true if this event should re-create the update source.
    pub fn requires_scheduler_restart(&self) -> bool {
        self.key().affects_scheduler()
    }
}
