//! Event system for settings change notifications.
//!
//! The settings store owns an [`EventBus`]. Each consumer holds a
//! [`Subscription`] handle and drains it on the loop thread:
//!
//! ```text
//! Settings::set_*() ──publish()──► EventBus ──► Subscription (mpsc)
//!                                                    │ drain()
//!                                                    ▼
//!                                     Indicator::dispatch_events()
//! ```
//!
//! # Module Structure
//!
//! - [`types`]: Event definitions (`SettingsEvent` enum)
//! - [`bus`]: `EventBus` and `Subscription` types

pub mod bus;
pub mod types;

pub use bus::{EventBus, Subscription, SubscriptionId};
pub use types::SettingsEvent;
