//! Panel eyes that follow the pointer, classic xeyes behavior.
//!
//! The core is host-agnostic: the pupil geometry, the eye renderer, the widget
//! state and the update scheduling talk to the panel shell only through the
//! traits in [`host`]. Nothing here blocks, spawns threads, or fails fatally;
//! bad input degrades to centered pupils and default colors.

pub mod color;
pub mod error;
pub mod events;
pub mod extension;
pub mod geometry;
pub mod host;
pub mod indicator;
pub mod model;
pub mod render;
pub mod scheduler;
pub mod settings;
pub mod widget;

// Re-export the main types for convenience
pub use color::{parse_color, Color};
pub use error::{Error, Result};
pub use extension::Extension;
pub use geometry::{clamped_offset, PupilOffset, WidgetPosition};
pub use indicator::Indicator;
pub use model::{EyeColors, EyeConfig, EyeGeometry, SettingKey};
pub use scheduler::{UpdatePolicy, UpdateSource};
pub use settings::Settings;
pub use widget::EyesWidget;

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}
