//! Eye dimensions and the geometry derived from them (pure Rust, no FFI).

use super::constants::*;
use crate::color::{parse_color, Color};
use crate::geometry::{Point, WidgetPosition};

/// Persisted eye dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeConfig {
    /// Width of one eye.
    pub eye_width: f64,
    /// Height of one eye.
    pub eye_height: f64,
    /// Gap between the two eyes.
    pub eye_spacing: f64,
    /// Pupil radius as a fraction of the smaller eye radius.
    pub pupil_ratio: f64,
}

impl Default for EyeConfig {
    fn default() -> Self {
        Self {
            eye_width: DEFAULT_EYE_WIDTH as f64,
            eye_height: DEFAULT_EYE_HEIGHT as f64,
            eye_spacing: DEFAULT_EYE_SPACING as f64,
            pupil_ratio: DEFAULT_PUPIL_RATIO,
        }
    }
}

impl EyeConfig {
    /// Repairs values the geometry cannot use.
    ///
    /// Widths and heights must be positive, the spacing non-negative and the
    /// pupil ratio inside (0, 1); anything else, including non-finite values,
    /// falls back to its default. Editor ranges are applied on write, not here.
    pub fn validate(&mut self) {
        let defaults = EyeConfig::default();
        let positive = |v: f64, d: f64| if v.is_finite() && v > 0.0 { v } else { d };

        self.eye_width = positive(self.eye_width, defaults.eye_width);
        self.eye_height = positive(self.eye_height, defaults.eye_height);
        self.eye_spacing = if self.eye_spacing.is_finite() && self.eye_spacing >= 0.0 {
            self.eye_spacing
        } else {
            defaults.eye_spacing
        };
        self.pupil_ratio = if self.pupil_ratio.is_finite()
            && self.pupil_ratio > 0.0
            && self.pupil_ratio < 1.0
        {
            self.pupil_ratio
        } else {
            defaults.pupil_ratio
        };
    }

    /// Derived geometry for this configuration.
    pub fn geometry(&self) -> EyeGeometry {
        EyeGeometry::new(self)
    }

    /// Total widget size (width, height): two eyes plus the gap.
    pub fn widget_size(&self) -> (f64, f64) {
        (self.eye_width * 2.0 + self.eye_spacing, self.eye_height)
    }
}

/// Radii and travel limits computed from an [`EyeConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeGeometry {
    pub eye_width: f64,
    pub eye_spacing: f64,
    pub radius_x: f64,
    pub radius_y: f64,
    pub pupil_radius: f64,
    /// Radius of the pupil travel disc, never below 1.
    pub max_movement: f64,
}

impl EyeGeometry {
    pub fn new(config: &EyeConfig) -> Self {
        let radius_x = config.eye_width / 2.0;
        let radius_y = config.eye_height / 2.0;
        let min_radius = radius_x.min(radius_y);
        let pupil_radius = min_radius * config.pupil_ratio;
        let max_movement = MIN_MAX_MOVEMENT.max(min_radius - pupil_radius - 1.0);

        Self {
            eye_width: config.eye_width,
            eye_spacing: config.eye_spacing,
            radius_x,
            radius_y,
            pupil_radius,
            max_movement,
        }
    }

    /// Left eye center relative to the widget's top-left corner.
    pub fn left_center_local(&self) -> Point {
        Point::new(self.radius_x, self.radius_y)
    }

    /// Right eye center relative to the widget's top-left corner.
    pub fn right_center_local(&self) -> Point {
        Point::new(
            self.eye_width + self.eye_spacing + self.radius_x,
            self.radius_y,
        )
    }

    /// Left eye center in global coordinates.
    pub fn left_center(&self, origin: WidgetPosition) -> Point {
        let local = self.left_center_local();
        Point::new(origin.x + local.x, origin.y + local.y)
    }

    /// Right eye center in global coordinates.
    pub fn right_center(&self, origin: WidgetPosition) -> Point {
        let local = self.right_center_local();
        Point::new(origin.x + local.x, origin.y + local.y)
    }
}

/// The three flat colors used for painting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeColors {
    pub eye: Color,
    pub pupil: Color,
    pub outline: Color,
}

impl Default for EyeColors {
    fn default() -> Self {
        Self {
            eye: parse_color(DEFAULT_EYE_COLOR),
            pupil: parse_color(DEFAULT_PUPIL_COLOR),
            outline: parse_color(DEFAULT_OUTLINE_COLOR),
        }
    }
}
