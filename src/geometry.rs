//! Pupil placement.
//!
//! The pupil follows the pointer freely inside its travel disc and is pinned to
//! the disc boundary, direction preserved, once the pointer leaves it.

/// Displacement of a pupil center from its eye center.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PupilOffset {
    pub x: f64,
    pub y: f64,
}

impl PupilOffset {
    /// The centered pupil.
    pub const ZERO: PupilOffset = PupilOffset { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the offset.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Replace non-finite components with 0.
    pub fn sanitized(self) -> Self {
        let finite_or_zero = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self {
            x: finite_or_zero(self.x),
            y: finite_or_zero(self.y),
        }
    }
}

/// Cached top-left corner of the widget in global coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WidgetPosition {
    pub x: f64,
    pub y: f64,
}

/// A point in global (screen) or surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Clamp `(dx, dy)` to a disc of radius `max_radius`.
///
/// Degenerate input (non-finite components, zero distance) yields a centered
/// pupil so NaN never reaches the renderer.
pub fn clamped_offset(dx: f64, dy: f64, max_radius: f64) -> PupilOffset {
    let distance = (dx * dx + dy * dy).sqrt();

    if !distance.is_finite() || !dx.is_finite() || !dy.is_finite() {
        return PupilOffset::ZERO;
    }

    if distance == 0.0 {
        return PupilOffset::ZERO;
    }

    if distance <= max_radius {
        PupilOffset::new(dx, dy)
    } else {
        let ratio = max_radius / distance;
        PupilOffset::new(dx * ratio, dy * ratio)
    }
}

/// Offset of the pupil of the eye centered at `center` for a pointer at `pointer`.
pub fn pupil_toward(center: Point, pointer: Point, max_radius: f64) -> PupilOffset {
    clamped_offset(pointer.x - center.x, pointer.y - center.y, max_radius)
}
