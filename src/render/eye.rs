//! Eye painting.
//!
//! Each eye is a filled and outlined sclera ellipse with a pupil disc on top.
//! Draw order matters: fill, outline, then pupil on a fresh path.

use std::f64::consts::TAU;

use super::surface::{SavedState, Surface};
use crate::geometry::{Point, PupilOffset};
use crate::model::constants::OUTLINE_WIDTH;
use crate::model::{EyeColors, EyeGeometry};

/// Drawing parameters for one eye.
#[derive(Debug, Clone, Copy)]
pub struct EyeParams {
    /// Eye center in surface coordinates
    pub center: Point,
    /// Horizontal sclera radius
    pub radius_x: f64,
    /// Vertical sclera radius
    pub radius_y: f64,
    /// Pupil displacement from the center
    pub pupil_offset: PupilOffset,
    /// Pupil disc radius
    pub pupil_radius: f64,
    pub colors: EyeColors,
}

impl EyeParams {
    /// Pupil center in surface coordinates; non-finite offsets count as zero.
    pub fn pupil_center(&self) -> Point {
        let offset = self.pupil_offset.sanitized();
        Point::new(self.center.x + offset.x, self.center.y + offset.y)
    }
}

/// Draw one eye.
pub fn draw_eye<S: Surface + ?Sized>(surface: &mut S, params: &EyeParams) -> Result<(), S::Error> {
    // Sclera: a unit circle under a scaled transform. The transform is undone
    // before painting so the outline width stays in surface units.
    {
        let mut frame = SavedState::new(&mut *surface)?;
        frame.translate(params.center.x, params.center.y);
        frame.scale(params.radius_x, params.radius_y);
        frame.arc(0.0, 0.0, 1.0, 0.0, TAU);
    }

    surface.set_source_color(params.colors.eye);
    surface.fill_preserve()?;

    surface.set_source_color(params.colors.outline);
    surface.set_line_width(OUTLINE_WIDTH);
    surface.stroke()?;

    let pupil = params.pupil_center();
    surface.new_path();
    surface.arc(pupil.x, pupil.y, params.pupil_radius, 0.0, TAU);
    surface.close_path();
    surface.set_source_color(params.colors.pupil);
    surface.fill()
}

/// Draw both eyes of a widget whose top-left corner is the surface origin.
pub fn draw_eyes<S: Surface + ?Sized>(
    surface: &mut S,
    geometry: &EyeGeometry,
    left: PupilOffset,
    right: PupilOffset,
    colors: EyeColors,
) -> Result<(), S::Error> {
    let eye = |center: Point, pupil_offset: PupilOffset| EyeParams {
        center,
        radius_x: geometry.radius_x,
        radius_y: geometry.radius_y,
        pupil_offset,
        pupil_radius: geometry.pupil_radius,
        colors,
    };

    draw_eye(surface, &eye(geometry.left_center_local(), left))?;
    draw_eye(surface, &eye(geometry.right_center_local(), right))
}
