//! Drawing surface abstraction.
//!
//! The API mirrors the subset of cairo the eye renderer needs: path
//! construction, fill/stroke with a flat RGBA source, line width, and a
//! saved/restored affine transform.

use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::color::Color;

/// A 2D drawing target.
pub trait Surface {
    /// Error raised by operations that touch the target.
    type Error: std::fmt::Display;

    fn save(&mut self) -> Result<(), Self::Error>;
    fn restore(&mut self) -> Result<(), Self::Error>;
    fn translate(&mut self, tx: f64, ty: f64);
    fn scale(&mut self, sx: f64, sy: f64);

    fn new_path(&mut self);
    fn close_path(&mut self);
    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64);

    fn set_source_rgba(&mut self, red: f64, green: f64, blue: f64, alpha: f64);
    fn set_line_width(&mut self, width: f64);

    fn fill(&mut self) -> Result<(), Self::Error>;
    fn fill_preserve(&mut self) -> Result<(), Self::Error>;
    fn stroke(&mut self) -> Result<(), Self::Error>;

    /// Set the source to a [`Color`].
    fn set_source_color(&mut self, color: Color) {
        self.set_source_rgba(color.r, color.g, color.b, color.a);
    }
}

/// Saved drawing state that is restored when dropped.
///
/// Anything drawn through the guard happens inside the saved frame; the
/// transform is undone on every exit path, including early `?` returns.
pub struct SavedState<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> SavedState<'a, S> {
    /// Save the current state of `surface`.
    pub fn new(surface: &'a mut S) -> Result<Self, S::Error> {
        surface.save()?;
        Ok(Self { surface })
    }
}

impl<S: Surface + ?Sized> Deref for SavedState<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for SavedState<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for SavedState<'_, S> {
    fn drop(&mut self) {
        if let Err(e) = self.surface.restore() {
            debug!("Surface restore failed: {}", e);
        }
    }
}
