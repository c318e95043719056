//! Cairo backend.
//!
//! Panel hosts hand the repaint callback a `cairo::Context`; this makes it a
//! [`Surface`] so the eye renderer can paint into it directly.

use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};

use super::surface::Surface;
use crate::error::{Error, Result};

impl Surface for Context {
    type Error = cairo::Error;

    // Inherent methods share these names, so call them fully qualified.
    fn save(&mut self) -> std::result::Result<(), cairo::Error> {
        Context::save(self)
    }

    fn restore(&mut self) -> std::result::Result<(), cairo::Error> {
        Context::restore(self)
    }

    fn translate(&mut self, tx: f64, ty: f64) {
        Context::translate(self, tx, ty);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        Context::scale(self, sx, sy);
    }

    fn new_path(&mut self) {
        Context::new_path(self);
    }

    fn close_path(&mut self) {
        Context::close_path(self);
    }

    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) {
        Context::arc(self, xc, yc, radius, angle1, angle2);
    }

    fn set_source_rgba(&mut self, red: f64, green: f64, blue: f64, alpha: f64) {
        Context::set_source_rgba(self, red, green, blue, alpha);
    }

    fn set_line_width(&mut self, width: f64) {
        Context::set_line_width(self, width);
    }

    fn fill(&mut self) -> std::result::Result<(), cairo::Error> {
        Context::fill(self)
    }

    fn fill_preserve(&mut self) -> std::result::Result<(), cairo::Error> {
        Context::fill_preserve(self)
    }

    fn stroke(&mut self) -> std::result::Result<(), cairo::Error> {
        Context::stroke(self)
    }
}

/// Paint into a transparent ARGB image of the given size and save it as PNG.
pub fn write_png(
    path: &Path,
    width: f64,
    height: f64,
    paint: impl FnOnce(&mut Context),
) -> Result<()> {
    let w = width.ceil().max(1.0) as i32;
    let h = height.ceil().max(1.0) as i32;

    let surface =
        ImageSurface::create(Format::ARgb32, w, h).map_err(|e| Error::Render(e.to_string()))?;
    {
        let mut ctx = Context::new(&surface).map_err(|e| Error::Render(e.to_string()))?;
        paint(&mut ctx);
    }

    let mut file = File::create(path)?;
    surface
        .write_to_png(&mut file)
        .map_err(|e| Error::Render(e.to_string()))?;
    Ok(())
}
