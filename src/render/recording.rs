//! A surface that records drawing operations instead of rasterizing them.
//!
//! Used by headless hosts and tests to inspect exactly what a paint pass did.

use std::fmt;

use super::surface::Surface;
use crate::color::Color;

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    Translate { tx: f64, ty: f64 },
    Scale { sx: f64, sy: f64 },
    NewPath,
    ClosePath,
    Arc { xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64 },
    SetSource(Color),
    SetLineWidth(f64),
    Fill,
    FillPreserve,
    Stroke,
}

/// Fallible operations that can be made to fail on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailingOp {
    Save,
    Fill,
    FillPreserve,
    Stroke,
}

/// Error returned by a [`RecordingSurface`] configured to fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingError(pub FailingOp);

impl fmt::Display for RecordingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "injected failure in {:?}", self.0)
    }
}

impl std::error::Error for RecordingError {}

/// Surface that appends every call to an operation log.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    fail_on: Option<FailingOp>,
    depth: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface whose `op` always fails (after being recorded).
    pub fn failing_on(op: FailingOp) -> Self {
        Self {
            fail_on: Some(op),
            ..Self::default()
        }
    }

    /// All recorded operations.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Take the recorded operations, leaving the log empty.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Current save nesting depth; zero after a balanced paint.
    pub fn save_depth(&self) -> usize {
        self.depth
    }

    /// Recorded arcs, as (xc, yc, radius).
    pub fn arcs(&self) -> Vec<(f64, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Arc { xc, yc, radius, .. } => Some((*xc, *yc, *radius)),
                _ => None,
            })
            .collect()
    }

    fn record_fallible(&mut self, op: DrawOp, kind: FailingOp) -> Result<(), RecordingError> {
        self.ops.push(op);
        if self.fail_on == Some(kind) {
            Err(RecordingError(kind))
        } else {
            Ok(())
        }
    }
}

impl Surface for RecordingSurface {
    type Error = RecordingError;

    fn save(&mut self) -> Result<(), RecordingError> {
        self.record_fallible(DrawOp::Save, FailingOp::Save)?;
        self.depth += 1;
        Ok(())
    }

    fn restore(&mut self) -> Result<(), RecordingError> {
        self.ops.push(DrawOp::Restore);
        self.depth = self.depth.saturating_sub(1);
        Ok(())
    }

    fn translate(&mut self, tx: f64, ty: f64) {
        self.ops.push(DrawOp::Translate { tx, ty });
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.ops.push(DrawOp::Scale { sx, sy });
    }

    fn new_path(&mut self) {
        self.ops.push(DrawOp::NewPath);
    }

    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }

    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) {
        self.ops.push(DrawOp::Arc {
            xc,
            yc,
            radius,
            angle1,
            angle2,
        });
    }

    fn set_source_rgba(&mut self, red: f64, green: f64, blue: f64, alpha: f64) {
        self.ops
            .push(DrawOp::SetSource(Color::new(red, green, blue, alpha)));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::SetLineWidth(width));
    }

    fn fill(&mut self) -> Result<(), RecordingError> {
        self.record_fallible(DrawOp::Fill, FailingOp::Fill)
    }

    fn fill_preserve(&mut self) -> Result<(), RecordingError> {
        self.record_fallible(DrawOp::FillPreserve, FailingOp::FillPreserve)
    }

    fn stroke(&mut self) -> Result<(), RecordingError> {
        self.record_fallible(DrawOp::Stroke, FailingOp::Stroke)
    }
}
