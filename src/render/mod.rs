//! Eye rendering.
//!
//! - [`surface`]: the `Surface` drawing trait and the `SavedState` guard
//! - [`eye`]: painting one eye or both
//! - [`recording`]: operation-log backend for headless hosts and tests
//! - `cairo_surface` (feature `cairo`): `Surface` for `cairo::Context`, PNG export

#[cfg(feature = "cairo")]
pub mod cairo_surface;
pub mod eye;
pub mod recording;
pub mod surface;

pub use eye::{draw_eye, draw_eyes, EyeParams};
pub use recording::{DrawOp, FailingOp, RecordingError, RecordingSurface};
pub use surface::{SavedState, Surface};
