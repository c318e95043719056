//! The eyes widget.
//!
//! Owns the eye configuration, colors, the two pupil offsets and the cached
//! on-screen position. Pupils are recomputed on every scheduler tick; painting
//! happens later, when the host runs its paint cycle.

use std::rc::Rc;

use tracing::{debug, warn};

use crate::geometry::{pupil_toward, Point, PupilOffset, WidgetPosition};
use crate::host::WidgetHost;
use crate::model::{EyeColors, EyeConfig, EyeGeometry};
use crate::render::{draw_eyes, Surface};
use crate::settings::Settings;

/// A pair of eyes whose pupils follow the pointer.
pub struct EyesWidget<H: WidgetHost> {
    settings: Rc<Settings>,
    host: H,
    config: EyeConfig,
    geometry: EyeGeometry,
    colors: EyeColors,
    left_pupil: PupilOffset,
    right_pupil: PupilOffset,
    position: WidgetPosition,
}

impl<H: WidgetHost> EyesWidget<H> {
    /// Create a widget from the current settings and size it on `host`.
    pub fn new(settings: Rc<Settings>, host: H) -> Self {
        let config = settings.eye_config();
        let mut widget = Self {
            colors: settings.colors(),
            geometry: config.geometry(),
            config,
            settings,
            host,
            left_pupil: PupilOffset::ZERO,
            right_pupil: PupilOffset::ZERO,
            position: WidgetPosition::default(),
        };
        let (width, height) = widget.config.widget_size();
        widget.host.set_size(width, height);
        widget
    }

    /// Point both pupils at the global pointer coordinate and request a repaint.
    pub fn update_pupils(&mut self, pointer_x: f64, pointer_y: f64) {
        self.refresh_position();

        let pointer = Point::new(pointer_x, pointer_y);
        let max = self.geometry.max_movement;
        self.left_pupil = pupil_toward(self.geometry.left_center(self.position), pointer, max);
        self.right_pupil = pupil_toward(self.geometry.right_center(self.position), pointer, max);

        self.host.queue_repaint();
    }

    /// Re-read dimensions and colors, resize, and request a repaint.
    pub fn update_settings(&mut self) {
        self.config = self.settings.eye_config();
        self.geometry = self.config.geometry();
        self.colors = self.settings.colors();

        let (width, height) = self.config.widget_size();
        self.host.set_size(width, height);
        self.host.queue_repaint();
    }

    /// Paint both eyes. The surface origin is the widget's top-left corner.
    ///
    /// Drawing errors are logged; the widget state is never modified here.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        if let Err(e) = draw_eyes(
            surface,
            &self.geometry,
            self.left_pupil,
            self.right_pupil,
            self.colors,
        ) {
            warn!("Failed to paint eyes: {}", e);
        }
    }

    fn refresh_position(&mut self) {
        match self.host.transformed_position() {
            Some((x, y)) if x.is_finite() && y.is_finite() => {
                self.position = WidgetPosition { x, y };
            }
            _ => debug!(
                "Widget position unavailable, keeping ({}, {})",
                self.position.x, self.position.y
            ),
        }
    }

    pub fn left_pupil(&self) -> PupilOffset {
        self.left_pupil
    }

    pub fn right_pupil(&self) -> PupilOffset {
        self.right_pupil
    }

    /// Last known on-screen position.
    pub fn position(&self) -> WidgetPosition {
        self.position
    }

    pub fn config(&self) -> &EyeConfig {
        &self.config
    }

    pub fn geometry(&self) -> &EyeGeometry {
        &self.geometry
    }

    pub fn colors(&self) -> &EyeColors {
        &self.colors
    }

    /// Current widget size (width, height).
    pub fn size(&self) -> (f64, f64) {
        self.config.widget_size()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
