//! Widget host without a display server.

use super::WidgetHost;

/// Records what the widget asked of its host.
#[derive(Debug, Clone, Default)]
pub struct HeadlessHost {
    position: Option<(f64, f64)>,
    size: (f64, f64),
    repaint_requests: usize,
}

impl HeadlessHost {
    /// A host whose widget is not laid out yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose widget sits at `(x, y)`.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Some((x, y)),
            ..Self::default()
        }
    }

    /// Move the widget, or make its position unavailable with `None`.
    pub fn set_position(&mut self, position: Option<(f64, f64)>) {
        self.position = position;
    }

    /// Last size set by the widget.
    pub fn size(&self) -> (f64, f64) {
        self.size
    }

    /// Number of repaints requested so far.
    pub fn repaint_requests(&self) -> usize {
        self.repaint_requests
    }
}

impl WidgetHost for HeadlessHost {
    fn transformed_position(&self) -> Option<(f64, f64)> {
        self.position
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.size = (width, height);
    }

    fn queue_repaint(&mut self) {
        self.repaint_requests += 1;
    }
}
