//! Host environment seams.
//!
//! The panel shell owns the widget's placement, the paint cycle, the pointer
//! and the main loop. The core reaches them only through these traits:
//!
//! - [`WidgetHost`]: on-screen position, size, repaint requests
//! - [`EventLoop`]: pointer queries, timeouts, and motion-gated pointer watches
//!
//! [`HeadlessHost`] and [`VirtualLoop`] implement them without a display
//! server for the preview binary and tests.

pub mod headless;
pub mod virtual_loop;

pub use headless::HeadlessHost;
pub use virtual_loop::VirtualLoop;

/// Global pointer coordinate as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Handle of a timeout or pointer watch registered on an [`EventLoop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceId(pub u64);

/// Return value of a timeout callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerControl {
    /// Keep firing.
    Continue,
    /// Remove the timeout.
    Remove,
}

/// Callback of a repeating timeout.
pub type TimeoutFn = Box<dyn FnMut() -> TimerControl>;

/// Callback of a pointer watch, called with the new pointer position.
pub type WatchFn = Box<dyn FnMut(PointerPosition)>;

/// What the panel host does for the widget it embeds.
pub trait WidgetHost {
    /// Widget's top-left corner in global coordinates, if currently known.
    ///
    /// `None` when the widget is not laid out yet or the query failed.
    fn transformed_position(&self) -> Option<(f64, f64)>;

    /// Resize the widget.
    fn set_size(&mut self, width: f64, height: f64);

    /// Ask for a repaint on the next paint cycle.
    fn queue_repaint(&mut self);
}

/// Single-threaded main loop services.
pub trait EventLoop {
    /// Current global pointer coordinate.
    fn pointer(&self) -> PointerPosition;

    /// Call `callback` every `interval_ms` until it returns [`TimerControl::Remove`]
    /// or the source is removed.
    fn add_timeout(&self, interval_ms: u32, callback: TimeoutFn) -> SourceId;

    /// Sample the pointer every `interval_ms` and call `callback` only when it
    /// moved. Sampling stops after an idle cooldown chosen by the host and
    /// resumes on the next movement.
    fn add_pointer_watch(&self, interval_ms: u32, callback: WatchFn) -> SourceId;

    /// Remove a timeout or watch. Unknown or already removed ids return `false`.
    fn remove_source(&self, id: SourceId) -> bool;
}
