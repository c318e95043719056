//! Update scheduling.
//!
//! An [`UpdateSource`] decides when the widget recomputes its pupils. Two
//! implementations exist, selected by the `update-policy` setting:
//!
//! - [`IntervalPoller`]: fixed-interval timer polling
//! - [`MotionWatcher`]: motion-gated pointer watch that idles when the pointer rests
//!
//! Each source owns exactly one loop handle at a time. `start` releases the
//! previous handle before registering a new one, `stop` is idempotent, and
//! dropping a source stops it.

pub mod interval;
pub mod motion;
pub mod policy;

use std::rc::Rc;

use crate::host::{EventLoop, PointerPosition};

pub use interval::IntervalPoller;
pub use motion::MotionWatcher;
pub use policy::UpdatePolicy;

/// Called with the global pointer position on every scheduler tick.
pub type TickFn = Rc<dyn Fn(PointerPosition)>;

/// Something that calls the tick function over time.
pub trait UpdateSource {
    /// Register with the loop at `interval_ms` and tick once immediately.
    /// A running source is stopped first.
    fn start(&mut self, interval_ms: u32);

    /// Release the loop handle. Does nothing if not running.
    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

/// Build the update source for `policy` (not started).
pub fn create_update_source<L: EventLoop + 'static>(
    policy: UpdatePolicy,
    event_loop: Rc<L>,
    on_tick: TickFn,
) -> Box<dyn UpdateSource> {
    match policy {
        UpdatePolicy::Interval => Box::new(IntervalPoller::new(event_loop, on_tick)),
        UpdatePolicy::Motion => Box::new(MotionWatcher::new(event_loop, on_tick)),
    }
}
