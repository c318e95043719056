//! Motion-triggered sampling.

use std::rc::Rc;

use tracing::debug;

use super::{TickFn, UpdateSource};
use crate::host::{EventLoop, SourceId};

/// Updates only while the pointer moves.
///
/// The host samples at the configured interval and stops calling back once
/// the pointer has rested for its idle cooldown, so a still pointer costs
/// nothing.
pub struct MotionWatcher<L: EventLoop + 'static> {
    event_loop: Rc<L>,
    on_tick: TickFn,
    watch: Option<SourceId>,
}

impl<L: EventLoop + 'static> MotionWatcher<L> {
    pub fn new(event_loop: Rc<L>, on_tick: TickFn) -> Self {
        Self {
            event_loop,
            on_tick,
            watch: None,
        }
    }
}

impl<L: EventLoop + 'static> UpdateSource for MotionWatcher<L> {
    fn start(&mut self, interval_ms: u32) {
        self.stop();

        let on_tick = self.on_tick.clone();
        let id = self
            .event_loop
            .add_pointer_watch(interval_ms, Box::new(move |pointer| on_tick(pointer)));
        self.watch = Some(id);
        debug!(source = id.0, interval_ms, "Pointer watch registered");

        // Orient the eyes before the first movement.
        (self.on_tick)(self.event_loop.pointer());
    }

    fn stop(&mut self) {
        if let Some(id) = self.watch.take() {
            self.event_loop.remove_source(id);
            debug!(source = id.0, "Pointer watch removed");
        }
    }

    fn is_running(&self) -> bool {
        self.watch.is_some()
    }
}

impl<L: EventLoop + 'static> Drop for MotionWatcher<L> {
    fn drop(&mut self) {
        self.stop();
    }
}
