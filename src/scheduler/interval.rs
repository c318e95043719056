//! Fixed-interval polling.

use std::rc::Rc;

use tracing::debug;

use super::{TickFn, UpdateSource};
use crate::host::{EventLoop, SourceId, TimerControl};

/// Re-queries the pointer on a repeating timer, whether or not it moved.
pub struct IntervalPoller<L: EventLoop + 'static> {
    event_loop: Rc<L>,
    on_tick: TickFn,
    timer: Option<SourceId>,
}

impl<L: EventLoop + 'static> IntervalPoller<L> {
    pub fn new(event_loop: Rc<L>, on_tick: TickFn) -> Self {
        Self {
            event_loop,
            on_tick,
            timer: None,
        }
    }
}

impl<L: EventLoop + 'static> UpdateSource for IntervalPoller<L> {
    fn start(&mut self, interval_ms: u32) {
        self.stop();

        let event_loop = Rc::downgrade(&self.event_loop);
        let on_tick = self.on_tick.clone();
        let id = self.event_loop.add_timeout(
            interval_ms,
            Box::new(move || match event_loop.upgrade() {
                Some(event_loop) => {
                    on_tick(event_loop.pointer());
                    TimerControl::Continue
                }
                None => TimerControl::Remove,
            }),
        );
        self.timer = Some(id);
        debug!(source = id.0, interval_ms, "Polling timer started");

        // First update right away.
        (self.on_tick)(self.event_loop.pointer());
    }

    fn stop(&mut self) {
        if let Some(id) = self.timer.take() {
            self.event_loop.remove_source(id);
            debug!(source = id.0, "Polling timer stopped");
        }
    }

    fn is_running(&self) -> bool {
        self.timer.is_some()
    }
}

impl<L: EventLoop + 'static> Drop for IntervalPoller<L> {
    fn drop(&mut self) {
        self.stop();
    }
}
