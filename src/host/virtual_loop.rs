//! Deterministic main loop with a virtual clock.
//!
//! Time only moves when [`VirtualLoop::advance`] is called, so schedules can be
//! replayed exactly. Callbacks run with no internal borrow held and may add
//! or remove sources, including their own.

use std::cell::RefCell;
use std::collections::BTreeMap;

use tracing::debug;

use super::{EventLoop, PointerPosition, SourceId, TimeoutFn, TimerControl, WatchFn};
use crate::model::constants::DEFAULT_IDLE_COOLDOWN_MS;

enum Callback {
    Timeout(TimeoutFn),
    Watch(WatchFn),
}

struct WatchState {
    last_sample: PointerPosition,
    last_motion_ms: u64,
    suspended: bool,
}

struct Source {
    interval_ms: u64,
    due_ms: u64,
    watch: Option<WatchState>,
    /// `None` while the callback is running.
    callback: Option<Callback>,
}

impl Source {
    fn is_ready(&self, until_ms: u64) -> bool {
        self.callback.is_some()
            && self.due_ms <= until_ms
            && !self.watch.as_ref().is_some_and(|w| w.suspended)
    }
}

struct LoopState {
    now_ms: u64,
    pointer: PointerPosition,
    idle_cooldown_ms: u64,
    next_id: u64,
    sources: BTreeMap<SourceId, Source>,
}

/// Single-threaded loop driven by explicit time steps.
pub struct VirtualLoop {
    state: RefCell<LoopState>,
}

impl VirtualLoop {
    /// A loop with the default idle cooldown for pointer watches.
    pub fn new() -> Self {
        Self::with_idle_cooldown(DEFAULT_IDLE_COOLDOWN_MS)
    }

    /// A loop whose pointer watches suspend after `idle_cooldown_ms` without motion.
    pub fn with_idle_cooldown(idle_cooldown_ms: u64) -> Self {
        Self {
            state: RefCell::new(LoopState {
                now_ms: 0,
                pointer: PointerPosition::default(),
                idle_cooldown_ms,
                next_id: 1,
                sources: BTreeMap::new(),
            }),
        }
    }

    /// Current virtual time.
    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    /// Number of registered timeouts and watches.
    pub fn source_count(&self) -> usize {
        self.state.borrow().sources.len()
    }

    /// Returns true if `id` is registered.
    pub fn has_source(&self, id: SourceId) -> bool {
        self.state.borrow().sources.contains_key(&id)
    }

    /// Returns true if `id` is a watch that stopped sampling for lack of motion.
    pub fn is_suspended(&self, id: SourceId) -> bool {
        self.state
            .borrow()
            .sources
            .get(&id)
            .and_then(|s| s.watch.as_ref())
            .is_some_and(|w| w.suspended)
    }

    /// Move the pointer. Suspended watches resume sampling.
    pub fn set_pointer(&self, x: i32, y: i32) {
        let mut state = self.state.borrow_mut();
        let position = PointerPosition::new(x, y);
        if state.pointer == position {
            return;
        }
        state.pointer = position;

        let now = state.now_ms;
        for (id, source) in state.sources.iter_mut() {
            if let Some(watch) = source.watch.as_mut() {
                if watch.suspended {
                    debug!(source = id.0, "Pointer watch resumed");
                    watch.suspended = false;
                    watch.last_motion_ms = now;
                    source.due_ms = now + source.interval_ms;
                }
            }
        }
    }

    /// Advance the clock by `ms`, firing every source that falls due, in order.
    pub fn advance(&self, ms: u64) {
        let until = self.now_ms() + ms;
        while let Some(id) = self.next_due(until) {
            self.dispatch(id);
        }
        self.state.borrow_mut().now_ms = until;
    }

    fn next_due(&self, until_ms: u64) -> Option<SourceId> {
        let state = self.state.borrow();
        state
            .sources
            .iter()
            .filter(|(_, s)| s.is_ready(until_ms))
            .min_by_key(|(id, s)| (s.due_ms, **id))
            .map(|(id, _)| *id)
    }

    fn dispatch(&self, id: SourceId) {
        let (callback, pointer) = {
            let mut state = self.state.borrow_mut();
            let pointer = state.pointer;
            let cooldown = state.idle_cooldown_ms;
            let Some(source) = state.sources.get_mut(&id) else {
                return;
            };
            let now = source.due_ms;
            source.due_ms += source.interval_ms;

            let fire = match source.watch.as_mut() {
                None => true,
                Some(watch) if watch.last_sample != pointer => {
                    watch.last_sample = pointer;
                    watch.last_motion_ms = now;
                    true
                }
                Some(watch) => {
                    if now.saturating_sub(watch.last_motion_ms) >= cooldown {
                        debug!(source = id.0, "Pointer watch idle, suspending");
                        watch.suspended = true;
                    }
                    false
                }
            };
            let callback = if fire { source.callback.take() } else { None };
            state.now_ms = now;
            (callback, pointer)
        };

        let Some(mut callback) = callback else {
            return;
        };

        let keep = match &mut callback {
            Callback::Timeout(f) => f() == TimerControl::Continue,
            Callback::Watch(f) => {
                f(pointer);
                true
            }
        };

        let mut state = self.state.borrow_mut();
        let removed = match state.sources.get_mut(&id) {
            Some(source) if keep => {
                source.callback = Some(callback);
                None
            }
            Some(_) => {
                state.sources.remove(&id);
                Some(callback)
            }
            // Removed from inside its own callback.
            None => Some(callback),
        };
        drop(state);
        drop(removed);
    }

    fn insert(&self, interval_ms: u32, watch: Option<WatchState>, callback: Callback) -> SourceId {
        let mut state = self.state.borrow_mut();
        let id = SourceId(state.next_id);
        state.next_id += 1;

        let interval_ms = u64::from(interval_ms.max(1));
        let due_ms = state.now_ms + interval_ms;
        state.sources.insert(
            id,
            Source {
                interval_ms,
                due_ms,
                watch,
                callback: Some(callback),
            },
        );
        id
    }
}

impl Default for VirtualLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop for VirtualLoop {
    fn pointer(&self) -> PointerPosition {
        self.state.borrow().pointer
    }

    fn add_timeout(&self, interval_ms: u32, callback: TimeoutFn) -> SourceId {
        self.insert(interval_ms, None, Callback::Timeout(callback))
    }

    fn add_pointer_watch(&self, interval_ms: u32, callback: WatchFn) -> SourceId {
        let (pointer, now) = {
            let state = self.state.borrow();
            (state.pointer, state.now_ms)
        };
        let watch = WatchState {
            last_sample: pointer,
            last_motion_ms: now,
            suspended: false,
        };
        self.insert(interval_ms, Some(watch), Callback::Watch(callback))
    }

    fn remove_source(&self, id: SourceId) -> bool {
        let removed = self.state.borrow_mut().sources.remove(&id);
        removed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_timeout_fires_each_interval() {
        let lp = VirtualLoop::new();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        lp.add_timeout(
            10,
            Box::new(move || {
                c.set(c.get() + 1);
                TimerControl::Continue
            }),
        );

        lp.advance(35);
        assert_eq!(count.get(), 3);
        assert_eq!(lp.now_ms(), 35);
    }

    #[test]
    fn test_timeout_returning_remove_is_unregistered() {
        let lp = VirtualLoop::new();
        let id = lp.add_timeout(5, Box::new(|| TimerControl::Remove));
        lp.advance(20);
        assert!(!lp.has_source(id));
    }

    #[test]
    fn test_callback_can_remove_itself() {
        let lp = Rc::new(VirtualLoop::new());
        let slot: Rc<Cell<Option<SourceId>>> = Rc::new(Cell::new(None));
        let count = Rc::new(Cell::new(0));

        let (l, s, c) = (lp.clone(), slot.clone(), count.clone());
        let id = lp.add_timeout(
            10,
            Box::new(move || {
                c.set(c.get() + 1);
                if let Some(id) = s.get() {
                    l.remove_source(id);
                }
                TimerControl::Continue
            }),
        );
        slot.set(Some(id));

        lp.advance(100);
        assert_eq!(count.get(), 1);
        assert_eq!(lp.source_count(), 0);
    }

    #[test]
    fn test_remove_unknown_source_is_noop() {
        let lp = VirtualLoop::new();
        assert!(!lp.remove_source(SourceId(42)));
        let id = lp.add_timeout(10, Box::new(|| TimerControl::Continue));
        assert!(lp.remove_source(id));
        assert!(!lp.remove_source(id));
    }

    #[test]
    fn test_watch_fires_only_on_motion_and_suspends_when_idle() {
        let lp = VirtualLoop::with_idle_cooldown(50);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let id = lp.add_pointer_watch(10, Box::new(move |p| s.borrow_mut().push(p)));

        lp.advance(30);
        assert!(seen.borrow().is_empty());

        lp.set_pointer(5, 6);
        lp.advance(10);
        assert_eq!(*seen.borrow(), vec![PointerPosition::new(5, 6)]);

        lp.advance(100);
        assert!(lp.is_suspended(id));
        assert_eq!(seen.borrow().len(), 1);

        lp.set_pointer(7, 8);
        assert!(!lp.is_suspended(id));
        lp.advance(10);
        assert_eq!(seen.borrow().len(), 2);
    }
}
