//! Panel indicator: the eyes widget plus what keeps it alive.
//!
//! The indicator owns three things for the widget's lifetime and releases
//! each exactly once on [`Indicator::destroy`] (or drop):
//!
//! - the update source (timer or pointer watch)
//! - the settings subscription
//! - the widget itself
//!
//! Settings changes are applied in [`Indicator::dispatch_events`], which the
//! host calls on its loop thread, so a restart never overlaps a tick.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use tracing::{debug, info};

use crate::events::{SettingsEvent, Subscription};
use crate::host::{EventLoop, PointerPosition, WidgetHost};
use crate::render::Surface;
use crate::scheduler::{create_update_source, TickFn, UpdatePolicy, UpdateSource};
use crate::settings::Settings;
use crate::widget::EyesWidget;

/// The eyes as embedded in a panel.
pub struct Indicator<L: EventLoop + 'static, H: WidgetHost + 'static> {
    settings: Rc<Settings>,
    event_loop: Rc<L>,
    widget: Rc<RefCell<EyesWidget<H>>>,
    source: Option<Box<dyn UpdateSource>>,
    subscription: Option<Subscription>,
    policy: UpdatePolicy,
}

impl<L: EventLoop + 'static, H: WidgetHost + 'static> Indicator<L, H> {
    /// Build the widget, subscribe to settings, and start updating.
    pub fn new(settings: Rc<Settings>, event_loop: Rc<L>, host: H) -> Self {
        let widget = Rc::new(RefCell::new(EyesWidget::new(settings.clone(), host)));
        let subscription = settings.subscribe();

        let mut indicator = Self {
            policy: settings.update_policy(),
            settings,
            event_loop,
            widget,
            source: None,
            subscription: Some(subscription),
        };
        indicator.restart_source();
        indicator
    }

    /// Apply pending settings changes. Returns the number of events handled.
    pub fn dispatch_events(&mut self) -> usize {
        let events = match &self.subscription {
            Some(subscription) => subscription.drain(),
            None => return 0,
        };
        if events.is_empty() {
            return 0;
        }

        for event in &events {
            debug!("Settings changed: {}", event.key());
        }

        self.widget.borrow_mut().update_settings();

        if events.iter().any(SettingsEvent::requires_scheduler_restart) {
            self.restart_source();
        }
        events.len()
    }

    /// Stop updating and release the settings subscription. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        if let Some(mut source) = self.source.take() {
            source.stop();
        }
        if let Some(subscription) = self.subscription.take() {
            self.settings.unsubscribe(subscription);
            info!("Indicator destroyed");
        }
    }

    /// Returns true once [`Indicator::destroy`] has run.
    pub fn is_destroyed(&self) -> bool {
        self.subscription.is_none()
    }

    /// Returns true while an update source is registered.
    pub fn is_updating(&self) -> bool {
        self.source.as_ref().is_some_and(|s| s.is_running())
    }

    /// Policy of the current update source.
    pub fn policy(&self) -> UpdatePolicy {
        self.policy
    }

    /// Host paint callback.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.widget.borrow().paint(surface);
    }

    pub fn widget(&self) -> Ref<'_, EyesWidget<H>> {
        self.widget.borrow()
    }

    /// Mutable access to the widget, e.g. to move a headless host.
    pub fn with_widget_mut<R>(&self, f: impl FnOnce(&mut EyesWidget<H>) -> R) -> R {
        f(&mut self.widget.borrow_mut())
    }

    fn restart_source(&mut self) {
        if let Some(mut old) = self.source.take() {
            old.stop();
        }

        self.policy = self.settings.update_policy();
        let interval_ms = self.settings.update_interval_ms();
        let mut source = create_update_source(
            self.policy,
            self.event_loop.clone(),
            tick_fn(&self.widget),
        );
        source.start(interval_ms);
        info!(policy = %self.policy, interval_ms, "Update source started");
        self.source = Some(source);
    }
}

impl<L: EventLoop + 'static, H: WidgetHost + 'static> Drop for Indicator<L, H> {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn tick_fn<H: WidgetHost + 'static>(widget: &Rc<RefCell<EyesWidget<H>>>) -> TickFn {
    let widget = Rc::downgrade(widget);
    Rc::new(move |pointer: PointerPosition| {
        let Some(widget) = widget.upgrade() else {
            return;
        };
        // A tick never runs inside paint, but skip rather than panic if it does.
        let busy = match widget.try_borrow_mut() {
            Ok(mut widget) => {
                widget.update_pupils(f64::from(pointer.x), f64::from(pointer.y));
                false
            }
            Err(_) => true,
        };
        if busy {
            debug!("Widget busy, skipping tick");
        }
    })
}
