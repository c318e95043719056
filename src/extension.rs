//! Enable/disable lifecycle.
//!
//! The shell enables and disables extensions at will (screen lock, user
//! toggles). Each enable builds a fresh indicator on a fresh host widget;
//! each disable tears it down completely.

use std::rc::Rc;

use tracing::info;

use crate::host::{EventLoop, WidgetHost};
use crate::indicator::Indicator;
use crate::settings::Settings;

/// Extension entry point.
pub struct Extension<L: EventLoop + 'static, H: WidgetHost + 'static> {
    settings: Rc<Settings>,
    event_loop: Rc<L>,
    make_host: Box<dyn Fn() -> H>,
    indicator: Option<Indicator<L, H>>,
}

impl<L: EventLoop + 'static, H: WidgetHost + 'static> Extension<L, H> {
    /// `make_host` creates the panel slot the widget is placed in on each enable.
    pub fn new(
        settings: Rc<Settings>,
        event_loop: Rc<L>,
        make_host: impl Fn() -> H + 'static,
    ) -> Self {
        Self {
            settings,
            event_loop,
            make_host: Box::new(make_host),
            indicator: None,
        }
    }

    /// Add the indicator to the panel. Does nothing if already enabled.
    pub fn enable(&mut self) {
        if self.indicator.is_some() {
            return;
        }
        let host = (self.make_host)();
        self.indicator = Some(Indicator::new(
            self.settings.clone(),
            self.event_loop.clone(),
            host,
        ));
        info!("Extension enabled");
    }

    /// Remove and destroy the indicator. Does nothing if not enabled.
    pub fn disable(&mut self) {
        if let Some(mut indicator) = self.indicator.take() {
            indicator.destroy();
            info!("Extension disabled");
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.indicator.is_some()
    }

    pub fn indicator(&self) -> Option<&Indicator<L, H>> {
        self.indicator.as_ref()
    }

    pub fn indicator_mut(&mut self) -> Option<&mut Indicator<L, H>> {
        self.indicator.as_mut()
    }

    /// Forward pending settings changes to the indicator, if enabled.
    pub fn dispatch_events(&mut self) -> usize {
        self.indicator
            .as_mut()
            .map_or(0, |indicator| indicator.dispatch_events())
    }

    pub fn settings(&self) -> &Rc<Settings> {
        &self.settings
    }
}

impl<L: EventLoop + 'static, H: WidgetHost + 'static> Drop for Extension<L, H> {
    fn drop(&mut self) {
        self.disable();
    }
}
