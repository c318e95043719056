//! Headless preview.
//!
//! Runs the indicator on a virtual main loop with a scripted pointer that
//! circles the widget, then rests, and logs where the pupils point.

use std::f64::consts::TAU;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use xeyes_indicator::host::{HeadlessHost, VirtualLoop};
use xeyes_indicator::model::constants::PREF_UPDATE_POLICY;
use xeyes_indicator::render::RecordingSurface;
use xeyes_indicator::{Extension, Indicator, Settings, UpdatePolicy};

/// Widget placement on the virtual screen.
const WIDGET_X: f64 = 900.0;
const WIDGET_Y: f64 = 4.0;

/// Simulation step (one 60 FPS frame).
const STEP_MS: u64 = 16;

#[derive(Parser, Debug)]
#[command(name = "xeyes-indicator", version, about = "Preview the pointer-following eyes headlessly")]
struct Args {
    /// Config file (defaults to the per-user location)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the update policy for this run
    #[arg(long, value_parser = ["interval", "motion"])]
    policy: Option<String>,

    /// How long the pointer circles the widget
    #[arg(long, default_value_t = 2000)]
    duration_ms: u64,

    /// How long the pointer rests afterwards
    #[arg(long, default_value_t = 1500)]
    rest_ms: u64,

    /// Radius of the pointer's circular path
    #[arg(long, default_value_t = 150.0)]
    radius: f64,

    /// Write the final frame as PNG
    #[cfg(feature = "cairo")]
    #[arg(long)]
    png: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "xeyes_indicator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    tracing::info!("Starting xeyes-indicator v{}", env!("CARGO_PKG_VERSION"));

    let settings = Rc::new(match &args.config {
        Some(path) => Settings::load(path.clone()),
        None => Settings::load_default(),
    });
    if let Some(policy) = &args.policy {
        settings.set_string(PREF_UPDATE_POLICY, UpdatePolicy::from_setting(policy).as_str());
    }

    let event_loop = Rc::new(VirtualLoop::new());
    let mut extension = Extension::new(settings.clone(), event_loop.clone(), || {
        HeadlessHost::at(WIDGET_X, WIDGET_Y)
    });
    extension.enable();

    let Some(indicator) = extension.indicator() else {
        anyhow::bail!("indicator did not start");
    };
    let (width, height) = indicator.widget().size();
    let center_x = WIDGET_X + width / 2.0;
    let center_y = WIDGET_Y + height / 2.0;
    tracing::info!(
        policy = %indicator.policy(),
        width,
        height,
        "Widget placed at ({}, {})",
        WIDGET_X,
        WIDGET_Y
    );

    // Circle the widget.
    let mut elapsed = 0;
    while elapsed < args.duration_ms {
        let angle = TAU * elapsed as f64 / args.duration_ms.max(1) as f64;
        let x = center_x + args.radius * angle.cos();
        let y = center_y + args.radius * angle.sin();
        event_loop.set_pointer(x.round() as i32, y.round() as i32);
        event_loop.advance(STEP_MS);
        extension.dispatch_events();

        if elapsed % 250 < STEP_MS {
            if let Some(indicator) = extension.indicator() {
                let widget = indicator.widget();
                tracing::info!(
                    t_ms = event_loop.now_ms(),
                    "pointer ({:.0}, {:.0}) left pupil ({:.2}, {:.2}) right pupil ({:.2}, {:.2})",
                    x,
                    y,
                    widget.left_pupil().x,
                    widget.left_pupil().y,
                    widget.right_pupil().x,
                    widget.right_pupil().y
                );
            }
        }
        elapsed += STEP_MS;
    }

    // Rest and count how many updates a still pointer costs.
    let repaints_before = repaint_count(&extension);
    event_loop.advance(args.rest_ms);
    let repaints_during_rest = repaint_count(&extension) - repaints_before;
    tracing::info!(
        rest_ms = args.rest_ms,
        "Repaints requested while the pointer rested: {}",
        repaints_during_rest
    );

    if let Some(indicator) = extension.indicator() {
        let mut surface = RecordingSurface::new();
        indicator.paint(&mut surface);
        tracing::info!("Final frame: {} drawing operations", surface.ops().len());

        export_png(&args, indicator, width, height)?;
    }

    extension.disable();
    Ok(())
}

#[cfg(feature = "cairo")]
fn export_png(
    args: &Args,
    indicator: &Indicator<VirtualLoop, HeadlessHost>,
    width: f64,
    height: f64,
) -> Result<()> {
    if let Some(path) = &args.png {
        xeyes_indicator::render::cairo_surface::write_png(path, width, height, |ctx| {
            indicator.paint(ctx)
        })?;
        tracing::info!("Wrote {}", path.display());
    }
    Ok(())
}

#[cfg(not(feature = "cairo"))]
fn export_png(
    _args: &Args,
    _indicator: &Indicator<VirtualLoop, HeadlessHost>,
    _width: f64,
    _height: f64,
) -> Result<()> {
    Ok(())
}

fn repaint_count(extension: &Extension<VirtualLoop, HeadlessHost>) -> usize {
    extension
        .indicator()
        .map_or(0, |indicator| indicator.widget().host().repaint_requests())
}
