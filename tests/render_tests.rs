//! Tests for eye painting against the recording surface.

use std::f64::consts::TAU;

use xeyes_indicator::geometry::{Point, PupilOffset};
use xeyes_indicator::model::EyeColors;
use xeyes_indicator::render::{
    draw_eye, draw_eyes, DrawOp, EyeParams, FailingOp, RecordingError, RecordingSurface,
    SavedState, Surface,
};
use xeyes_indicator::{Color, EyeConfig};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn colors() -> EyeColors {
    EyeColors {
        eye: Color::new(1.0, 1.0, 0.9, 1.0),
        pupil: Color::new(0.1, 0.2, 0.3, 1.0),
        outline: Color::new(0.5, 0.0, 0.0, 0.8),
    }
}

fn params(offset: PupilOffset) -> EyeParams {
    EyeParams {
        center: Point::new(10.0, 7.0),
        radius_x: 10.0,
        radius_y: 7.0,
        pupil_offset: offset,
        pupil_radius: 2.0,
        colors: colors(),
    }
}

#[test]
fn eye_draw_order() {
    let mut s = RecordingSurface::new();
    draw_eye(&mut s, &params(PupilOffset::new(1.0, -2.0))).unwrap();

    let c = colors();
    let expected = vec![
        DrawOp::Save,
        DrawOp::Translate { tx: 10.0, ty: 7.0 },
        DrawOp::Scale { sx: 10.0, sy: 7.0 },
        DrawOp::Arc {
            xc: 0.0,
            yc: 0.0,
            radius: 1.0,
            angle1: 0.0,
            angle2: TAU,
        },
        DrawOp::Restore,
        DrawOp::SetSource(c.eye),
        DrawOp::FillPreserve,
        DrawOp::SetSource(c.outline),
        DrawOp::SetLineWidth(1.5),
        DrawOp::Stroke,
        DrawOp::NewPath,
        DrawOp::Arc {
            xc: 11.0,
            yc: 5.0,
            radius: 2.0,
            angle1: 0.0,
            angle2: TAU,
        },
        DrawOp::ClosePath,
        DrawOp::SetSource(c.pupil),
        DrawOp::Fill,
    ];
    assert_eq!(s.ops(), expected.as_slice());
    assert_eq!(s.save_depth(), 0);
}

#[test]
fn transform_restored_before_any_paint() {
    let mut s = RecordingSurface::new();
    draw_eye(&mut s, &params(PupilOffset::ZERO)).unwrap();

    let ops = s.ops();
    let restore = ops.iter().position(|op| *op == DrawOp::Restore).unwrap();
    let first_paint = ops
        .iter()
        .position(|op| matches!(op, DrawOp::FillPreserve | DrawOp::Stroke | DrawOp::Fill))
        .unwrap();
    assert!(restore < first_paint);
}

#[test]
fn non_finite_offset_draws_centered_pupil() {
    let mut s = RecordingSurface::new();
    draw_eye(&mut s, &params(PupilOffset::new(f64::NAN, f64::INFINITY))).unwrap();

    let (xc, yc, r) = s.arcs()[1];
    assert!(approx_eq(xc, 10.0));
    assert!(approx_eq(yc, 7.0));
    assert!(approx_eq(r, 2.0));
}

#[test]
fn both_eyes_use_local_centers() {
    let config = EyeConfig {
        eye_width: 20.0,
        eye_height: 14.0,
        eye_spacing: 6.0,
        pupil_ratio: 0.5,
    };
    let g = config.geometry();
    let mut s = RecordingSurface::new();
    draw_eyes(
        &mut s,
        &g,
        PupilOffset::new(1.0, 0.0),
        PupilOffset::new(0.0, -1.0),
        colors(),
    )
    .unwrap();

    let arcs = s.arcs();
    assert_eq!(arcs.len(), 4);
    // Left pupil, then right pupil.
    assert!(approx_eq(arcs[1].0, 11.0) && approx_eq(arcs[1].1, 7.0));
    assert!(approx_eq(arcs[3].0, 36.0) && approx_eq(arcs[3].1, 6.0));
    assert!(approx_eq(arcs[3].2, 3.5));

    let translates: Vec<_> = s
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Translate { tx, ty } => Some((*tx, *ty)),
            _ => None,
        })
        .collect();
    assert_eq!(translates, vec![(10.0, 7.0), (36.0, 7.0)]);
    assert_eq!(s.save_depth(), 0);
}

#[test]
fn failing_save_leaves_depth_balanced() {
    let mut s = RecordingSurface::failing_on(FailingOp::Save);
    let err = draw_eye(&mut s, &params(PupilOffset::ZERO)).unwrap_err();
    assert_eq!(err, RecordingError(FailingOp::Save));
    assert_eq!(s.save_depth(), 0);
    assert!(!s.ops().contains(&DrawOp::Restore));
}

#[test]
fn failing_stroke_stops_before_pupil() {
    let mut s = RecordingSurface::failing_on(FailingOp::Stroke);
    assert!(draw_eye(&mut s, &params(PupilOffset::ZERO)).is_err());
    assert_eq!(s.ops().last(), Some(&DrawOp::Stroke));
    assert_eq!(s.save_depth(), 0);
}

fn fill_inside_saved_frame(s: &mut RecordingSurface) -> Result<(), RecordingError> {
    let mut frame = SavedState::new(s)?;
    frame.scale(2.0, 2.0);
    frame.fill()?;
    frame.stroke()
}

#[test]
fn saved_state_restores_on_early_return() {
    let mut s = RecordingSurface::failing_on(FailingOp::Fill);
    assert!(fill_inside_saved_frame(&mut s).is_err());
    assert_eq!(s.ops().last(), Some(&DrawOp::Restore));
    assert!(!s.ops().contains(&DrawOp::Stroke));
    assert_eq!(s.save_depth(), 0);
}

#[test]
fn take_ops_empties_the_log() {
    let mut s = RecordingSurface::new();
    s.set_source_color(Color::BLACK);
    assert_eq!(s.take_ops(), vec![DrawOp::SetSource(Color::BLACK)]);
    assert!(s.ops().is_empty());
}
