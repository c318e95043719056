use xeyes_indicator::{clamp, parse_color, Color};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn assert_color(c: Color, r: f64, g: f64, b: f64, a: f64) {
    assert!(
        approx_eq(c.r, r) && approx_eq(c.g, g) && approx_eq(c.b, b) && approx_eq(c.a, a),
        "got {:?}, expected ({}, {}, {}, {})",
        c,
        r,
        g,
        b,
        a
    );
}

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(10.0, 0.0, 20.0), 10.0);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
}

#[test]
fn parse_hex_red() {
    assert_color(parse_color("#FF0000"), 1.0, 0.0, 0.0, 1.0);
}

#[test]
fn parse_hex_is_case_insensitive_and_trimmed() {
    assert_color(parse_color("  #ff0080 "), 1.0, 0.0, 128.0 / 255.0, 1.0);
}

#[test]
fn parse_rgba_with_alpha() {
    assert_color(
        parse_color("rgba(0,128,255,0.5)"),
        0.0,
        128.0 / 255.0,
        1.0,
        0.5,
    );
}

#[test]
fn parse_rgba_tolerates_whitespace() {
    assert_color(
        parse_color("rgba( 51 , 102 ,153 , 0.25 )"),
        51.0 / 255.0,
        102.0 / 255.0,
        153.0 / 255.0,
        0.25,
    );
}

#[test]
fn parse_rgb_without_alpha_is_opaque() {
    assert_color(parse_color("rgb(255,255,0)"), 1.0, 1.0, 0.0, 1.0);
}

#[test]
fn parse_garbage_is_opaque_white() {
    assert_eq!(parse_color("garbage"), Color::WHITE);
    assert_eq!(parse_color(""), Color::WHITE);
}

#[test]
fn parse_malformed_forms_are_opaque_white() {
    assert_eq!(parse_color("#FFF"), Color::WHITE);
    assert_eq!(parse_color("#GG0000"), Color::WHITE);
    assert_eq!(parse_color("#FF00FF80"), Color::WHITE);
    assert_eq!(parse_color("rgba(1,2)"), Color::WHITE);
    assert_eq!(parse_color("rgba(a,b,c,d)"), Color::WHITE);
    assert_eq!(parse_color("hsl(0, 100%, 50%)"), Color::WHITE);
}

#[test]
fn parse_trailing_text_is_opaque_white() {
    assert_eq!(parse_color("rgba(1,2,3)junk"), Color::WHITE);
    assert_eq!(parse_color("rgb(0,0,0) rgb(1,1,1)"), Color::WHITE);
}

#[test]
fn to_hex_formats_opaque_channels() {
    assert_eq!(Color::new(1.0, 0.0, 0.5, 1.0).to_hex(), "#FF0080");
}

#[test]
fn to_css_output_parses_back() {
    let c = Color::new(0.2, 0.4, 0.6, 0.75);
    let css = c.to_css();
    assert_eq!(css, "rgba(51,102,153,0.75)");
    assert_color(parse_color(&css), 0.2, 0.4, 0.6, 0.75);
}
