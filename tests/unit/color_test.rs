//! Unit tests for color parsing and blending

use indent_bars::color::{parse_color, ColorParseError, ColorSource, FaceColors};
use indent_bars::{blend, Color, ColorResolver, Theme};

#[test]
fn blend_endpoints_return_inputs() {
    let a = Color::rgb8(0x12, 0x34, 0x56);
    let b = Color::rgb8(0xfe, 0xdc, 0xba);
    assert_eq!(blend(a, b, 1.0), a);
    assert_eq!(blend(a, b, 0.0), b);
    assert_eq!(blend(a, a, 0.37), a);
}

#[test]
fn blend_midpoint_of_black_and_white() {
    let white = Color::rgb8(255, 255, 255);
    let black = Color::rgb8(0, 0, 0);
    assert_eq!(blend(white, black, 0.5).to_hex(), "#808080");
    assert_eq!(white.blend(black, 0.5), blend(white, black, 0.5));
}

#[test]
fn blend_saturates_when_extrapolating() {
    let white = Color::rgb8(255, 255, 255);
    let black = Color::rgb8(0, 0, 0);
    assert_eq!(blend(white, black, 2.0), white);
    assert_eq!(blend(white, black, -1.0), black);
}

#[test]
fn hex_formatting_round_trips() {
    for hex in ["#000000", "#1e1e1e", "#d4d4d4", "#ff8000", "#ffffff"] {
        assert_eq!(hex.parse::<Color>().unwrap().to_hex(), hex);
        assert_eq!(hex.parse::<Color>().unwrap().to_string(), hex);
    }
}

#[test]
fn parse_color_accepts_names() {
    assert_eq!(parse_color("red").unwrap(), Color::rgb8(255, 0, 0));
    assert_eq!(parse_color("  #fff ").unwrap(), Color::rgb8(255, 255, 255));
    assert_eq!(
        parse_color("no-such-color"),
        Err(ColorParseError::UnknownName("no-such-color".to_string()))
    );
}

#[test]
fn theme_resolves_faces_and_default() {
    let theme = Theme::default().with_face(
        "comment",
        FaceColors {
            foreground: Some(Color::rgb8(0x6a, 0x99, 0x55)),
            background: None,
        },
    );
    assert_eq!(theme.face("comment", false), Some(Color::rgb8(0x6a, 0x99, 0x55)));
    assert_eq!(theme.face("comment", true), None);
    assert_eq!(theme.face("default", false), Some(theme.foreground()));
    assert_eq!(theme.face("default", true), Some(theme.background()));
    assert_eq!(theme.face("missing", false), None);
    assert_eq!(theme.frame_background(), Color::rgb8(0x1e, 0x1e, 0x1e));
}

#[test]
fn color_source_parses_from_toml() {
    #[derive(serde::Deserialize)]
    struct Holder {
        a: ColorSource,
        b: ColorSource,
    }
    let holder: Holder = toml::from_str("a = \"#102030\"\nb = { face = \"shadow\" }\n").unwrap();
    assert_eq!(holder.a, ColorSource::value("#102030"));
    assert_eq!(holder.b, ColorSource::face("shadow"));
}

#[test]
fn color_source_validation_only_checks_hex() {
    assert!(ColorSource::value("#12").validate().is_err());
    assert!(ColorSource::value("#123").validate().is_ok());
    assert!(ColorSource::value("anything").validate().is_ok());
    assert!(ColorSource::face("whatever").validate().is_ok());
}
