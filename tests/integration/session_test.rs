//! IndentBars session: caching, invalidation and highlighting

use std::sync::Arc;

use indent_bars::color::ColorSource;
use indent_bars::{blend, CellGeometry, Color, ColorResolver, Config, IndentBars};

/// Host with a single face and a black frame
struct Host;

impl ColorResolver for Host {
    fn face(&self, face: &str, background: bool) -> Option<Color> {
        match (face, background) {
            ("default", false) => Some(Color::rgb8(200, 200, 200)),
            ("default", true) => Some(Color::rgb8(0, 0, 0)),
            _ => None,
        }
    }

    fn face_names(&self) -> Vec<String> {
        vec!["default".to_string()]
    }

    fn frame_background(&self) -> Color {
        Color::rgb8(0, 0, 0)
    }
}

fn geometry() -> CellGeometry {
    CellGeometry::new(10, 20, 0).unwrap()
}

#[test]
fn colors_resolve_through_the_host() {
    let mut config = Config::default();
    config.color.blend = Some(0.5);
    let mut bars = IndentBars::new(&config, &Host).unwrap();
    assert_eq!(bars.main_color(), blend(Color::rgb8(200, 200, 200), Color::rgb8(0, 0, 0), 0.5));
    assert_eq!(bars.color_for_depth(3), bars.main_color());
}

#[test]
fn depth_colors_are_memoized() {
    let mut bars = IndentBars::from_config(&Config::starter()).unwrap();
    for depth in 1..=4 {
        bars.color_for_depth(depth);
        bars.color_for_depth(depth);
    }
    assert_eq!(bars.cached_colors(), 4);
}

#[test]
fn no_bitmaps_without_geometry_or_in_character_mode() {
    let mut bars = IndentBars::from_config(&Config::default()).unwrap();
    assert!(bars.bitmap_for_depth(1).is_none());

    let mut config = Config::default();
    config.display.prefer_character = true;
    let mut bars = IndentBars::from_config(&config).unwrap();
    bars.on_geometry_change(geometry());
    assert!(bars.bitmap_for_depth(1).is_none());
}

#[test]
fn regular_depths_share_one_tile() {
    let mut bars = IndentBars::from_config(&Config::default()).unwrap();
    bars.on_geometry_change(geometry());
    let one = bars.bitmap_for_depth(1).unwrap();
    let two = bars.bitmap_for_depth(2).unwrap();
    assert!(Arc::ptr_eq(&one, &two));
    assert_eq!(one.width(), 10);
    assert_eq!(one.height(), 20);
}

#[test]
fn geometry_change_drops_bitmaps_only() {
    let mut bars = IndentBars::from_config(&Config::default()).unwrap();
    bars.on_geometry_change(geometry());
    bars.color_for_depth(1);
    bars.color_for_depth(2);
    bars.bitmap_for_depth(1);
    bars.bitmap_for_depth(2);
    assert_eq!(bars.cached_bitmaps(), 2);

    // same geometry again is not a change
    bars.on_geometry_change(geometry());
    assert_eq!(bars.cached_bitmaps(), 2);

    bars.on_geometry_change(CellGeometry::new(12, 24, 3).unwrap());
    assert_eq!(bars.cached_bitmaps(), 0);
    assert_eq!(bars.cached_colors(), 2);
    assert_eq!(bars.bitmap_for_depth(1).unwrap().width(), 12);
}

#[test]
fn config_change_drops_everything() {
    let mut bars = IndentBars::from_config(&Config::default()).unwrap();
    bars.on_geometry_change(geometry());
    bars.color_for_depth(1);
    bars.bitmap_for_depth(1);

    let mut config = Config::default();
    config.color.main = ColorSource::value("#ff0000");
    config.color.blend = None;
    bars.on_config_change(&config, &Host).unwrap();

    assert_eq!(bars.cached_colors(), 0);
    assert_eq!(bars.cached_bitmaps(), 0);
    assert_eq!(bars.color_for_depth(1), Color::rgb8(255, 0, 0));
    assert_eq!(bars.geometry(), Some(geometry()));
}

#[test]
fn rejected_config_change_keeps_state() {
    let mut bars = IndentBars::from_config(&Config::default()).unwrap();
    let before = bars.main_color();

    let mut config = Config::default();
    config.pattern.pattern = String::new();
    assert!(bars.on_config_change(&config, &Host).is_err());
    assert_eq!(bars.main_color(), before);
    assert_eq!(bars.config(), &Config::default());
}

#[test]
fn current_depth_is_highlighted() {
    let mut bars = IndentBars::from_config(&Config::starter()).unwrap();
    bars.on_geometry_change(geometry());
    let regular = bars.color_for_depth(2);
    let regular_tile = bars.bitmap_for_depth(2).unwrap();
    let cached = bars.cached_colors();

    bars.set_cursor_indent(12);
    assert_eq!(bars.current_depth(), 2);

    let face = bars.face_for_depth(2);
    assert!(face.highlighted);
    assert_eq!(face.color, blend(Color::rgb8(255, 255, 255), regular, 0.4));
    assert_ne!(face.bitmap.as_deref(), Some(regular_tile.as_ref()));

    let other = bars.face_for_depth(1);
    assert!(!other.highlighted);
    assert_eq!(other.background, None);

    // changing the current depth invalidates nothing
    assert_eq!(bars.cached_colors(), cached + 1);
    bars.set_current_depth(0);
    assert_eq!(bars.color_for_depth(2), regular);
}

#[test]
fn highlight_background_applies_to_current_depth_only() {
    let mut config = Config::default();
    config.highlight = Some(indent_bars::config::HighlightConfig {
        color: Some(ColorSource::value("#ffffff")),
        background: Some(ColorSource::value("#202020")),
        ..Default::default()
    });
    let mut bars = IndentBars::from_config(&config).unwrap();
    bars.set_current_depth(1);
    assert_eq!(bars.face_for_depth(1).background, Some(Color::rgb8(0x20, 0x20, 0x20)));
    assert_eq!(bars.face_for_depth(1).color, Color::rgb8(255, 255, 255));
    assert_eq!(bars.face_for_depth(2).background, None);
}

#[test]
fn layout_uses_display_settings() {
    let mut config = Config::default();
    config.display.spacing = 2;
    let bars = IndentBars::from_config(&config).unwrap();
    let layout = bars.layout(&["      x"]);
    let columns: Vec<usize> = layout[0].bars.iter().map(|b| b.column).collect();
    assert_eq!(columns, vec![2, 4]);
}

#[test]
fn every_config_or_geometry_change_drops_bitmaps() {
    let mut bars = IndentBars::from_config(&Config::default()).unwrap();
    for step in 0..6u32 {
        let width = 8 + step;
        bars.on_geometry_change(CellGeometry::new(width, 16, 0).unwrap());
        assert_eq!(bars.cached_bitmaps(), 0);
        assert_eq!(bars.bitmap_for_depth(1).unwrap().width(), width);

        bars.on_config_change(&Config::default(), &Host).unwrap();
        assert_eq!(bars.cached_bitmaps(), 0);
        assert_eq!(bars.cached_colors(), 0);
        assert_eq!(bars.bitmap_for_depth(2).unwrap().width(), width);
        assert_eq!(bars.cached_bitmaps(), 1);
    }
}
