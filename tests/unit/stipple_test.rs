//! Unit tests for stipple generation

use indent_bars::stipple::bits::{block_mask, rotate};
use indent_bars::{generate_bitmap, CellGeometry, GeometryError, PatternSpec};

use crate::helpers::{geometry, pattern};

#[test]
fn reference_cell_splits_into_three_bands() {
    let bitmap = generate_bitmap(&geometry(10, 10), &pattern(0.25, 0.1, " . "));
    insta::assert_snapshot!(bitmap.to_ascii(), @r"
    ..........
    ..........
    ..........
    .##.......
    .##.......
    .##.......
    .##.......
    ..........
    ..........
    ..........
    ");
}

#[test]
fn bitmap_always_matches_cell_size() {
    let patterns = [" . . . . .", ".", " ", "..  ..", " .:. ", "...................."];
    for &(w, h) in &[(1, 1), (7, 3), (8, 16), (9, 18), (17, 5), (128, 2)] {
        for fill in patterns {
            let bitmap = generate_bitmap(&geometry(w, h), &pattern(0.4, 0.1, fill));
            assert_eq!(bitmap.width(), w);
            assert_eq!(bitmap.height(), h);
            assert_eq!(bitmap.row_bytes(), w.div_ceil(8) as usize);
            assert_eq!(
                bitmap.data().len(),
                bitmap.row_bytes() * h as usize,
                "{w}x{h} {fill:?}"
            );
        }
    }
}

#[test]
fn rotation_moves_every_row_by_the_offset() {
    let spec = pattern(0.3, 0.2, " . .");
    let base = generate_bitmap(&geometry(11, 8), &spec);
    for rotation in 0..11 {
        let rotated = generate_bitmap(&CellGeometry::new(11, 8, rotation).unwrap(), &spec);
        for y in 0..8 {
            for x in 0..11 {
                let source = (x + 11 - rotation) % 11;
                assert_eq!(
                    rotated.pixel(x, y),
                    base.pixel(source, y),
                    "rotation {rotation} at ({x}, {y})"
                );
            }
        }
    }
}

#[test]
fn rotate_wraps_within_width() {
    assert_eq!(rotate(0b1000_0001, 8, 1), 0b0000_0011);
    assert_eq!(rotate(0b1, 5, 4), 0b1_0000);
    // bits above the width are dropped before rotating
    assert_eq!(rotate(0b110, 2, 1), 0b01);
}

#[test]
fn solid_pattern_repeats_one_row() {
    let bitmap = generate_bitmap(&geometry(8, 5), &pattern(0.25, 0.25, "#"));
    let rows: Vec<&[u8]> = bitmap.rows().collect();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|row| *row == [0b0000_1100]));
}

#[test]
fn blank_pattern_is_empty() {
    let bitmap = generate_bitmap(&geometry(12, 6), &pattern(0.5, 0.0, "   "));
    assert!(bitmap.data().iter().all(|&b| b == 0));
}

#[test]
fn bar_past_the_right_edge_is_truncated() {
    let bitmap = generate_bitmap(&geometry(8, 1), &pattern(1.0, 0.5, "."));
    assert_eq!(bitmap.to_ascii(), "....####");
}

#[test]
fn narrow_bar_is_at_least_one_pixel() {
    let bitmap = generate_bitmap(&geometry(10, 1), &pattern(0.0, 0.0, "."));
    assert_eq!(bitmap.to_ascii(), "#.........");
}

#[test]
fn zigzag_alternates_between_fill_characters() {
    let spec = PatternSpec::new(0.2, 0.4, ".:", Some(0.1)).unwrap();
    let bitmap = generate_bitmap(&geometry(10, 2), &spec);
    assert_eq!(bitmap.to_ascii(), ".....##...\n...##.....");

    let spec = PatternSpec::new(0.2, 0.4, ".:", Some(-0.1)).unwrap();
    let bitmap = generate_bitmap(&geometry(10, 2), &spec);
    assert_eq!(bitmap.to_ascii(), "...##.....\n.....##...");
}

#[test]
fn zigzag_ignores_repeated_fill_character() {
    let zig = PatternSpec::new(0.2, 0.4, ". .", Some(0.1)).unwrap();
    let plain = PatternSpec::new(0.2, 0.5, ". .", None).unwrap();
    assert_eq!(
        generate_bitmap(&geometry(10, 3), &zig),
        generate_bitmap(&geometry(10, 3), &plain)
    );
}

#[test]
fn geometry_is_validated() {
    assert_eq!(CellGeometry::new(0, 10, 0), Err(GeometryError::ZeroWidth));
    assert_eq!(CellGeometry::new(10, 0, 0), Err(GeometryError::ZeroHeight));
    assert_eq!(
        CellGeometry::new(129, 10, 0),
        Err(GeometryError::TooWide {
            width: 129,
            max: 128
        })
    );
    assert_eq!(
        CellGeometry::new(10, 10, 10),
        Err(GeometryError::RotationOutOfRange {
            rotation: 10,
            width: 10
        })
    );
    assert!(CellGeometry::new(128, 4, 127).is_ok());
}

#[test]
fn pattern_fractions_are_validated() {
    assert!(PatternSpec::new(1.5, 0.0, ".", None).is_err());
    assert!(PatternSpec::new(0.5, -0.1, ".", None).is_err());
    assert!(PatternSpec::new(0.5, 0.0, ".", Some(1.5)).is_err());
    assert!(PatternSpec::new(0.5, 0.0, "", None).is_err());
    assert!(PatternSpec::new(1.0, 1.0, ".", Some(-1.0)).is_ok());
}

#[test]
fn rotate_then_rotate_back_restores_value() {
    for width in [1u32, 8, 10, 64, 127, 128] {
        let value = 0b1011_0101 & block_mask(width);
        for n in 0..width {
            assert_eq!(
                rotate(rotate(value, width, n), width, width - n),
                value,
                "width {width} shift {n}"
            );
        }
    }
}
