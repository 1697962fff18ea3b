//! A small table of X11 color names.
//!
//! Hosts with a real color database should override
//! [`ColorResolver::named`](super::ColorResolver::named); this table covers
//! the names commonly used in bar and theme configurations.

use super::Color;

const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::rgb8(0, 0, 0)),
    ("white", Color::rgb8(255, 255, 255)),
    ("red", Color::rgb8(255, 0, 0)),
    ("green", Color::rgb8(0, 255, 0)),
    ("blue", Color::rgb8(0, 0, 255)),
    ("yellow", Color::rgb8(255, 255, 0)),
    ("cyan", Color::rgb8(0, 255, 255)),
    ("magenta", Color::rgb8(255, 0, 255)),
    ("orange", Color::rgb8(255, 165, 0)),
    ("purple", Color::rgb8(160, 32, 240)),
    ("gray", Color::rgb8(190, 190, 190)),
    ("grey", Color::rgb8(190, 190, 190)),
    ("darkgray", Color::rgb8(169, 169, 169)),
    ("darkgrey", Color::rgb8(169, 169, 169)),
    ("dimgray", Color::rgb8(105, 105, 105)),
    ("dimgrey", Color::rgb8(105, 105, 105)),
    ("lightgray", Color::rgb8(211, 211, 211)),
    ("lightgrey", Color::rgb8(211, 211, 211)),
    ("slategray", Color::rgb8(112, 128, 144)),
    ("darkslategray", Color::rgb8(47, 79, 79)),
    ("steelblue", Color::rgb8(70, 130, 180)),
    ("skyblue", Color::rgb8(135, 206, 235)),
    ("dodgerblue", Color::rgb8(30, 144, 255)),
    ("forestgreen", Color::rgb8(34, 139, 34)),
    ("seagreen", Color::rgb8(46, 139, 87)),
    ("goldenrod", Color::rgb8(218, 165, 32)),
    ("gold", Color::rgb8(255, 215, 0)),
    ("firebrick", Color::rgb8(178, 34, 34)),
    ("tomato", Color::rgb8(255, 99, 71)),
    ("orchid", Color::rgb8(218, 112, 214)),
    ("violet", Color::rgb8(238, 130, 238)),
    ("turquoise", Color::rgb8(64, 224, 208)),
];

/// Look up a color by X11 name, ignoring case and spaces ("Dim Gray" ==
/// "dimgray").
pub fn lookup(name: &str) -> Option<Color> {
    let key: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == key)
        .map(|(_, c)| *c)
}
