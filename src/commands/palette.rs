//! Palette command handler

use anyhow::Result;
use crossterm::style::{Color as TermColor, Stylize};
use std::path::Path;

use indent_bars::{Color, IndentBars};

fn swatch(color: Color, use_color: bool) -> String {
    if !use_color {
        return String::new();
    }
    let (r, g, b) = color.to_rgb8();
    format!(" {}", "  ".on(TermColor::Rgb { r, g, b }))
}

/// Print the main color and the color of depths `1..=depths`.
///
/// With a `[highlight]` section, the color each depth takes while it is the
/// current depth is shown too.
pub fn handle(config_path: Option<&Path>, depths: usize, use_color: bool) -> Result<()> {
    let config = super::load_config(config_path)?;
    let mut bars = IndentBars::from_config(&config)?;

    let main = bars.main_color();
    println!("main     {}{}", main, swatch(main, use_color));

    for depth in 1..=depths {
        bars.set_current_depth(0);
        let color = bars.color_for_depth(depth);
        let mut line = format!("depth {:<2} {}{}", depth, color, swatch(color, use_color));

        if config.highlight.is_some() {
            bars.set_current_depth(depth);
            let face = bars.face_for_depth(depth);
            line.push_str(&format!(
                "  current {}{}",
                face.color,
                swatch(face.color, use_color)
            ));
        }
        println!("{}", line);
    }
    Ok(())
}
