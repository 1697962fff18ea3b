//! Stipple command handler

use anyhow::{Context, Result};
use std::path::Path;

use indent_bars::{generate_bitmap, CellGeometry};

/// Print the stipple bitmap for one cell as ASCII art or XBM source.
pub fn handle(
    config_path: Option<&Path>,
    cell_width: u32,
    cell_height: u32,
    rotation: u32,
    xbm: Option<&str>,
    highlight: bool,
) -> Result<()> {
    let config = super::load_config(config_path)?;
    let geometry = CellGeometry::new(cell_width, cell_height, rotation)
        .context("Invalid cell geometry")?;

    let base = config.pattern.to_spec()?;
    let spec = match (highlight, &config.highlight) {
        (true, Some(h)) => h.pattern_spec(&base)?.unwrap_or(base),
        (true, None) => {
            tracing::warn!("no [highlight] section configured, using the regular pattern");
            base
        }
        (false, _) => base,
    };

    let bitmap = generate_bitmap(&geometry, &spec);
    match xbm {
        Some(name) => print!("{}", bitmap.to_xbm(name)),
        None => println!("{}", bitmap.to_ascii()),
    }
    Ok(())
}
