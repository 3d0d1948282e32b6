//! Text rendition of the map widget.

use std::io::Write;

use colored::Colorize;
use tripview_application::MapWidget;
use tripview_core::view::{MapScene, MarkerStyle};
use tripview_core::{Result, TripviewError};

/// Writes the map scene as a list of pins.
pub struct TerminalMapWidget<W: Write> {
    out: W,
    initialized: bool,
}

impl<W: Write> TerminalMapWidget<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            initialized: false,
        }
    }
}

impl<W: Write> MapWidget for TerminalMapWidget<W> {
    fn initialize(&mut self, api_key: &str) -> Result<()> {
        if api_key.trim().is_empty() {
            return Err(TripviewError::map_provider("empty map credential"));
        }
        self.initialized = true;
        Ok(())
    }

    fn render(&mut self, scene: &MapScene) -> Result<()> {
        if !self.initialized {
            return Err(TripviewError::map_provider("map widget not initialized"));
        }

        writeln!(
            self.out,
            "{}",
            format!(
                "Map @ {:.5}, {:.5} (zoom {})",
                scene.center.lat, scene.center.lng, scene.zoom
            )
            .bold()
        )?;

        for marker in &scene.markers {
            let style = marker.style();
            let (r, g, b) = marker_rgb(style);
            writeln!(
                self.out,
                "  {} {} ({:.4}, {:.4})",
                pin_glyph(style).truecolor(r, g, b),
                marker.label,
                marker.coords.lat,
                marker.coords.lng
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Parses `#rrggbb`.
fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Animated pins get a ringed glyph.
pub fn pin_glyph(style: MarkerStyle) -> &'static str {
    if style.animated() { "◉" } else { "●" }
}

/// Colour used for a pin of the given style.
pub fn marker_rgb(style: MarkerStyle) -> (u8, u8, u8) {
    hex_rgb(style.fill_color()).unwrap_or((255, 255, 255))
}
