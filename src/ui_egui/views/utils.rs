//! Small helpers shared by the list and scheduler views.

use egui::Color32;

use crate::models::settings::DEFAULT_EVENT_COLOR;

/// Parse a hex color string to Color32.
///
/// Accepts `#RRGGBB` or `RRGGBB`; anything else is `None`.
pub fn parse_color(hex: &str) -> Option<Color32> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color32::from_rgb(r, g, b))
}

/// Color for an event or list swatch, falling back to the default event color
pub fn color_or_default(hex: &str) -> Color32 {
    parse_color(hex)
        .or_else(|| parse_color(DEFAULT_EVENT_COLOR))
        .unwrap_or(Color32::from_rgb(139, 92, 246))
}

/// Text color that stays readable on `background`
pub fn contrast_text(background: Color32) -> Color32 {
    let luminance = 0.299 * background.r() as f32
        + 0.587 * background.g() as f32
        + 0.114 * background.b() as f32;
    if luminance > 160.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}
