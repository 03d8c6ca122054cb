//! Slot quantization for resize gestures.
//!
//! The same function produces the live preview and the committed height, so
//! what the user sees while dragging is exactly what gets stored.

use super::TimeGrid;

/// Snap a pixel height to the nearest whole number of slots, never below one slot.
pub fn quantize(raw_pixels: f32, pixels_per_slot: f32) -> f32 {
    let snapped = (raw_pixels / pixels_per_slot).round() * pixels_per_slot;
    snapped.max(pixels_per_slot)
}

/// Minutes represented by a quantized height on the given grid.
pub fn height_to_minutes(height: f32, grid: &TimeGrid) -> i64 {
    let slots = (height / grid.pixels_per_slot()).round() as i64;
    slots * grid.slot_minutes() as i64
}
