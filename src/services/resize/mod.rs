// Event Resize Session
//
// Turns a press / move / release pointer sequence on an event's bottom
// handle into a single new end time.
// - Press: remember the pointer Y and the event's full height
// - Move: report a quantized preview height (display only)
// - Release: commit `start + quantized duration` exactly once

use chrono::{Duration, NaiveDateTime};

use crate::models::scheduled_event::ScheduledEvent;
use crate::services::geometry::quantize::{height_to_minutes, quantize};
use crate::services::geometry::TimeGrid;

/// Data recorded when the resize handle is pressed
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveResize {
    /// The event being resized
    pub event_id: String,
    /// Pointer Y at press
    pub start_y: f32,
    /// Height of the whole event at press, including any part clipped off the grid
    pub start_height: f32,
    /// Grid geometry in effect when the gesture began
    pub grid: TimeGrid,
}

impl ActiveResize {
    fn candidate_height(&self, current_y: f32) -> f32 {
        let pixels_per_slot = self.grid.pixels_per_slot();
        let raw = (self.start_height + (current_y - self.start_y)).max(pixels_per_slot);
        quantize(raw, pixels_per_slot)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResizeState {
    #[default]
    Idle,
    Active(ActiveResize),
}

/// The single end-time change produced by a finished gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeCommit {
    pub event_id: String,
    pub new_end: NaiveDateTime,
}

/// One resize gesture at a time.
#[derive(Debug, Clone, Default)]
pub struct ResizeSession {
    state: ResizeState,
    preview: Option<f32>,
}

impl ResizeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ResizeState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ResizeState::Active(_))
    }

    /// Check if resizing a specific event
    pub fn is_resizing(&self, event_id: &str) -> bool {
        matches!(&self.state, ResizeState::Active(active) if active.event_id == event_id)
    }

    /// Begin a gesture. Refused (returns false) while another one is active.
    pub fn press(
        &mut self,
        event_id: impl Into<String>,
        start_y: f32,
        start_height: f32,
        grid: TimeGrid,
    ) -> bool {
        if self.is_active() {
            return false;
        }
        let event_id = event_id.into();
        log::debug!("Resize started for {} at height {}", event_id, start_height);
        self.state = ResizeState::Active(ActiveResize {
            event_id,
            start_y,
            start_height,
            grid,
        });
        self.preview = None;
        true
    }

    /// Begin a gesture on `event`, measured from its full duration rather than
    /// the part drawn on the grid.
    pub fn press_event(&mut self, event: &ScheduledEvent, start_y: f32, grid: TimeGrid) -> bool {
        self.press(event.id.clone(), start_y, grid.full_height(event), grid)
    }

    /// Live preview height for the current pointer position
    pub fn pointer_moved(&mut self, current_y: f32) -> Option<f32> {
        let ResizeState::Active(active) = &self.state else {
            return None;
        };
        let height = active.candidate_height(current_y);
        self.preview = Some(height);
        Some(height)
    }

    /// Last preview height reported by [`pointer_moved`](Self::pointer_moved)
    pub fn preview_height(&self) -> Option<f32> {
        self.preview
    }

    /// Finish the gesture and compute the new end from the event's current start.
    ///
    /// Returns `None` when no gesture is active, or when `event` is not the
    /// one being resized (the gesture is dropped in that case).
    pub fn release(&mut self, final_y: f32, event: &ScheduledEvent) -> Option<ResizeCommit> {
        let ResizeState::Active(active) = std::mem::take(&mut self.state) else {
            return None;
        };
        self.preview = None;

        if active.event_id != event.id {
            log::warn!(
                "Resize of {} released against {}, discarding",
                active.event_id,
                event.id
            );
            return None;
        }

        let height = active.candidate_height(final_y);
        let minutes = height_to_minutes(height, &active.grid);
        let new_end = event.start + Duration::minutes(minutes);
        log::debug!("Resize of {} committed: {} minutes", event.id, minutes);

        Some(ResizeCommit {
            event_id: active.event_id,
            new_end,
        })
    }

    /// Abandon the gesture without committing. Returns true if one was active.
    pub fn cancel(&mut self) -> bool {
        self.preview = None;
        matches!(
            std::mem::take(&mut self.state),
            ResizeState::Active(_)
        )
    }
}
