// Event Resize Handle
//
// Bottom-edge handle on scheduled events. The gesture itself lives in a
// `ResizeSession` kept in egui memory between frames; this module only maps
// pointer input onto it and draws the handle.

use egui::{Color32, Context, Id, Pos2, Rect, Stroke, Vec2};

use crate::models::scheduled_event::ScheduledEvent;
use crate::services::geometry::TimeGrid;
use crate::services::resize::{ResizeCommit, ResizeSession};

/// Height of the handle hit zone on tall events
pub const HANDLE_SIZE: f32 = 8.0;
/// Visual size of the handle circle
pub const HANDLE_VISUAL_SIZE: f32 = 6.0;

/// Hit zone along the bottom edge of an event block.
/// Short events get half their height so the body stays draggable.
pub fn bottom_handle_rect(event_rect: Rect) -> Rect {
    let zone_height = if event_rect.height() < 2.0 * HANDLE_SIZE {
        event_rect.height() / 2.0
    } else {
        HANDLE_SIZE
    };
    Rect::from_min_size(
        Pos2::new(event_rect.left(), event_rect.bottom() - zone_height),
        Vec2::new(event_rect.width(), zone_height),
    )
}

pub fn hit_test(event_rect: Rect, pos: Pos2) -> bool {
    bottom_handle_rect(event_rect).contains(pos)
}

pub struct ResizeManager;

impl ResizeManager {
    fn storage_id() -> Id {
        Id::new("planner_event_resize_state")
    }

    fn session(ctx: &Context) -> ResizeSession {
        ctx.memory(|mem| mem.data.get_temp::<ResizeSession>(Self::storage_id()))
            .unwrap_or_default()
    }

    fn store(ctx: &Context, session: ResizeSession) {
        ctx.memory_mut(|mem| mem.data.insert_temp(Self::storage_id(), session));
    }

    pub fn is_active(ctx: &Context) -> bool {
        Self::session(ctx).is_active()
    }

    pub fn is_resizing(ctx: &Context, event_id: &str) -> bool {
        Self::session(ctx).is_resizing(event_id)
    }

    /// Handle pressed on `event`
    pub fn press(ctx: &Context, event: &ScheduledEvent, pointer_y: f32, grid: TimeGrid) -> bool {
        let mut session = Self::session(ctx);
        let started = session.press_event(event, pointer_y, grid);
        Self::store(ctx, session);
        started
    }

    pub fn pointer_moved(ctx: &Context, pointer_y: f32) -> Option<f32> {
        let mut session = Self::session(ctx);
        let height = session.pointer_moved(pointer_y);
        Self::store(ctx, session);
        height
    }

    /// Preview height to draw for `event_id`, if it is the one being resized
    pub fn preview_height(ctx: &Context, event_id: &str) -> Option<f32> {
        let session = Self::session(ctx);
        if session.is_resizing(event_id) {
            session.preview_height()
        } else {
            None
        }
    }

    pub fn release(ctx: &Context, pointer_y: f32, event: &ScheduledEvent) -> Option<ResizeCommit> {
        let mut session = Self::session(ctx);
        let commit = session.release(pointer_y, event);
        Self::store(ctx, session);
        commit
    }

    pub fn cancel(ctx: &Context) -> bool {
        let mut session = Self::session(ctx);
        let cancelled = session.cancel();
        Self::store(ctx, session);
        if cancelled {
            log::debug!("Resize cancelled");
        }
        cancelled
    }
}

/// Draw the bottom handle of an event block
pub fn draw_handle(ui: &egui::Ui, event_rect: Rect, is_hovered: bool, color: Color32) {
    let rect = bottom_handle_rect(event_rect);
    let center = Pos2::new(rect.center().x, rect.bottom() - HANDLE_VISUAL_SIZE / 2.0 - 2.0);

    let (radius, fill) = if is_hovered {
        (HANDLE_VISUAL_SIZE / 2.0 + 1.0, Color32::WHITE)
    } else {
        (
            HANDLE_VISUAL_SIZE / 2.0,
            Color32::from_rgb(
                color.r().saturating_add(60),
                color.g().saturating_add(60),
                color.b().saturating_add(60),
            ),
        )
    };

    let painter = ui.painter();
    painter.circle_filled(center, radius, fill);
    painter.circle_stroke(center, radius, Stroke::new(1.0, color.linear_multiply(0.6)));
}
