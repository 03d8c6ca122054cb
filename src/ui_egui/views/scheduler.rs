//! Day scheduler: the time grid, its drop slots and the scheduled event blocks.

use egui::{Align2, CursorIcon, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::utils::{color_or_default, contrast_text};
use crate::models::scheduled_event::ScheduledEvent;
use crate::services::board::Board;
use crate::services::geometry::TimeGrid;
use crate::services::resize::ResizeCommit;
use crate::ui_egui::drag::{DragContext, DragManager};
use crate::ui_egui::resize::{self as resize_handle, ResizeManager};
use crate::utils::date::{format_day_heading, format_time_12h};

const TIME_LABEL_WIDTH: f32 = 64.0;
const EVENT_INSET: f32 = 4.0;
const ACCENT_WIDTH: f32 = 4.0;

/// An event as drawn on the grid this frame
struct EventBlock<'a> {
    rect: Rect,
    event: &'a ScheduledEvent,
    /// Outside the visible hours; movable but not resizable
    pinned: bool,
}

pub struct SchedulerView;

impl SchedulerView {
    /// Render the scheduler for the board's current day.
    ///
    /// Returns the resize committed this frame, if any; the caller applies it
    /// to the board.
    pub fn show(ui: &mut egui::Ui, board: &Board) -> Option<ResizeCommit> {
        ui.heading(format!("Schedule for {}", format_day_heading(board.current_date())));
        ui.add_space(8.0);

        let mut commit = None;
        egui::ScrollArea::vertical()
            .id_source("scheduler_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                commit = Self::render_grid(ui, board);
            });
        commit
    }

    fn render_grid(ui: &mut egui::Ui, board: &Board) -> Option<ResizeCommit> {
        let grid = board.grid();
        let desired_size = Vec2::new(ui.available_width(), grid.grid_height());
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click_and_drag());
        let ctx = ui.ctx().clone();
        let pointer_pos = ctx.pointer_latest_pos();

        Self::render_slots(ui, &ctx, &grid, rect, pointer_pos);

        let blocks = Self::event_blocks(&ctx, board, &grid, rect);
        for block in &blocks {
            Self::render_event(ui, &ctx, block, pointer_pos);
        }

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                Self::begin_gesture(&ctx, board, &grid, &blocks, pos);
            }
        }

        if response.dragged() {
            if ResizeManager::is_active(&ctx) {
                if let Some(pos) = pointer_pos {
                    ResizeManager::pointer_moved(&ctx, pos.y);
                }
                ui.output_mut(|out| out.cursor_icon = CursorIcon::ResizeVertical);
            } else if DragManager::is_active(&ctx) {
                ui.output_mut(|out| out.cursor_icon = CursorIcon::Grabbing);
            }
        }

        if response.drag_stopped() && ResizeManager::is_active(&ctx) {
            let resizing = board
                .events()
                .iter()
                .find(|event| ResizeManager::is_resizing(&ctx, &event.id));
            return match (resizing, pointer_pos) {
                (Some(event), Some(pos)) => ResizeManager::release(&ctx, pos.y, event),
                _ => {
                    ResizeManager::cancel(&ctx);
                    None
                }
            };
        }

        None
    }

    fn render_slots(
        ui: &egui::Ui,
        ctx: &egui::Context,
        grid: &TimeGrid,
        rect: Rect,
        pointer_pos: Option<Pos2>,
    ) {
        let painter = ui.painter();
        let pixels_per_slot = grid.pixels_per_slot();
        let visuals = ui.visuals();
        let hour_line = Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color);
        let slot_line = Stroke::new(0.5, hour_line.color.linear_multiply(0.5));
        let dragging = DragManager::is_active(ctx);

        for (index, slot) in grid.enumerate_slots().enumerate() {
            let top = rect.top() + index as f32 * pixels_per_slot;
            let slot_rect = Rect::from_min_size(
                Pos2::new(rect.left() + TIME_LABEL_WIDTH, top),
                Vec2::new(rect.width() - TIME_LABEL_WIDTH, pixels_per_slot),
            );
            let tag = slot.drop_target().to_string();

            if dragging {
                DragManager::update_hover(ctx, tag.clone(), slot_rect);
            }

            if dragging && DragManager::is_hovering(ctx, &tag) {
                painter.rect_filled(slot_rect, 0.0, visuals.selection.bg_fill.linear_multiply(0.4));
            } else if pointer_pos.map_or(false, |pos| slot_rect.contains(pos)) {
                painter.rect_filled(slot_rect, 0.0, visuals.faint_bg_color);
            }

            let (line, label_color) = if slot.is_hour_start() {
                (hour_line, visuals.text_color())
            } else {
                (slot_line, visuals.weak_text_color())
            };
            painter.hline(slot_rect.x_range(), top, line);
            painter.text(
                Pos2::new(rect.left() + TIME_LABEL_WIDTH - 6.0, top + 2.0),
                Align2::RIGHT_TOP,
                format_time_12h(slot.hour, slot.minute),
                FontId::proportional(11.0),
                label_color,
            );
        }

        painter.hline(
            (rect.left() + TIME_LABEL_WIDTH)..=rect.right(),
            rect.bottom(),
            hour_line,
        );
        painter.vline(rect.left() + TIME_LABEL_WIDTH, rect.y_range(), hour_line);
    }

    /// Screen rect of every event on the day, in draw order
    fn event_blocks<'a>(
        ctx: &egui::Context,
        board: &'a Board,
        grid: &TimeGrid,
        rect: Rect,
    ) -> Vec<EventBlock<'a>> {
        let left = rect.left() + TIME_LABEL_WIDTH + EVENT_INSET;
        let width = (rect.width() - TIME_LABEL_WIDTH - 2.0 * EVENT_INSET).max(0.0);

        board
            .event_layouts()
            .into_iter()
            .map(|(event, layout)| {
                let block_rect = match ResizeManager::preview_height(ctx, &event.id) {
                    // Preview height spans the whole event, drawn from its real start
                    Some(height) if !layout.pinned => Rect::from_min_size(
                        Pos2::new(left, rect.top() + grid.unclipped_top(event)),
                        Vec2::new(width, height),
                    )
                    .intersect(rect),
                    _ => Rect::from_min_size(
                        Pos2::new(left, rect.top() + layout.top),
                        Vec2::new(width, layout.height),
                    ),
                };
                EventBlock {
                    rect: block_rect,
                    event,
                    pinned: layout.pinned,
                }
            })
            .collect()
    }

    fn render_event(
        ui: &egui::Ui,
        ctx: &egui::Context,
        block: &EventBlock<'_>,
        pointer_pos: Option<Pos2>,
    ) {
        let painter = ui.painter();
        let event = block.event;
        let event_rect = &block.rect;
        let mut color = color_or_default(&event.color);
        if DragManager::is_dragging(ctx, &event.id) || block.pinned {
            color = color.linear_multiply(0.4);
        }

        painter.rect_filled(*event_rect, 4.0, color);
        let accent_rect = Rect::from_min_size(
            event_rect.min,
            Vec2::new(ACCENT_WIDTH, event_rect.height()),
        );
        painter.rect_filled(accent_rect, 2.0, color.linear_multiply(0.7));

        let text_color = contrast_text(color);
        let text_left = event_rect.left() + ACCENT_WIDTH + 6.0;
        let clip = painter.with_clip_rect(event_rect.shrink(1.0));
        if block.pinned {
            clip.text(
                Pos2::new(text_left, event_rect.center().y),
                Align2::LEFT_CENTER,
                format!("{} ({})", event.title, event.start.format("%-I:%M %p")),
                FontId::proportional(11.0),
                text_color,
            );
            return;
        }
        clip.text(
            Pos2::new(text_left, event_rect.top() + 4.0),
            Align2::LEFT_TOP,
            &event.title,
            FontId::proportional(13.0),
            text_color,
        );
        if event_rect.height() >= 36.0 {
            clip.text(
                Pos2::new(text_left, event_rect.top() + 20.0),
                Align2::LEFT_TOP,
                format!(
                    "{} - {}",
                    event.start.format("%-I:%M %p"),
                    event.end.format("%-I:%M %p")
                ),
                FontId::proportional(11.0),
                text_color.linear_multiply(0.85),
            );
        }

        let on_handle = pointer_pos.map_or(false, |pos| resize_handle::hit_test(*event_rect, pos));
        let show_handle = on_handle
            || ResizeManager::is_resizing(ctx, &event.id)
            || pointer_pos.map_or(false, |pos| event_rect.contains(pos));
        if show_handle && !DragManager::is_active(ctx) {
            resize_handle::draw_handle(ui, *event_rect, on_handle, color);
        }
        if on_handle && !DragManager::is_active(ctx) {
            ui.output_mut(|out| out.cursor_icon = CursorIcon::ResizeVertical);
        }
    }

    /// Press on the grid: the bottom handle starts a resize, the body a move.
    /// Topmost block wins; pinned stubs only move.
    fn begin_gesture(
        ctx: &egui::Context,
        board: &Board,
        grid: &TimeGrid,
        blocks: &[EventBlock<'_>],
        pos: Pos2,
    ) {
        let Some(block) = blocks.iter().rev().find(|b| b.rect.contains(pos)) else {
            return;
        };
        let event = block.event;

        if !block.pinned && resize_handle::hit_test(block.rect, pos) {
            ResizeManager::press(ctx, event, pos.y, *grid);
        } else if let Some(item) = board.on_drag_start(&event.id) {
            DragManager::begin(ctx, DragContext::from_item(&item));
        }
    }
}

