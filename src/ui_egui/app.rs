mod lifecycle;
mod navigation;
mod sidebar;

use crate::models::settings::SchedulerSettings;
use crate::services::board::Board;
use crate::services::config::ConfigService;
use crate::services::placement::Transition;
use crate::ui_egui::drag::DragManager;
use crate::ui_egui::resize::ResizeManager;
use crate::ui_egui::settings_dialog::{render_settings_dialog, SettingsDialogState};
use crate::ui_egui::views::{SchedulerView, TodoSectionState};

pub struct PlannerApp {
    /// Lists, tasks and scheduled events; every edit goes through here
    board: Board,
    /// Where settings are persisted, if a config directory exists
    config: Option<ConfigService>,
    todo_state: TodoSectionState,
    settings_dialog: SettingsDialogState,
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }
}

impl PlannerApp {
    fn handle_update(&mut self, ctx: &egui::Context) {
        DragManager::reset_hover(ctx);

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ResizeManager::cancel(ctx);
            DragManager::cancel(ctx);
        }

        self.render_toolbar(ctx);
        self.render_sidebar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(commit) = SchedulerView::show(ui, &self.board) {
                if self.board.apply_resize(&commit) {
                    log::info!("Resized {} to end at {}", commit.event_id, commit.new_end);
                }
            }
        });

        if let Some(settings) = render_settings_dialog(ctx, &mut self.settings_dialog) {
            self.apply_settings(ctx, settings);
        }

        self.render_drag_overlay(ctx);
        self.finish_drag_on_release(ctx);

        if DragManager::is_active(ctx) || ResizeManager::is_active(ctx) {
            ctx.request_repaint();
        }

        #[cfg(debug_assertions)]
        if let Err(violation) = self.board.check_invariants() {
            log::error!("Board invariant violated: {}", violation);
        }
    }

    /// Hand the released drag and whatever target was under the pointer to
    /// the board. Runs after all drop areas have reported their hover.
    fn finish_drag_on_release(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.pointer.any_released()) {
            return;
        }
        let Some(drag) = DragManager::finish(ctx) else {
            return;
        };

        match self
            .board
            .on_drag_end(&drag.item_id, drag.hovered_target.as_deref())
        {
            Transition::Ignored(reason) => {
                log::debug!("Drop of '{}' ignored: {}", drag.item_id, reason);
            }
            transition => log::info!("Drop of '{}': {:?}", drag.item_id, transition),
        }
    }

    /// Title of the dragged item following the pointer
    fn render_drag_overlay(&self, ctx: &egui::Context) {
        let Some(drag) = DragManager::active(ctx) else {
            return;
        };
        let Some(pos) = drag.pointer_pos.or_else(|| ctx.pointer_latest_pos()) else {
            return;
        };

        egui::Area::new(egui::Id::new("planner_drag_overlay"))
            .order(egui::Order::Tooltip)
            .fixed_pos(pos + egui::vec2(12.0, 12.0))
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(egui::RichText::new(&drag.title).strong());
                });
            });
    }

    /// Geometry changes invalidate any gesture measured against the old grid
    fn apply_settings(&mut self, ctx: &egui::Context, settings: SchedulerSettings) {
        if let Err(e) = self.board.set_settings(settings) {
            log::warn!("Rejected settings: {}", e);
            return;
        }
        ResizeManager::cancel(ctx);

        let Some(config) = &self.config else {
            return;
        };
        if let Err(e) = config.save(self.board.settings()) {
            log::warn!("Failed to save settings: {:#}", e);
        }
    }
}
