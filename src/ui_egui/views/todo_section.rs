//! To-do lists panel: one card per list, each a drop target for tasks and
//! scheduled events.

use std::collections::HashMap;

use egui::{Color32, CursorIcon, Frame, Key, Label, Margin, RichText, Rounding, Sense, Stroke};

use super::utils::color_or_default;
use crate::models::drop_target::DropTarget;
use crate::models::task::Task;
use crate::models::todo_list::TodoList;
use crate::services::board::Board;
use crate::ui_egui::drag::{DragContext, DragManager};

/// Edits requested by the panel this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    AddList(String),
    AddTask { list_id: String, title: String },
    ToggleTask(String),
    DeleteTask(String),
}

/// Text inputs owned by the panel between frames
#[derive(Debug, Default)]
pub struct TodoSectionState {
    pub adding_list: bool,
    pub new_list_title: String,
    /// Pending "add task" text per list id
    pub new_task_titles: HashMap<String, String>,
}

impl TodoSectionState {
    /// Take the pending list title if it is not blank
    fn take_list_title(&mut self) -> Option<String> {
        let title = self.new_list_title.trim().to_string();
        if title.is_empty() {
            return None;
        }
        self.new_list_title.clear();
        self.adding_list = false;
        Some(title)
    }

    fn take_task_title(&mut self, list_id: &str) -> Option<String> {
        let pending = self.new_task_titles.get_mut(list_id)?;
        let title = pending.trim().to_string();
        if title.is_empty() {
            return None;
        }
        pending.clear();
        Some(title)
    }
}

pub struct TodoSection;

impl TodoSection {
    pub fn show(ui: &mut egui::Ui, board: &Board, state: &mut TodoSectionState) -> Vec<TodoAction> {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            ui.heading("To-Do Lists");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if !state.adding_list && ui.button("+ Add List").clicked() {
                    state.adding_list = true;
                }
            });
        });
        ui.add_space(4.0);

        if state.adding_list {
            Self::render_new_list_form(ui, state, &mut actions);
            ui.add_space(6.0);
        }

        egui::ScrollArea::vertical()
            .id_source("todo_lists_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if board.lists().is_empty() {
                    ui.label(RichText::new("No lists yet").weak());
                }
                for list in board.lists() {
                    Self::render_list(ui, board, list, state, &mut actions);
                    ui.add_space(8.0);
                }
            });

        actions
    }

    fn render_new_list_form(
        ui: &mut egui::Ui,
        state: &mut TodoSectionState,
        actions: &mut Vec<TodoAction>,
    ) {
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut state.new_list_title)
                    .hint_text("List name")
                    .desired_width(140.0),
            );
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            if ui.button("Add").clicked() || submitted {
                if let Some(title) = state.take_list_title() {
                    actions.push(TodoAction::AddList(title));
                }
            }
            if ui.button("Cancel").clicked() {
                state.adding_list = false;
                state.new_list_title.clear();
            }
        });
    }

    fn render_list(
        ui: &mut egui::Ui,
        board: &Board,
        list: &TodoList,
        state: &mut TodoSectionState,
        actions: &mut Vec<TodoAction>,
    ) {
        let ctx = ui.ctx().clone();
        let color = color_or_default(&list.color);

        let frame = Frame::none()
            .fill(ui.visuals().faint_bg_color)
            .stroke(Stroke::new(1.0, color))
            .rounding(Rounding::same(6.0))
            .inner_margin(Margin::same(8.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(&list.title).strong().color(color));
                ui.add_space(4.0);

                let mut empty = true;
                for task in board.tasks_in_list(&list.id) {
                    empty = false;
                    Self::render_task(ui, &ctx, board, task, actions);
                }
                if empty {
                    ui.label(RichText::new("Drop tasks here").weak().italics());
                }

                ui.add_space(4.0);
                Self::render_new_task_form(ui, list, state, actions);
            });

        // Cards only know their rect after layout, so the drop highlight is drawn on top
        let rect = frame.response.rect;
        let tag = DropTarget::list(list.id.clone()).to_string();
        if DragManager::is_active(&ctx) && DragManager::update_hover(&ctx, tag, rect) {
            ui.painter().rect(
                rect,
                Rounding::same(6.0),
                color.linear_multiply(0.15),
                Stroke::new(2.0, color),
            );
        }
    }

    fn render_task(
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        board: &Board,
        task: &Task,
        actions: &mut Vec<TodoAction>,
    ) {
        let dragging = DragManager::is_dragging(ctx, &task.id);

        ui.horizontal(|ui| {
            let mut completed = task.completed;
            if ui.checkbox(&mut completed, "").changed() {
                actions.push(TodoAction::ToggleTask(task.id.clone()));
            }

            let mut text = RichText::new(&task.title);
            if task.completed {
                text = text.strikethrough().weak();
            }
            if dragging {
                text = text.color(Color32::GRAY);
            }

            let response = ui
                .add(Label::new(text).sense(Sense::drag()))
                .on_hover_cursor(CursorIcon::Grab);
            if response.drag_started() {
                if let Some(item) = board.on_drag_start(&task.id) {
                    DragManager::begin(ctx, DragContext::from_item(&item));
                }
            }
            if response.dragged() {
                ui.output_mut(|out| out.cursor_icon = CursorIcon::Grabbing);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .small_button("✕")
                    .on_hover_text("Delete task")
                    .clicked()
                {
                    actions.push(TodoAction::DeleteTask(task.id.clone()));
                }
            });
        });
    }

    fn render_new_task_form(
        ui: &mut egui::Ui,
        list: &TodoList,
        state: &mut TodoSectionState,
        actions: &mut Vec<TodoAction>,
    ) {
        ui.horizontal(|ui| {
            let width = (ui.available_width() - 40.0).max(60.0);
            let pending = state.new_task_titles.entry(list.id.clone()).or_default();
            let response = ui.add(
                egui::TextEdit::singleline(pending)
                    .hint_text("New task")
                    .desired_width(width),
            );
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            if ui.small_button("Add").clicked() || submitted {
                if let Some(title) = state.take_task_title(&list.id) {
                    actions.push(TodoAction::AddTask {
                        list_id: list.id.clone(),
                        title,
                    });
                }
            }
        });
    }
}
