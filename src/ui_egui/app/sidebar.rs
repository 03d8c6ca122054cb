//! To-do lists panel and the board edits it requests.

use super::PlannerApp;
use crate::ui_egui::views::{TodoAction, TodoSection};

const SIDEBAR_MIN_WIDTH: f32 = 220.0;
const SIDEBAR_DEFAULT_WIDTH: f32 = 300.0;
const SIDEBAR_MAX_WIDTH: f32 = 480.0;

impl PlannerApp {
    pub(super) fn render_sidebar(&mut self, ctx: &egui::Context) {
        let actions = egui::SidePanel::left("todo_sidebar")
            .default_width(SIDEBAR_DEFAULT_WIDTH)
            .min_width(SIDEBAR_MIN_WIDTH)
            .max_width(SIDEBAR_MAX_WIDTH)
            .resizable(true)
            .show(ctx, |ui| TodoSection::show(ui, &self.board, &mut self.todo_state))
            .inner;

        for action in actions {
            self.apply_todo_action(action);
        }
    }

    fn apply_todo_action(&mut self, action: TodoAction) {
        match action {
            TodoAction::AddList(title) => {
                if let Err(e) = self.board.add_list(&title) {
                    log::warn!("Could not add list: {}", e);
                }
            }
            TodoAction::AddTask { list_id, title } => {
                if let Err(e) = self.board.add_task(&list_id, &title) {
                    log::warn!("Could not add task: {}", e);
                }
            }
            TodoAction::ToggleTask(task_id) => {
                self.board.toggle_task(&task_id);
            }
            TodoAction::DeleteTask(task_id) => {
                self.board.delete_task(&task_id);
            }
        }
    }
}
