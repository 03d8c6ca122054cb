use super::PlannerApp;
use crate::utils::date::format_day_heading;

impl PlannerApp {
    /// Top bar: day navigation and the settings button
    pub(super) fn render_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("planner_toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("◀").on_hover_text("Previous day").clicked() {
                    self.board.go_to_previous_day();
                }
                if ui.button("Today").clicked() {
                    self.board.go_to_today();
                }
                if ui.button("▶").on_hover_text("Next day").clicked() {
                    self.board.go_to_next_day();
                }
                ui.label(egui::RichText::new(format_day_heading(self.board.current_date())).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙ Settings").clicked() {
                        self.settings_dialog.open_with(self.board.settings());
                    }
                });
            });
        });
    }
}
