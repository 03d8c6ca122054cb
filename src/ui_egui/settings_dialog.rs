use crate::models::settings::{SchedulerSettings, SlotMinutes};
use crate::utils::date::format_hour_12h;
use egui::{Color32, RichText};

const LABEL_WIDTH: f32 = 140.0;

/// Working copy of the settings while the dialog is open
#[derive(Debug, Default)]
pub struct SettingsDialogState {
    pub open: bool,
    draft: SchedulerSettings,
    error: Option<String>,
}

impl SettingsDialogState {
    pub fn open_with(&mut self, current: &SchedulerSettings) {
        self.open = true;
        self.draft = current.clone();
        self.error = None;
    }

    /// Validated draft, or the validation message shown in the dialog
    fn accept(&mut self) -> Option<SchedulerSettings> {
        match self.draft.validate() {
            Ok(()) => {
                self.error = None;
                self.open = false;
                Some(self.draft.clone())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

/// Render the settings dialog. Returns the new settings when the user saves
/// a valid set.
pub fn render_settings_dialog(
    ctx: &egui::Context,
    state: &mut SettingsDialogState,
) -> Option<SchedulerSettings> {
    if !state.open {
        return None;
    }

    let mut saved = None;
    let mut dialog_open = true;
    let mut cancelled = false;

    egui::Window::new("Scheduler Settings")
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(ref error) = state.error {
                ui.colored_label(Color32::RED, RichText::new(error).strong());
                ui.add_space(8.0);
            }

            labeled_row(ui, "Time increment:", |ui| {
                egui::ComboBox::from_id_source("slot_minutes_combo")
                    .selected_text(state.draft.slot_minutes.label())
                    .show_ui(ui, |ui| {
                        for slot in SlotMinutes::ALL {
                            ui.selectable_value(&mut state.draft.slot_minutes, slot, slot.label());
                        }
                    });
            });

            labeled_row(ui, "Day starts at:", |ui| {
                ui.add(
                    egui::DragValue::new(&mut state.draft.grid_start_hour)
                        .range(0..=23)
                        .suffix(":00"),
                );
                ui.label(RichText::new(format_hour_12h(state.draft.grid_start_hour)).weak());
            });

            labeled_row(ui, "Day ends at:", |ui| {
                ui.add(
                    egui::DragValue::new(&mut state.draft.grid_end_hour)
                        .range(1..=24)
                        .suffix(":00"),
                );
                ui.label(RichText::new(format_hour_12h(state.draft.grid_end_hour)).weak());
            });

            labeled_row(ui, "Fallback color:", |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut state.draft.fallback_color)
                        .desired_width(80.0),
                );
            });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    saved = state.accept();
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });

    if !dialog_open || cancelled {
        state.open = false;
        state.error = None;
    }
    saved
}

fn labeled_row(ui: &mut egui::Ui, label: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.horizontal(|ui| {
        ui.allocate_ui_with_layout(
            egui::Vec2::new(LABEL_WIDTH, 20.0),
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                ui.label(label);
            },
        );
        add_contents(ui);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_valid_draft_closes() {
        let mut state = SettingsDialogState::default();
        state.open_with(&SchedulerSettings::default());
        state.draft.slot_minutes = SlotMinutes::Fifteen;

        let accepted = state.accept().unwrap();
        assert_eq!(accepted.slot_minutes, SlotMinutes::Fifteen);
        assert!(!state.open);
    }

    #[test]
    fn test_accept_invalid_draft_stays_open() {
        let mut state = SettingsDialogState::default();
        state.open_with(&SchedulerSettings::default());
        state.draft.grid_start_hour = 20;
        state.draft.grid_end_hour = 8;

        assert!(state.accept().is_none());
        assert!(state.open);
        assert!(state.error.is_some());
    }
}
