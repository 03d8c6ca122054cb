use super::PlannerApp;
use crate::services::board::Board;
use crate::services::config::{load_settings_or_default, ConfigService};
use crate::services::ids::UuidIdGenerator;
use crate::ui_egui::settings_dialog::SettingsDialogState;
use crate::ui_egui::views::TodoSectionState;
use chrono::Local;

impl PlannerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = ConfigService::from_project_dirs();
        if let Some(config) = &config {
            log::info!("Settings file: {}", config.path().display());
        }
        Self::with_config(config)
    }

    /// Build the app around an explicit settings location (or none)
    pub fn with_config(config: Option<ConfigService>) -> Self {
        let settings = load_settings_or_default(config.as_ref());
        log::info!(
            "Loaded settings: {} minute slots, {}:00 to {}:00",
            settings.slot_minutes.minutes(),
            settings.grid_start_hour,
            settings.grid_end_hour
        );

        let board = Board::with_sample_data(
            settings,
            Local::now().date_naive(),
            Box::new(UuidIdGenerator),
        );

        Self {
            board,
            config,
            todo_state: TodoSectionState::default(),
            settings_dialog: SettingsDialogState::default(),
        }
    }
}
