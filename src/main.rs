// Day Planner
// Main entry point

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use day_planner::ui_egui::PlannerApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    log::info!("Starting Day Planner");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("Day Planner"),
        ..Default::default()
    };

    eframe::run_native(
        "Day Planner",
        options,
        Box::new(|cc| Ok(Box::new(PlannerApp::new(cc)))),
    )
}
