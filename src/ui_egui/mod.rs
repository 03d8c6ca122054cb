mod app;
pub mod drag;
pub mod resize;
mod settings_dialog;
mod views;

pub use app::PlannerApp;
