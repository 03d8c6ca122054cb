// Test fixtures - reusable test data
// Provides consistent boards and dates across the integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use day_planner::models::settings::{SchedulerSettings, SlotMinutes};
use day_planner::models::task::Task;
use day_planner::models::todo_list::TodoList;
use day_planner::services::board::Board;
use day_planner::services::ids::SequentialIdGenerator;
use day_planner::services::placement::Placement;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Friday, March 14, 2025
    pub fn planning_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    /// `hour:minute` on the planning day
    pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
        planning_day().and_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Sample lists and tasks
pub mod data {
    use super::*;

    pub fn lists() -> Vec<TodoList> {
        vec![
            TodoList::new("1", "Personal Tasks", "#3B82F6"),
            TodoList::new("2", "Work Tasks", "#10B981"),
        ]
    }

    /// A single "Run" task in list 1
    pub fn run_task() -> Task {
        Task::new("1", "Run", "1").unwrap()
    }

    pub fn placement_with_run() -> Placement {
        Placement::new(vec![run_task()], Vec::new())
    }
}

pub fn settings(slot: SlotMinutes) -> SchedulerSettings {
    SchedulerSettings {
        slot_minutes: slot,
        ..SchedulerSettings::default()
    }
}

/// Sample board on the planning day with deterministic ids
pub fn sample_board() -> Board {
    Board::with_sample_data(
        SchedulerSettings::default(),
        dates::planning_day(),
        Box::new(SequentialIdGenerator::new()),
    )
}
