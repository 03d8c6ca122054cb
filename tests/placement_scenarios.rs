// End-to-end drop and resize scenarios through the board and the engine

mod fixtures;

use day_planner::models::drop_target::DropTarget;
use day_planner::models::settings::{SchedulerSettings, SlotMinutes};
use day_planner::models::task::Task;
use day_planner::services::ids::SequentialIdGenerator;
use day_planner::services::placement::{IgnoreReason, PlacementEngine, Transition};
use day_planner::services::resize::ResizeSession;
use fixtures::dates::{at, planning_day};
use fixtures::{data, sample_board, settings};
use pretty_assertions::assert_eq;

#[test]
fn test_task_dropped_on_slot_becomes_event() {
    let lists = data::lists();
    let settings = settings(SlotMinutes::Thirty);
    let engine = PlacementEngine::new(&lists, &settings, planning_day());
    let mut ids = SequentialIdGenerator::new();

    let (placement, transition) =
        engine.apply_drop_tag("1", Some("time-9-30"), data::placement_with_run(), &mut ids);

    assert_eq!(
        transition,
        Transition::Scheduled {
            task_id: "1".into(),
            event_id: "event-1".into()
        }
    );
    assert!(placement.tasks.is_empty());
    assert_eq!(placement.events.len(), 1);

    let event = &placement.events[0];
    assert_eq!(event.task_id, "1");
    assert_eq!(event.title, "Run");
    assert_eq!(event.start, at(9, 30));
    assert_eq!(event.end, at(10, 0));
    assert_eq!(event.list_id, "1");
    assert_eq!(event.color, "#3B82F6");
}

#[test]
fn test_resize_by_forty_pixels_snaps_to_next_slot() {
    let mut board = sample_board();
    board.on_drag_end("1", Some("time-9-30"));
    let event = board.events()[0].clone();
    let layout = board.grid().event_layout(&event).unwrap();
    assert_eq!(layout.height, 60.0);

    let mut session = ResizeSession::new();
    session.press(event.id.clone(), 300.0, layout.height, board.grid());
    let commit = session.release(340.0, &event).unwrap();
    assert!(board.apply_resize(&commit));

    let resized = board.event(&event.id).unwrap();
    assert_eq!(resized.start, at(9, 30));
    assert_eq!(resized.end, at(10, 30));
    assert_eq!(resized.duration_minutes(), 60);
}

#[test]
fn test_resize_after_narrowing_grid_keeps_hidden_start() {
    let mut board = sample_board();
    board.on_drag_end("1", Some("time-9-0"));
    let event_id = board.events()[0].id.clone();
    assert!(board.resize_event(&event_id, at(11, 0)));

    board
        .set_settings(SchedulerSettings {
            grid_start_hour: 10,
            ..SchedulerSettings::default()
        })
        .unwrap();
    let event = board.event(&event_id).unwrap().clone();
    let layout = board.grid().event_layout(&event).unwrap();
    assert_eq!(layout.height, 120.0);

    // Press and release in place: nothing changes
    let mut session = ResizeSession::new();
    session.press_event(&event, 500.0, board.grid());
    let commit = session.release(500.0, &event).unwrap();
    assert!(board.apply_resize(&commit));
    assert_eq!(board.event(&event_id).unwrap().end, at(11, 0));

    // One slot down adds one slot to the real duration
    session.press_event(&event, 500.0, board.grid());
    let commit = session.release(560.0, &event).unwrap();
    assert!(board.apply_resize(&commit));
    let resized = board.event(&event_id).unwrap();
    assert_eq!(resized.start, at(9, 0));
    assert_eq!(resized.end, at(11, 30));
}

#[test]
fn test_event_dropped_on_list_becomes_task() {
    let mut board = sample_board();
    board.on_drag_end("1", Some("time-9-0"));
    let event_id = board.events()[0].id.clone();

    let transition = board.on_drag_end(&event_id, Some("list-2"));

    assert_eq!(
        transition,
        Transition::Unscheduled {
            event_id,
            task_id: "1".into()
        }
    );
    assert!(board.events().is_empty());
    let restored: Vec<&Task> = board.tasks_in_list("2").filter(|t| t.id == "1").collect();
    assert_eq!(restored.len(), 1);
    assert!(!restored[0].completed);
    assert!(board.check_invariants().is_ok());
}

#[test]
fn test_drop_without_target_changes_nothing() {
    let lists = data::lists();
    let settings = settings(SlotMinutes::Thirty);
    let engine = PlacementEngine::new(&lists, &settings, planning_day());
    let before = data::placement_with_run();

    let (after, transition) =
        engine.apply_drop("1", None, before.clone(), &mut SequentialIdGenerator::new());

    assert_eq!(transition, Transition::Ignored(IgnoreReason::NoTarget));
    assert_eq!(after, before);
}

#[test]
fn test_round_trip_restores_task() {
    let mut board = sample_board();
    board.toggle_task("2");
    let original = board.tasks().iter().find(|t| t.id == "2").cloned().unwrap();
    assert!(original.completed);

    board.apply_drop("2", Some(&DropTarget::time_slot(14, 0)));
    let event_id = board.events()[0].id.clone();
    board.apply_drop(&event_id, Some(&DropTarget::list(original.list_id.clone())));

    let restored = board.tasks().iter().find(|t| t.id == "2").cloned().unwrap();
    assert_eq!(
        restored,
        Task {
            completed: false,
            ..original
        }
    );
}

#[test]
fn test_rescheduled_event_keeps_identity() {
    let mut board = sample_board();
    board.on_drag_end("3", Some("time-10-0"));
    let event_id = board.events()[0].id.clone();
    board.resize_event(&event_id, at(11, 30));

    let transition = board.on_drag_end(&event_id, Some("time-15-30"));

    assert_eq!(transition, Transition::Rescheduled { event_id: event_id.clone() });
    let event = board.event(&event_id).unwrap();
    assert_eq!(event.start, at(15, 30));
    assert_eq!(event.end, at(16, 0));
}

#[test]
fn test_task_moves_between_lists() {
    let mut board = sample_board();
    let transition = board.on_drag_end("1", Some("list-2"));

    assert_eq!(
        transition,
        Transition::MovedToList {
            task_id: "1".into(),
            from: "1".into(),
            to: "2".into()
        }
    );
    assert_eq!(board.tasks_in_list("2").count(), 3);
    assert_eq!(board.tasks_in_list("1").count(), 0);
}

#[test]
fn test_bad_targets_are_ignored() {
    let mut board = sample_board();
    let tasks_before = board.tasks().to_vec();

    assert_eq!(
        board.on_drag_end("1", Some("time-25-00")),
        Transition::Ignored(IgnoreReason::MalformedTarget)
    );
    assert_eq!(
        board.on_drag_end("1", Some("shelf-3")),
        Transition::Ignored(IgnoreReason::MalformedTarget)
    );
    assert_eq!(
        board.on_drag_end("1", Some("list-99")),
        Transition::Ignored(IgnoreReason::UnknownList)
    );
    assert_eq!(
        board.on_drag_end("nope", Some("time-9-0")),
        Transition::Ignored(IgnoreReason::UnknownItem)
    );
    assert_eq!(board.tasks(), tasks_before.as_slice());
    assert!(board.events().is_empty());
}

#[test]
fn test_fifteen_minute_grid_schedules_short_events() {
    let lists = data::lists();
    let settings = settings(SlotMinutes::Fifteen);
    let engine = PlacementEngine::new(&lists, &settings, planning_day());

    let (placement, _) = engine.apply_drop(
        "1",
        Some(&DropTarget::time_slot(8, 45)),
        data::placement_with_run(),
        &mut SequentialIdGenerator::new(),
    );

    assert_eq!(placement.events[0].end, at(9, 0));
}
