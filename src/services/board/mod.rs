//! Board service: the single owner of lists, tasks and scheduled events.
//!
//! Every drag, resize and list/task edit goes through `&mut Board`, which
//! keeps one writer for the shared collections. Drops are computed by the
//! [`PlacementEngine`] and the resulting task and event collections are
//! swapped in together.

mod invariants;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

use crate::models::drop_target::DropTarget;
use crate::models::scheduled_event::ScheduledEvent;
use crate::models::settings::{SchedulerSettings, SettingsError};
use crate::models::task::Task;
use crate::models::todo_list::{palette_color, TodoList};
use crate::services::geometry::{EventLayout, TimeGrid};
use crate::services::ids::IdGenerator;
use crate::services::placement::{resolve_dragged, DraggedItem, Placement, PlacementEngine, Transition};
use crate::services::resize::ResizeCommit;

pub use invariants::InvariantViolation;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("{0} title cannot be empty")]
    EmptyTitle(&'static str),
    #[error("list '{0}' does not exist")]
    UnknownList(String),
}

pub struct Board {
    lists: Vec<TodoList>,
    placement: Placement,
    settings: SchedulerSettings,
    current_date: NaiveDate,
    ids: Box<dyn IdGenerator>,
}

impl Board {
    /// Create an empty board showing `current_date`.
    ///
    /// `settings` are expected to be valid; use [`set_settings`](Self::set_settings)
    /// for values coming from the user.
    pub fn new(settings: SchedulerSettings, current_date: NaiveDate, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            lists: Vec::new(),
            placement: Placement::default(),
            settings,
            current_date,
            ids,
        }
    }

    /// Board pre-filled with two lists and three tasks.
    pub fn with_sample_data(
        settings: SchedulerSettings,
        current_date: NaiveDate,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        let mut board = Self::new(settings, current_date, ids);
        board.lists = vec![
            TodoList::new("1", "Personal Tasks", palette_color(0)),
            TodoList::new("2", "Work Tasks", palette_color(1)),
        ];
        board.placement.tasks = vec![
            Task {
                id: "1".into(),
                title: "Morning workout".into(),
                list_id: "1".into(),
                completed: false,
            },
            Task {
                id: "2".into(),
                title: "Review project proposal".into(),
                list_id: "2".into(),
                completed: false,
            },
            Task {
                id: "3".into(),
                title: "Team meeting".into(),
                list_id: "2".into(),
                completed: false,
            },
        ];
        board
    }

    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn tasks(&self) -> &[Task] {
        &self.placement.tasks
    }

    pub fn events(&self) -> &[ScheduledEvent] {
        &self.placement.events
    }

    pub fn settings(&self) -> &SchedulerSettings {
        &self.settings
    }

    pub fn grid(&self) -> TimeGrid {
        TimeGrid::from_settings(&self.settings)
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn list(&self, list_id: &str) -> Option<&TodoList> {
        self.lists.iter().find(|l| l.id == list_id)
    }

    pub fn event(&self, event_id: &str) -> Option<&ScheduledEvent> {
        self.placement.events.iter().find(|e| e.id == event_id)
    }

    pub fn tasks_in_list<'a>(&'a self, list_id: &'a str) -> impl Iterator<Item = &'a Task> + 'a {
        self.placement.tasks.iter().filter(move |t| t.belongs_to(list_id))
    }

    /// Events shown on the currently displayed day
    pub fn events_on_current_day(&self) -> impl Iterator<Item = &ScheduledEvent> + '_ {
        let date = self.current_date;
        self.placement.events.iter().filter(move |e| e.is_on(date))
    }

    /// Grid placement of every event on the displayed day. Events outside the
    /// visible hours are pinned to the nearest edge so they can still be
    /// dragged.
    pub fn event_layouts(&self) -> Vec<(&ScheduledEvent, EventLayout)> {
        let grid = self.grid();
        self.events_on_current_day()
            .map(|event| {
                let layout = grid
                    .event_layout(event)
                    .unwrap_or_else(|| grid.pinned_layout(event));
                (event, layout)
            })
            .collect()
    }

    // --- List and task editing ---

    pub fn add_list(&mut self, title: &str) -> Result<&TodoList, BoardError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(BoardError::EmptyTitle("List"));
        }

        let list = TodoList::new(
            self.ids.next_id("list"),
            title,
            palette_color(self.lists.len()),
        );
        log::info!("Created list '{}' ({})", list.title, list.id);
        self.lists.push(list);
        Ok(&self.lists[self.lists.len() - 1])
    }

    pub fn add_task(&mut self, list_id: &str, title: &str) -> Result<&Task, BoardError> {
        if self.list(list_id).is_none() {
            return Err(BoardError::UnknownList(list_id.to_string()));
        }
        let task = Task::new(self.ids.next_id("task"), title, list_id)
            .map_err(|_| BoardError::EmptyTitle("Task"))?;

        log::info!("Added task '{}' to list '{}'", task.title, list_id);
        self.placement.tasks.push(task);
        Ok(&self.placement.tasks[self.placement.tasks.len() - 1])
    }

    /// Flip completion of an unscheduled task; false if no such task.
    pub fn toggle_task(&mut self, task_id: &str) -> bool {
        match self.placement.tasks.iter_mut().find(|t| t.id == task_id) {
            Some(task) => {
                task.toggle();
                true
            }
            None => false,
        }
    }

    pub fn delete_task(&mut self, task_id: &str) -> bool {
        let before = self.placement.tasks.len();
        self.placement.tasks.retain(|t| t.id != task_id);
        let removed = self.placement.tasks.len() != before;
        if removed {
            log::info!("Deleted task '{}'", task_id);
        }
        removed
    }

    // --- Drag and drop ---

    /// The item picked up by a drag, for the drag overlay
    pub fn on_drag_start(&self, item_id: &str) -> Option<DraggedItem> {
        resolve_dragged(item_id, &self.placement.tasks, &self.placement.events)
    }

    /// Handle a drag release reported with a raw target tag.
    pub fn on_drag_end(&mut self, item_id: &str, target_id: Option<&str>) -> Transition {
        self.with_engine(|engine, placement, ids| {
            engine.apply_drop_tag(item_id, target_id, placement, ids)
        })
    }

    pub fn apply_drop(&mut self, item_id: &str, target: Option<&DropTarget>) -> Transition {
        self.with_engine(|engine, placement, ids| engine.apply_drop(item_id, target, placement, ids))
    }

    /// Run one drop against the current placement and swap the result in.
    fn with_engine<F>(&mut self, apply: F) -> Transition
    where
        F: FnOnce(&PlacementEngine<'_>, Placement, &mut dyn IdGenerator) -> (Placement, Transition),
    {
        let placement = std::mem::take(&mut self.placement);
        let engine = PlacementEngine::new(&self.lists, &self.settings, self.current_date);
        let (next, transition) = apply(&engine, placement, self.ids.as_mut());
        self.placement = next;
        transition
    }

    // --- Resize ---

    /// Set a new end time for an event. `start` is never touched; an end at or
    /// before the start is clamped to one slot.
    pub fn resize_event(&mut self, event_id: &str, new_end: NaiveDateTime) -> bool {
        let min_duration = Duration::minutes(self.settings.slot_minutes.minutes() as i64);
        let Some(event) = self.placement.events.iter_mut().find(|e| e.id == event_id) else {
            log::debug!("Resize of unknown event '{}' ignored", event_id);
            return false;
        };

        event.end = if new_end <= event.start {
            log::debug!("Resize of {} would end before it starts, clamping", event_id);
            event.start + min_duration
        } else {
            new_end
        };
        true
    }

    pub fn apply_resize(&mut self, commit: &ResizeCommit) -> bool {
        self.resize_event(&commit.event_id, commit.new_end)
    }

    // --- Settings and navigation ---

    pub fn set_settings(&mut self, settings: SchedulerSettings) -> Result<(), SettingsError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    pub fn go_to_previous_day(&mut self) {
        self.current_date = self.current_date - Duration::days(1);
    }

    pub fn go_to_next_day(&mut self) {
        self.current_date = self.current_date + Duration::days(1);
    }

    pub fn go_to_today(&mut self) {
        self.current_date = Local::now().date_naive();
    }

    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        invariants::check(&self.lists, &self.placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::SlotMinutes;
    use crate::services::ids::SequentialIdGenerator;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        day().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn board() -> Board {
        Board::with_sample_data(
            SchedulerSettings::default(),
            day(),
            Box::new(SequentialIdGenerator::new()),
        )
    }

    #[test]
    fn test_sample_data() {
        let board = board();
        assert_eq!(board.lists().len(), 2);
        assert_eq!(board.tasks().len(), 3);
        assert_eq!(board.tasks_in_list("2").count(), 2);
        assert!(board.events().is_empty());
        assert!(board.check_invariants().is_ok());
    }

    #[test]
    fn test_add_list_cycles_colors() {
        let mut board = board();
        let color = board.add_list("Errands").unwrap().color.clone();
        assert_eq!(color, "#10B981");
        assert_eq!(board.add_list("  ").unwrap_err(), BoardError::EmptyTitle("List"));
    }

    #[test]
    fn test_add_task() {
        let mut board = board();
        let task = board.add_task("1", "Stretch").unwrap();
        assert_eq!(task.id, "task-1");
        assert_eq!(task.list_id, "1");

        assert_eq!(
            board.add_task("9", "Stretch").unwrap_err(),
            BoardError::UnknownList("9".to_string())
        );
        assert_eq!(board.add_task("1", "").unwrap_err(), BoardError::EmptyTitle("Task"));
    }

    #[test]
    fn test_toggle_and_delete() {
        let mut board = board();
        assert!(board.toggle_task("1"));
        assert!(board.tasks()[0].completed);
        assert!(!board.toggle_task("nope"));

        assert!(board.delete_task("1"));
        assert!(!board.delete_task("1"));
        assert_eq!(board.tasks().len(), 2);
    }

    #[test]
    fn test_drag_end_schedules_on_current_day() {
        let mut board = board();
        board.go_to_next_day();

        let transition = board.on_drag_end("1", Some("time-9-30"));

        assert!(transition.is_mutation());
        let event = &board.events()[0];
        assert_eq!(event.start.date(), day() + Duration::days(1));
        assert_eq!(board.events_on_current_day().count(), 1);
        board.go_to_previous_day();
        assert_eq!(board.events_on_current_day().count(), 0);
        assert!(board.check_invariants().is_ok());
    }

    #[test]
    fn test_drag_start_resolves_item() {
        let board = board();
        let item = board.on_drag_start("2").unwrap();
        assert_eq!(item.title(), "Review project proposal");
        assert!(board.on_drag_start("event-x").is_none());
    }

    #[test]
    fn test_resize_only_moves_end() {
        let mut board = board();
        board.apply_drop("1", Some(&DropTarget::time_slot(9, 30)));
        let event_id = board.events()[0].id.clone();

        assert!(board.resize_event(&event_id, at(11, 0)));
        let event = board.event(&event_id).unwrap();
        assert_eq!(event.start, at(9, 30));
        assert_eq!(event.end, at(11, 0));
    }

    #[test]
    fn test_resize_clamps_to_one_slot() {
        let mut board = board();
        board.apply_drop("1", Some(&DropTarget::time_slot(9, 30)));
        let event_id = board.events()[0].id.clone();

        assert!(board.resize_event(&event_id, at(9, 0)));
        assert_eq!(board.event(&event_id).unwrap().end, at(10, 0));
        assert!(!board.resize_event("missing", at(12, 0)));
    }

    #[test]
    fn test_event_layouts_follow_settings() {
        let mut board = board();
        board.apply_drop("1", Some(&DropTarget::time_slot(9, 0)));
        let (_, layout) = board.event_layouts()[0];
        assert_eq!(layout, EventLayout::visible(60.0 * 2.0, 60.0));

        board
            .set_settings(SchedulerSettings {
                slot_minutes: SlotMinutes::Fifteen,
                ..SchedulerSettings::default()
            })
            .unwrap();
        let (_, layout) = board.event_layouts()[0];
        assert_eq!(layout, EventLayout::visible(120.0, 60.0));
    }

    #[test]
    fn test_events_outside_visible_hours_are_pinned() {
        let mut board = board();
        board.apply_drop("1", Some(&DropTarget::time_slot(8, 0)));
        board.apply_drop("2", Some(&DropTarget::time_slot(19, 0)));
        board
            .set_settings(SchedulerSettings {
                grid_start_hour: 10,
                grid_end_hour: 18,
                ..SchedulerSettings::default()
            })
            .unwrap();

        let layouts = board.event_layouts();
        assert_eq!(layouts.len(), 2);
        let grid_height = board.grid().grid_height();
        assert!(layouts.iter().all(|(_, layout)| layout.pinned));
        assert_eq!(layouts[0].1.top, 0.0);
        assert_eq!(layouts[1].1.top + layouts[1].1.height, grid_height);

        // A pinned event can still go back to a list
        let event_id = layouts[0].0.id.clone();
        assert!(board.on_drag_end(&event_id, Some("list-1")).is_mutation());
        assert!(board.check_invariants().is_ok());
    }

    #[test]
    fn test_set_settings_rejects_invalid() {
        let mut board = board();
        let invalid = SchedulerSettings {
            grid_start_hour: 12,
            grid_end_hour: 12,
            ..SchedulerSettings::default()
        };
        assert!(board.set_settings(invalid).is_err());
        assert_eq!(board.settings(), &SchedulerSettings::default());
    }
}
