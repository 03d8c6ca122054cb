//! Placement transfer engine.
//!
//! Interprets the outcome of a drag gesture and moves the dragged item
//! between the task collection (unscheduled) and the event collection
//! (scheduled). A task is always in exactly one of the two collections.
//!
//! The engine is a pure function of its inputs: the collections are moved in
//! as a [`Placement`] and the replacement collections are moved back out, so
//! the caller swaps both in a single assignment.

mod resolve;
mod transitions;

use chrono::NaiveDate;
use std::fmt;

use crate::models::drop_target::DropTarget;
use crate::models::scheduled_event::ScheduledEvent;
use crate::models::settings::SchedulerSettings;
use crate::models::task::Task;
use crate::models::todo_list::TodoList;
use crate::services::ids::IdGenerator;

pub use resolve::{resolve_dragged, DraggedItem};

/// The two collections a drop can mutate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    pub tasks: Vec<Task>,
    pub events: Vec<ScheduledEvent>,
}

impl Placement {
    pub fn new(tasks: Vec<Task>, events: Vec<ScheduledEvent>) -> Self {
        Self { tasks, events }
    }
}

/// What a drop did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Task placed on the grid as a new event
    Scheduled { task_id: String, event_id: String },
    /// Event moved to another slot, identity kept
    Rescheduled { event_id: String },
    /// Event dragged back onto a list and restored as a task
    Unscheduled { event_id: String, task_id: String },
    /// Task moved between lists
    MovedToList {
        task_id: String,
        from: String,
        to: String,
    },
    /// Nothing changed
    Ignored(IgnoreReason),
}

impl Transition {
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Transition::Ignored(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Drag released over nothing
    NoTarget,
    /// Target tag did not parse, or names an impossible time
    MalformedTarget,
    /// Dragged id is neither a task nor an event
    UnknownItem,
    /// List target does not exist
    UnknownList,
    /// Task dropped on the list it already belongs to
    SameList,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IgnoreReason::NoTarget => "no drop target",
            IgnoreReason::MalformedTarget => "malformed drop target",
            IgnoreReason::UnknownItem => "dragged item not found",
            IgnoreReason::UnknownList => "target list not found",
            IgnoreReason::SameList => "task already in target list",
        };
        f.write_str(text)
    }
}

/// Applies drops against a fixed set of lists, settings and reference day.
pub struct PlacementEngine<'a> {
    lists: &'a [TodoList],
    settings: &'a SchedulerSettings,
    reference_date: NaiveDate,
}

impl<'a> PlacementEngine<'a> {
    /// `reference_date` is the day new start/end times are placed on.
    pub fn new(
        lists: &'a [TodoList],
        settings: &'a SchedulerSettings,
        reference_date: NaiveDate,
    ) -> Self {
        Self {
            lists,
            settings,
            reference_date,
        }
    }

    /// Apply a drop of `dragged_id` onto `target`.
    ///
    /// Returns the replacement collections and the transition taken. When the
    /// transition is [`Transition::Ignored`] the returned placement is the
    /// input, untouched.
    pub fn apply_drop(
        &self,
        dragged_id: &str,
        target: Option<&DropTarget>,
        placement: Placement,
        ids: &mut dyn IdGenerator,
    ) -> (Placement, Transition) {
        let Some(target) = target else {
            return ignore(placement, dragged_id, IgnoreReason::NoTarget);
        };

        let Some(item) = resolve_dragged(dragged_id, &placement.tasks, &placement.events) else {
            return ignore(placement, dragged_id, IgnoreReason::UnknownItem);
        };

        match (item, target) {
            (DraggedItem::Task(task), DropTarget::TimeSlot { hour, minute }) => {
                self.schedule_task(task, *hour, *minute, placement, ids)
            }
            (DraggedItem::Event(event), DropTarget::TimeSlot { hour, minute }) => {
                self.reschedule_event(event, *hour, *minute, placement)
            }
            (DraggedItem::Event(event), DropTarget::List { list_id }) => {
                self.unschedule_event(event, list_id, placement)
            }
            (DraggedItem::Task(task), DropTarget::List { list_id }) => {
                self.move_task(task, list_id, placement)
            }
        }
    }

    /// Same as [`apply_drop`](Self::apply_drop), for a raw target tag as
    /// reported by the drag capability. Malformed tags are ignored.
    pub fn apply_drop_tag(
        &self,
        dragged_id: &str,
        target_tag: Option<&str>,
        placement: Placement,
        ids: &mut dyn IdGenerator,
    ) -> (Placement, Transition) {
        let Some(tag) = target_tag else {
            return self.apply_drop(dragged_id, None, placement, ids);
        };

        match tag.parse::<DropTarget>() {
            Ok(target) => self.apply_drop(dragged_id, Some(&target), placement, ids),
            Err(e) => {
                log::debug!("Ignoring drop target '{}': {}", tag, e);
                ignore(placement, dragged_id, IgnoreReason::MalformedTarget)
            }
        }
    }
}

fn ignore(placement: Placement, dragged_id: &str, reason: IgnoreReason) -> (Placement, Transition) {
    log::debug!("Drop of '{}' ignored: {}", dragged_id, reason);
    (placement, Transition::Ignored(reason))
}
