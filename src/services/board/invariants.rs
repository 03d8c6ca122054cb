//! Consistency checks between lists, tasks and scheduled events.

use std::collections::HashSet;

use crate::models::todo_list::TodoList;
use crate::services::placement::Placement;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("task '{0}' is both unscheduled and scheduled")]
    TaskInBothCollections(String),
    #[error("task '{0}' appears more than once")]
    DuplicateTask(String),
    #[error("{kind} '{id}' references missing list '{list_id}'")]
    DanglingList {
        kind: &'static str,
        id: String,
        list_id: String,
    },
    #[error("event '{0}' does not end after it starts")]
    EmptyEvent(String),
}

/// Every task has exactly one home, every list reference resolves and every
/// event has a positive duration.
pub(super) fn check(lists: &[TodoList], placement: &Placement) -> Result<(), InvariantViolation> {
    let list_ids: HashSet<&str> = lists.iter().map(|l| l.id.as_str()).collect();
    let mut homes: HashSet<&str> = HashSet::new();

    for task in &placement.tasks {
        if !homes.insert(task.id.as_str()) {
            return Err(InvariantViolation::DuplicateTask(task.id.clone()));
        }
        if !list_ids.contains(task.list_id.as_str()) {
            return Err(InvariantViolation::DanglingList {
                kind: "task",
                id: task.id.clone(),
                list_id: task.list_id.clone(),
            });
        }
    }

    for event in &placement.events {
        if !homes.insert(event.task_id.as_str()) {
            let in_tasks = placement.tasks.iter().any(|t| t.id == event.task_id);
            return Err(if in_tasks {
                InvariantViolation::TaskInBothCollections(event.task_id.clone())
            } else {
                InvariantViolation::DuplicateTask(event.task_id.clone())
            });
        }
        if !list_ids.contains(event.list_id.as_str()) {
            return Err(InvariantViolation::DanglingList {
                kind: "event",
                id: event.id.clone(),
                list_id: event.list_id.clone(),
            });
        }
        if event.end <= event.start {
            return Err(InvariantViolation::EmptyEvent(event.id.clone()));
        }
    }

    Ok(())
}
