// Task module
// Unscheduled to-do item belonging to a list

use serde::{Deserialize, Serialize};

/// An unscheduled to-do item.
///
/// A task lives in exactly one list at a time. When it is dropped onto the
/// time grid it leaves the task collection and is represented by a
/// [`ScheduledEvent`](crate::models::scheduled_event::ScheduledEvent) whose
/// `task_id` carries this task's `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub list_id: String,
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task
    ///
    /// # Arguments
    /// * `id` - Task identity, preserved across scheduling round trips
    /// * `title` - Task title (required, non-empty)
    /// * `list_id` - Owning list
    ///
    /// # Examples
    /// ```
    /// use day_planner::models::task::Task;
    ///
    /// let task = Task::new("1", "Morning workout", "1").unwrap();
    /// assert!(!task.completed);
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        list_id: impl Into<String>,
    ) -> Result<Self, String> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err("Task title cannot be empty".to_string());
        }

        Ok(Self {
            id: id.into(),
            title: title.trim().to_string(),
            list_id: list_id.into(),
            completed: false,
        })
    }

    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    pub fn belongs_to(&self, list_id: &str) -> bool {
        self.list_id == list_id
    }
}
