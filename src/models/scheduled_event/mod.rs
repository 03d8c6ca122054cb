// Scheduled event module
// A task placed on the day grid with a concrete start and end

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A task placed on the calendar.
///
/// `id` identifies the scheduling; `task_id` identifies the task it came
/// from and is restored as the task id when the event is dragged back onto
/// a list. Only the time-of-day of `start`/`end` drives grid placement; the
/// date picks which day the event is shown on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub id: String,
    pub task_id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Hex color copied from the list at scheduling time
    pub color: String,
    pub list_id: String,
}

impl ScheduledEvent {
    /// Create a new scheduled event
    ///
    /// # Returns
    /// Returns `Result<ScheduledEvent, String>`; `end` must be after `start`
    ///
    /// # Examples
    /// ```
    /// use day_planner::models::scheduled_event::ScheduledEvent;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
    /// let start = day.and_hms_opt(9, 30, 0).unwrap();
    /// let end = day.and_hms_opt(10, 0, 0).unwrap();
    /// let event = ScheduledEvent::new("event-1", "1", "Run", start, end, "#8B5CF6", "1").unwrap();
    /// assert_eq!(event.duration_minutes(), 30);
    /// ```
    pub fn new(
        id: impl Into<String>,
        task_id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        color: impl Into<String>,
        list_id: impl Into<String>,
    ) -> Result<Self, String> {
        let event = Self {
            id: id.into(),
            task_id: task_id.into(),
            title: title.into(),
            start,
            end,
            color: color.into(),
            list_id: list_id.into(),
        };
        event.validate()?;
        Ok(event)
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.end <= self.start {
            return Err("Event end time must be after start time".to_string());
        }
        Ok(())
    }

    /// Get the duration of the event
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    /// Whether the event starts on the given day
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.start.date() == date
    }
}
