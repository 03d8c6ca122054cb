// The four drop transitions

use chrono::{Duration, NaiveDateTime};

use super::{ignore, IgnoreReason, Placement, PlacementEngine, Transition};
use crate::models::scheduled_event::ScheduledEvent;
use crate::models::task::Task;
use crate::services::ids::IdGenerator;
use crate::utils::date::at_time;

impl PlacementEngine<'_> {
    /// Start/end for a drop on a slot: one increment long, on the reference day.
    fn slot_range(&self, hour: u32, minute: u32) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let start = at_time(self.reference_date, hour, minute)?;
        let end = start + Duration::minutes(self.settings.slot_minutes.minutes() as i64);
        Some((start, end))
    }

    fn list_exists(&self, list_id: &str) -> bool {
        self.lists.iter().any(|l| l.id == list_id)
    }

    fn list_color(&self, list_id: &str) -> String {
        match self.lists.iter().find(|l| l.id == list_id) {
            Some(list) => list.color.clone(),
            None => {
                log::debug!(
                    "List '{}' not found, using fallback color {}",
                    list_id,
                    self.settings.fallback_color
                );
                self.settings.fallback_color.clone()
            }
        }
    }

    pub(super) fn schedule_task(
        &self,
        task: Task,
        hour: u32,
        minute: u32,
        mut placement: Placement,
        ids: &mut dyn IdGenerator,
    ) -> (Placement, Transition) {
        let Some((start, end)) = self.slot_range(hour, minute) else {
            return ignore(placement, &task.id, IgnoreReason::MalformedTarget);
        };

        let event = ScheduledEvent {
            id: ids.next_id("event"),
            task_id: task.id.clone(),
            title: task.title.clone(),
            start,
            end,
            color: self.list_color(&task.list_id),
            list_id: task.list_id.clone(),
        };
        log::debug!(
            "Scheduled task '{}' as {} at {}",
            task.id,
            event.id,
            start.format("%H:%M")
        );

        let transition = Transition::Scheduled {
            task_id: task.id.clone(),
            event_id: event.id.clone(),
        };
        placement.tasks.retain(|t| t.id != task.id);
        placement.events.push(event);
        (placement, transition)
    }

    pub(super) fn reschedule_event(
        &self,
        event: ScheduledEvent,
        hour: u32,
        minute: u32,
        mut placement: Placement,
    ) -> (Placement, Transition) {
        let Some((start, end)) = self.slot_range(hour, minute) else {
            return ignore(placement, &event.id, IgnoreReason::MalformedTarget);
        };

        if let Some(existing) = placement.events.iter_mut().find(|e| e.id == event.id) {
            existing.start = start;
            existing.end = end;
        }
        log::debug!("Rescheduled {} to {}", event.id, start.format("%H:%M"));

        (placement, Transition::Rescheduled { event_id: event.id })
    }

    pub(super) fn unschedule_event(
        &self,
        event: ScheduledEvent,
        list_id: &str,
        mut placement: Placement,
    ) -> (Placement, Transition) {
        if !self.list_exists(list_id) {
            return ignore(placement, &event.id, IgnoreReason::UnknownList);
        }

        let task = Task {
            id: event.task_id.clone(),
            title: event.title.clone(),
            list_id: list_id.to_string(),
            completed: false,
        };
        log::debug!(
            "Unscheduled {} back to task '{}' in list '{}'",
            event.id,
            task.id,
            list_id
        );

        placement.events.retain(|e| e.id != event.id);
        placement.tasks.push(task);
        (
            placement,
            Transition::Unscheduled {
                event_id: event.id,
                task_id: event.task_id,
            },
        )
    }

    pub(super) fn move_task(
        &self,
        task: Task,
        list_id: &str,
        mut placement: Placement,
    ) -> (Placement, Transition) {
        if task.list_id == list_id {
            return ignore(placement, &task.id, IgnoreReason::SameList);
        }
        if !self.list_exists(list_id) {
            return ignore(placement, &task.id, IgnoreReason::UnknownList);
        }

        if let Some(existing) = placement.tasks.iter_mut().find(|t| t.id == task.id) {
            existing.list_id = list_id.to_string();
        }
        log::debug!(
            "Moved task '{}' from list '{}' to '{}'",
            task.id,
            task.list_id,
            list_id
        );

        (
            placement,
            Transition::MovedToList {
                task_id: task.id,
                from: task.list_id,
                to: list_id.to_string(),
            },
        )
    }
}
