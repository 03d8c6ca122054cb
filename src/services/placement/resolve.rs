use crate::models::scheduled_event::ScheduledEvent;
use crate::models::task::Task;

/// The item a drag gesture picked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraggedItem {
    Task(Task),
    Event(ScheduledEvent),
}

impl DraggedItem {
    pub fn id(&self) -> &str {
        match self {
            DraggedItem::Task(task) => &task.id,
            DraggedItem::Event(event) => &event.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            DraggedItem::Task(task) => &task.title,
            DraggedItem::Event(event) => &event.title,
        }
    }
}

/// Find the dragged id among unscheduled tasks, then scheduled events.
pub fn resolve_dragged(
    dragged_id: &str,
    tasks: &[Task],
    events: &[ScheduledEvent],
) -> Option<DraggedItem> {
    if let Some(task) = tasks.iter().find(|t| t.id == dragged_id) {
        return Some(DraggedItem::Task(task.clone()));
    }
    events
        .iter()
        .find(|e| e.id == dragged_id)
        .map(|event| DraggedItem::Event(event.clone()))
}
