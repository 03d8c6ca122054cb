// Module exports for models

pub mod drop_target;
pub mod scheduled_event;
pub mod settings;
pub mod task;
pub mod todo_list;
