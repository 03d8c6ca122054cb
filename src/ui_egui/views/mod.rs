pub mod scheduler;
pub mod todo_section;
pub mod utils;

pub use scheduler::SchedulerView;
pub use todo_section::{TodoAction, TodoSection, TodoSectionState};
