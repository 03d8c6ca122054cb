//! To-do list model.
//!
//! Lists group tasks and give them a display color. The color is copied onto
//! a scheduled event when one of the list's tasks is placed on the grid.

use serde::{Deserialize, Serialize};

/// Colors assigned to new lists, in order.
pub const LIST_PALETTE: [&str; 5] = ["#8B5CF6", "#3B82F6", "#10B981", "#F59E0B", "#EF4444"];

/// A labeled list of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: String,
    /// Display name of the list
    pub title: String,
    /// Hex color code for the list (e.g., "#3B82F6")
    pub color: String,
}

impl TodoList {
    /// Create a new list with the given title and color.
    pub fn new(id: impl Into<String>, title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: color.into(),
        }
    }

    /// Validate the list data.
    pub fn validate(&self) -> Result<(), ListValidationError> {
        if self.title.trim().is_empty() {
            return Err(ListValidationError::EmptyTitle);
        }
        if !is_valid_hex_color(&self.color) {
            return Err(ListValidationError::InvalidColor);
        }
        Ok(())
    }
}

/// Color for the list created after `existing` lists, cycling through [`LIST_PALETTE`].
pub fn palette_color(existing: usize) -> &'static str {
    LIST_PALETTE[existing % LIST_PALETTE.len()]
}

/// Validation errors for TodoList.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListValidationError {
    #[error("List title cannot be empty")]
    EmptyTitle,
    #[error("Invalid color format (use hex like #FF0000)")]
    InvalidColor,
}

/// Check if a string is a `#RRGGBB` hex color code.
pub fn is_valid_hex_color(color: &str) -> bool {
    let Some(hex) = color.trim().strip_prefix('#') else {
        return false;
    };
    hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
}
