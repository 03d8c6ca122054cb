//! Drop target identities.
//!
//! Droppable areas are identified by string tags: `time-<hour>-<minute>` for
//! a slot on the day grid and `list-<listId>` for a to-do list. Tags are
//! parsed once, where the drag capability hands them to the core.

use std::fmt;
use std::str::FromStr;

const TIME_PREFIX: &str = "time-";
const LIST_PREFIX: &str = "list-";

/// Where a dragged item was released.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// A slot boundary on the day grid
    TimeSlot { hour: u32, minute: u32 },
    /// A to-do list card
    List { list_id: String },
}

impl DropTarget {
    pub fn time_slot(hour: u32, minute: u32) -> Self {
        Self::TimeSlot { hour, minute }
    }

    pub fn list(list_id: impl Into<String>) -> Self {
        Self::List {
            list_id: list_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropTargetParseError {
    #[error("unrecognized drop target tag '{0}'")]
    UnknownTag(String),
    #[error("malformed time slot tag '{0}'")]
    MalformedTime(String),
    #[error("time slot {hour}:{minute:02} is not a valid time of day")]
    TimeOutOfRange { hour: u32, minute: u32 },
    #[error("list tag has an empty list id")]
    EmptyListId,
}

impl FromStr for DropTarget {
    type Err = DropTargetParseError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = tag.strip_prefix(TIME_PREFIX) {
            let (hour, minute) = rest
                .split_once('-')
                .ok_or_else(|| DropTargetParseError::MalformedTime(tag.to_string()))?;
            let hour: u32 = hour
                .parse()
                .map_err(|_| DropTargetParseError::MalformedTime(tag.to_string()))?;
            let minute: u32 = minute
                .parse()
                .map_err(|_| DropTargetParseError::MalformedTime(tag.to_string()))?;
            if hour > 23 || minute > 59 {
                return Err(DropTargetParseError::TimeOutOfRange { hour, minute });
            }
            return Ok(Self::TimeSlot { hour, minute });
        }

        if let Some(list_id) = tag.strip_prefix(LIST_PREFIX) {
            if list_id.is_empty() {
                return Err(DropTargetParseError::EmptyListId);
            }
            return Ok(Self::List {
                list_id: list_id.to_string(),
            });
        }

        Err(DropTargetParseError::UnknownTag(tag.to_string()))
    }
}

impl fmt::Display for DropTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimeSlot { hour, minute } => write!(f, "{TIME_PREFIX}{hour}-{minute}"),
            Self::List { list_id } => write!(f, "{LIST_PREFIX}{list_id}"),
        }
    }
}
