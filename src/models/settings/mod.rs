// Settings module
// Scheduler configuration surface

use serde::{Deserialize, Serialize};

use crate::models::todo_list::is_valid_hex_color;

/// Color given to an event when its list cannot be found.
pub const DEFAULT_EVENT_COLOR: &str = "#8B5CF6";

/// Grid granularity.
///
/// Each variant maps explicitly to a row height: two pixels per minute, so a
/// 15-minute slot is 30px, 30 minutes is 60px and a full hour is 120px.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SlotMinutes {
    Fifteen,
    Thirty,
    Sixty,
}

impl SlotMinutes {
    pub const ALL: [SlotMinutes; 3] = [SlotMinutes::Fifteen, SlotMinutes::Thirty, SlotMinutes::Sixty];

    pub fn minutes(self) -> u32 {
        match self {
            SlotMinutes::Fifteen => 15,
            SlotMinutes::Thirty => 30,
            SlotMinutes::Sixty => 60,
        }
    }

    /// Row height of one slot on the day grid
    pub fn pixels_per_slot(self) -> f32 {
        match self {
            SlotMinutes::Fifteen => 30.0,
            SlotMinutes::Thirty => 60.0,
            SlotMinutes::Sixty => 120.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SlotMinutes::Fifteen => "15 minutes",
            SlotMinutes::Thirty => "30 minutes",
            SlotMinutes::Sixty => "1 hour",
        }
    }
}

impl TryFrom<u32> for SlotMinutes {
    type Error = SettingsError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        match minutes {
            15 => Ok(SlotMinutes::Fifteen),
            30 => Ok(SlotMinutes::Thirty),
            60 => Ok(SlotMinutes::Sixty),
            other => Err(SettingsError::InvalidSlotMinutes(other)),
        }
    }
}

impl From<SlotMinutes> for u32 {
    fn from(slot: SlotMinutes) -> Self {
        slot.minutes()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("time increment must be 15, 30 or 60 minutes (got {0})")]
    InvalidSlotMinutes(u32),
    #[error("grid start hour must be between 0 and 23 (got {0})")]
    StartHourOutOfRange(u32),
    #[error("grid end hour must be between 1 and 24 (got {0})")]
    EndHourOutOfRange(u32),
    #[error("grid start hour {start} must be before end hour {end}")]
    EmptyRange { start: u32, end: u32 },
    #[error("fallback color '{0}' is not a #RRGGBB hex color")]
    InvalidFallbackColor(String),
}

/// Scheduler settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerSettings {
    pub slot_minutes: SlotMinutes,
    pub grid_start_hour: u32,
    pub grid_end_hour: u32,
    /// Used for events whose list lookup fails
    pub fallback_color: String,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            slot_minutes: SlotMinutes::Thirty,
            grid_start_hour: 8,
            grid_end_hour: 20,
            fallback_color: DEFAULT_EVENT_COLOR.to_string(),
        }
    }
}

impl SchedulerSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.grid_start_hour > 23 {
            return Err(SettingsError::StartHourOutOfRange(self.grid_start_hour));
        }
        if self.grid_end_hour == 0 || self.grid_end_hour > 24 {
            return Err(SettingsError::EndHourOutOfRange(self.grid_end_hour));
        }
        if self.grid_start_hour >= self.grid_end_hour {
            return Err(SettingsError::EmptyRange {
                start: self.grid_start_hour,
                end: self.grid_end_hour,
            });
        }
        if !is_valid_hex_color(&self.fallback_color) {
            return Err(SettingsError::InvalidFallbackColor(self.fallback_color.clone()));
        }
        Ok(())
    }
}
