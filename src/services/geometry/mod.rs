//! Time grid geometry.
//!
//! Maps clock times to vertical pixel offsets on the day grid and back. All
//! positions are recomputed from time values on demand, so changing the
//! increment or visible range never needs to migrate stored state.

pub mod quantize;

use chrono::NaiveTime;
use std::fmt;

use crate::models::drop_target::DropTarget;
use crate::models::scheduled_event::ScheduledEvent;
use crate::models::settings::{SchedulerSettings, SlotMinutes};
use crate::utils::date::minutes_of_day;

/// A slot boundary on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotTime {
    pub hour: u32,
    pub minute: u32,
}

impl SlotTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    fn from_minutes(minutes: u32) -> Self {
        Self {
            hour: minutes / 60,
            minute: minutes % 60,
        }
    }

    pub fn total_minutes(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    pub fn is_hour_start(&self) -> bool {
        self.minute == 0
    }

    /// `None` for the 24:00 boundary
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
    }

    pub fn drop_target(&self) -> DropTarget {
        DropTarget::time_slot(self.hour, self.minute)
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Height of the stub drawn for an event outside the visible hours
pub const PINNED_HEIGHT: f32 = 16.0;

/// Vertical placement of an event block, relative to the top of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventLayout {
    pub top: f32,
    pub height: f32,
    /// Event lies outside the visible hours and is drawn as a stub on the edge
    pub pinned: bool,
}

impl EventLayout {
    pub fn visible(top: f32, height: f32) -> Self {
        Self {
            top,
            height,
            pinned: false,
        }
    }
}

/// Geometry of the visible day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeGrid {
    slot: SlotMinutes,
    start_hour: u32,
    end_hour: u32,
}

impl TimeGrid {
    /// Build a grid from an already validated range (`start_hour < end_hour <= 24`).
    pub fn new(slot: SlotMinutes, start_hour: u32, end_hour: u32) -> Self {
        debug_assert!(start_hour < end_hour && end_hour <= 24);
        Self {
            slot,
            start_hour,
            end_hour,
        }
    }

    pub fn from_settings(settings: &SchedulerSettings) -> Self {
        Self::new(
            settings.slot_minutes,
            settings.grid_start_hour,
            settings.grid_end_hour,
        )
    }

    pub fn slot(&self) -> SlotMinutes {
        self.slot
    }

    pub fn slot_minutes(&self) -> u32 {
        self.slot.minutes()
    }

    pub fn pixels_per_slot(&self) -> f32 {
        self.slot.pixels_per_slot()
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    fn start_minutes(&self) -> u32 {
        self.start_hour * 60
    }

    fn end_minutes(&self) -> u32 {
        self.end_hour * 60
    }

    pub fn slot_count(&self) -> u32 {
        (self.end_minutes() - self.start_minutes()) / self.slot_minutes()
    }

    pub fn grid_height(&self) -> f32 {
        self.slot_count() as f32 * self.pixels_per_slot()
    }

    /// Offset of a time of day from the top of the grid.
    ///
    /// Times before the first slot map to 0 and times after the last slot map
    /// to [`grid_height`](Self::grid_height).
    pub fn time_to_offset(&self, time: NaiveTime) -> f32 {
        self.minutes_to_offset(minutes_of_day(time))
    }

    fn minutes_to_offset(&self, minutes: u32) -> f32 {
        let clamped = minutes.clamp(self.start_minutes(), self.end_minutes());
        let slots = (clamped - self.start_minutes()) as f32 / self.slot_minutes() as f32;
        slots * self.pixels_per_slot()
    }

    pub fn duration_to_height(&self, minutes: i64) -> f32 {
        (minutes as f32 / self.slot_minutes() as f32) * self.pixels_per_slot()
    }

    /// Slot containing the given offset, clamped to the first and last slot.
    pub fn offset_to_time(&self, offset: f32) -> SlotTime {
        let last = self.slot_count().saturating_sub(1);
        let index = if offset.is_finite() && offset > 0.0 {
            ((offset / self.pixels_per_slot()).floor() as u32).min(last)
        } else {
            0
        };
        SlotTime::from_minutes(self.start_minutes() + index * self.slot_minutes())
    }

    /// Every slot boundary from the start of the grid up to (not including) its end.
    pub fn enumerate_slots(&self) -> SlotIter {
        SlotIter {
            next: self.start_minutes(),
            end: self.end_minutes(),
            step: self.slot_minutes(),
        }
    }

    /// Where an event is drawn, clipped to the visible range.
    ///
    /// Returns `None` when the event lies entirely outside the grid.
    pub fn event_layout(&self, event: &ScheduledEvent) -> Option<EventLayout> {
        let start = minutes_of_day(event.start.time()) as i64;
        let end = start + event.duration_minutes();

        let grid_start = self.start_minutes() as i64;
        let grid_end = self.end_minutes() as i64;
        if end <= grid_start || start >= grid_end {
            return None;
        }

        let top = self.minutes_to_offset(start.max(grid_start) as u32);
        let bottom = self.minutes_to_offset(end.min(grid_end) as u32);
        Some(EventLayout::visible(top, bottom - top))
    }

    /// Stub on the top edge for events ending before the grid starts, on the
    /// bottom edge otherwise.
    pub fn pinned_layout(&self, event: &ScheduledEvent) -> EventLayout {
        let start = minutes_of_day(event.start.time());
        let height = PINNED_HEIGHT.min(self.grid_height());
        let top = if start < self.start_minutes() {
            0.0
        } else {
            self.grid_height() - height
        };
        EventLayout {
            top,
            height,
            pinned: true,
        }
    }

    /// Offset of the event's real start, negative when it begins above the grid.
    pub fn unclipped_top(&self, event: &ScheduledEvent) -> f32 {
        let start = minutes_of_day(event.start.time()) as i64;
        self.duration_to_height(start - self.start_minutes() as i64)
    }

    /// Height of the whole event, ignoring the visible range
    pub fn full_height(&self, event: &ScheduledEvent) -> f32 {
        self.duration_to_height(event.duration_minutes())
    }
}

/// Iterator over slot boundaries; see [`TimeGrid::enumerate_slots`].
#[derive(Debug, Clone)]
pub struct SlotIter {
    next: u32,
    end: u32,
    step: u32,
}

impl Iterator for SlotIter {
    type Item = SlotTime;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let slot = SlotTime::from_minutes(self.next);
        self.next += self.step;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end.saturating_sub(self.next)).div_ceil(self.step) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SlotIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn grid(slot: SlotMinutes) -> TimeGrid {
        TimeGrid::new(slot, 8, 20)
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn event(start: (u32, u32), end: (u32, u32)) -> ScheduledEvent {
        let day = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        ScheduledEvent::new(
            "event-1",
            "1",
            "Run",
            day.and_hms_opt(start.0, start.1, 0).unwrap(),
            day.and_hms_opt(end.0, end.1, 0).unwrap(),
            "#8B5CF6",
            "1",
        )
        .unwrap()
    }

    #[test]
    fn test_time_to_offset() {
        let grid = grid(SlotMinutes::Thirty);
        assert_eq!(grid.time_to_offset(time(8, 0)), 0.0);
        assert_eq!(grid.time_to_offset(time(9, 30)), 180.0);
        assert_eq!(grid.time_to_offset(time(8, 15)), 30.0);
    }

    #[test]
    fn test_time_to_offset_clamps_out_of_range() {
        let grid = grid(SlotMinutes::Sixty);
        assert_eq!(grid.time_to_offset(time(6, 0)), 0.0);
        assert_eq!(grid.time_to_offset(time(22, 0)), grid.grid_height());
    }

    #[test]
    fn test_duration_to_height() {
        assert_eq!(grid(SlotMinutes::Fifteen).duration_to_height(60), 120.0);
        assert_eq!(grid(SlotMinutes::Thirty).duration_to_height(30), 60.0);
        assert_eq!(grid(SlotMinutes::Sixty).duration_to_height(90), 180.0);
    }

    #[test]
    fn test_enumerate_slots() {
        let grid = TimeGrid::new(SlotMinutes::Thirty, 8, 10);
        let slots: Vec<_> = grid.enumerate_slots().collect();
        assert_eq!(
            slots,
            vec![
                SlotTime::new(8, 0),
                SlotTime::new(8, 30),
                SlotTime::new(9, 0),
                SlotTime::new(9, 30),
            ]
        );
        assert_eq!(grid.enumerate_slots().len(), grid.slot_count() as usize);
    }

    #[test]
    fn test_enumerate_slots_is_restartable() {
        let grid = grid(SlotMinutes::Fifteen);
        let first: Vec<_> = grid.enumerate_slots().collect();
        let second: Vec<_> = grid.enumerate_slots().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 48);
    }

    #[test]
    fn test_enumerate_slots_reaches_midnight() {
        let grid = TimeGrid::new(SlotMinutes::Sixty, 22, 24);
        let slots: Vec<_> = grid.enumerate_slots().collect();
        assert_eq!(slots, vec![SlotTime::new(22, 0), SlotTime::new(23, 0)]);
    }

    #[test]
    fn test_offset_to_time_floors_to_slot() {
        let grid = grid(SlotMinutes::Thirty);
        assert_eq!(grid.offset_to_time(0.0), SlotTime::new(8, 0));
        assert_eq!(grid.offset_to_time(59.9), SlotTime::new(8, 0));
        assert_eq!(grid.offset_to_time(60.0), SlotTime::new(8, 30));
        assert_eq!(grid.offset_to_time(-15.0), SlotTime::new(8, 0));
        assert_eq!(grid.offset_to_time(1.0e6), SlotTime::new(19, 30));
    }

    #[test]
    fn test_offset_round_trip_for_every_slot() {
        for slot in SlotMinutes::ALL {
            let grid = grid(slot);
            for boundary in grid.enumerate_slots() {
                let offset = grid.time_to_offset(boundary.to_naive_time().unwrap());
                assert_eq!(grid.offset_to_time(offset), boundary);
            }
        }
    }

    #[test]
    fn test_event_layout() {
        let grid = grid(SlotMinutes::Thirty);
        let layout = grid.event_layout(&event((9, 30), (10, 0))).unwrap();
        assert_eq!(layout, EventLayout::visible(180.0, 60.0));
    }

    #[test]
    fn test_event_layout_clips_to_grid() {
        let grid = grid(SlotMinutes::Sixty);
        let layout = grid.event_layout(&event((7, 0), (9, 0))).unwrap();
        assert_eq!(layout, EventLayout::visible(0.0, 120.0));

        assert_eq!(grid.event_layout(&event((6, 0), (8, 0))), None);
        assert_eq!(grid.event_layout(&event((20, 0), (21, 0))), None);
    }

    #[test]
    fn test_pinned_layout_sits_on_nearest_edge() {
        let grid = grid(SlotMinutes::Thirty);
        let above = grid.pinned_layout(&event((6, 0), (7, 0)));
        assert_eq!(above.top, 0.0);
        assert!(above.pinned);

        let below = grid.pinned_layout(&event((21, 0), (22, 0)));
        assert_eq!(below.top + below.height, grid.grid_height());
        assert_eq!(below.height, PINNED_HEIGHT);
    }

    #[test]
    fn test_unclipped_geometry_of_straddling_event() {
        let grid = grid(SlotMinutes::Sixty);
        let event = event((7, 0), (9, 0));
        assert_eq!(grid.unclipped_top(&event), -120.0);
        assert_eq!(grid.full_height(&event), 240.0);
        assert_eq!(grid.event_layout(&event).unwrap().height, 120.0);
    }

    #[test]
    fn test_slot_time_drop_target() {
        assert_eq!(
            SlotTime::new(9, 30).drop_target(),
            DropTarget::time_slot(9, 30)
        );
        assert_eq!(SlotTime::new(9, 5).to_string(), "09:05");
    }
}
