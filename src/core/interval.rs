use crate::core::TimeInterval;
use chrono::{NaiveDateTime, TimeDelta};

/// Form-ergonomics defaults for the booking window. These are convenience
/// rules, not pricing invariants; the gate re-validates every interval.
#[derive(Debug, Clone, Copy)]
pub struct IntervalPolicy {
    /// Length of the default window starting now.
    pub default_duration_hours: i64,
    /// How far past a changed entry time the exit is pushed when it would
    /// otherwise be at or before it.
    pub bump_hours: i64,
}

impl Default for IntervalPolicy {
    fn default() -> Self {
        Self {
            default_duration_hours: 2,
            bump_hours: 1,
        }
    }
}

impl IntervalPolicy {
    /// Default window: entry now, exit two hours later.
    pub fn default_interval(&self, now: NaiveDateTime) -> TimeInterval {
        TimeInterval::new(now, now + TimeDelta::hours(self.default_duration_hours))
    }

    /// Earliest selectable entry is the current instant.
    pub fn min_entry(&self, now: NaiveDateTime) -> NaiveDateTime {
        now
    }

    /// Earliest selectable exit is the entry time.
    pub fn min_exit(&self, entry: NaiveDateTime) -> NaiveDateTime {
        entry
    }

    /// Applied when the entry field changes: an exit at or before the new
    /// entry is pushed forward, any later exit is kept.
    pub fn adjust_exit(&self, new_entry: NaiveDateTime, current_exit: NaiveDateTime) -> NaiveDateTime {
        if current_exit <= new_entry {
            new_entry + TimeDelta::hours(self.bump_hours)
        } else {
            current_exit
        }
    }
}
