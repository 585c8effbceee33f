//! Wall clock and time-of-day greeting for the dashboard header.

use chrono::{DateTime, Local, Timelike};
use serde::Serialize;

/// How often the clock snapshot is refreshed.
pub const TICK_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    /// Morning before noon, afternoon before 18:00, evening after.
    pub fn for_hour(hour: u32) -> Self {
        if hour < 12 {
            Greeting::Morning
        } else if hour < 18 {
            Greeting::Afternoon
        } else {
            Greeting::Evening
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Greeting::Morning => "Good Morning",
            Greeting::Afternoon => "Good Afternoon",
            Greeting::Evening => "Good Evening",
        }
    }
}

/// The derived "current time / greeting" value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockSnapshot {
    pub time: DateTime<Local>,
    pub greeting: Greeting,
}

impl ClockSnapshot {
    pub fn at(time: DateTime<Local>) -> Self {
        Self {
            greeting: Greeting::for_hour(time.hour()),
            time,
        }
    }

    pub fn now() -> Self {
        Self::at(Local::now())
    }

    /// Hours and minutes, e.g. `"09:05"`.
    pub fn display_time(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}
