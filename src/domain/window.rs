use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Half-open instant range `[start, end)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Builds a window from instants in any zone. An `end` before `start`
    /// yields an empty window rather than an error.
    pub fn new<Tz: TimeZone, Tz2: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz2>) -> Self {
        let start = start.with_timezone(&Utc);
        let end = end.with_timezone(&Utc).max(start);
        Self { start, end }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
