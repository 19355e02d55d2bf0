use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::question::Question;

/// Per-process test session. Created empty at startup, populated wholesale by
/// each test start; a new start overwrites the previous session entirely and
/// any in-flight selections with it (last writer wins).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSession {
    pub id: Uuid,
    pub active: bool,
    pub selected_questions: Vec<Question>,
    pub start_time: Option<DateTime<Utc>>,
}

impl TestSession {
    pub fn empty() -> Self {
        Self {
            id: Uuid::nil(),
            active: false,
            selected_questions: Vec::new(),
            start_time: None,
        }
    }

    pub fn started(selected_questions: Vec<Question>, start_time: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            active: true,
            selected_questions,
            start_time: Some(start_time),
        }
    }

    /// Seconds left on the countdown, clamped at zero. `None` when the
    /// session was never started.
    pub fn remaining_seconds(&self, duration_minutes: u32, now: DateTime<Utc>) -> Option<i64> {
        self.start_time.map(|started| {
            let end = started + Duration::minutes(duration_minutes as i64);
            (end - now).num_seconds().max(0)
        })
    }
}

impl Default for TestSession {
    fn default() -> Self {
        Self::empty()
    }
}
