//! Daily/weekly counters and the streak calendar.
//!
//! The streak is date-based: acting on consecutive days extends it, a
//! gap resets it to 1, and repeated activity on the same day is a
//! no-op. Callers pass today's date in so the logic stays testable.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::events::Event;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStats {
    pub daily_xp: u32,
    pub weekly_xp: u32,
    pub total_xp: u32,
    pub completed_tasks: u32,
    pub failed_tasks: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_active_date: Option<NaiveDate>,
}

impl DailyStats {
    pub fn add_xp(&mut self, amount: u32) {
        self.daily_xp += amount;
        self.weekly_xp += amount;
        self.total_xp += amount;
    }

    pub fn record_complete(&mut self) {
        self.completed_tasks += 1;
    }

    pub fn record_fail(&mut self) {
        self.failed_tasks += 1;
    }

    /// Advance the streak calendar for activity on `today`.
    ///
    /// Returns the streak event produced, or None when today was
    /// already counted.
    pub fn check_streak(&mut self, today: NaiveDate) -> Option<Event> {
        if self.last_active_date == Some(today) {
            return None;
        }

        let streak = match self.last_active_date {
            Some(last) if (today - last).num_days() == 1 => self.current_streak + 1,
            Some(_) => 1, // Gap: streak broken.
            None => 1,    // First activity ever.
        };

        let broken = streak == 1 && self.last_active_date.is_some();
        self.current_streak = streak;
        self.longest_streak = self.longest_streak.max(streak);
        self.last_active_date = Some(today);

        if broken {
            Some(Event::StreakBroken {
                streak,
                at: Utc::now(),
            })
        } else {
            Some(Event::StreakExtended {
                streak,
                at: Utc::now(),
            })
        }
    }

    /// New day: daily counter goes back to zero.
    pub fn reset_daily(&mut self) {
        self.daily_xp = 0;
    }
}
