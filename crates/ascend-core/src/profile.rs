//! User profile: archetype choice, level, experience, streak, and
//! shadow stats.
//!
//! XP within a level always sits in `[0, level * 100)`. The only
//! mutator of level and xp is [`UserProfile::award_xp`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::archetype::{ArchetypeId, Intent};

/// Display-only attribute block tracked alongside level/xp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowStats {
    pub vitality: u32,
    pub discipline: u32,
    pub intellect: u32,
    pub spirit: u32,
}

impl Default for ShadowStats {
    fn default() -> Self {
        Self {
            vitality: 10,
            discipline: 10,
            intellect: 10,
            spirit: 10,
        }
    }
}

/// Persistent cross-day identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub archetype: Option<ArchetypeId>,
    pub level: u32,
    /// Experience within the current level, `[0, level * 100)`.
    pub xp: u32,
    pub stats: ShadowStats,
    pub streak: u32,
}

impl UserProfile {
    /// Fresh level-1 profile with no archetype chosen yet.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: username.into(),
            archetype: None,
            level: 1,
            xp: 0,
            stats: ShadowStats::default(),
            streak: 0,
        }
    }

    pub fn set_archetype(&mut self, archetype: ArchetypeId) {
        self.archetype = Some(archetype);
    }

    /// XP required to finish the current level.
    pub fn xp_to_level(&self) -> u32 {
        self.level * 100
    }

    /// Add experience, leveling up when the threshold is met.
    ///
    /// Level-up is single-step per call: award amounts are assumed small
    /// relative to the threshold, so at most one level is gained and the
    /// remainder carries over. Returns true when a level-up occurred.
    pub fn award_xp(&mut self, amount: u32) -> bool {
        let new_xp = self.xp + amount;
        let threshold = self.xp_to_level();
        if new_xp >= threshold {
            self.level += 1;
            self.xp = new_xp - threshold;
            true
        } else {
            self.xp = new_xp;
            false
        }
    }

    pub fn increment_streak(&mut self) {
        self.streak += 1;
    }

    pub fn reset_streak(&mut self) {
        self.streak = 0;
    }
}

/// Per-intent completion tally for shadow-stat derivation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentCounts {
    pub vitality: u32,
    pub discipline: u32,
    pub intellect: u32,
    pub spirit: u32,
}

impl IntentCounts {
    pub fn record(&mut self, intent: Intent) {
        match intent {
            Intent::Vitality => self.vitality += 1,
            Intent::Discipline => self.discipline += 1,
            Intent::Intellect => self.intellect += 1,
            Intent::Spirit => self.spirit += 1,
        }
    }
}

/// Derive displayed shadow stats: +1 per three completions of an intent.
pub fn shadow_stats_with_progress(base: &ShadowStats, counts: &IntentCounts) -> ShadowStats {
    ShadowStats {
        vitality: base.vitality + counts.vitality / 3,
        discipline: base.discipline + counts.discipline / 3,
        intellect: base.intellect + counts.intellect / 3,
        spirit: base.spirit + counts.spirit / 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn award_below_threshold_accumulates() {
        let mut profile = UserProfile::new("Hunter");
        assert!(!profile.award_xp(30));
        assert_eq!(profile.level, 1);
        assert_eq!(profile.xp, 30);
    }

    #[test]
    fn award_at_threshold_levels_up_with_carry() {
        let mut profile = UserProfile::new("Hunter");
        profile.xp = 80;
        assert!(profile.award_xp(30));
        assert_eq!(profile.level, 2);
        assert_eq!(profile.xp, 10);
    }

    #[test]
    fn threshold_scales_with_level() {
        let mut profile = UserProfile::new("Hunter");
        profile.level = 3;
        assert_eq!(profile.xp_to_level(), 300);
        profile.xp = 299;
        assert!(profile.award_xp(1));
        assert_eq!(profile.level, 4);
        assert_eq!(profile.xp, 0);
    }

    #[test]
    fn xp_stays_within_level_range() {
        let mut profile = UserProfile::new("Hunter");
        for _ in 0..50 {
            profile.award_xp(35);
            assert!(profile.xp < profile.xp_to_level());
        }
    }

    #[test]
    fn shadow_stats_gain_one_per_three_completions() {
        let mut counts = IntentCounts::default();
        for _ in 0..7 {
            counts.record(Intent::Vitality);
        }
        counts.record(Intent::Spirit);
        let derived = shadow_stats_with_progress(&ShadowStats::default(), &counts);
        assert_eq!(derived.vitality, 12);
        assert_eq!(derived.spirit, 10);
        assert_eq!(derived.discipline, 10);
    }
}
