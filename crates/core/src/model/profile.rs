use thiserror::Error;

use crate::model::lesson::Percent;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("display name cannot be empty")]
    EmptyName,

    #[error("daily goal target must be > 0")]
    InvalidGoalTarget,

    #[error("weekly activity needs exactly 7 days, got {0}")]
    InvalidWeekLength(usize),

    #[error("day label cannot be empty")]
    EmptyDayLabel,
}

/// Who is learning. Display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnerProfile {
    display_name: String,
    role: String,
}

impl LearnerProfile {
    /// # Errors
    ///
    /// Returns `ProfileError::EmptyName` for a blank name.
    pub fn new(display_name: impl Into<String>, role: impl Into<String>) -> Result<Self, ProfileError> {
        let display_name = display_name.into().trim().to_string();
        if display_name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        Ok(Self {
            display_name,
            role: role.into().trim().to_string(),
        })
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Up to two uppercase initials for the avatar fallback ("John Doe" -> "JD").
    #[must_use]
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Headline numbers shown on the dashboard and profile. Never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LearnerStats {
    pub streak_days: u32,
    pub total_xp: u32,
    pub lessons_done: u32,
    pub league_rank: u32,
    pub accuracy: Percent,
    pub days_active: u32,
    pub live_sessions: u32,
}

impl LearnerStats {
    #[must_use]
    pub fn league_label(&self) -> String {
        format!("#{}", self.league_rank)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyGoal {
    earned_xp: u32,
    target_xp: u32,
}

impl DailyGoal {
    /// # Errors
    ///
    /// Returns `ProfileError::InvalidGoalTarget` when the target is zero.
    pub fn new(earned_xp: u32, target_xp: u32) -> Result<Self, ProfileError> {
        if target_xp == 0 {
            return Err(ProfileError::InvalidGoalTarget);
        }
        Ok(Self {
            earned_xp,
            target_xp,
        })
    }

    #[must_use]
    pub fn earned_xp(&self) -> u32 {
        self.earned_xp
    }

    #[must_use]
    pub fn target_xp(&self) -> u32 {
        self.target_xp
    }

    #[must_use]
    pub fn percent(&self) -> Percent {
        Percent::of(self.earned_xp as usize, self.target_xp as usize)
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{} XP", self.earned_xp, self.target_xp)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayActivity {
    pub label: String,
    pub level: Percent,
}

impl DayActivity {
    /// Single-letter axis label ("Mon" -> "M").
    #[must_use]
    pub fn short_label(&self) -> String {
        self.label.chars().take(1).collect()
    }
}

/// Seven bars, Monday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyActivity {
    days: Vec<DayActivity>,
}

impl WeeklyActivity {
    pub const DAYS: usize = 7;

    /// # Errors
    ///
    /// Returns `ProfileError` unless exactly seven labelled days are given.
    pub fn new(days: Vec<DayActivity>) -> Result<Self, ProfileError> {
        if days.len() != Self::DAYS {
            return Err(ProfileError::InvalidWeekLength(days.len()));
        }
        if days.iter().any(|d| d.label.trim().is_empty()) {
            return Err(ProfileError::EmptyDayLabel);
        }
        Ok(Self { days })
    }

    #[must_use]
    pub fn days(&self) -> &[DayActivity] {
        &self.days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        let p = LearnerProfile::new("john doe smith", "ASL Learner").unwrap();
        assert_eq!(p.initials(), "JD");
    }

    #[test]
    fn daily_goal_percent_and_label() {
        let goal = DailyGoal::new(12, 20).unwrap();
        assert_eq!(goal.percent().value(), 60);
        assert_eq!(goal.label(), "12/20 XP");
        assert_eq!(DailyGoal::new(1, 0), Err(ProfileError::InvalidGoalTarget));
    }

    #[test]
    fn week_needs_seven_days() {
        let day = DayActivity {
            label: "Mon".into(),
            level: Percent::new(60).unwrap(),
        };
        assert_eq!(day.short_label(), "M");
        assert_eq!(
            WeeklyActivity::new(vec![day; 3]),
            Err(ProfileError::InvalidWeekLength(3))
        );
    }
}
