use std::sync::Arc;

use signlearn_catalog::{AchievementRepository, ProfileRepository, ProfileSnapshot};
use signlearn_core::model::{Achievement, AchievementTally, DailyGoal, LearnerStats};

use crate::error::LearnerServiceError;

/// Stat tiles and daily goal shown on the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub stats: LearnerStats,
    pub daily_goal: DailyGoal,
}

/// Everything the profile screen renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileOverview {
    pub snapshot: ProfileSnapshot,
    pub achievements: Vec<Achievement>,
    pub tally: AchievementTally,
}

/// Read models over the learner's static profile data.
#[derive(Clone)]
pub struct LearnerService {
    profile: Arc<dyn ProfileRepository>,
    achievements: Arc<dyn AchievementRepository>,
}

impl LearnerService {
    #[must_use]
    pub fn new(
        profile: Arc<dyn ProfileRepository>,
        achievements: Arc<dyn AchievementRepository>,
    ) -> Self {
        Self {
            profile,
            achievements,
        }
    }

    /// # Errors
    ///
    /// Returns `LearnerServiceError::Catalog` if the profile cannot be read.
    pub async fn dashboard(&self) -> Result<DashboardSummary, LearnerServiceError> {
        let snapshot = self.profile.profile_snapshot().await?;
        Ok(DashboardSummary {
            stats: snapshot.stats,
            daily_goal: snapshot.daily_goal,
        })
    }

    /// # Errors
    ///
    /// Returns `LearnerServiceError::Catalog` if the profile or achievements cannot be read.
    pub async fn profile_overview(&self) -> Result<ProfileOverview, LearnerServiceError> {
        let snapshot = self.profile.profile_snapshot().await?;
        let achievements = self.achievements.list_achievements().await?;
        let tally = AchievementTally::from_achievements(&achievements);
        Ok(ProfileOverview {
            snapshot,
            achievements,
            tally,
        })
    }
}
