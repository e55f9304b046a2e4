use thiserror::Error;

use crate::model::ids::AchievementId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AchievementError {
    #[error("achievement title cannot be empty")]
    EmptyTitle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    id: AchievementId,
    title: String,
    description: String,
    earned: bool,
}

impl Achievement {
    /// # Errors
    ///
    /// Returns `AchievementError::EmptyTitle` for a blank title.
    pub fn new(
        id: AchievementId,
        title: impl Into<String>,
        description: impl Into<String>,
        earned: bool,
    ) -> Result<Self, AchievementError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(AchievementError::EmptyTitle);
        }
        Ok(Self {
            id,
            title,
            description: description.into().trim().to_string(),
            earned,
        })
    }

    #[must_use]
    pub fn id(&self) -> AchievementId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn is_earned(&self) -> bool {
        self.earned
    }
}

/// Earned-out-of-total counter shown on the achievements header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementTally {
    pub earned: usize,
    pub total: usize,
}

impl AchievementTally {
    #[must_use]
    pub fn from_achievements(items: &[Achievement]) -> Self {
        Self {
            earned: items.iter().filter(|a| a.is_earned()).count(),
            total: items.len(),
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", self.earned, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_earned() {
        let items = vec![
            Achievement::new(AchievementId::new(1), "First Lesson", "", true).unwrap(),
            Achievement::new(AchievementId::new(2), "Week Warrior", "", true).unwrap(),
            Achievement::new(AchievementId::new(3), "ASL Master", "", false).unwrap(),
            Achievement::new(AchievementId::new(4), "Social Butterfly", "", false).unwrap(),
        ];
        assert_eq!(AchievementTally::from_achievements(&items).label(), "2/4");
    }

    #[test]
    fn empty_title_fails() {
        assert_eq!(
            Achievement::new(AchievementId::new(1), " ", "x", false),
            Err(AchievementError::EmptyTitle)
        );
    }
}
