//! JSON shape of the content catalog and its mapping onto domain types.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use signlearn_core::model::{
    Achievement, AchievementId, AnswerOption, DailyGoal, DayActivity, LearnerProfile,
    LearnerStats, Lesson, LessonId, MediaUri, OptionId, PackageId, Percent, Question,
    QuestionDraft, QuestionId, QuestionKind, SubscriptionPackage, WeeklyActivity,
};

use crate::repository::{CatalogContent, CatalogError, ProfileSnapshot};

/// Catalog shipped with the app.
pub const BUILTIN_CATALOG_JSON: &str = include_str!("../seed/catalog.json");

fn invalid<E: std::fmt::Display>(context: impl std::fmt::Display) -> impl FnOnce(E) -> CatalogError {
    move |e| CatalogError::Invalid(format!("{context}: {e}"))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub lessons: Vec<LessonRecord>,
    pub questions: Vec<QuestionRecord>,
    pub packages: Vec<PackageRecord>,
    pub achievements: Vec<AchievementRecord>,
    pub profile: ProfileRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonRecord {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub locked: bool,
    /// Question ids in play order.
    #[serde(default)]
    pub questions: Vec<QuestionId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionRecord {
    pub id: OptionId,
    pub label: String,
    /// Picture keyword or asset path for picture-match tiles.
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub kind: QuestionKind,
    pub prompt: String,
    #[serde(default)]
    pub media: Option<String>,
    pub options: Vec<OptionRecord>,
    pub correct: OptionId,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageRecord {
    pub id: PackageId,
    pub name: String,
    pub price: String,
    pub period: String,
    #[serde(default)]
    pub original_price: Option<String>,
    #[serde(default)]
    pub discount: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementRecord {
    pub id: AchievementId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub earned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsRecord {
    pub streak_days: u32,
    pub total_xp: u32,
    pub lessons_done: u32,
    pub league_rank: u32,
    pub accuracy: u32,
    pub days_active: u32,
    pub live_sessions: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRecord {
    pub day: String,
    pub level: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub display_name: String,
    pub role: String,
    pub stats: StatsRecord,
    pub daily_goal_earned_xp: u32,
    pub daily_goal_target_xp: u32,
    pub weekly_activity: Vec<DayRecord>,
}

impl OptionRecord {
    fn into_option(self, kind: QuestionKind) -> Result<AnswerOption, CatalogError> {
        let context = format!("option {}", self.id);
        // Picture-match tiles carry a keyword that resolves to a placeholder image.
        let image = match (kind, self.image.as_deref()) {
            (_, None) => None,
            (QuestionKind::PictureMatch, Some(raw)) if !raw.contains('/') => {
                Some(MediaUri::placeholder(raw).map_err(invalid(&context))?)
            }
            (_, Some(raw)) => Some(MediaUri::parse(raw).map_err(invalid(&context))?),
        };
        AnswerOption::new(self.id, self.label, image).map_err(invalid(context))
    }
}

impl QuestionRecord {
    fn into_question(self) -> Result<Question, CatalogError> {
        let context = format!("question {}", self.id);
        let media = self
            .media
            .as_deref()
            .map(MediaUri::parse)
            .transpose()
            .map_err(invalid(&context))?;
        let kind = self.kind;
        let options = self
            .options
            .into_iter()
            .map(|o| o.into_option(kind))
            .collect::<Result<Vec<_>, _>>()?;
        QuestionDraft {
            id: self.id,
            kind,
            prompt: self.prompt,
            media,
            options,
            correct: self.correct,
            explanation: self.explanation,
        }
        .validate()
        .map_err(invalid(context))
    }
}

impl PackageRecord {
    fn into_package(self) -> Result<SubscriptionPackage, CatalogError> {
        let context = format!("package {}", self.id);
        Ok(SubscriptionPackage::new(
            self.id,
            self.name,
            self.price,
            self.period,
            self.features,
            self.popular,
        )
        .map_err(invalid(context))?
        .with_discount(self.original_price, self.discount))
    }
}

impl ProfileRecord {
    fn into_snapshot(self) -> Result<ProfileSnapshot, CatalogError> {
        let profile =
            LearnerProfile::new(self.display_name, self.role).map_err(invalid("profile"))?;
        let stats = LearnerStats {
            streak_days: self.stats.streak_days,
            total_xp: self.stats.total_xp,
            lessons_done: self.stats.lessons_done,
            league_rank: self.stats.league_rank,
            accuracy: Percent::new(self.stats.accuracy).map_err(invalid("profile accuracy"))?,
            days_active: self.stats.days_active,
            live_sessions: self.stats.live_sessions,
        };
        let daily_goal = DailyGoal::new(self.daily_goal_earned_xp, self.daily_goal_target_xp)
            .map_err(invalid("daily goal"))?;
        let days = self
            .weekly_activity
            .into_iter()
            .map(|d| {
                Ok(DayActivity {
                    level: Percent::new(d.level).map_err(invalid(format!("day {}", d.day)))?,
                    label: d.day,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;
        let weekly_activity = WeeklyActivity::new(days).map_err(invalid("weekly activity"))?;
        Ok(ProfileSnapshot {
            profile,
            stats,
            daily_goal,
            weekly_activity,
        })
    }
}

impl CatalogRecord {
    /// Validate every record and resolve lesson question references.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Invalid` on duplicate ids, dangling question references,
    /// or any domain validation failure.
    pub fn into_content(self) -> Result<CatalogContent, CatalogError> {
        let mut by_id: HashMap<QuestionId, Question> = HashMap::new();
        for record in self.questions {
            let question = record.into_question()?;
            let id = question.id();
            if by_id.insert(id, question).is_some() {
                return Err(CatalogError::Invalid(format!("duplicate question id {id}")));
            }
        }

        let mut seen_lessons = HashSet::new();
        let mut lessons = Vec::with_capacity(self.lessons.len());
        let mut questions = HashMap::new();
        for record in self.lessons {
            if !seen_lessons.insert(record.id) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate lesson id {}",
                    record.id
                )));
            }
            let context = format!("lesson {}", record.id);
            let progress = Percent::new(record.progress).map_err(invalid(&context))?;
            let lesson = Lesson::new(
                record.id,
                record.title,
                record.description,
                progress,
                record.locked,
            )
            .map_err(invalid(&context))?;

            let set = record
                .questions
                .iter()
                .map(|qid| {
                    by_id.get(qid).cloned().ok_or_else(|| {
                        CatalogError::Invalid(format!("{context}: unknown question {qid}"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            questions.insert(lesson.id(), set);
            lessons.push(lesson);
        }

        let mut packages = Vec::with_capacity(self.packages.len());
        for record in self.packages {
            let package = record.into_package()?;
            if packages
                .iter()
                .any(|p: &SubscriptionPackage| p.id() == package.id())
            {
                return Err(CatalogError::Invalid(format!(
                    "duplicate package id {}",
                    package.id()
                )));
            }
            packages.push(package);
        }

        let achievements = self
            .achievements
            .into_iter()
            .map(|a| {
                let context = format!("achievement {}", a.id);
                Achievement::new(a.id, a.title, a.description, a.earned).map_err(invalid(context))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let profile = self.profile.into_snapshot()?;

        tracing::debug!(
            lessons = lessons.len(),
            questions = by_id.len(),
            packages = packages.len(),
            "catalog validated"
        );

        Ok(CatalogContent {
            lessons,
            questions,
            packages,
            achievements,
            profile,
        })
    }
}
