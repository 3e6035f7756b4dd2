//! Gamification domain models.
//!
//! Defines the closed set of EXP-granting activities, the injected rule table that
//! assigns each activity its points and daily limit, and the calendar-day policy used
//! to bucket awards for daily limit enforcement.

use std::{collections::HashMap, fmt, str::FromStr};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, TimeDelta, Utc};

use crate::{
    model::activity::ActivityRuleDto,
    server::error::{config::ConfigError, gamification::GamificationError},
};

/// Default UTC offset, in hours, that defines where one activity day ends and the next begins.
pub const DEFAULT_DAY_OFFSET_HOURS: i32 = 7;

/// User action that can grant EXP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityType {
    /// Completed a conversation turn with the AI companion.
    ChatAi,
    /// Published a new article.
    UploadArticle,
    /// Commented in a forum thread.
    ForumComment,
}

impl ActivityType {
    /// Every activity type, in display order.
    pub const ALL: [ActivityType; 3] = [
        ActivityType::ChatAi,
        ActivityType::UploadArticle,
        ActivityType::ForumComment,
    ];

    /// Stable identifier stored in the database and used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChatAi => "chat_ai",
            Self::UploadArticle => "upload_article",
            Self::ForumComment => "forum_comment",
        }
    }

    /// Human-readable description recorded on each history entry.
    pub fn description(&self) -> &'static str {
        match self {
            Self::ChatAi => "Chatted with the AI companion",
            Self::UploadArticle => "Published a new article",
            Self::ForumComment => "Commented in the forum",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = GamificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|activity| activity.as_str() == s)
            .ok_or_else(|| GamificationError::UnknownActivity(s.to_string()))
    }
}

/// Points granted per award and the optional number of awards allowed per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityRule {
    points: u32,
    daily_limit: Option<u32>,
}

impl ActivityRule {
    /// Creates a rule. A daily limit of `Some(0)` is treated the same as `None` (uncapped).
    pub fn new(points: u32, daily_limit: Option<u32>) -> Self {
        Self {
            points,
            daily_limit,
        }
    }

    /// Points added to the balance for each accepted award.
    pub fn points(&self) -> i64 {
        i64::from(self.points)
    }

    /// Maximum accepted awards per user per day, `None` when uncapped.
    pub fn daily_limit(&self) -> Option<i32> {
        self.daily_limit
            .filter(|limit| *limit > 0)
            .map(|limit| i32::try_from(limit).unwrap_or(i32::MAX))
    }
}

/// Rule table mapping each activity type to its points and daily limit.
///
/// Built once at startup and passed to the engine, so tests can substitute their
/// own rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRules {
    rules: HashMap<ActivityType, ActivityRule>,
}

impl ActivityRules {
    /// Creates an empty rule table.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Adds or replaces the rule for an activity.
    pub fn with_rule(mut self, activity: ActivityType, rule: ActivityRule) -> Self {
        self.rules.insert(activity, rule);
        self
    }

    pub fn get(&self, activity: ActivityType) -> Option<&ActivityRule> {
        self.rules.get(&activity)
    }

    /// Rules in `ActivityType::ALL` order, skipping unconfigured activities.
    pub fn iter(&self) -> impl Iterator<Item = (ActivityType, &ActivityRule)> {
        ActivityType::ALL
            .into_iter()
            .filter_map(|activity| self.rules.get(&activity).map(|rule| (activity, rule)))
    }

    pub fn to_dto(&self) -> Vec<ActivityRuleDto> {
        self.iter()
            .map(|(activity, rule)| ActivityRuleDto {
                activity_type: activity.as_str().to_string(),
                description: activity.description().to_string(),
                points: rule.points(),
                daily_limit: rule.daily_limit(),
            })
            .collect()
    }
}

/// Production rules: chatting with the AI grants 10 EXP once per day, publishing an
/// article grants 20 EXP without limit and forum comments grant 5 EXP up to five
/// times per day.
impl Default for ActivityRules {
    fn default() -> Self {
        Self::new()
            .with_rule(ActivityType::ChatAi, ActivityRule::new(10, Some(1)))
            .with_rule(ActivityType::UploadArticle, ActivityRule::new(20, None))
            .with_rule(ActivityType::ForumComment, ActivityRule::new(5, Some(5)))
    }
}

/// Engine configuration: activity rules plus the day-boundary policy.
///
/// A day is the calendar date of the award timestamp seen from one fixed UTC offset.
/// The same offset is applied to daily limit counters and history date filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamificationConfig {
    pub rules: ActivityRules,
    pub day_offset: FixedOffset,
}

impl GamificationConfig {
    pub fn new(rules: ActivityRules, day_offset: FixedOffset) -> Self {
        Self { rules, day_offset }
    }

    /// Builds a config with the given rules and an offset expressed in whole hours.
    ///
    /// # Returns
    /// - `Ok(GamificationConfig)` - Offset within -23..=23 hours
    /// - `Err(ConfigError::InvalidEnvVar)` - Offset outside the supported range
    pub fn with_offset_hours(rules: ActivityRules, hours: i32) -> Result<Self, ConfigError> {
        let day_offset = hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "ACTIVITY_DAY_UTC_OFFSET_HOURS".to_string(),
                reason: format!("{} is not a valid UTC offset in hours", hours),
            })?;

        Ok(Self::new(rules, day_offset))
    }

    /// Calendar day an award made at `at` counts towards.
    pub fn activity_day(&self, at: DateTime<Utc>) -> NaiveDate {
        at.with_timezone(&self.day_offset).date_naive()
    }

    /// UTC instant at which `day` begins.
    pub fn day_start(&self, day: NaiveDate) -> DateTime<Utc> {
        let local_midnight = day.and_time(NaiveTime::MIN);
        let offset = TimeDelta::seconds(i64::from(self.day_offset.local_minus_utc()));
        (local_midnight - offset).and_utc()
    }
}

impl Default for GamificationConfig {
    fn default() -> Self {
        let day_offset =
            FixedOffset::east_opt(DEFAULT_DAY_OFFSET_HOURS * 3600).unwrap_or_else(|| Utc.fix());
        Self::new(ActivityRules::default(), day_offset)
    }
}

/// Result of a single award attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardOutcome {
    /// Points were added to the balance and a history entry was written.
    Awarded { points: i64 },
    /// The daily limit was already reached; nothing was written.
    DailyLimitReached,
}

impl AwardOutcome {
    #[cfg(test)]
    pub fn is_awarded(&self) -> bool {
        matches!(self, Self::Awarded { .. })
    }
}
