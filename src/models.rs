use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// How often the habit tends to happen. Values the server sends that this
/// client does not know are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Other(String),
}

impl Frequency {
    /// Accepts only the values the habit form offers.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Several times a week",
            Self::Monthly => "Several times a month",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Frequency {
    fn from(raw: String) -> Self {
        Self::parse(&raw).unwrap_or(Self::Other(raw))
    }
}

impl From<Frequency> for String {
    fn from(frequency: Frequency) -> Self {
        match frequency {
            Frequency::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Other(String),
}

impl Difficulty {
    /// Accepts only the values the habit form offers.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Easy => "Easy to quit",
            Self::Medium => "Medium difficulty",
            Self::Hard => "Very hard",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Difficulty {
    fn from(raw: String) -> Self {
        Self::parse(&raw).unwrap_or(Self::Other(raw))
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Habit {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub habit_type: Option<String>,
    pub frequency: Frequency,
    #[serde(default)]
    pub target_count: Option<i64>,
    #[serde(default)]
    pub motivation_text: Option<String>,
    pub difficulty_level: Difficulty,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /habits/`. Only [`NewHabit::bad`] builds one, which pins
/// `habit_type` and `target_count`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewHabit {
    pub name: String,
    pub description: Option<String>,
    habit_type: &'static str,
    pub frequency: Frequency,
    target_count: u32,
    pub motivation_text: Option<String>,
    pub difficulty_level: Difficulty,
}

impl NewHabit {
    pub fn bad(
        name: String,
        description: Option<String>,
        frequency: Frequency,
        motivation_text: Option<String>,
        difficulty_level: Difficulty,
    ) -> Self {
        Self {
            name,
            description,
            habit_type: "bad",
            frequency,
            target_count: 1,
            motivation_text,
            difficulty_level,
        }
    }
}

/// A craving or resistance rating, always within `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Level(u8);

impl Level {
    pub const MAX: u8 = 10;

    pub fn new(value: i64) -> Option<Self> {
        if (0..=i64::from(Self::MAX)).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<i64>::deserialize(deserializer)?.unwrap_or(0);
        Level::new(raw).ok_or_else(|| {
            serde::de::Error::custom(format!("level {raw} outside 0..={}", Level::MAX))
        })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Body of `POST /habits/complete/`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompletionRequest {
    pub habit_id: i64,
    pub completion_date: NaiveDate,
    pub completed: bool,
    pub notes: Option<String>,
    pub craving_level: Level,
    pub resistance_level: Level,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub habit_id: i64,
    pub completion_date: NaiveDate,
    pub completed: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub craving_level: Level,
    #[serde(default)]
    pub resistance_level: Level,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TotalStats {
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_habits: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub daily_habits: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub weekly_habits: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub monthly_habits: Option<u64>,
}

impl TotalStats {
    /// True when the object carried none of the count keys. A key sent as
    /// null still counts as present and reads as zero.
    pub fn is_empty(&self) -> bool {
        self.total_habits.is_none()
            && self.daily_habits.is_none()
            && self.weekly_habits.is_none()
            && self.monthly_habits.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HabitStat {
    #[serde(default)]
    pub habit_id: Option<i64>,
    pub habit_name: String,
    #[serde(default)]
    pub completion_rate: f64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub completed_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AnalyticsSnapshot {
    #[serde(default)]
    pub total_stats: Option<TotalStats>,
    #[serde(default)]
    pub habit_stats: Vec<HabitStat>,
}

impl AnalyticsSnapshot {
    pub fn has_totals(&self) -> bool {
        self.total_stats.as_ref().is_some_and(|stats| !stats.is_empty())
    }
}

/// Aggregates arrive as integers, floats (SQL `SUM` over decimals) or null.
/// Only called for keys that are present, so null becomes `Some(0)` and a
/// missing key stays `None` through `#[serde(default)]`.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    Ok(Some(if value.is_sign_negative() || value.is_nan() { 0 } else { value.round() as u64 }))
}
