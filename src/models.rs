use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Excellent,
    Good,
    Okay,
    #[serde(rename = "not great", alias = "not-great")]
    NotGreat,
    Terrible,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Excellent,
        Mood::Good,
        Mood::Okay,
        Mood::NotGreat,
        Mood::Terrible,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Mood::Excellent => "excellent",
            Mood::Good => "good",
            Mood::Okay => "okay",
            Mood::NotGreat => "not great",
            Mood::Terrible => "terrible",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Excellent => "😄",
            Mood::Good => "😊",
            Mood::Okay => "😐",
            Mood::NotGreat => "😔",
            Mood::Terrible => "😢",
        }
    }

    /// Score used by the trends view: excellent is 5, terrible is 1.
    pub fn score(self) -> u8 {
        match self {
            Mood::Excellent => 5,
            Mood::Good => 4,
            Mood::Okay => 3,
            Mood::NotGreat => 2,
            Mood::Terrible => 1,
        }
    }
}

/// One journal record. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub mood: Mood,
    pub emoji: String,
    pub stress_level: u8,
    pub sleep_hours: u8,
    pub energy_level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub gratitude: Vec<String>,
}

/// Every `MoodEntry` field except the ones the journal assigns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMoodEntry {
    pub mood: Mood,
    pub emoji: String,
    pub stress_level: u8,
    pub sleep_hours: u8,
    pub energy_level: u8,
    pub notes: Option<String>,
    pub gratitude: Vec<String>,
}

impl NewMoodEntry {
    pub fn into_entry(self, id: String, date: DateTime<Utc>) -> MoodEntry {
        MoodEntry {
            id,
            date,
            mood: self.mood,
            emoji: self.emoji,
            stress_level: self.stress_level,
            sleep_hours: self.sleep_hours,
            energy_level: self.energy_level,
            notes: self.notes,
            gratitude: self.gratitude,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub mood: Mood,
    #[serde(default)]
    pub emoji: Option<String>,
    pub stress_level: i64,
    pub sleep_hours: i64,
    pub energy_level: i64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub gratitude: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayResponse {
    pub date: String,
    pub entry: Option<MoodEntry>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub current_streak: u32,
    pub weekly_goal_percent: f64,
    pub checked_in_today: bool,
    pub today: Option<MoodEntry>,
    pub tips: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ChartPoint {
    pub id: String,
    pub label: String,
    pub mood: Mood,
    pub emoji: String,
    pub score: u8,
    pub width_percent: f64,
}

#[derive(Debug, Serialize)]
pub struct MoodShare {
    pub mood: Mood,
    pub emoji: &'static str,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    pub timeframe: String,
    pub entry_count: usize,
    pub average_mood: f64,
    pub average_stress: f64,
    pub average_sleep: f64,
    pub mood_note: &'static str,
    pub sleep_note: &'static str,
    pub stress_note: &'static str,
    pub chart: Vec<ChartPoint>,
    pub distribution: Vec<MoodShare>,
}

#[derive(Debug, Deserialize)]
pub struct TrendsQuery {
    pub timeframe: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct MeditationQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ForumQuery {
    pub category: Option<String>,
}
