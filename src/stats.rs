use crate::journal::today_entry;
use crate::models::{ChartPoint, DashboardResponse, Mood, MoodEntry, MoodShare, TrendsResponse};
use chrono::{DateTime, Datelike, Duration, Local, TimeZone, Utc};

pub const WELLNESS_TIPS: [&str; 3] = [
    "Try the 5-4-3-2-1 grounding technique when feeling anxious.",
    "Take a 10-minute walk outside to boost your mood naturally.",
    "Practice gratitude by writing down three things you're thankful for.",
];

const WEEKLY_GOAL_DAYS: f64 = 7.0;
const CHART_LEN: usize = 14;
const DAY_MS: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeframe {
    Week,
    Month,
    Year,
}

impl Timeframe {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "week" => Some(Timeframe::Week),
            "month" => Some(Timeframe::Month),
            "year" => Some(Timeframe::Year),
            _ => None,
        }
    }

    pub fn days(self) -> i64 {
        match self {
            Timeframe::Week => 7,
            Timeframe::Month => 30,
            Timeframe::Year => 365,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::Week => "week",
            Timeframe::Month => "month",
            Timeframe::Year => "year",
        }
    }
}

pub fn build_dashboard(entries: &[MoodEntry]) -> DashboardResponse {
    build_dashboard_at(entries, &Local::now())
}

pub fn build_dashboard_at<Tz: TimeZone>(
    entries: &[MoodEntry],
    now: &DateTime<Tz>,
) -> DashboardResponse {
    let instant = now.with_timezone(&Utc);
    let today = today_entry(entries, now).cloned();

    let week_ago = instant - Duration::days(7);
    let this_week = entries.iter().filter(|entry| entry.date >= week_ago).count();
    let weekly_goal_percent = (this_week as f64 / WEEKLY_GOAL_DAYS * 100.0).min(100.0);

    DashboardResponse {
        current_streak: current_streak(entries, instant),
        weekly_goal_percent,
        checked_in_today: today.is_some(),
        today,
        tips: WELLNESS_TIPS.to_vec(),
    }
}

/// The newest entry always counts; an older entry at position `i` counts when
/// it is no more than `i` whole days old.
fn current_streak(entries: &[MoodEntry], now: DateTime<Utc>) -> u32 {
    let last = entries.len().saturating_sub(1);
    entries
        .iter()
        .enumerate()
        .fold(0, |streak, (index, entry)| {
            if index == last {
                return streak + 1;
            }
            let days_ago = (now - entry.date).num_milliseconds().div_euclid(DAY_MS);
            if days_ago <= index as i64 {
                streak + 1
            } else {
                streak
            }
        })
}

pub fn build_trends(entries: &[MoodEntry], timeframe: Timeframe) -> TrendsResponse {
    build_trends_at(entries, timeframe, &Local::now())
}

pub fn build_trends_at<Tz: TimeZone>(
    entries: &[MoodEntry],
    timeframe: Timeframe,
    now: &DateTime<Tz>,
) -> TrendsResponse {
    let zone = now.timezone();
    let cutoff = now.with_timezone(&Utc) - Duration::days(timeframe.days());
    let window: Vec<&MoodEntry> = entries.iter().filter(|entry| entry.date >= cutoff).collect();

    let average_mood = average(&window, 3.0, |entry| f64::from(entry.mood.score()));
    let average_stress = average(&window, 3.0, |entry| f64::from(entry.stress_level));
    let average_sleep = average(&window, 8.0, |entry| f64::from(entry.sleep_hours));

    let chart = window[window.len().saturating_sub(CHART_LEN)..]
        .iter()
        .map(|entry| {
            let local = entry.date.with_timezone(&zone);
            let score = entry.mood.score();
            ChartPoint {
                id: entry.id.clone(),
                label: format!("{}/{}", local.month(), local.day()),
                mood: entry.mood,
                emoji: entry.emoji.clone(),
                score,
                width_percent: f64::from(score) / 5.0 * 100.0,
            }
        })
        .collect();

    TrendsResponse {
        timeframe: timeframe.as_str().to_string(),
        entry_count: window.len(),
        average_mood,
        average_stress,
        average_sleep,
        mood_note: mood_note(average_mood),
        sleep_note: sleep_note(average_sleep),
        stress_note: stress_note(average_stress),
        chart,
        distribution: distribution(&window),
    }
}

fn average(window: &[&MoodEntry], empty: f64, value: impl Fn(&MoodEntry) -> f64) -> f64 {
    if window.is_empty() {
        return empty;
    }
    window.iter().map(|&entry| value(entry)).sum::<f64>() / window.len() as f64
}

/// Mood counts in order of first appearance.
fn distribution(window: &[&MoodEntry]) -> Vec<MoodShare> {
    let mut counts: Vec<(Mood, usize)> = Vec::new();
    for entry in window {
        match counts.iter_mut().find(|(mood, _)| *mood == entry.mood) {
            Some((_, count)) => *count += 1,
            None => counts.push((entry.mood, 1)),
        }
    }

    let total = window.len() as f64;
    counts
        .into_iter()
        .map(|(mood, count)| MoodShare {
            mood,
            emoji: mood.emoji(),
            count,
            percent: count as f64 / total * 100.0,
        })
        .collect()
}

fn mood_note(average: f64) -> &'static str {
    if average >= 4.0 {
        "Great mood overall!"
    } else if average >= 3.0 {
        "Steady mood"
    } else {
        "Room for improvement"
    }
}

fn sleep_note(average: f64) -> &'static str {
    if average >= 7.0 {
        "Good sleep habits!"
    } else {
        "Try to get more rest"
    }
}

fn stress_note(average: f64) -> &'static str {
    if average <= 2.0 {
        "Low stress levels"
    } else if average <= 3.0 {
        "Manageable stress"
    } else {
        "High stress detected"
    }
}
