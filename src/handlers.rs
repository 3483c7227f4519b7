use crate::chat::{self, ChatReply};
use crate::errors::{AppError, AppResult};
use crate::models::{
    ChatRequest, CheckInRequest, DashboardResponse, ForumQuery, MeditationQuery, MoodEntry,
    NewMoodEntry, TodayResponse, TrendsQuery, TrendsResponse,
};
use crate::resources::{self, CrisisDirectory, Forum, Meditation};
use crate::state::AppState;
use crate::stats::{Timeframe, build_dashboard, build_trends};
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use chrono::Local;

const MAX_GRATITUDE: usize = 3;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = today_string();
    let journal = state.journal.lock().await;
    Html(render_index(&date, journal.today()))
}

pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<MoodEntry>> {
    let journal = state.journal.lock().await;
    Json(journal.entries().to_vec())
}

pub async fn add_entry(
    State(state): State<AppState>,
    Json(payload): Json<CheckInRequest>,
) -> AppResult<(StatusCode, Json<MoodEntry>)> {
    let new = validate_check_in(payload)?;
    let mut journal = state.journal.lock().await;
    let entry = journal.add_entry(new).await?.clone();
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn get_today(State(state): State<AppState>) -> Json<TodayResponse> {
    let journal = state.journal.lock().await;
    Json(TodayResponse {
        date: today_string(),
        entry: journal.today().cloned(),
    })
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let journal = state.journal.lock().await;
    Json(build_dashboard(journal.entries()))
}

pub async fn get_trends(
    State(state): State<AppState>,
    Query(query): Query<TrendsQuery>,
) -> AppResult<Json<TrendsResponse>> {
    let timeframe = match query.timeframe.as_deref() {
        None => Timeframe::Week,
        Some(value) => Timeframe::parse(value)
            .ok_or_else(|| AppError::validation("timeframe must be 'week', 'month' or 'year'"))?,
    };

    let journal = state.journal.lock().await;
    Ok(Json(build_trends(journal.entries(), timeframe)))
}

pub async fn chat(Json(payload): Json<ChatRequest>) -> AppResult<Json<ChatReply>> {
    if payload.message.trim().is_empty() {
        return Err(AppError::validation("message must not be empty"));
    }
    Ok(Json(chat::reply(&payload.message)))
}

pub async fn get_crisis() -> Json<CrisisDirectory> {
    Json(resources::crisis_directory())
}

pub async fn get_meditations(Query(query): Query<MeditationQuery>) -> Json<Vec<&'static Meditation>> {
    Json(resources::filter_meditations(
        query.category.as_deref(),
        query.q.as_deref(),
    ))
}

pub async fn get_forum(Query(query): Query<ForumQuery>) -> Json<Forum> {
    Json(resources::forum(query.category.as_deref()))
}

/// Range and shape checks for a submitted check-in. The journal itself
/// accepts anything, so this is the only gate.
pub fn validate_check_in(request: CheckInRequest) -> AppResult<NewMoodEntry> {
    let stress_level = level("stressLevel", request.stress_level, 1, 5)?;
    let sleep_hours = level("sleepHours", request.sleep_hours, 0, 12)?;
    let energy_level = level("energyLevel", request.energy_level, 1, 5)?;

    let gratitude: Vec<String> = request
        .gratitude
        .into_iter()
        .filter(|item| !item.trim().is_empty())
        .collect();
    if gratitude.len() > MAX_GRATITUDE {
        return Err(AppError::validation(format!(
            "gratitude accepts at most {MAX_GRATITUDE} items"
        )));
    }

    let emoji = request
        .emoji
        .map(|emoji| emoji.trim().to_string())
        .filter(|emoji| !emoji.is_empty())
        .unwrap_or_else(|| request.mood.emoji().to_string());

    Ok(NewMoodEntry {
        mood: request.mood,
        emoji,
        stress_level,
        sleep_hours,
        energy_level,
        notes: request.notes.map(|notes| notes.trim().to_string()),
        gratitude,
    })
}

fn level(field: &str, value: i64, min: u8, max: u8) -> AppResult<u8> {
    u8::try_from(value)
        .ok()
        .filter(|value| (min..=max).contains(value))
        .ok_or_else(|| AppError::validation(format!("{field} must be between {min} and {max}")))
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mood;

    fn request() -> CheckInRequest {
        CheckInRequest {
            mood: Mood::NotGreat,
            emoji: None,
            stress_level: 4,
            sleep_hours: 5,
            energy_level: 2,
            notes: Some("  long day  ".into()),
            gratitude: vec!["Hot tea".into(), "   ".into(), " Family call ".into()],
        }
    }

    #[test]
    fn check_in_is_normalized() {
        let new = validate_check_in(request()).unwrap();
        assert_eq!(new.emoji, "😔");
        assert_eq!(new.notes.as_deref(), Some("long day"));
        assert_eq!(new.gratitude, vec!["Hot tea", " Family call "]);
        assert_eq!((new.stress_level, new.sleep_hours, new.energy_level), (4, 5, 2));
    }

    #[test]
    fn blank_gratitude_does_not_count_toward_limit() {
        let mut req = request();
        req.gratitude = vec!["a".into(), " ".into(), "b".into(), "".into(), "c ".into()];
        assert_eq!(validate_check_in(req).unwrap().gratitude, vec!["a", "b", "c "]);
    }

    #[test]
    fn explicit_emoji_is_kept() {
        let mut req = request();
        req.emoji = Some("🌧️".into());
        assert_eq!(validate_check_in(req).unwrap().emoji, "🌧️");
    }

    #[test]
    fn out_of_range_levels_are_rejected() {
        for (stress, sleep, energy) in [(0, 5, 2), (6, 5, 2), (3, -1, 2), (3, 13, 2), (3, 5, 0), (3, 5, 300)] {
            let mut req = request();
            req.stress_level = stress;
            req.sleep_hours = sleep;
            req.energy_level = energy;
            let err = validate_check_in(req).unwrap_err();
            assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    #[test]
    fn too_much_gratitude_is_rejected() {
        let mut req = request();
        req.gratitude = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        assert!(validate_check_in(req).is_err());
    }
}
