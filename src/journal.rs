use crate::errors::AppResult;
use crate::models::{Mood, MoodEntry, NewMoodEntry};
use crate::storage::{Loaded, Storage, load_entries, persist_entries};
use chrono::{DateTime, Duration, Local, SubsecRound, TimeZone, Utc};
use tracing::{error, info};

#[derive(Debug)]
pub struct Journal {
    entries: Vec<MoodEntry>,
    storage: Storage,
    last_id: i64,
}

impl Journal {
    /// Loads the journal from `storage`, seeding sample entries on first run.
    pub async fn load(storage: Storage) -> Self {
        Self::load_at(storage, Utc::now()).await
    }

    pub async fn load_at(storage: Storage, now: DateTime<Utc>) -> Self {
        let entries = match load_entries(&storage).await {
            Loaded::Entries(entries) => {
                info!(entries = entries.len(), "journal loaded");
                entries
            }
            Loaded::Missing => {
                info!("no saved journal, starting from sample entries");
                let seeded = seed_entries(now);
                if let Err(err) = persist_entries(&storage, &seeded).await {
                    error!("failed to persist sample entries: {err}");
                }
                seeded
            }
        };
        Self::from_entries(storage, entries)
    }

    /// Wraps an existing log without touching storage.
    pub fn from_entries(storage: Storage, entries: Vec<MoodEntry>) -> Self {
        let last_id = entries
            .iter()
            .filter_map(|entry| entry.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            entries,
            storage,
            last_id,
        }
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// The first entry dated on the current local calendar day.
    pub fn today(&self) -> Option<&MoodEntry> {
        self.today_at(&Local::now())
    }

    pub fn today_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<&MoodEntry> {
        today_entry(&self.entries, now)
    }

    /// Appends a check-in stamped with a fresh id and the current instant,
    /// then rewrites the stored journal.
    ///
    /// Input ranges are not checked here. If the write fails the entry stays
    /// in memory and the error is returned.
    pub async fn add_entry(&mut self, new: NewMoodEntry) -> AppResult<&MoodEntry> {
        self.add_entry_at(new, Utc::now()).await
    }

    pub async fn add_entry_at(
        &mut self,
        new: NewMoodEntry,
        now: DateTime<Utc>,
    ) -> AppResult<&MoodEntry> {
        let id = self.next_id(now);
        let index = self.entries.len();
        self.entries.push(new.into_entry(id, now.trunc_subsecs(3)));

        if let Err(err) = persist_entries(&self.storage, &self.entries).await {
            error!(id = %self.entries[index].id, "failed to persist journal: {err}");
            return Err(err);
        }

        let entry = &self.entries[index];
        info!(id = %entry.id, mood = entry.mood.label(), "mood entry added");
        Ok(entry)
    }

    fn next_id(&mut self, now: DateTime<Utc>) -> String {
        match self.last_id.checked_add(1) {
            Some(floor) => {
                let id = now.timestamp_millis().max(floor);
                self.last_id = id;
                id.to_string()
            }
            // A loaded id sits at i64::MAX; take the first free millisecond instead.
            None => self.first_free_id(now.timestamp_millis()),
        }
    }

    fn first_free_id(&self, start: i64) -> String {
        let mut id = start;
        loop {
            let candidate = id.to_string();
            if !self.entries.iter().any(|entry| entry.id == candidate) {
                return candidate;
            }
            id += 1;
        }
    }
}

/// First entry whose date, seen in `now`'s time zone, falls on `now`'s day.
pub fn today_entry<'a, Tz: TimeZone>(
    entries: &'a [MoodEntry],
    now: &DateTime<Tz>,
) -> Option<&'a MoodEntry> {
    let zone = now.timezone();
    let today = now.date_naive();
    entries
        .iter()
        .find(|entry| entry.date.with_timezone(&zone).date_naive() == today)
}

/// Example check-ins for the six days before `now`, shown on first run.
pub fn seed_entries(now: DateTime<Utc>) -> Vec<MoodEntry> {
    let samples: [(Mood, u8, u8, u8, &str, [&str; 3]); 6] = [
        (
            Mood::Good,
            2,
            8,
            4,
            "Great start to the week!",
            ["Good coffee", "Sunny weather", "Friend's message"],
        ),
        (
            Mood::Okay,
            3,
            6,
            3,
            "Busy day with assignments",
            ["Study group support", "Library quiet space", "Evening walk"],
        ),
        (
            Mood::NotGreat,
            4,
            5,
            2,
            "Feeling overwhelmed with midterms",
            ["Family call", "Hot tea", "Cozy blanket"],
        ),
        (
            Mood::Good,
            2,
            7,
            4,
            "Better day, got help from professor",
            ["Helpful teacher", "Understanding roommate", "Good meal"],
        ),
        (
            Mood::Excellent,
            1,
            8,
            5,
            "Aced the midterm!",
            ["Success on exam", "Celebration with friends", "Beautiful sunset"],
        ),
        (
            Mood::Good,
            2,
            7,
            4,
            "Relaxing weekend",
            ["Free time", "Good book", "Video call with family"],
        ),
    ];

    let now = now.trunc_subsecs(3);
    samples
        .into_iter()
        .enumerate()
        .map(|(index, (mood, stress, sleep, energy, notes, gratitude))| {
            let days_ago = 6 - index as i64;
            MoodEntry {
                id: (index + 1).to_string(),
                date: now - Duration::days(days_ago),
                mood,
                emoji: mood.emoji().to_string(),
                stress_level: stress,
                sleep_hours: sleep,
                energy_level: energy,
                notes: Some(notes.to_string()),
                gratitude: gratitude.iter().map(|item| item.to_string()).collect(),
            }
        })
        .collect()
}
