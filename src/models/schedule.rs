use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::Serialize;

use crate::data;

use super::trip::{PodiumPick, Predictions, RaceResult};

/// One timed session of the race weekend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceSession {
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub starts_at: DateTime<FixedOffset>,
    pub duration_min: i64,
    pub day: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Upcoming,
    Live,
    Completed,
}

impl RaceSession {
    pub fn ends_at(&self) -> DateTime<FixedOffset> {
        self.starts_at + Duration::minutes(self.duration_min)
    }

    pub fn status(&self, now: DateTime<Utc>) -> SessionStatus {
        let now = now.with_timezone(&self.starts_at.timezone());
        if now < self.starts_at {
            SessionStatus::Upcoming
        } else if now <= self.ends_at() {
            SessionStatus::Live
        } else {
            SessionStatus::Completed
        }
    }

    /// Latest moment to leave for the circuit, per session-specific buffer.
    pub fn leave_by(&self) -> DateTime<FixedOffset> {
        self.starts_at - Duration::minutes(data::departure_buffer_min(self.id))
    }
}

/// First session whose end still lies in the future.
pub fn next_session(sessions: &[RaceSession], now: DateTime<Utc>) -> Option<&RaceSession> {
    sessions
        .iter()
        .find(|session| session.status(now) != SessionStatus::Completed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Time left until `target`, or `None` once it has passed.
pub fn countdown_to(target: DateTime<FixedOffset>, now: DateTime<Utc>) -> Option<Countdown> {
    let diff = target.signed_duration_since(now);
    if diff <= Duration::zero() {
        return None;
    }
    Some(Countdown {
        days: diff.num_days(),
        hours: diff.num_hours() % 24,
        minutes: diff.num_minutes() % 60,
        seconds: diff.num_seconds() % 60,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

/// Points for one podium pick against the actual result: an exact position
/// hit scores 10/8/6 for P1/P2/P3, a driver on the podium in the wrong slot
/// scores 3. Blank slots never score.
pub fn score_pick(pick: &PodiumPick, result: &RaceResult) -> u32 {
    let podium: Vec<&str> = result.podium.iter().take(3).map(String::as_str).collect();
    pick.slots()
        .iter()
        .enumerate()
        .map(|(slot, driver)| {
            if driver.is_empty() {
                0
            } else if podium.get(slot) == Some(driver) {
                data::PREDICTION_EXACT_POINTS[slot]
            } else if podium.contains(driver) {
                data::PREDICTION_WRONG_SLOT_POINTS
            } else {
                0
            }
        })
        .sum()
}

/// Every predictor scored and ranked, highest first, ties broken by name.
/// Without a race result everyone sits at zero.
pub fn leaderboard(predictions: &Predictions, result: Option<&RaceResult>) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = predictions
        .iter()
        .map(|(name, pick)| LeaderboardEntry {
            name: name.clone(),
            score: result.map(|result| score_pick(pick, result)).unwrap_or(0),
        })
        .collect();
    entries.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    entries
}
