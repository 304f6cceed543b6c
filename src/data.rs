//! Static data for the 2026 Hungarian Grand Prix weekend.

use chrono::{DateTime, FixedOffset, TimeZone};

use crate::models::schedule::RaceSession;

/// Points for hitting P1/P2/P3 exactly.
pub const PREDICTION_EXACT_POINTS: [u32; 3] = [10, 8, 6];
/// Points for a driver placed on the podium in the wrong slot.
pub const PREDICTION_WRONG_SLOT_POINTS: u32 = 3;

pub const DRIVERS: [&str; 20] = [
    "Verstappen",
    "Norris",
    "Piastri",
    "Leclerc",
    "Hamilton",
    "Russell",
    "Antonelli",
    "Sainz",
    "Albon",
    "Alonso",
    "Stroll",
    "Gasly",
    "Doohan",
    "Ocon",
    "Bearman",
    "Hülkenberg",
    "Bortoleto",
    "Tsunoda",
    "Hadjar",
    "Lawson",
];

fn hungaroring_time(day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
    // Track time is CEST (UTC+2) for the whole weekend.
    FixedOffset::east_opt(2 * 3600)
        .expect("CEST offset")
        .with_ymd_and_hms(2026, 7, day, hour, minute, 0)
        .single()
        .expect("session timestamp")
}

pub fn race_sessions() -> Vec<RaceSession> {
    vec![
        RaceSession {
            id: "fp1",
            name: "Free Practice 1",
            short_name: "FP1",
            starts_at: hungaroring_time(24, 13, 30),
            duration_min: 60,
            day: "Friday",
        },
        RaceSession {
            id: "fp2",
            name: "Free Practice 2",
            short_name: "FP2",
            starts_at: hungaroring_time(24, 17, 0),
            duration_min: 60,
            day: "Friday",
        },
        RaceSession {
            id: "fp3",
            name: "Free Practice 3",
            short_name: "FP3",
            starts_at: hungaroring_time(25, 12, 30),
            duration_min: 60,
            day: "Saturday",
        },
        RaceSession {
            id: "quali",
            name: "Qualifying",
            short_name: "QUAL",
            starts_at: hungaroring_time(25, 16, 0),
            duration_min: 60,
            day: "Saturday",
        },
        RaceSession {
            id: "race",
            name: "Race",
            short_name: "RACE",
            starts_at: hungaroring_time(26, 15, 0),
            duration_min: 120,
            day: "Sunday",
        },
    ]
}

/// Minutes before the start of a session the group should leave the hotel.
pub fn departure_buffer_min(session_id: &str) -> i64 {
    match session_id {
        "quali" => 90,
        "race" => 120,
        _ => 75,
    }
}
