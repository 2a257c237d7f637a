use chrono::{DateTime, NaiveDateTime, Utc};

use super::super::domain::{InitialHearing, SubmittedDefendant};

const WHOLE_SECOND_FORMAT: &str = "%Y-%m-%d%H:%M:%S";
const MILLISECOND_FORMAT: &str = "%Y-%m-%d%H:%M:%S%.3f";

/// Date and time are concatenated as submitted. Whole-second values are 18
/// characters (17 with a single-digit hour); millisecond values carry a
/// fractional part. Hearing times are read as UTC.
pub fn hearing_start(hearing: &InitialHearing) -> Option<DateTime<Utc>> {
    let date = hearing.date_of_hearing.as_deref()?.trim();
    let time = hearing.time_of_hearing.as_deref()?.trim();
    if date.is_empty() || time.is_empty() {
        return None;
    }

    let joined = format!("{date}{time}");
    let format = if joined.contains('.') {
        MILLISECOND_FORMAT
    } else {
        WHOLE_SECOND_FORMAT
    };

    NaiveDateTime::parse_from_str(&joined, format)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Start of the first defendant whose initial hearing has both a date and a time.
pub fn first_hearing_start(defendants: &[SubmittedDefendant]) -> Option<DateTime<Utc>> {
    defendants
        .iter()
        .filter_map(|defendant| defendant.initial_hearing.as_ref())
        .filter(|hearing| hearing.date_of_hearing.is_some() && hearing.time_of_hearing.is_some())
        .find_map(hearing_start)
}
