use crate::domain::model::{BirthForm, NormalizedInput};
use crate::utils::error::{ChartError, Result};
use chrono::{NaiveDate, NaiveTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

pub fn normalize(form: &BirthForm) -> Result<NormalizedInput> {
    let date = parse_birth_date(&form.birth_date)?;
    let time = parse_birth_time(form.birth_time.as_deref());

    Ok(NormalizedInput {
        date,
        time,
        location: non_blank(form.location.as_deref()),
        name: non_blank(form.name.as_deref()),
    })
}

pub fn parse_birth_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ChartError::validation(
            "Unable to read your chart right now: a birth date is required",
        ));
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|e| {
        tracing::debug!("Rejected birth date {:?}: {}", trimmed, e);
        ChartError::validation(format!(
            "Unable to read your chart right now: '{}' is not a valid birth date (expected YYYY-MM-DD)",
            trimmed
        ))
    })
}

/// Missing or unreadable times fall back to midnight.
pub fn parse_birth_time(raw: Option<&str>) -> NaiveTime {
    let Some(trimmed) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
        return NaiveTime::MIN;
    };

    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .unwrap_or_else(|| {
            tracing::debug!("Unreadable birth time {:?}, using 00:00", trimmed);
            NaiveTime::MIN
        })
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
