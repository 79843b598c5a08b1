//! Trip settings model
//!
//! The singleton record describing the trip: destination, optional start date
//! and length in days. It is overwritten wholesale on every setup submission.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{TripError, TripResult};

/// Longest trip the setup form accepts
pub const MAX_DURATION: u32 = 365;

/// Date format used for stored and entered start dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Settings describing the trip
///
/// Serialized as `{destination, startDate, duration}` where `startDate` is a
/// `YYYY-MM-DD` string or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSettings {
    /// Where the trip goes
    #[serde(default)]
    pub destination: String,

    /// First day of the trip, if known
    #[serde(default, with = "start_date_format")]
    pub start_date: Option<NaiveDate>,

    /// Number of days in the trip
    #[serde(default, deserialize_with = "lenient_duration")]
    pub duration: u32,
}

impl TripSettings {
    /// Create trip settings
    pub fn new(destination: impl Into<String>, start_date: Option<NaiveDate>, duration: u32) -> Self {
        Self {
            destination: destination.into(),
            start_date,
            duration,
        }
    }

    /// Calendar date of a 1-based trip day, if the start date is known
    pub fn date_of_day(&self, day: u32) -> Option<NaiveDate> {
        let start = self.start_date?;
        start.checked_add_days(Days::new(u64::from(day.saturating_sub(1))))
    }

    /// Whether a 1-based day number falls inside the trip
    pub fn contains_day(&self, day: u32) -> bool {
        day >= 1 && day <= self.duration
    }

    /// Heading shown above the itinerary
    pub fn title(&self) -> String {
        format!("{} · {}-day itinerary", self.destination, self.duration)
    }
}

/// Raw values submitted by the setup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupForm {
    pub destination: String,
    pub start_date: String,
    pub duration: String,
}

impl SetupForm {
    /// Build a form from raw field values
    pub fn new(
        destination: impl Into<String>,
        start_date: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            destination: destination.into(),
            start_date: start_date.into(),
            duration: duration.into(),
        }
    }

    /// Pre-fill a form from existing settings
    pub fn from_settings(settings: &TripSettings) -> Self {
        Self {
            destination: settings.destination.clone(),
            start_date: settings
                .start_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            duration: settings.duration.to_string(),
        }
    }

    /// Parse the form into trip settings
    ///
    /// An empty start date means "no start date". The duration must be a whole
    /// number of days between 0 and [`MAX_DURATION`].
    pub fn parse(&self) -> TripResult<TripSettings> {
        let duration_text = self.duration.trim();
        let duration: u32 = duration_text.parse().map_err(|_| {
            TripError::Validation(format!(
                "Duration must be a whole number of days, got '{}'",
                duration_text
            ))
        })?;

        if duration > MAX_DURATION {
            return Err(TripError::Validation(format!(
                "Duration must be at most {} days, got {}",
                MAX_DURATION, duration
            )));
        }

        let start_date = parse_optional_date(&self.start_date)?;

        Ok(TripSettings {
            destination: self.destination.trim().to_string(),
            start_date,
            duration,
        })
    }
}

/// Parse a `YYYY-MM-DD` date; blank input means no date
pub fn parse_optional_date(input: &str) -> TripResult<Option<NaiveDate>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map(Some)
        .map_err(|_| {
            TripError::Validation(format!("Invalid start date '{}'. Use YYYY-MM-DD", input))
        })
}

/// A `null` duration (written by older clients for unparsable input) reads as zero
fn lenient_duration<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

mod start_date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
