use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

// Submissions are stored as sent: a missing or null field becomes empty.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    #[serde(default, deserialize_with = "null_as_default")]
    pub start: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end: String,
}

impl TimeWindow {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    #[serde(default, deserialize_with = "null_as_default")]
    pub day: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub windows: Vec<TimeWindow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub availability: Vec<DayAvailability>,
    pub created_at: String,
}

impl TeamMember {
    /// Build a fresh record with a new id and the current time.
    pub fn new(name: String, availability: Vec<DayAvailability>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            availability,
            created_at: timestamp_now(),
        }
    }

    /// Key used for the one-record-per-name rule.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Body of `POST /members`. Absent or null fields fall back to empty values.
#[derive(Debug, Default, Deserialize)]
pub struct NewMember {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub availability: Vec<DayAvailability>,
}

impl From<NewMember> for TeamMember {
    fn from(new: NewMember) -> Self {
        TeamMember::new(new.name, new.availability)
    }
}

/// UTC now as `2026-01-01T09:00:00.000Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
