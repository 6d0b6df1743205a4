use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

const NAME_KEY: &str = "name";
const STREAK_KEY: &str = "streak";
const MODIFIED_TIME_KEY: &str = "modified_time";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A tracked habit as persisted in the habits file.
///
/// Any JSON object loads as a habit. Fields that are missing or hold a value
/// of the wrong shape read as `None`; their original values and any unknown
/// keys are written back unchanged, so an odd record never costs its
/// neighbours. Every habit created through the session has all three fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Habit {
    pub name: Option<String>,
    pub streak: Option<u64>,
    /// Date the habit was added. Completing a habit leaves it untouched.
    pub modified_time: Option<NaiveDate>,
    /// Keys kept verbatim: unknown keys, and known keys whose value was unreadable.
    unread: Map<String, Value>,
}

impl Habit {
    pub fn new(name: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            name: Some(name.into()),
            streak: Some(0),
            modified_time: Some(today),
            unread: Map::new(),
        }
    }

    pub fn with_streak(mut self, streak: u64) -> Self {
        self.streak = Some(streak);
        self
    }

    /// Name for display, with a placeholder for records missing one.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }

    pub fn display_streak(&self) -> String {
        self.streak
            .map_or_else(|| "<unknown>".to_string(), |streak| streak.to_string())
    }

    pub fn display_modified_time(&self) -> String {
        self.modified_time.map_or_else(
            || "<unknown>".to_string(),
            |date| date.format(DATE_FORMAT).to_string(),
        )
    }

    fn from_object(mut object: Map<String, Value>) -> Self {
        let name = take_if(&mut object, NAME_KEY, |value| {
            value.as_str().map(str::to_string)
        });
        let streak = take_if(&mut object, STREAK_KEY, Value::as_u64);
        let modified_time = take_if(&mut object, MODIFIED_TIME_KEY, |value| {
            value
                .as_str()
                .and_then(|raw| NaiveDate::parse_from_str(raw, DATE_FORMAT).ok())
        });
        Self {
            name,
            streak,
            modified_time,
            unread: object,
        }
    }
}

/// Remove `key` from `object` only if `read` understands its value.
fn take_if<T>(
    object: &mut Map<String, Value>,
    key: &str,
    read: impl FnOnce(&Value) -> Option<T>,
) -> Option<T> {
    let parsed = object.get(key).and_then(read)?;
    object.remove(key);
    Some(parsed)
}

impl<'de> Deserialize<'de> for Habit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(Habit::from_object)
    }
}

impl Serialize for Habit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match &self.name {
            Some(name) => map.serialize_entry(NAME_KEY, name)?,
            None => serialize_unread(&mut map, &self.unread, NAME_KEY)?,
        }
        match self.streak {
            Some(streak) => map.serialize_entry(STREAK_KEY, &streak)?,
            None => serialize_unread(&mut map, &self.unread, STREAK_KEY)?,
        }
        match self.modified_time {
            Some(date) => {
                map.serialize_entry(MODIFIED_TIME_KEY, &date.format(DATE_FORMAT).to_string())?;
            }
            None => serialize_unread(&mut map, &self.unread, MODIFIED_TIME_KEY)?,
        }
        for (key, value) in &self.unread {
            if ![NAME_KEY, STREAK_KEY, MODIFIED_TIME_KEY].contains(&key.as_str()) {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

fn serialize_unread<M: SerializeMap>(
    map: &mut M,
    unread: &Map<String, Value>,
    key: &str,
) -> Result<(), M::Error> {
    match unread.get(key) {
        Some(value) => map.serialize_entry(key, value),
        None => Ok(()),
    }
}
