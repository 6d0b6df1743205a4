//! Habit collection load/save against a single JSON file.

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::habit::Habit;

/// Non-fatal condition met while loading, reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadNotice {
    /// No habits file yet (first run).
    Missing,
    /// The file exists but is not a JSON array of objects.
    Corrupt,
}

impl fmt::Display for LoadNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadNotice::Missing => write!(f, "Habits file not found. Starting a new one."),
            LoadNotice::Corrupt => {
                write!(f, "Habits file contains invalid data. Resetting to empty.")
            }
        }
    }
}

/// Result of [`Store::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub habits: Vec<Habit>,
    pub notice: Option<LoadNotice>,
}

impl LoadOutcome {
    fn empty(notice: LoadNotice) -> Self {
        Self {
            habits: Vec::new(),
            notice: Some(notice),
        }
    }
}

/// Persistence boundary for the whole habit collection.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection.
    ///
    /// A missing or unparsable file yields an empty collection plus a notice.
    /// Any other read failure is returned as an error.
    pub fn load(&self) -> Result<LoadOutcome> {
        debug!(path = %self.path.display(), "loading habits");
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "habits file missing");
                return Ok(LoadOutcome::empty(LoadNotice::Missing));
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("read habits {}", self.path.display()));
            }
        };
        match serde_json::from_slice::<Vec<Habit>>(&contents) {
            Ok(habits) => {
                debug!(count = habits.len(), "habits loaded");
                Ok(LoadOutcome {
                    habits,
                    notice: None,
                })
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "discarding unparsable habits file");
                Ok(LoadOutcome::empty(LoadNotice::Corrupt))
            }
        }
    }

    /// Overwrite the file with the full collection (temp file + rename).
    ///
    /// The parent directory must already exist.
    pub fn save(&self, habits: &[Habit]) -> Result<()> {
        debug!(path = %self.path.display(), count = habits.len(), "saving habits");
        let mut buf = serde_json::to_string_pretty(habits).context("serialize habits")?;
        buf.push('\n');
        self.write_atomic(&buf)
    }

    fn write_atomic(&self, contents: &str) -> Result<()> {
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, contents)
            .with_context(|| format!("write temp habits {}", tmp_path.display()))?;
        if let Err(err) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(err).with_context(|| format!("replace habits {}", self.path.display()));
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{habit, unnamed_habit};
    use serde_json::Value;

    #[test]
    fn missing_file_loads_empty_with_notice() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = Store::new(temp.path().join("habits.json"));

        let outcome = store.load().expect("load");
        assert!(outcome.habits.is_empty());
        assert_eq!(outcome.notice, Some(LoadNotice::Missing));
    }

    #[test]
    fn corrupt_file_loads_empty_every_time() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("habits.json");
        fs::write(&path, "{not json").expect("write");
        let store = Store::new(&path);

        for _ in 0..2 {
            let outcome = store.load().expect("load");
            assert!(outcome.habits.is_empty());
            assert_eq!(outcome.notice, Some(LoadNotice::Corrupt));
        }
        assert_eq!(fs::read_to_string(&path).expect("read"), "{not json");
    }

    #[test]
    fn wrong_shape_is_treated_as_corrupt() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("habits.json");
        let store = Store::new(&path);

        for raw in ["{}", "null", "\"habits\"", "[1, 2]", "[{\"name\":\"Run\"}, []]"] {
            fs::write(&path, raw).expect("write");
            let outcome = store.load().expect("load");
            assert_eq!(outcome.notice, Some(LoadNotice::Corrupt), "{raw}");
        }
    }

    #[test]
    fn incomplete_record_keeps_its_neighbours() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("habits.json");
        let original = r#"[{"name":"Reading","streak":40,"modified_time":"2024-01-02"},{"name":"Yoga","streak":2},{"name":"Run","streak":-3,"modified_time":"yesterday"}]"#;
        fs::write(&path, original).expect("write");
        let store = Store::new(&path);

        let outcome = store.load().expect("load");
        assert_eq!(outcome.notice, None);
        assert_eq!(outcome.habits.len(), 3);
        assert_eq!(outcome.habits[0].streak, Some(40));
        assert_eq!(outcome.habits[1].modified_time, None);
        assert_eq!(outcome.habits[2].streak, None);

        store.save(&outcome.habits).expect("save");
        let before: Value = serde_json::from_str(original).expect("parse original");
        let after: Value =
            serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("parse saved");
        assert_eq!(before, after);
    }

    #[test]
    fn non_utf8_content_is_treated_as_corrupt() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("habits.json");
        fs::write(&path, [0xff, 0xfe, 0x00]).expect("write");

        let outcome = Store::new(&path).load().expect("load");
        assert_eq!(outcome.notice, Some(LoadNotice::Corrupt));
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        // A directory cannot be read as a file.
        let err = Store::new(temp.path()).load().expect_err("directory");
        assert!(err.to_string().contains("read habits"));
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = Store::new(temp.path().join("habits.json"));
        let habits = vec![habit("Reading", 3), unnamed_habit(1), habit("Running", 0)];

        store.save(&habits).expect("save");
        let outcome = store.load().expect("load");
        assert_eq!(outcome.notice, None);
        assert_eq!(outcome.habits, habits);
    }

    #[test]
    fn load_then_save_preserves_content_ignoring_key_order() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("habits.json");
        let original = r#"[{"streak":2,"modified_time":"2024-05-01","name":"Reading"},{"modified_time":"2024-06-12","name":"Yoga","streak":0}]"#;
        fs::write(&path, original).expect("write");
        let store = Store::new(&path);

        let outcome = store.load().expect("load");
        store.save(&outcome.habits).expect("save");

        let before: Value = serde_json::from_str(original).expect("parse original");
        let after: Value =
            serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("parse saved");
        assert_eq!(before, after);
    }

    #[test]
    fn save_overwrites_previous_content() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("habits.json");
        fs::write(&path, "garbage that is longer than the new content").expect("write");
        let store = Store::new(&path);

        store.save(&[]).expect("save");
        assert_eq!(fs::read_to_string(&path).expect("read"), "[]\n");
        assert!(!temp.path().join("habits.json.tmp").exists());
    }

    #[test]
    fn save_into_missing_directory_fails_without_creating_it() {
        let temp = tempfile::tempdir().expect("tempdir");
        let missing_dir = temp.path().join("missing");
        let store = Store::new(missing_dir.join("habits.json"));

        let err = store.save(&[habit("Reading", 0)]).expect_err("missing dir");
        assert!(err.to_string().contains("write temp habits"));
        assert!(!missing_dir.exists());
    }
}
