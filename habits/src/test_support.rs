//! Test-only helpers for building habits and driving scripted sessions.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tempfile::TempDir;

use crate::habit::Habit;
use crate::io::clock::Clock;
use crate::io::console::Console;
use crate::io::store::Store;
use crate::session::Session;

/// The date every test clock reports.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date")
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Default for FixedClock {
    fn default() -> Self {
        Self(today())
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Named habit dated [`today`].
pub fn habit(name: &str, streak: u64) -> Habit {
    Habit::new(name, today()).with_streak(streak)
}

/// Record without a name, as found in hand-edited files.
pub fn unnamed_habit(streak: u64) -> Habit {
    let mut habit = habit("", streak);
    habit.name = None;
    habit
}

/// Scratch directory plus a habits file path for scripted sessions.
pub struct TestSession {
    dir: TempDir,
    data_path: PathBuf,
}

impl TestSession {
    /// Session whose habits file is `habits.json` in a fresh temp dir.
    pub fn new() -> Self {
        Self::with_data_path(|root| root.join("habits.json"))
    }

    /// Session with a habits file path derived from the temp dir root.
    pub fn with_data_path(path: impl FnOnce(&Path) -> PathBuf) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let data_path = path(dir.path());
        Self { dir, data_path }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn store(&self) -> Store {
        Store::new(&self.data_path)
    }

    /// Write `habits` as the current file content.
    pub fn seed(&self, habits: &[Habit]) {
        self.store().save(habits).expect("seed habits");
    }

    pub fn write_raw(&self, contents: &str) {
        fs::write(&self.data_path, contents).expect("write raw habits");
    }

    /// Habits currently on disk (empty if missing or unparsable).
    pub fn habits(&self) -> Vec<Habit> {
        self.store().load().expect("load habits").habits
    }

    /// Run a full session on `input` and return everything it printed.
    pub fn run(&self, input: &str) -> Result<String> {
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut session = Session::new(self.store(), FixedClock::default(), console);
        session.run()?;
        let output = session.into_console().into_output();
        String::from_utf8(output).context("session output is not utf-8")
    }
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new()
    }
}
