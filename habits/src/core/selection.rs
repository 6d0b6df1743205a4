//! Numbered habit listing and index parsing shared by complete and remove.
//!
//! Displayed numbers are positions in the current collection. They are
//! recomputed for every prompt and never stored.

use std::fmt;

use crate::habit::Habit;

/// A validated 1-based position into the collection it was parsed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(usize);

impl Position {
    /// The number the user typed.
    pub fn number(self) -> usize {
        self.0
    }

    /// Zero-based index into the collection.
    pub fn index(self) -> usize {
        self.0 - 1
    }
}

/// Why a selection answer was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRejection {
    Empty,
    NotANumber,
    OutOfRange { len: usize },
}

impl fmt::Display for SelectionRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionRejection::Empty => write!(f, "Empty input"),
            SelectionRejection::NotANumber => write!(f, "Input must be a number"),
            SelectionRejection::OutOfRange { len: 0 } => {
                write!(f, "There are no habits to choose from")
            }
            SelectionRejection::OutOfRange { len } => {
                write!(f, "Number must be between 1 and {len}")
            }
        }
    }
}

impl std::error::Error for SelectionRejection {}

/// Render the numbered listing shown before a selection prompt.
///
/// Records without a name are left out, but the numbers of the entries after
/// them are not shifted: each number is the record's position in `habits`.
pub fn render_listing(habits: &[Habit]) -> String {
    let entries = habits
        .iter()
        .enumerate()
        .filter_map(|(idx, habit)| {
            habit
                .name
                .as_deref()
                .map(|name| format!("{}) {}", idx + 1, name))
        })
        .collect::<Vec<_>>();
    format!("Habits:\n{}", entries.join(", "))
}

/// Parse a selection answer against a collection of `len` habits.
pub fn parse_selection(raw: &str, len: usize) -> Result<Position, SelectionRejection> {
    if raw.is_empty() {
        return Err(SelectionRejection::Empty);
    }
    if !raw.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(SelectionRejection::NotANumber);
    }
    // All digits but too large for usize is still just out of range.
    match raw.parse::<usize>() {
        Ok(number) if (1..=len).contains(&number) => Ok(Position(number)),
        _ => Err(SelectionRejection::OutOfRange { len }),
    }
}
