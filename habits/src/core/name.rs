//! Habit name validation.

use std::fmt;

/// A name that passed validation: non-empty, alphabetic characters only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitName(String);

impl HabitName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Why a proposed habit name was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRejection {
    Empty,
    NotAlphabetic,
}

impl fmt::Display for NameRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameRejection::Empty => write!(f, "Habit name cannot be empty"),
            NameRejection::NotAlphabetic => write!(
                f,
                "No numbers or special characters allowed, only letters"
            ),
        }
    }
}

impl std::error::Error for NameRejection {}

/// Validate raw user input as a habit name.
///
/// Alphabetic characters from any script are accepted, including combining
/// vowel signs; digits, whitespace and punctuation are not. The input is not
/// trimmed.
pub fn validate_name(raw: &str) -> Result<HabitName, NameRejection> {
    if raw.is_empty() {
        return Err(NameRejection::Empty);
    }
    if !raw.chars().all(char::is_alphabetic) {
        return Err(NameRejection::NotAlphabetic);
    }
    Ok(HabitName(raw.to_string()))
}
