//! In-memory operations on the habit collection.
//!
//! Inputs arrive already validated ([`HabitName`], [`Position`]); these
//! functions only apply the change and report what happened.

use std::fmt;

use chrono::NaiveDate;

use crate::core::name::HabitName;
use crate::core::selection::Position;
use crate::habit::Habit;

/// Append a new habit with a zero streak, dated `today`.
pub fn add_habit(habits: &mut Vec<Habit>, name: HabitName, today: NaiveDate) -> &Habit {
    habits.push(Habit::new(name.into_inner(), today));
    &habits[habits.len() - 1]
}

/// Why a completion left the collection unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompleteRejection {
    /// The position no longer fits the collection.
    NoSuchHabit,
    /// The stored streak is missing or not a non-negative integer.
    UnreadableStreak,
    /// The streak is already at the largest storable value.
    StreakLimit,
}

impl fmt::Display for CompleteRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompleteRejection::NoSuchHabit => write!(f, "That habit no longer exists"),
            CompleteRejection::UnreadableStreak => {
                write!(f, "This habit's streak is missing or invalid")
            }
            CompleteRejection::StreakLimit => write!(f, "Streak cannot go higher"),
        }
    }
}

impl std::error::Error for CompleteRejection {}

/// Increment the streak of the habit at `position` by exactly one.
///
/// `modified_time` is left as it was.
pub fn complete_habit(
    habits: &mut [Habit],
    position: Position,
) -> Result<&Habit, CompleteRejection> {
    let habit = habits
        .get_mut(position.index())
        .ok_or(CompleteRejection::NoSuchHabit)?;
    let streak = habit.streak.ok_or(CompleteRejection::UnreadableStreak)?;
    let next = streak.checked_add(1).ok_or(CompleteRejection::StreakLimit)?;
    habit.streak = Some(next);
    Ok(habit)
}

/// Remove the habit at `position`, shifting later habits down by one.
pub fn remove_habit(habits: &mut Vec<Habit>, position: Position) -> Option<Habit> {
    let index = position.index();
    if index >= habits.len() {
        return None;
    }
    Some(habits.remove(index))
}

/// One line per habit, in collection order.
pub fn view_lines(habits: &[Habit]) -> Vec<String> {
    habits
        .iter()
        .map(|habit| {
            format!(
                "name: {}, streaks: {}, last update: {}",
                habit.display_name(),
                habit.display_streak(),
                habit.display_modified_time()
            )
        })
        .collect()
}
