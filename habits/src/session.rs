//! The interactive session loop.
//!
//! Every iteration reloads the collection from the store, shows the menu,
//! runs at most one command to completion and saves if that command changed
//! the collection. Nothing is carried between iterations except the file.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};

use crate::core::menu::{MENU, MenuCommand};
use crate::core::name::validate_name;
use crate::core::ops::{add_habit, complete_habit, remove_habit, view_lines};
use crate::core::selection::{Position, parse_selection, render_listing};
use crate::habit::Habit;
use crate::io::clock::Clock;
use crate::io::console::Console;
use crate::io::store::{LoadOutcome, Store};

const MENU_PROMPT: &str = "> ";
const NAME_PROMPT: &str = "What's the name of the habit you want to add? ";

/// Whether the session should keep going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Quit,
}

/// Whether a command changed the collection and needs saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    Changed,
    Unchanged,
}

/// Owns the store, the clock and the console for one interactive run.
pub struct Session<C, R, W> {
    store: Store,
    clock: C,
    console: Console<R, W>,
}

impl<C: Clock, R: BufRead, W: Write> Session<C, R, W> {
    pub fn new(store: Store, clock: C, console: Console<R, W>) -> Self {
        Self {
            store,
            clock,
            console,
        }
    }

    /// Run until the user quits or input ends.
    ///
    /// Only failures outside the handled taxonomy (unreadable habits file,
    /// broken console) end the session with an error.
    pub fn run(&mut self) -> Result<()> {
        debug!(path = %self.store.path().display(), "session started");
        while self.step()? == StepOutcome::Continue {}
        debug!("session ended");
        Ok(())
    }

    /// Run a single menu iteration.
    pub fn step(&mut self) -> Result<StepOutcome> {
        let LoadOutcome { mut habits, notice } = self.store.load()?;
        if let Some(notice) = notice {
            self.console.say(notice)?;
        }

        self.console.say(MENU)?;
        let Some(answer) = self.console.ask(MENU_PROMPT)? else {
            return Ok(StepOutcome::Quit);
        };
        let Some(command) = MenuCommand::parse(&answer) else {
            debug!(answer = %answer, "unrecognized menu answer");
            return Ok(StepOutcome::Continue);
        };
        debug!(command = command.label(), count = habits.len(), "dispatching command");

        let change = match command {
            MenuCommand::Add => self.add(&mut habits)?,
            MenuCommand::Complete => self.complete(&mut habits)?,
            MenuCommand::View => self.view(&habits)?,
            MenuCommand::Remove => self.remove(&mut habits)?,
            MenuCommand::Quit => return Ok(StepOutcome::Quit),
        };
        if change == Change::Changed {
            self.persist(&habits)?;
        }
        Ok(StepOutcome::Continue)
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn add(&mut self, habits: &mut Vec<Habit>) -> Result<Change> {
        let raw = self.console.ask(NAME_PROMPT)?.unwrap_or_default();
        let name = match validate_name(&raw) {
            Ok(name) => name,
            Err(rejection) => {
                self.console.say(rejection)?;
                return Ok(Change::Unchanged);
            }
        };
        let added = add_habit(habits, name, self.clock.today());
        self.console
            .say(format!("{} has been added", added.display_name()))?;
        Ok(Change::Changed)
    }

    fn complete(&mut self, habits: &mut [Habit]) -> Result<Change> {
        let Some(position) = self.select(habits, "complete")? else {
            return Ok(Change::Unchanged);
        };
        match complete_habit(habits, position) {
            Ok(habit) => {
                let message = format!(
                    "{} streak is now {}",
                    habit.display_name(),
                    habit.display_streak()
                );
                self.console.say(message)?;
                Ok(Change::Changed)
            }
            Err(rejection) => {
                self.console.say(rejection)?;
                Ok(Change::Unchanged)
            }
        }
    }

    fn view(&mut self, habits: &[Habit]) -> Result<Change> {
        for line in view_lines(habits) {
            self.console.say(line)?;
        }
        Ok(Change::Unchanged)
    }

    fn remove(&mut self, habits: &mut Vec<Habit>) -> Result<Change> {
        let Some(position) = self.select(habits, "remove")? else {
            return Ok(Change::Unchanged);
        };
        let Some(removed) = remove_habit(habits, position) else {
            return Ok(Change::Unchanged);
        };
        self.console
            .say(format!("{} has been removed", removed.display_name()))?;
        Ok(Change::Changed)
    }

    /// Show the numbered listing and ask for a position.
    fn select(&mut self, habits: &[Habit], verb: &str) -> Result<Option<Position>> {
        self.console.say(render_listing(habits))?;
        let prompt = format!("Enter the index of the habit you want to {verb}: ");
        let raw = self.console.ask(&prompt)?.unwrap_or_default();
        match parse_selection(&raw, habits.len()) {
            Ok(position) => Ok(Some(position)),
            Err(rejection) => {
                self.console.say(rejection)?;
                Ok(None)
            }
        }
    }

    /// Save, reporting a failed write instead of ending the session.
    ///
    /// A failed save leaves this iteration's change unsaved; the next
    /// iteration reloads whatever is on disk.
    fn persist(&mut self, habits: &[Habit]) -> Result<()> {
        if let Err(err) = self.store.save(habits) {
            warn!(path = %self.store.path().display(), error = %format!("{err:#}"), "save failed");
            self.console.say(format!("Could not save habits: {err:#}"))?;
        }
        Ok(())
    }
}
