//! Top-level menu text and command parsing.

/// Menu shown at the start of every session iteration.
pub const MENU: &str = "\
 1) Enter 1 to add a habit
 2) Enter 2 to add to the streak of a habit
 3) Enter 3 to view current habits
 4) Enter 4 to remove a habit
 5) Enter 5 or q to quit";

/// A recognized menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    Complete,
    View,
    Remove,
    Quit,
}

impl MenuCommand {
    /// Parse a menu answer. Anything unrecognized yields `None` and the menu
    /// is shown again.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "1" => Some(Self::Add),
            "2" => Some(Self::Complete),
            "3" => Some(Self::View),
            "4" => Some(Self::Remove),
            "5" | "q" => Some(Self::Quit),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Complete => "complete",
            Self::View => "view",
            Self::Remove => "remove",
            Self::Quit => "quit",
        }
    }
}
