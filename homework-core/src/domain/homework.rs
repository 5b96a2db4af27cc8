//! Homework domain types

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Review status of a homework submission
///
/// This is the status catalog: every status the bot knows how to report,
/// each paired with the verdict phrase sent to the recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// All known statuses
    pub const ALL: [HomeworkStatus; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Identifier used by the review API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict for this status
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }

    /// Looks up a status identifier, `None` if it is not in the catalog
    pub fn lookup(identifier: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == identifier)
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomeworkStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| s.to_string())
    }
}

/// Validated view over one API response
///
/// Borrowed from the raw payload; holding one guarantees both fields exist
/// with the right types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollResponse<'a> {
    /// Homework records, newest first, still unvalidated individually
    pub homeworks: &'a [Value],
    /// Server time to use as the next `from_date`
    pub current_date: i64,
}

impl<'a> PollResponse<'a> {
    /// The most recent record, if the window contained any
    pub fn latest(&self) -> Option<&'a Value> {
        self.homeworks.first()
    }
}
