use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a persisted or typed-in enum value is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Board column a task lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl Status {
    /// Columns in display order
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    /// Stored key, identical to the serde representation
    pub fn key(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Column header label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Placeholder shown when the column has nothing to show
    pub fn empty_text(&self) -> &'static str {
        match self {
            Self::Todo => "📋 Nothing planned yet. Add your first task!",
            Self::InProgress => "⚙️ No work in progress. Move something from To Do.",
            Self::Done => "✅ Nothing done yet. You've got this!",
        }
    }

    /// Position of the column on the board
    pub fn column_index(&self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    pub fn from_column_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Status {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(ParseEnumError::new("status", other)),
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Next priority in the form selector (wraps)
    pub fn next(&self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }

    /// Previous priority in the form selector (wraps)
    pub fn prev(&self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::Medium => Self::Low,
            Self::High => Self::Medium,
        }
    }
}

impl FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseEnumError::new("priority", s)),
        }
    }
}

/// Board-wide status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    /// Whether tasks with `status` pass the filter
    pub fn admits(&self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => *only == status,
        }
    }

    /// All → To Do → In Progress → Done → All
    pub fn cycle(&self) -> Self {
        match self {
            Self::All => Self::Only(Status::Todo),
            Self::Only(Status::Todo) => Self::Only(Status::InProgress),
            Self::Only(Status::InProgress) => Self::Only(Status::Done),
            Self::Only(Status::Done) => Self::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(status) => status.label(),
        }
    }
}

/// Color theme, persisted as "light" or "dark"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon hinting at what the toggle switches to
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }
}

impl FromStr for Theme {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseEnumError::new("theme", other)),
        }
    }
}

/// Main content view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Board,
    Timeline,
}

impl View {
    pub fn toggled(&self) -> Self {
        match self {
            Self::Board => Self::Timeline,
            Self::Timeline => Self::Board,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Board => "Board",
            Self::Timeline => "Timeline",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    Grabbing, // A card is picked up and follows the cursor until dropped
}

/// Field focused in the add-task form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Priority,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Priority,
            Self::Priority => Self::Title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!("todo".parse::<Status>(), Ok(Status::Todo));
        assert_eq!("in-progress".parse::<Status>(), Ok(Status::InProgress));
        assert_eq!("done".parse::<Status>(), Ok(Status::Done));
        assert!("Done".parse::<Status>().is_err());
    }

    #[test]
    fn test_status_serde_keys() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        for status in Status::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.key()));
        }
    }

    #[test]
    fn test_status_column_index_round_trip() {
        for status in Status::ALL {
            assert_eq!(Status::from_column_index(status.column_index()), Some(status));
        }
        assert_eq!(Status::from_column_index(3), None);
    }

    #[test]
    fn test_empty_text_distinct_per_column() {
        assert_ne!(Status::Todo.empty_text(), Status::InProgress.empty_text());
        assert_ne!(Status::InProgress.empty_text(), Status::Done.empty_text());
        assert_ne!(Status::Todo.empty_text(), Status::Done.empty_text());
    }

    #[test]
    fn test_priority_cycle() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(Priority::Medium.next(), Priority::High);
        assert_eq!(Priority::High.next(), Priority::Low);
        assert_eq!(Priority::Low.prev(), Priority::High);
        assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_filter_admits() {
        assert!(StatusFilter::All.admits(Status::Done));
        assert!(StatusFilter::Only(Status::Todo).admits(Status::Todo));
        assert!(!StatusFilter::Only(Status::Todo).admits(Status::Done));
    }

    #[test]
    fn test_filter_cycle_returns_to_all() {
        let mut filter = StatusFilter::All;
        for _ in 0..4 {
            filter = filter.cycle();
        }
        assert_eq!(filter, StatusFilter::All);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        let err = "sepia".parse::<Theme>().unwrap_err();
        assert_eq!(err.to_string(), "unknown theme 'sepia'");
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
