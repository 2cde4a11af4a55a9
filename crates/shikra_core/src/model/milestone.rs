//! Journey milestone domain model.
//!
//! # Responsibility
//! - Define the timeline record behind the public journey view.
//! - Validate user-entered drafts before they reach the store.
//!
//! # Invariants
//! - `id` is unique within one timeline store and never reassigned.
//! - Records created through the add path carry non-empty trimmed text in
//!   `title`, `description` and `date`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for one journey milestone.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Values are assigned by the owning store from a monotonic counter.
pub type MilestoneId = i64;

/// Delivery state shown on the timeline node and stats row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    /// Shipped work.
    Completed,
    /// The milestone being worked on right now.
    Current,
    /// Planned but not started.
    Upcoming,
}

impl MilestoneStatus {
    /// All states in display order.
    pub const ALL: [MilestoneStatus; 3] = [
        MilestoneStatus::Completed,
        MilestoneStatus::Current,
        MilestoneStatus::Upcoming,
    ];

    /// Stable machine-readable name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneStatus::Completed => "completed",
            MilestoneStatus::Current => "current",
            MilestoneStatus::Upcoming => "upcoming",
        }
    }

    /// Human-readable badge label used by the journey cards.
    pub fn label(&self) -> &'static str {
        match self {
            MilestoneStatus::Completed => "Completed",
            MilestoneStatus::Current => "In Progress",
            MilestoneStatus::Upcoming => "Planned",
        }
    }

    /// Parses the machine-readable name back into a status.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "completed" => Some(MilestoneStatus::Completed),
            "current" => Some(MilestoneStatus::Current),
            "upcoming" => Some(MilestoneStatus::Upcoming),
            _ => None,
        }
    }
}

impl Display for MilestoneStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for MilestoneStatus {
    fn default() -> Self {
        MilestoneStatus::Upcoming
    }
}

/// One entry of the product journey timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Store-assigned stable id.
    pub id: MilestoneId,
    /// Short headline, e.g. "Analysis Engine".
    pub title: String,
    /// One or two sentences of detail shown on the card.
    pub description: String,
    /// Free-form schedule text, e.g. "Q3 2024".
    pub date: String,
    pub status: MilestoneStatus,
}

/// User-entered milestone fields before the store assigns an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MilestoneDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub status: MilestoneStatus,
}

impl MilestoneDraft {
    /// Creates a draft with the default `upcoming` status.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date: date.into(),
            status: MilestoneStatus::Upcoming,
        }
    }

    /// Overrides the draft status.
    pub fn with_status(mut self, status: MilestoneStatus) -> Self {
        self.status = status;
        self
    }

    /// Checks the required-field contract.
    ///
    /// Whitespace-only input counts as missing. Returns the first missing
    /// field so callers can re-prompt precisely.
    pub fn validate(&self) -> Result<(), MilestoneDraftError> {
        for (name, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("date", &self.date),
        ] {
            if value.trim().is_empty() {
                return Err(MilestoneDraftError::MissingField(name));
            }
        }
        Ok(())
    }
}

/// Draft-level validation error.
///
/// The store treats this as a reason to decline the add, not as a failure;
/// it is exposed for callers that want to surface the missing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneDraftError {
    /// A required text field is empty or whitespace-only.
    MissingField(&'static str),
}

impl Display for MilestoneDraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(name) => write!(f, "milestone {name} must not be empty"),
        }
    }
}

impl Error for MilestoneDraftError {}
