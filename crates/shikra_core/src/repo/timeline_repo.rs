//! Journey timeline store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide the ordered milestone store behind the journey view.
//! - Own id assignment and the silent-decline policy for invalid drafts.
//!
//! # Invariants
//! - No two stored milestones share an id, for any add/remove sequence.
//! - List order is insertion order: append-only growth, removal anywhere.
//! - An add that declines leaves the store completely unchanged.

use crate::model::milestone::{Milestone, MilestoneDraft, MilestoneId, MilestoneStatus};
use log::debug;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Derived per-status counters for the journey stats row.
///
/// `completed + current + upcoming` always equals the store length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusBreakdown {
    pub completed: usize,
    pub current: usize,
    pub upcoming: usize,
}

impl StatusBreakdown {
    pub fn total(&self) -> usize {
        self.completed + self.current + self.upcoming
    }
}

/// Structural error for seeded timeline construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineSeedError {
    /// Two seed entries carry the same id.
    DuplicateId(MilestoneId),
}

impl Display for TimelineSeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate milestone id in seed: {id}"),
        }
    }
}

impl Error for TimelineSeedError {}

/// Store interface for journey timeline mutations and reads.
///
/// Mutations are synchronous command handlers: each call runs to completion
/// and its effect is visible to every subsequent read.
pub trait TimelineRepository {
    /// Appends a milestone built from `draft`.
    ///
    /// Declines silently when a required field is empty or whitespace-only:
    /// no state change, `None` returned. The caller is expected to
    /// re-prompt, so the decline is not an error.
    fn add_milestone(&mut self, draft: &MilestoneDraft) -> Option<Milestone>;

    /// Removes the milestone with `id`.
    ///
    /// Returns whether a milestone was removed; an absent id is a benign
    /// no-op, not an error.
    fn remove_milestone(&mut self, id: MilestoneId) -> bool;

    /// Returns one milestone by id.
    fn get_milestone(&self, id: MilestoneId) -> Option<&Milestone>;

    /// Insertion-ordered view of the current entries.
    fn milestones(&self) -> &[Milestone];

    /// Counts entries with the given status. Pure linear read.
    fn count_by_status(&self, status: MilestoneStatus) -> usize;

    /// Computes all three status counters in one pass.
    fn status_breakdown(&self) -> StatusBreakdown;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool;
}

/// Vec-backed timeline store.
///
/// State lives for the owner's lifetime only; a fresh process starts from
/// the seed list again.
#[derive(Debug, Clone)]
pub struct MemoryTimelineRepository {
    entries: Vec<Milestone>,
    next_id: MilestoneId,
}

impl MemoryTimelineRepository {
    /// Creates an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a store pre-populated with `entries`.
    ///
    /// Rejects duplicate ids. The id counter resumes above the largest seed
    /// id so later adds can never collide with seeded entries.
    pub fn with_entries(entries: Vec<Milestone>) -> Result<Self, TimelineSeedError> {
        let mut seen = BTreeSet::new();
        let mut max_id = 0;
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(TimelineSeedError::DuplicateId(entry.id));
            }
            max_id = max_id.max(entry.id);
        }
        Ok(Self {
            entries,
            next_id: max_id + 1,
        })
    }

    fn assign_id(&mut self) -> MilestoneId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for MemoryTimelineRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineRepository for MemoryTimelineRepository {
    fn add_milestone(&mut self, draft: &MilestoneDraft) -> Option<Milestone> {
        if let Err(reason) = draft.validate() {
            debug!("event=milestone_skipped module=timeline status=declined reason={reason}");
            return None;
        }

        let milestone = Milestone {
            id: self.assign_id(),
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            date: draft.date.trim().to_string(),
            status: draft.status,
        };
        self.entries.push(milestone.clone());
        debug!(
            "event=milestone_added module=timeline status=ok id={} milestone_status={}",
            milestone.id, milestone.status
        );
        Some(milestone)
    }

    fn remove_milestone(&mut self, id: MilestoneId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() != before;
        if removed {
            debug!("event=milestone_removed module=timeline status=ok id={id}");
        }
        removed
    }

    fn get_milestone(&self, id: MilestoneId) -> Option<&Milestone> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    fn milestones(&self) -> &[Milestone] {
        &self.entries
    }

    fn count_by_status(&self, status: MilestoneStatus) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.status == status)
            .count()
    }

    fn status_breakdown(&self) -> StatusBreakdown {
        let mut breakdown = StatusBreakdown::default();
        for entry in &self.entries {
            match entry.status {
                MilestoneStatus::Completed => breakdown.completed += 1,
                MilestoneStatus::Current => breakdown.current += 1,
                MilestoneStatus::Upcoming => breakdown.upcoming += 1,
            }
        }
        breakdown
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
