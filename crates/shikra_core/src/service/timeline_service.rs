//! Journey timeline use-case service.
//!
//! # Responsibility
//! - Provide the add/remove command handlers behind the journey editor.
//! - Expose the derived status counters the stats row renders.
//!
//! # Invariants
//! - Service APIs never bypass the store's draft validation or id
//!   assignment.
//! - The service stays container-agnostic over `TimelineRepository`.

use crate::model::milestone::{Milestone, MilestoneDraft, MilestoneId, MilestoneStatus};
use crate::repo::timeline_repo::{StatusBreakdown, TimelineRepository};

/// Use-case facade over a timeline store.
pub struct TimelineService<R: TimelineRepository> {
    repo: R,
}

impl<R: TimelineRepository> TimelineService<R> {
    /// Creates a service using the provided store implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Appends a step with the default `upcoming` status.
    ///
    /// # Contract
    /// - Declines silently (returns `None`) when any field is empty or
    ///   whitespace-only; the caller re-prompts.
    /// - On success returns the stored record with its assigned id.
    pub fn add_step(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Option<Milestone> {
        let draft = MilestoneDraft::new(title, description, date);
        self.repo.add_milestone(&draft)
    }

    /// Appends a step with an explicit status.
    pub fn add_step_with_status(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
        status: MilestoneStatus,
    ) -> Option<Milestone> {
        let draft = MilestoneDraft::new(title, description, date).with_status(status);
        self.repo.add_milestone(&draft)
    }

    /// Removes one step by id; an absent id is a benign no-op.
    pub fn remove_step(&mut self, id: MilestoneId) -> bool {
        self.repo.remove_milestone(id)
    }

    /// Returns one step by id.
    pub fn step(&self, id: MilestoneId) -> Option<&Milestone> {
        self.repo.get_milestone(id)
    }

    /// Insertion-ordered view of all steps.
    pub fn steps(&self) -> &[Milestone] {
        self.repo.milestones()
    }

    /// Counts steps in one status.
    pub fn count_by_status(&self, status: MilestoneStatus) -> usize {
        self.repo.count_by_status(status)
    }

    /// All three status counters; their sum equals `len()`.
    pub fn status_breakdown(&self) -> StatusBreakdown {
        self.repo.status_breakdown()
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }
}
