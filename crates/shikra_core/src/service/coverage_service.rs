//! Coverage mapping use-case service.
//!
//! # Responsibility
//! - Answer the read-only queries behind the coverage stat cards, grid and
//!   matrix table.
//!
//! # Invariants
//! - The catalogue is fixed at construction; every answer is a pure
//!   function of that snapshot.

use crate::coverage::matrix::{CoverageMatrix, CoverageStats};
use crate::model::attack::{CoverageLevel, Tactic, Technique};

/// Per-tactic rollup for the grid cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TacticSummary {
    pub id: String,
    pub name: String,
    pub technique_count: usize,
    /// Per-technique ratings in row order, for the coverage dot strip.
    pub ratings: Vec<CoverageLevel>,
}

/// Read-only facade over a coverage catalogue.
pub struct CoverageService {
    matrix: CoverageMatrix,
}

impl CoverageService {
    pub fn new(matrix: CoverageMatrix) -> Self {
        Self { matrix }
    }

    /// Ordered tactic view for the grid and matrix renderings.
    pub fn tactics(&self) -> &[Tactic] {
        self.matrix.tactics()
    }

    pub fn tactic_count(&self) -> usize {
        self.matrix.tactic_count()
    }

    pub fn total_techniques(&self) -> usize {
        self.matrix.total_techniques()
    }

    pub fn count_by_coverage(&self, level: CoverageLevel) -> usize {
        self.matrix.count_by_coverage(level)
    }

    /// All headline counters in one pass.
    pub fn stats(&self) -> CoverageStats {
        self.matrix.coverage_stats()
    }

    /// Rounded high-coverage percentage; `None` for an empty catalogue.
    pub fn detection_rate(&self) -> Option<u8> {
        self.matrix.detection_rate()
    }

    /// Looks up one technique row by ATT&CK code.
    pub fn find_technique(&self, id: &str) -> Option<(&Tactic, &Technique)> {
        self.matrix.find_technique(id)
    }

    /// One rollup per tactic, in catalogue order.
    pub fn tactic_summaries(&self) -> Vec<TacticSummary> {
        self.matrix
            .tactics()
            .iter()
            .map(|tactic| TacticSummary {
                id: tactic.id.clone(),
                name: tactic.name.clone(),
                technique_count: tactic.technique_count(),
                ratings: tactic
                    .techniques
                    .iter()
                    .map(|technique| technique.coverage)
                    .collect(),
            })
            .collect()
    }
}
