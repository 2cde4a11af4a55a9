//! Validated coverage catalogue and its aggregations.
//!
//! # Responsibility
//! - Enforce catalogue structure once, at construction.
//! - Provide the pure read-side folds: counts, totals, detection rate.
//!
//! # Invariants
//! - Technique ids match the external `Txxxx[.yyy]` code format.
//! - Technique ids are unique across the whole catalogue; tactic ids are
//!   unique too.
//! - The catalogue never changes after construction, so every aggregation
//!   is a pure function of the same snapshot.

use crate::model::attack::{CoverageLevel, Tactic, Technique};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

static TECHNIQUE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^T\d{4}(\.\d{3})?$").expect("valid technique id regex"));

/// Catalogue-wide coverage counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoverageStats {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

impl CoverageStats {
    /// Counter for one level.
    pub fn count(&self, level: CoverageLevel) -> usize {
        match level {
            CoverageLevel::High => self.high,
            CoverageLevel::Medium => self.medium,
            CoverageLevel::Low => self.low,
        }
    }

    /// Rounded percentage of high-coverage techniques.
    ///
    /// `None` when the catalogue is empty; the ratio is undefined there and
    /// must never surface as NaN or infinity.
    pub fn detection_rate(&self) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        Some(((self.high as f64 / self.total as f64) * 100.0).round() as u8)
    }
}

/// Structural errors detected while building a catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Technique id does not match the `Txxxx[.yyy]` code format.
    InvalidTechniqueId(String),
    /// The same technique id appears more than once across tactics.
    DuplicateTechniqueId(String),
    /// The same tactic id appears more than once.
    DuplicateTacticId(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTechniqueId(id) => {
                write!(f, "technique id is not a valid ATT&CK code: `{id}`")
            }
            Self::DuplicateTechniqueId(id) => write!(f, "technique id is duplicated: {id}"),
            Self::DuplicateTacticId(id) => write!(f, "tactic id is duplicated: {id}"),
        }
    }
}

impl Error for CatalogError {}

/// Immutable tactic → technique catalogue plus its read-side aggregations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageMatrix {
    tactics: Vec<Tactic>,
}

impl CoverageMatrix {
    /// A catalogue with no tactics. Aggregations over it are all zero and
    /// the detection rate is undefined.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a catalogue, validating structure up front.
    pub fn from_tactics(tactics: Vec<Tactic>) -> Result<Self, CatalogError> {
        let mut tactic_ids = BTreeSet::new();
        let mut technique_ids = BTreeSet::new();
        for tactic in &tactics {
            if !tactic_ids.insert(tactic.id.clone()) {
                return Err(CatalogError::DuplicateTacticId(tactic.id.clone()));
            }
            for technique in &tactic.techniques {
                if !TECHNIQUE_ID_RE.is_match(&technique.id) {
                    return Err(CatalogError::InvalidTechniqueId(technique.id.clone()));
                }
                if !technique_ids.insert(technique.id.clone()) {
                    return Err(CatalogError::DuplicateTechniqueId(technique.id.clone()));
                }
            }
        }
        Ok(Self { tactics })
    }

    /// Ordered tactic view.
    pub fn tactics(&self) -> &[Tactic] {
        &self.tactics
    }

    pub fn tactic_count(&self) -> usize {
        self.tactics.len()
    }

    /// Count of techniques across all tactics.
    pub fn total_techniques(&self) -> usize {
        self.tactics
            .iter()
            .map(|tactic| tactic.techniques.len())
            .sum()
    }

    /// Count of techniques rated at `level`, across all tactics.
    pub fn count_by_coverage(&self, level: CoverageLevel) -> usize {
        self.all_techniques()
            .filter(|technique| technique.coverage == level)
            .count()
    }

    /// All counters in one pass over the catalogue.
    pub fn coverage_stats(&self) -> CoverageStats {
        let mut stats = CoverageStats::default();
        for technique in self.all_techniques() {
            stats.total += 1;
            match technique.coverage {
                CoverageLevel::High => stats.high += 1,
                CoverageLevel::Medium => stats.medium += 1,
                CoverageLevel::Low => stats.low += 1,
            }
        }
        stats
    }

    /// Rounded high-coverage percentage; `None` for an empty catalogue.
    pub fn detection_rate(&self) -> Option<u8> {
        self.coverage_stats().detection_rate()
    }

    /// Looks up one technique by exact id, with its owning tactic.
    pub fn find_technique(&self, id: &str) -> Option<(&Tactic, &Technique)> {
        self.tactics.iter().find_map(|tactic| {
            tactic
                .techniques
                .iter()
                .find(|technique| technique.id == id)
                .map(|technique| (tactic, technique))
        })
    }

    fn all_techniques(&self) -> impl Iterator<Item = &Technique> {
        self.tactics.iter().flat_map(|tactic| &tactic.techniques)
    }
}
