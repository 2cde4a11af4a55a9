//! ATT&CK-shaped catalogue records for the coverage mapping view.
//!
//! # Responsibility
//! - Define the tactic/technique records the coverage matrix is built from.
//! - Keep the qualitative coverage rating round-trippable for seed data.
//!
//! # Invariants
//! - Records are plain data; structural rules (id format, cross-catalogue
//!   uniqueness) are enforced by `CoverageMatrix` construction.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Qualitative detection coverage rating for one technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageLevel {
    /// Comprehensive detection and analysis.
    High,
    /// Partial detection capabilities.
    Medium,
    /// Limited or planned detection.
    Low,
}

impl CoverageLevel {
    /// All levels in legend order.
    pub const ALL: [CoverageLevel; 3] =
        [CoverageLevel::High, CoverageLevel::Medium, CoverageLevel::Low];

    /// Stable machine-readable name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageLevel::High => "high",
            CoverageLevel::Medium => "medium",
            CoverageLevel::Low => "low",
        }
    }

    /// Legend label shown next to the rating dot.
    pub fn label(&self) -> &'static str {
        match self {
            CoverageLevel::High => "High Coverage",
            CoverageLevel::Medium => "Medium Coverage",
            CoverageLevel::Low => "Low Coverage",
        }
    }

    /// Parses the machine-readable name back into a level.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "high" => Some(CoverageLevel::High),
            "medium" => Some(CoverageLevel::Medium),
            "low" => Some(CoverageLevel::Low),
            _ => None,
        }
    }
}

impl Display for CoverageLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ATT&CK technique row with the product's detection summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technique {
    /// External catalogue code, e.g. `T1486` or `T1059.001`.
    pub id: String,
    pub name: String,
    pub description: String,
    /// How the analysis pipeline observes this technique.
    pub detection_note: String,
    pub coverage: CoverageLevel,
}

impl Technique {
    /// Returns the base technique code without a sub-technique suffix.
    pub fn base_id(&self) -> &str {
        match self.id.find('.') {
            Some(pos) => &self.id[..pos],
            None => &self.id,
        }
    }

    /// Whether this row is a sub-technique (`Txxxx.yyy`).
    pub fn is_subtechnique(&self) -> bool {
        self.id.contains('.')
    }
}

/// One ATT&CK tactic grouping an ordered run of techniques.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tactic {
    /// URL-safe short name, e.g. `initial-access`.
    pub id: String,
    /// Display name, e.g. `Initial Access`.
    pub name: String,
    pub description: String,
    pub techniques: Vec<Technique>,
}

impl Tactic {
    pub fn technique_count(&self) -> usize {
        self.techniques.len()
    }
}
