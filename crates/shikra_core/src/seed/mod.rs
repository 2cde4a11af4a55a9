//! Built-in datasets and JSON seed loading.
//!
//! # Responsibility
//! - Ship the default timeline, coverage catalogue, testimonials and
//!   pricing tiers the site renders out of the box.
//! - Load replacement datasets from JSON, enforcing the same structural
//!   rules the built-ins satisfy.
//!
//! # Invariants
//! - Built-in datasets always pass their own validation; this is asserted
//!   by tests, so the `expect` calls on the builders cannot fire.
//! - Loaders never hand out a store/catalogue that violates id rules.

use crate::coverage::matrix::{CatalogError, CoverageMatrix};
use crate::model::attack::{CoverageLevel, Tactic, Technique};
use crate::model::content::{ContentError, PlanFeature, PricingPlan, Testimonial};
use crate::model::milestone::{Milestone, MilestoneStatus};
use crate::repo::timeline_repo::{MemoryTimelineRepository, TimelineSeedError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from loading seed documents.
#[derive(Debug)]
pub enum SeedError {
    /// The document is not valid JSON for the expected shape.
    Parse(serde_json::Error),
    /// The catalogue violates id format/uniqueness rules.
    Catalog(CatalogError),
    /// The timeline violates id uniqueness.
    Timeline(TimelineSeedError),
    /// A content record is out of bounds.
    Content(ContentError),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "seed document is not valid JSON: {err}"),
            Self::Catalog(err) => write!(f, "{err}"),
            Self::Timeline(err) => write!(f, "{err}"),
            Self::Content(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Catalog(err) => Some(err),
            Self::Timeline(err) => Some(err),
            Self::Content(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<CatalogError> for SeedError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<TimelineSeedError> for SeedError {
    fn from(value: TimelineSeedError) -> Self {
        Self::Timeline(value)
    }
}

impl From<ContentError> for SeedError {
    fn from(value: ContentError) -> Self {
        Self::Content(value)
    }
}

/// Loads a timeline store from a JSON array of milestones.
pub fn timeline_from_json(document: &str) -> Result<MemoryTimelineRepository, SeedError> {
    let entries: Vec<Milestone> = serde_json::from_str(document)?;
    Ok(MemoryTimelineRepository::with_entries(entries)?)
}

/// Loads a coverage catalogue from a JSON array of tactics.
pub fn catalog_from_json(document: &str) -> Result<CoverageMatrix, SeedError> {
    let tactics: Vec<Tactic> = serde_json::from_str(document)?;
    Ok(CoverageMatrix::from_tactics(tactics)?)
}

/// Loads testimonials from a JSON array, checking rating bounds.
pub fn testimonials_from_json(document: &str) -> Result<Vec<Testimonial>, SeedError> {
    let entries: Vec<Testimonial> = serde_json::from_str(document)?;
    for entry in &entries {
        entry.validate()?;
    }
    Ok(entries)
}

/// The six journey milestones shipped with the site.
pub fn builtin_timeline() -> Vec<Milestone> {
    let mut next = 0;
    let mut step = |title: &str, description: &str, date: &str, status: MilestoneStatus| {
        next += 1;
        Milestone {
            id: next,
            title: title.to_string(),
            description: description.to_string(),
            date: date.to_string(),
            status,
        }
    };

    vec![
        step(
            "Project Inception",
            "Initial research and concept development for automated ransomware analysis",
            "Q1 2024",
            MilestoneStatus::Completed,
        ),
        step(
            "VM Environment Setup",
            "Development of anti-VM detection and QEMU-KVM integration",
            "Q2 2024",
            MilestoneStatus::Completed,
        ),
        step(
            "Analysis Engine",
            "Core automation engine with ProcMon integration and memory dumping",
            "Q3 2024",
            MilestoneStatus::Completed,
        ),
        step(
            "MITRE ATT&CK Integration",
            "Mapping analysis results to MITRE ATT&CK framework",
            "Q4 2024",
            MilestoneStatus::Current,
        ),
        step(
            "Report Generation",
            "Automated actionable report generation with YARA rules",
            "Q1 2025",
            MilestoneStatus::Upcoming,
        ),
        step(
            "Enterprise Features",
            "Multi-tenant support and enterprise integrations",
            "Q2 2025",
            MilestoneStatus::Upcoming,
        ),
    ]
}

/// A timeline store seeded with [`builtin_timeline`].
pub fn default_timeline_store() -> MemoryTimelineRepository {
    MemoryTimelineRepository::with_entries(builtin_timeline())
        .expect("builtin timeline seed has unique ids")
}

/// The shipped tactic → technique coverage catalogue.
///
/// Twelve techniques across six tactics; eight rated high and four medium,
/// which puts the headline detection rate at 67%.
pub fn builtin_catalog() -> CoverageMatrix {
    let tactics = vec![
        tactic(
            "initial-access",
            "Initial Access",
            "Techniques used to gain initial foothold",
            vec![
                technique(
                    "T1566",
                    "Phishing",
                    "Email-based social engineering attacks",
                    "Email attachment analysis and behavioral monitoring",
                    CoverageLevel::High,
                ),
                technique(
                    "T1190",
                    "Exploit Public-Facing Application",
                    "Exploitation of internet-facing services",
                    "Network traffic analysis and exploit detection",
                    CoverageLevel::Medium,
                ),
            ],
        ),
        tactic(
            "execution",
            "Execution",
            "Techniques for running malicious code",
            vec![
                technique(
                    "T1059",
                    "Command and Scripting Interpreter",
                    "Abuse of command-line interfaces",
                    "Process monitoring and command-line analysis",
                    CoverageLevel::High,
                ),
                technique(
                    "T1053",
                    "Scheduled Task/Job",
                    "Abuse of task scheduling functionality",
                    "Registry and file system monitoring",
                    CoverageLevel::Medium,
                ),
            ],
        ),
        tactic(
            "persistence",
            "Persistence",
            "Techniques to maintain access",
            vec![
                technique(
                    "T1547",
                    "Boot or Logon Autostart Execution",
                    "Automatic execution during system startup",
                    "Registry monitoring and startup analysis",
                    CoverageLevel::High,
                ),
                technique(
                    "T1543",
                    "Create or Modify System Process",
                    "Creation of malicious system services",
                    "Service creation monitoring",
                    CoverageLevel::Medium,
                ),
            ],
        ),
        tactic(
            "defense-evasion",
            "Defense Evasion",
            "Techniques to avoid detection",
            vec![
                technique(
                    "T1055",
                    "Process Injection",
                    "Injection of code into legitimate processes",
                    "Memory analysis and process behavior monitoring",
                    CoverageLevel::High,
                ),
                technique(
                    "T1027",
                    "Obfuscated Files or Information",
                    "Making files difficult to analyze",
                    "Static and dynamic analysis techniques",
                    CoverageLevel::Medium,
                ),
            ],
        ),
        tactic(
            "discovery",
            "Discovery",
            "Techniques for system reconnaissance",
            vec![
                technique(
                    "T1083",
                    "File and Directory Discovery",
                    "Enumeration of files and directories",
                    "File system access monitoring",
                    CoverageLevel::High,
                ),
                technique(
                    "T1057",
                    "Process Discovery",
                    "Enumeration of running processes",
                    "Process enumeration detection",
                    CoverageLevel::High,
                ),
            ],
        ),
        tactic(
            "impact",
            "Impact",
            "Techniques for data destruction/encryption",
            vec![
                technique(
                    "T1486",
                    "Data Encrypted for Impact",
                    "Encryption of data for ransom",
                    "File encryption monitoring and behavioral analysis",
                    CoverageLevel::High,
                ),
                technique(
                    "T1490",
                    "Inhibit System Recovery",
                    "Deletion of backup and recovery data",
                    "System recovery mechanism monitoring",
                    CoverageLevel::High,
                ),
            ],
        ),
    ];

    CoverageMatrix::from_tactics(tactics).expect("builtin catalogue is structurally valid")
}

/// The three customer testimonials shipped with the site.
pub fn builtin_testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            1,
            "Dr. Sarah Chen",
            "Lead Threat Researcher",
            "CyberDefense Labs",
            "SHIKRA has revolutionized our ransomware analysis workflow. What used to take \
             our team hours now completes in minutes with far more comprehensive results.",
        ),
        testimonial(
            2,
            "Marcus Rodriguez",
            "SOC Manager",
            "SecureBank Financial",
            "The automated MITRE ATT&CK mapping and YARA rule generation have been \
             game-changers for our incident response team.",
        ),
        testimonial(
            3,
            "Jennifer Walsh",
            "Principal Security Analyst",
            "TechCorp Industries",
            "The memory forensics integration catches evasive techniques we would have \
             missed analyzing samples manually.",
        ),
    ]
}

/// The three pricing tiers shipped with the site.
pub fn builtin_pricing() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            id: "researcher".to_string(),
            name: "Researcher".to_string(),
            description: "Perfect for security researchers and individual analysts".to_string(),
            monthly_usd: Some(99),
            yearly_usd: Some(990),
            features: vec![
                feature("50 samples/month", true),
                feature("Basic VM environments", true),
                feature("Standard analysis reports", true),
                feature("MITRE ATT&CK mapping", true),
                feature("Email support", true),
                feature("API access", false),
                feature("Custom YARA rules", false),
                feature("Priority analysis queue", false),
                feature("Team collaboration", false),
                feature("Enterprise integrations", false),
            ],
            popular: false,
        },
        PricingPlan {
            id: "professional".to_string(),
            name: "Professional".to_string(),
            description: "Ideal for SOC teams and cybersecurity professionals".to_string(),
            monthly_usd: Some(299),
            yearly_usd: Some(2990),
            features: vec![
                feature("500 samples/month", true),
                feature("Advanced VM environments", true),
                feature("Detailed analysis reports", true),
                feature("MITRE ATT&CK mapping", true),
                feature("Priority email support", true),
                feature("Full API access", true),
                feature("Custom YARA rules", true),
                feature("Priority analysis queue", true),
                feature("Team collaboration (5 users)", true),
                feature("Enterprise integrations", false),
            ],
            popular: true,
        },
        PricingPlan {
            id: "enterprise".to_string(),
            name: "Enterprise".to_string(),
            description: "Complete solution for large organizations and MSSPs".to_string(),
            monthly_usd: None,
            yearly_usd: None,
            features: vec![
                feature("Unlimited samples", true),
                feature("Custom VM environments", true),
                feature("Executive analysis reports", true),
                feature("Advanced MITRE mapping", true),
                feature("24/7 dedicated support", true),
                feature("Full API access", true),
                feature("Custom YARA rules", true),
                feature("Dedicated analysis queue", true),
                feature("Unlimited team collaboration", true),
                feature("Full enterprise integrations", true),
            ],
            popular: false,
        },
    ]
}

fn tactic(id: &str, name: &str, description: &str, techniques: Vec<Technique>) -> Tactic {
    Tactic {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        techniques,
    }
}

fn technique(
    id: &str,
    name: &str,
    description: &str,
    detection_note: &str,
    coverage: CoverageLevel,
) -> Technique {
    Technique {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        detection_note: detection_note.to_string(),
        coverage,
    }
}

fn testimonial(id: i64, name: &str, role: &str, company: &str, quote: &str) -> Testimonial {
    Testimonial {
        id,
        name: name.to_string(),
        role: role.to_string(),
        company: company.to_string(),
        quote: quote.to_string(),
        rating: 5,
    }
}

fn feature(name: &str, included: bool) -> PlanFeature {
    PlanFeature {
        name: name.to_string(),
        included,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        builtin_catalog, builtin_pricing, builtin_testimonials, builtin_timeline,
        default_timeline_store,
    };
    use crate::model::milestone::MilestoneStatus;
    use crate::repo::timeline_repo::TimelineRepository;

    #[test]
    fn builtin_timeline_matches_shipped_shape() {
        let entries = builtin_timeline();
        assert_eq!(entries.len(), 6);

        let store = default_timeline_store();
        let breakdown = store.status_breakdown();
        assert_eq!(breakdown.completed, 3);
        assert_eq!(breakdown.current, 1);
        assert_eq!(breakdown.upcoming, 2);
    }

    #[test]
    fn builtin_store_continues_ids_above_seed() {
        let mut store = default_timeline_store();
        let added = store
            .add_milestone(&crate::model::milestone::MilestoneDraft::new(
                "GA Launch",
                "General availability release",
                "Q3 2025",
            ))
            .expect("valid draft");
        assert_eq!(added.id, 7);
        assert_eq!(added.status, MilestoneStatus::Upcoming);
    }

    #[test]
    fn builtin_catalog_ships_expected_totals() {
        let stats = builtin_catalog().coverage_stats();
        assert_eq!(stats.high, 8);
        assert_eq!(stats.medium, 4);
        assert_eq!(stats.low, 0);
        assert_eq!(stats.total, 12);
    }

    #[test]
    fn builtin_testimonials_pass_rating_bounds() {
        for entry in builtin_testimonials() {
            entry.validate().expect("builtin testimonial is valid");
        }
    }

    #[test]
    fn builtin_pricing_has_one_popular_and_one_custom_tier() {
        let plans = builtin_pricing();
        assert_eq!(plans.iter().filter(|plan| plan.popular).count(), 1);
        assert_eq!(
            plans.iter().filter(|plan| plan.is_custom_priced()).count(),
            1
        );
    }
}
