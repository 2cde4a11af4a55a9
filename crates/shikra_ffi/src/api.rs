//! FFI use-case API for the site shell.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the UI layer.
//! - Keep error semantics simple: envelopes, never exceptions.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Mutating journey calls all target one process-global store, so every
//!   caller observes the same timeline.

use log::warn;
use shikra_core::{
    builtin_catalog, builtin_pricing, builtin_testimonials, core_version as core_version_inner,
    default_timeline_store, init_logging as init_logging_inner, ping as ping_inner,
    CoverageService, MemoryTimelineRepository, Milestone, MilestoneStatus, TimelineService,
};
use std::sync::{Mutex, OnceLock};

static JOURNEY: OnceLock<Mutex<TimelineService<MemoryTimelineRepository>>> = OnceLock::new();

/// Minimal health-check API for bridge smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes the core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path for rolling log files.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for the same `level + log_dir`; conflicting reconfiguration
///   returns the error message.
/// - Never panics; returns an empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One journey step as rendered by the timeline cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyStepView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: String,
    /// Machine-readable status (`completed|current|upcoming`).
    pub status: String,
    /// Badge text (`Completed|In Progress|Planned`).
    pub status_label: String,
}

/// Derived counters behind the journey stats row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JourneyStatsView {
    pub completed: u32,
    pub current: u32,
    pub upcoming: u32,
    pub total: u32,
}

/// Generic action response envelope for journey commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepActionResponse {
    /// Whether the command executed (soft declines still set `ok = true`
    /// with `step_id = None`).
    pub ok: bool,
    /// The affected step id, when a step was created or removed.
    pub step_id: Option<i64>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl StepActionResponse {
    fn done(message: impl Into<String>, step_id: Option<i64>) -> Self {
        Self {
            ok: true,
            step_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            step_id: None,
            message: message.into(),
        }
    }
}

/// Lists the journey steps in insertion order.
///
/// # FFI contract
/// - Sync call over the process-global store.
/// - Never panics; returns an empty list if the store is unavailable.
#[flutter_rust_bridge::frb(sync)]
pub fn journey_steps() -> Vec<JourneyStepView> {
    with_journey(|service| service.steps().iter().map(to_step_view).collect())
        .unwrap_or_default()
}

/// Appends one journey step.
///
/// Input semantics:
/// - Empty/whitespace-only `title`, `description` or `date` declines the
///   add without touching the store (the form re-prompts).
/// - `status`: optional `completed|current|upcoming`; `None` or empty means
///   `upcoming`. An unrecognized value declines the add.
///
/// # FFI contract
/// - Sync call over the process-global store.
/// - Never panics; returns the created step id on success.
#[flutter_rust_bridge::frb(sync)]
pub fn journey_add_step(
    title: String,
    description: String,
    date: String,
    status: Option<String>,
) -> StepActionResponse {
    let status = match status.as_deref().map(str::trim) {
        None | Some("") => MilestoneStatus::Upcoming,
        Some(value) => match MilestoneStatus::parse(value) {
            Some(parsed) => parsed,
            None => {
                warn!("event=journey_add module=ffi status=rejected reason=unknown_status value={value}");
                return StepActionResponse::failure(format!(
                    "journey_add_step failed: unknown status `{value}`"
                ));
            }
        },
    };

    let outcome =
        with_journey(|service| service.add_step_with_status(title, description, date, status));
    match outcome {
        Ok(Some(step)) => StepActionResponse::done("Step added.", Some(step.id)),
        Ok(None) => StepActionResponse::done("Step declined: all fields are required.", None),
        Err(err) => StepActionResponse::failure(format!("journey_add_step failed: {err}")),
    }
}

/// Removes one journey step by id.
///
/// # FFI contract
/// - Sync call over the process-global store.
/// - An absent id is a benign no-op reported in the message, not an error.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn journey_remove_step(id: i64) -> StepActionResponse {
    match with_journey(|service| service.remove_step(id)) {
        Ok(true) => StepActionResponse::done("Step removed.", Some(id)),
        Ok(false) => StepActionResponse::done(format!("No journey step with id {id}."), None),
        Err(err) => StepActionResponse::failure(format!("journey_remove_step failed: {err}")),
    }
}

/// Returns the journey status counters in one consistent snapshot.
///
/// # FFI contract
/// - Sync call over the process-global store; counters always sum to
///   `total` because they are computed under one lock.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn journey_stats() -> JourneyStatsView {
    with_journey(|service| {
        let breakdown = service.status_breakdown();
        JourneyStatsView {
            completed: breakdown.completed as u32,
            current: breakdown.current as u32,
            upcoming: breakdown.upcoming as u32,
            total: breakdown.total() as u32,
        }
    })
    .unwrap_or(JourneyStatsView {
        completed: 0,
        current: 0,
        upcoming: 0,
        total: 0,
    })
}

/// Headline counters for the coverage stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageStatsView {
    pub tactics: u32,
    pub techniques: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    /// Rounded percentage; `None` when the catalogue is empty.
    pub detection_rate: Option<u8>,
}

/// Per-tactic rollup for the coverage grid cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TacticSummaryView {
    pub id: String,
    pub name: String,
    pub technique_count: u32,
    /// Per-technique ratings (`high|medium|low`) in row order.
    pub ratings: Vec<String>,
}

/// One technique row resolved by exact ATT&CK code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechniqueDetailView {
    pub tactic_id: String,
    pub tactic_name: String,
    pub technique_id: String,
    pub name: String,
    pub description: String,
    pub detection_note: String,
    pub coverage: String,
    pub coverage_label: String,
}

/// Returns the shipped coverage statistics.
///
/// # FFI contract
/// - Sync call over the static catalogue; deterministic.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn coverage_stats() -> CoverageStatsView {
    let service = CoverageService::new(builtin_catalog());
    let stats = service.stats();
    CoverageStatsView {
        tactics: service.tactic_count() as u32,
        techniques: stats.total as u32,
        high: stats.high as u32,
        medium: stats.medium as u32,
        low: stats.low as u32,
        detection_rate: stats.detection_rate(),
    }
}

/// Returns one rollup per tactic, in catalogue order.
///
/// # FFI contract
/// - Sync call over the static catalogue; deterministic.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn coverage_tactic_summaries() -> Vec<TacticSummaryView> {
    CoverageService::new(builtin_catalog())
        .tactic_summaries()
        .into_iter()
        .map(|summary| TacticSummaryView {
            id: summary.id,
            name: summary.name,
            technique_count: summary.technique_count as u32,
            ratings: summary
                .ratings
                .iter()
                .map(|level| level.as_str().to_string())
                .collect(),
        })
        .collect()
}

/// Looks up one technique row by ATT&CK code.
///
/// # FFI contract
/// - Sync call over the static catalogue; `None` for unknown codes.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn coverage_technique(id: String) -> Option<TechniqueDetailView> {
    let catalog = builtin_catalog();
    let (tactic, technique) = catalog.find_technique(id.trim())?;
    Some(TechniqueDetailView {
        tactic_id: tactic.id.clone(),
        tactic_name: tactic.name.clone(),
        technique_id: technique.id.clone(),
        name: technique.name.clone(),
        description: technique.description.clone(),
        detection_note: technique.detection_note.clone(),
        coverage: technique.coverage.as_str().to_string(),
        coverage_label: technique.coverage.label().to_string(),
    })
}

/// One customer quote for the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialView {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub company: String,
    pub quote: String,
    pub rating: u8,
}

/// One pricing tier with its derived savings figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingPlanView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub monthly_usd: Option<u32>,
    pub yearly_usd: Option<u32>,
    pub popular: bool,
    /// Rounded yearly-savings percentage; `None` for custom pricing.
    pub yearly_savings_percent: Option<u8>,
    pub features: Vec<PlanFeatureView>,
}

/// One feature row on a pricing card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanFeatureView {
    pub name: String,
    pub included: bool,
}

/// Returns the shipped testimonials in carousel order.
///
/// # FFI contract
/// - Sync call over static content; deterministic.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn testimonials() -> Vec<TestimonialView> {
    builtin_testimonials()
        .into_iter()
        .map(|entry| TestimonialView {
            id: entry.id,
            name: entry.name,
            role: entry.role,
            company: entry.company,
            quote: entry.quote,
            rating: entry.rating,
        })
        .collect()
}

/// Returns the shipped pricing tiers in display order.
///
/// # FFI contract
/// - Sync call over static content; deterministic.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn pricing_plans() -> Vec<PricingPlanView> {
    builtin_pricing()
        .into_iter()
        .map(|plan| {
            let yearly_savings_percent = plan.yearly_savings_percent();
            PricingPlanView {
                id: plan.id,
                name: plan.name,
                description: plan.description,
                monthly_usd: plan.monthly_usd,
                yearly_usd: plan.yearly_usd,
                popular: plan.popular,
                yearly_savings_percent,
                features: plan
                    .features
                    .into_iter()
                    .map(|feature| PlanFeatureView {
                        name: feature.name,
                        included: feature.included,
                    })
                    .collect(),
            }
        })
        .collect()
}

fn journey() -> &'static Mutex<TimelineService<MemoryTimelineRepository>> {
    JOURNEY.get_or_init(|| Mutex::new(TimelineService::new(default_timeline_store())))
}

fn with_journey<T>(
    f: impl FnOnce(&mut TimelineService<MemoryTimelineRepository>) -> T,
) -> Result<T, String> {
    let mut guard = journey().lock().map_err(|_| {
        warn!("event=journey_access module=ffi status=error reason=lock_poisoned");
        "journey store lock is poisoned".to_string()
    })?;
    Ok(f(&mut guard))
}

fn to_step_view(step: &Milestone) -> JourneyStepView {
    JourneyStepView {
        id: step.id,
        title: step.title.clone(),
        description: step.description.clone(),
        date: step.date.clone(),
        status: step.status.as_str().to_string(),
        status_label: step.status.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, coverage_stats, coverage_tactic_summaries, coverage_technique, init_logging,
        journey_add_step, journey_remove_step, journey_stats, journey_steps, ping, pricing_plans,
        testimonials,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn journey_add_then_remove_round_trips() {
        let token = unique_token("ffi-roundtrip");
        let created = journey_add_step(
            token.clone(),
            "bridge test step".to_string(),
            "Q4 2025".to_string(),
            Some("current".to_string()),
        );
        assert!(created.ok, "{}", created.message);
        let step_id = created.step_id.expect("created step should return an id");

        let listed = journey_steps();
        let found = listed
            .iter()
            .find(|step| step.id == step_id)
            .expect("created step should be listed");
        assert_eq!(found.title, token);
        assert_eq!(found.status, "current");
        assert_eq!(found.status_label, "In Progress");

        let removed = journey_remove_step(step_id);
        assert!(removed.ok, "{}", removed.message);
        assert_eq!(removed.step_id, Some(step_id));
        assert!(journey_steps().iter().all(|step| step.id != step_id));
    }

    #[test]
    fn journey_add_declines_empty_fields_without_mutating() {
        let marker = unique_token("ffi-decline");
        let response = journey_add_step(
            "   ".to_string(),
            marker.clone(),
            "Q4 2025".to_string(),
            None,
        );
        assert!(response.ok);
        assert_eq!(response.step_id, None);
        assert!(response.message.contains("required"));
        assert!(
            journey_steps().iter().all(|step| step.description != marker),
            "declined add must not reach the store"
        );
    }

    #[test]
    fn journey_add_rejects_unknown_status() {
        let response = journey_add_step(
            "t".to_string(),
            "d".to_string(),
            "Q1 2026".to_string(),
            Some("done".to_string()),
        );
        assert!(!response.ok);
        assert!(response.message.contains("unknown status"));
    }

    #[test]
    fn journey_remove_of_absent_id_is_soft() {
        let response = journey_remove_step(i64::MIN);
        assert!(response.ok);
        assert_eq!(response.step_id, None);
    }

    #[test]
    fn journey_stats_snapshot_is_internally_consistent() {
        let stats = journey_stats();
        assert_eq!(
            stats.completed + stats.current + stats.upcoming,
            stats.total
        );
    }

    #[test]
    fn coverage_stats_match_the_shipped_catalogue() {
        let stats = coverage_stats();
        assert_eq!(stats.tactics, 6);
        assert_eq!(stats.techniques, 12);
        assert_eq!(stats.high, 8);
        assert_eq!(stats.medium, 4);
        assert_eq!(stats.low, 0);
        assert_eq!(stats.detection_rate, Some(67));
    }

    #[test]
    fn coverage_summaries_and_lookup_agree() {
        let summaries = coverage_tactic_summaries();
        assert_eq!(summaries.len(), 6);
        assert!(summaries
            .iter()
            .all(|summary| summary.ratings.len() == summary.technique_count as usize));

        let detail = coverage_technique("T1486".to_string()).expect("T1486 is mapped");
        assert_eq!(detail.tactic_id, "impact");
        assert_eq!(detail.coverage, "high");
        assert_eq!(detail.coverage_label, "High Coverage");

        assert!(coverage_technique("T0000".to_string()).is_none());
    }

    #[test]
    fn content_endpoints_serve_the_shipped_datasets() {
        assert_eq!(testimonials().len(), 3);

        let plans = pricing_plans();
        assert_eq!(plans.len(), 3);
        let researcher = plans.iter().find(|plan| plan.id == "researcher").unwrap();
        assert_eq!(researcher.yearly_savings_percent, Some(17));
        let enterprise = plans.iter().find(|plan| plan.id == "enterprise").unwrap();
        assert_eq!(enterprise.yearly_savings_percent, None);
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
