//! Core domain logic for the SHIKRA product site.
//! This crate is the single source of truth for the site's data contracts.

pub mod coverage;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;

pub use coverage::matrix::{CatalogError, CoverageMatrix, CoverageStats};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::attack::{CoverageLevel, Tactic, Technique};
pub use model::content::{ContentError, PlanFeature, PricingPlan, Testimonial};
pub use model::milestone::{
    Milestone, MilestoneDraft, MilestoneDraftError, MilestoneId, MilestoneStatus,
};
pub use repo::timeline_repo::{
    MemoryTimelineRepository, StatusBreakdown, TimelineRepository, TimelineSeedError,
};
pub use seed::{
    builtin_catalog, builtin_pricing, builtin_testimonials, builtin_timeline, catalog_from_json,
    default_timeline_store, testimonials_from_json, timeline_from_json, SeedError,
};
pub use service::content_service::{PricingService, TestimonialCarousel};
pub use service::coverage_service::{CoverageService, TacticSummary};
pub use service::timeline_service::TimelineService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
