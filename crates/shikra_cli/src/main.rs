//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `shikra_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use shikra_core::{builtin_catalog, default_timeline_store, TimelineRepository};

fn main() {
    println!("shikra_core ping={}", shikra_core::ping());
    println!("shikra_core version={}", shikra_core::core_version());

    let journey = default_timeline_store();
    let breakdown = journey.status_breakdown();
    println!(
        "journey steps={} completed={} current={} upcoming={}",
        journey.len(),
        breakdown.completed,
        breakdown.current,
        breakdown.upcoming
    );

    let catalog = builtin_catalog();
    let stats = catalog.coverage_stats();
    println!(
        "coverage tactics={} techniques={} high={} medium={} low={} detection_rate={}",
        catalog.tactic_count(),
        stats.total,
        stats.high,
        stats.medium,
        stats.low,
        match stats.detection_rate() {
            Some(rate) => format!("{rate}%"),
            None => "undefined".to_string(),
        }
    );
}
