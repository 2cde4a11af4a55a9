//! Marketing content use-cases: testimonial rotation and pricing queries.
//!
//! # Responsibility
//! - Drive the testimonial carousel as a deterministic state machine.
//! - Answer pricing-grid queries including the yearly-savings derivation.
//!
//! # Invariants
//! - The carousel index always addresses a valid item while the list is
//!   non-empty.
//! - `tick()` mutates only while auto-advance is enabled; the interval
//!   timer itself lives in the UI layer and is cancelled there.

use crate::model::content::{PricingPlan, Testimonial};
use log::debug;

/// Rotating testimonial selection with pausable auto-advance.
#[derive(Debug, Clone)]
pub struct TestimonialCarousel {
    items: Vec<Testimonial>,
    current: usize,
    auto_advance: bool,
}

impl TestimonialCarousel {
    /// Creates a carousel positioned on the first item, auto-advancing.
    pub fn new(items: Vec<Testimonial>) -> Self {
        Self {
            items,
            current: 0,
            auto_advance: true,
        }
    }

    /// The testimonial currently shown, if any exist.
    pub fn current(&self) -> Option<&Testimonial> {
        self.items.get(self.current)
    }

    /// Zero-based position of the current item.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Advances to the next item, wrapping at the end.
    pub fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.items.len();
    }

    /// Steps back to the previous item, wrapping at the start.
    pub fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.current = (self.current + self.items.len() - 1) % self.items.len();
    }

    /// Jumps to `index` (the indicator dots). Rejects out-of-range input.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            debug!(
                "event=carousel_select module=content status=declined index={index} len={}",
                self.items.len()
            );
            return false;
        }
        self.current = index;
        true
    }

    /// Suspends auto-advance (hovering a navigation control).
    pub fn pause(&mut self) {
        self.auto_advance = false;
    }

    /// Re-enables auto-advance.
    pub fn resume(&mut self) {
        self.auto_advance = true;
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance
    }

    /// One timer interval elapsed. Advances only while auto-advance is on.
    pub fn tick(&mut self) {
        if self.auto_advance {
            self.next();
        }
    }
}

/// Read-only facade over the pricing tiers.
pub struct PricingService {
    plans: Vec<PricingPlan>,
}

impl PricingService {
    pub fn new(plans: Vec<PricingPlan>) -> Self {
        Self { plans }
    }

    /// Tiers in display order.
    pub fn plans(&self) -> &[PricingPlan] {
        &self.plans
    }

    /// Looks up one tier by id.
    pub fn plan(&self, id: &str) -> Option<&PricingPlan> {
        self.plans.iter().find(|plan| plan.id == id)
    }

    /// Yearly-savings percentage for one tier; `None` when the tier is
    /// custom-priced or unknown.
    pub fn yearly_savings_percent(&self, id: &str) -> Option<u8> {
        self.plan(id)?.yearly_savings_percent()
    }
}
