//! Static marketing content records: testimonials and pricing plans.
//!
//! Display-only datasets with two small derivations: rating bounds and the
//! yearly-savings percentage on the billing toggle.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Highest rating a testimonial can carry (five stars).
pub const MAX_RATING: u8 = 5;

/// One customer quote rotated through the testimonial carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub company: String,
    pub quote: String,
    /// Star rating, `1..=MAX_RATING`.
    pub rating: u8,
}

impl Testimonial {
    /// Checks the star-rating bounds.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.rating == 0 || self.rating > MAX_RATING {
            return Err(ContentError::InvalidRating {
                id: self.id,
                rating: self.rating,
            });
        }
        Ok(())
    }
}

/// One feature row on a pricing card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFeature {
    pub name: String,
    pub included: bool,
}

/// One pricing tier.
///
/// Custom-priced tiers (enterprise sales) carry no numeric prices; every
/// derivation over prices must treat that case as undefined rather than
/// inventing a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlan {
    /// URL-safe plan id, e.g. `researcher`.
    pub id: String,
    pub name: String,
    pub description: String,
    pub monthly_usd: Option<u32>,
    pub yearly_usd: Option<u32>,
    pub features: Vec<PlanFeature>,
    /// Highlighted tier on the pricing grid.
    pub popular: bool,
}

impl PricingPlan {
    /// Whether the tier has no published numeric price.
    pub fn is_custom_priced(&self) -> bool {
        self.monthly_usd.is_none() || self.yearly_usd.is_none()
    }

    /// Rounded percentage saved by paying yearly instead of monthly.
    ///
    /// Returns `None` for custom-priced tiers and for a zero monthly price,
    /// where the ratio is undefined. A yearly price above twelve monthly
    /// payments reports `Some(0)` rather than a negative saving.
    pub fn yearly_savings_percent(&self) -> Option<u8> {
        let monthly = self.monthly_usd?;
        let yearly = self.yearly_usd?;
        let annualized = u64::from(monthly) * 12;
        if annualized == 0 {
            return None;
        }
        let saved = annualized.saturating_sub(u64::from(yearly));
        Some(((saved as f64 / annualized as f64) * 100.0).round() as u8)
    }
}

/// Structural errors in static content datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// Testimonial rating outside `1..=MAX_RATING`.
    InvalidRating { id: i64, rating: u8 },
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRating { id, rating } => write!(
                f,
                "testimonial {id} has rating {rating}, expected 1..={MAX_RATING}"
            ),
        }
    }
}

impl Error for ContentError {}
