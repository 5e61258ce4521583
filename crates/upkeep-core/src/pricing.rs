//! Tier pricing resolver.
//!
//! Maps a plan and a property's square footage to a price by scanning the
//! plan's tiers in ascending order and picking the first breakpoint that is
//! greater than or equal to the square footage. Breakpoints are inclusive
//! upper bounds: a 1,200 sq ft home falls in the 1,200 tier, a 1,201 sq ft
//! home in the next one.
//!
//! Properties larger than the largest breakpoint still get a number: the
//! largest tier's price, flagged with [`Advisory::CustomQuote`].
//!
//! Missing input is never priced. Without a plan, or without a positive square
//! footage, the resolver answers [`Pricing::Unavailable`] instead of zero.
//!
//! # Examples
//!
//! ```rust
//! use upkeep_core::{
//!     models::{Billing, CustomerKind, Plan, PlanId, Tier},
//!     pricing::{price, Advisory, Pricing, Unavailable},
//! };
//!
//! let plan = Plan {
//!     id: PlanId::Base,
//!     name: "Essential Care".to_string(),
//!     description: String::new(),
//!     audience: CustomerKind::Homeowner,
//!     billing: Billing::Monthly,
//!     tiers: vec![
//!         Tier::new(1200, 180),
//!         Tier::new(2400, 280),
//!         Tier::new(3600, 380),
//!         Tier::new(5000, 480),
//!     ],
//!     services: vec![],
//! };
//!
//! assert_eq!(price(Some(&plan), Some(1200)).amount(), Some(180));
//! assert_eq!(price(Some(&plan), Some(1201)).amount(), Some(280));
//!
//! let oversized = price(Some(&plan), Some(6000));
//! assert_eq!(oversized.amount(), Some(480));
//! assert!(matches!(
//!     oversized.quote().and_then(|q| q.advisory),
//!     Some(Advisory::CustomQuote { .. })
//! ));
//!
//! assert_eq!(price(None, Some(1200)), Pricing::Unavailable(Unavailable::NoPlan));
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{Billing, Plan, PlanId};

/// Note attached to a quote that needs a human follow-up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// The property is larger than the largest published tier; the quoted
    /// price is a starting point.
    CustomQuote { largest_square_feet: u32 },
}

/// Why no price could be computed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Unavailable {
    /// No plan has been selected
    NoPlan,
    /// Square footage is blank, zero or not a number
    NoSquareFootage,
    /// The plan publishes no tiers
    NoTiers,
}

/// A resolved price for a plan and property size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub plan: PlanId,
    pub square_feet: u32,
    /// Price in whole dollars
    pub price: u32,
    pub billing: Billing,
    /// 1-based index of the matched tier
    pub tier: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisory: Option<Advisory>,
}

/// Outcome of a price lookup: either a quote or the reason there is none.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum Pricing {
    Quoted(Quote),
    Unavailable(Unavailable),
}

impl Pricing {
    /// The quoted amount, if any.
    pub fn amount(&self) -> Option<u32> {
        self.quote().map(|quote| quote.price)
    }

    pub fn quote(&self) -> Option<&Quote> {
        match self {
            Pricing::Quoted(quote) => Some(quote),
            Pricing::Unavailable(_) => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Pricing::Quoted(_))
    }
}

/// Resolves the price of `plan` for a property of `square_feet`.
///
/// Both inputs are optional because the wizard asks for them on different
/// steps; either one missing yields [`Pricing::Unavailable`].
pub fn price(plan: Option<&Plan>, square_feet: Option<u32>) -> Pricing {
    let Some(plan) = plan else {
        return Pricing::Unavailable(Unavailable::NoPlan);
    };
    let Some(square_feet) = square_feet.filter(|value| *value > 0) else {
        return Pricing::Unavailable(Unavailable::NoSquareFootage);
    };

    if let Some(index) = plan.tiers.iter().position(|tier| tier.covers(square_feet)) {
        let tier = plan.tiers[index];
        debug!(
            "{} at {} sq ft matched tier {} (<= {} sq ft, ${})",
            plan.id.as_str(),
            square_feet,
            index + 1,
            tier.max_square_feet,
            tier.price
        );
        return Pricing::Quoted(Quote {
            plan: plan.id,
            square_feet,
            price: tier.price,
            billing: plan.billing,
            tier: index + 1,
            advisory: None,
        });
    }

    match plan.tiers.last() {
        Some(largest) => {
            debug!(
                "{} at {} sq ft exceeds the largest tier ({} sq ft)",
                plan.id.as_str(),
                square_feet,
                largest.max_square_feet
            );
            Pricing::Quoted(Quote {
                plan: plan.id,
                square_feet,
                price: largest.price,
                billing: plan.billing,
                tier: plan.tiers.len(),
                advisory: Some(Advisory::CustomQuote {
                    largest_square_feet: largest.max_square_feet,
                }),
            })
        }
        None => Pricing::Unavailable(Unavailable::NoTiers),
    }
}

/// Parses free-text square footage.
///
/// Surrounding whitespace and digit-group separators (`,` and `_`) are
/// accepted. Blank, zero, negative, fractional and otherwise non-numeric
/// input all count as "no square footage".
pub fn parse_square_feet(input: &str) -> Option<u32> {
    let digits: String = input
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    digits.parse::<u32>().ok().filter(|value| *value > 0)
}
