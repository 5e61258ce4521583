//! Plan model definition and related functionality.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CustomerKind;

/// Type-safe enumeration of the known plan keys.
///
/// The key is what deep links, CLI arguments and catalog files use to refer
/// to a plan. Everything else about a plan lives in the catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum PlanId {
    /// Entry-level homeowner membership
    Base,
    /// Most popular homeowner membership
    Premium,
    /// Full-service membership for larger properties
    Estate,
    /// One-time spring or fall refresh for homeowners
    Seasonal,
    /// One-time full exterior clean for homeowners
    DeepClean,
    /// One-time exterior restoration for homeowners
    Restoration,
    /// Light listing touch-up for agents
    Refresh,
    /// Complete exterior listing preparation
    FullPrep,
    /// Premium listing preparation for high-end properties
    Luxury,
}

impl PlanId {
    /// Every known plan key, in catalog order.
    pub const ALL: [PlanId; 9] = [
        PlanId::Base,
        PlanId::Premium,
        PlanId::Estate,
        PlanId::Seasonal,
        PlanId::DeepClean,
        PlanId::Restoration,
        PlanId::Refresh,
        PlanId::FullPrep,
        PlanId::Luxury,
    ];

    /// The key as used in links, arguments and catalog files.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanId::Base => "base",
            PlanId::Premium => "premium",
            PlanId::Estate => "estate",
            PlanId::Seasonal => "seasonal",
            PlanId::DeepClean => "deep-clean",
            PlanId::Restoration => "restoration",
            PlanId::Refresh => "refresh",
            PlanId::FullPrep => "full-prep",
            PlanId::Luxury => "luxury",
        }
    }
}

impl FromStr for PlanId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "base" => Ok(PlanId::Base),
            "premium" => Ok(PlanId::Premium),
            "estate" => Ok(PlanId::Estate),
            "seasonal" | "seasonal-refresh" => Ok(PlanId::Seasonal),
            "deep-clean" | "deepclean" => Ok(PlanId::DeepClean),
            "restoration" | "complete-restoration" => Ok(PlanId::Restoration),
            "refresh" => Ok(PlanId::Refresh),
            "full-prep" | "fullprep" => Ok(PlanId::FullPrep),
            "luxury" => Ok(PlanId::Luxury),
            _ => Err(format!("Invalid plan key: {s}")),
        }
    }
}

/// How often a plan's price is charged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Billing {
    /// Recurring membership price
    #[default]
    Monthly,
    /// Price per service visit
    PerVisit,
    /// Single price for a one-off service
    OneTime,
}

impl Billing {
    /// Suffix appended to a formatted price.
    pub fn suffix(&self) -> &'static str {
        match self {
            Billing::Monthly => "/month",
            Billing::PerVisit => " per visit",
            Billing::OneTime => "",
        }
    }
}

/// Group a plan is published under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlanCategory {
    /// Recurring homeowner plans
    Membership,
    /// One-off homeowner services
    HomeownerPackage,
    /// Agent listing preparation
    ListingPrep,
}

impl PlanCategory {
    pub fn title(&self) -> &'static str {
        match self {
            PlanCategory::Membership => "Homeowner Memberships",
            PlanCategory::HomeownerPackage => "Homeowner Packages",
            PlanCategory::ListingPrep => "Agent Listing Prep",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            PlanCategory::Membership => "Monthly Care",
            PlanCategory::HomeownerPackage => "One-Time Services",
            PlanCategory::ListingPrep => "Listing Preparation",
        }
    }
}

/// A square-footage upper bound paired with a fixed price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tier {
    /// Largest square footage covered by this tier (inclusive)
    pub max_square_feet: u32,

    /// Price in whole dollars
    pub price: u32,
}

impl Tier {
    /// Creates a tier from a breakpoint and a price.
    pub const fn new(max_square_feet: u32, price: u32) -> Self {
        Self {
            max_square_feet,
            price,
        }
    }

    /// Whether a property of the given size falls under this breakpoint.
    pub fn covers(&self, square_feet: u32) -> bool {
        square_feet <= self.max_square_feet
    }
}

/// Represents an immutable catalog plan with its pricing tiers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    /// Plan key
    pub id: PlanId,

    /// Display name of the plan
    pub name: String,

    /// One-line pitch shown next to the name
    #[serde(default)]
    pub description: String,

    /// Customer kind this plan is offered to
    #[serde(default)]
    pub audience: CustomerKind,

    /// Billing period of the tier prices
    #[serde(default)]
    pub billing: Billing,

    /// Tiers in ascending order of their breakpoint
    pub tiers: Vec<Tier>,

    /// Included service descriptions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,
}

impl Plan {
    /// Price of the smallest tier, used as the advertised "from" price.
    pub fn starting_price(&self) -> Option<u32> {
        self.tiers.first().map(|tier| tier.price)
    }

    /// The largest published tier.
    pub fn largest_tier(&self) -> Option<&Tier> {
        self.tiers.last()
    }

    /// Group the plan is listed under, derived from its audience and billing.
    pub fn category(&self) -> PlanCategory {
        match (self.audience, self.billing) {
            (CustomerKind::Agent, _) => PlanCategory::ListingPrep,
            (CustomerKind::Homeowner, Billing::Monthly) => PlanCategory::Membership,
            (CustomerKind::Homeowner, _) => PlanCategory::HomeownerPackage,
        }
    }
}
