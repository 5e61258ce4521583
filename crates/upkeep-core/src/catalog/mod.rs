//! Immutable plan catalog.
//!
//! The catalog is the configuration data the pricing resolver reads: a set of
//! [`Plan`]s, each with ascending square-footage tiers, plus a price list of
//! individual [`Service`]s. A built-in catalog is compiled in;
//! [`CatalogBuilder`] can replace it with a JSON file.
//!
//! Tier tables are validated once when a catalog is constructed, so lookups
//! and price resolution never fail afterwards.

use std::{collections::HashSet, str::FromStr};

use serde::{Deserialize, Serialize};

pub mod builder;
pub mod builtin;

pub use builder::CatalogBuilder;

use crate::{
    error::{BookingError, Result},
    models::{CustomerKind, Plan, PlanId, Service},
    pricing::{self, Pricing},
};

/// Validated set of plans and services, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    plans: Vec<Plan>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    services: Vec<Service>,
}

impl Catalog {
    /// Builds a catalog after checking every plan's tier table.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::Catalog` when the catalog is empty, a plan key
    /// appears twice, a plan has no tiers, breakpoints are zero or not
    /// strictly ascending, or a larger tier is cheaper than a smaller one.
    pub fn new(plans: Vec<Plan>) -> Result<Self> {
        if plans.is_empty() {
            return Err(BookingError::catalog("catalog contains no plans"));
        }

        let mut seen = HashSet::new();
        for plan in &plans {
            if !seen.insert(plan.id) {
                return Err(BookingError::catalog(format!(
                    "plan '{}' is defined more than once",
                    plan.id.as_str()
                )));
            }
            validate_tiers(plan)?;
        }

        Ok(Self {
            plans,
            services: Vec::new(),
        })
    }

    /// Replaces the service price list after checking it.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::Catalog` when a service has a blank key or name,
    /// or a key appears twice.
    pub fn with_services(mut self, services: Vec<Service>) -> Result<Self> {
        let mut seen = HashSet::new();
        for service in &services {
            let key = service.id.trim();
            if key.is_empty() || service.name.trim().is_empty() {
                return Err(BookingError::catalog(
                    "every service needs a key and a name",
                ));
            }
            if !seen.insert(key.to_lowercase()) {
                return Err(BookingError::catalog(format!(
                    "service '{key}' is defined more than once"
                )));
            }
        }

        self.services = services;
        Ok(self)
    }

    /// Parses and validates a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Catalog = serde_json::from_str(json)?;
        Self::new(raw.plans)?.with_services(raw.services)
    }

    /// The compiled-in catalog.
    pub fn builtin() -> Self {
        Self {
            plans: builtin::plans(),
            services: builtin::services(),
        }
    }

    /// All plans in display order.
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Individual services in display order.
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Plans offered to one kind of customer.
    pub fn plans_for(&self, audience: CustomerKind) -> impl Iterator<Item = &Plan> {
        self.plans.iter().filter(move |plan| plan.audience == audience)
    }

    /// Looks up a plan by key.
    pub fn get(&self, id: PlanId) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.id == id)
    }

    /// Looks up a plan by its textual key.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::UnknownPlan` when the key does not name a plan
    /// in this catalog.
    pub fn lookup(&self, key: &str) -> Result<&Plan> {
        PlanId::from_str(key)
            .ok()
            .and_then(|id| self.get(id))
            .ok_or_else(|| BookingError::UnknownPlan {
                key: key.trim().to_string(),
            })
    }

    /// Resolves a price from an optional plan key and square footage.
    pub fn price(&self, plan: Option<PlanId>, square_feet: Option<u32>) -> Pricing {
        pricing::price(plan.and_then(|id| self.get(id)), square_feet)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_tiers(plan: &Plan) -> Result<()> {
    let key = plan.id.as_str();

    if plan.tiers.is_empty() {
        return Err(BookingError::catalog(format!("plan '{key}' has no tiers")));
    }

    if plan.tiers[0].max_square_feet == 0 {
        return Err(BookingError::catalog(format!(
            "plan '{key}' has a tier with a zero square-foot breakpoint"
        )));
    }

    for pair in plan.tiers.windows(2) {
        let (smaller, larger) = (pair[0], pair[1]);
        if larger.max_square_feet <= smaller.max_square_feet {
            return Err(BookingError::catalog(format!(
                "plan '{key}' tiers must have strictly ascending breakpoints ({} then {})",
                smaller.max_square_feet, larger.max_square_feet
            )));
        }
        if larger.price < smaller.price {
            return Err(BookingError::catalog(format!(
                "plan '{key}' tier up to {} sq ft is cheaper than the tier below it",
                larger.max_square_feet
            )));
        }
    }

    Ok(())
}
