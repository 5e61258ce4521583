//! Catalog handler operations that return display-ready types for the Desk.

use super::Desk;
use crate::{
    display::{Estimate, PlanList, ServiceList},
    error::Result,
    models::Plan,
    params::{ListPlans, PlanKey, QuotePrice},
    pricing::parse_square_feet,
};

impl Desk {
    /// Handle listing plans, optionally for one audience only.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidInput` when the audience is not
    /// recognized.
    pub fn list_plans(&self, params: &ListPlans) -> Result<PlanList> {
        let plans = match params.validate()? {
            Some(audience) => self.catalog.plans_for(audience).cloned().collect(),
            None => self.catalog.plans().to_vec(),
        };
        Ok(PlanList(plans))
    }

    /// Handle listing the individual service price list.
    pub fn list_services(&self) -> ServiceList {
        ServiceList(self.catalog.services().to_vec())
    }

    /// Handle showing a single plan with its tier table.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::UnknownPlan` when the key names no catalog plan.
    pub fn show_plan(&self, params: &PlanKey) -> Result<Plan> {
        self.catalog.lookup(&params.plan).cloned()
    }

    /// Handle a standalone price quote.
    ///
    /// Square footage that is blank, zero or not a number is not an error:
    /// the estimate reports that pricing is unavailable, exactly as the
    /// booking view does.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::UnknownPlan` when the key names no catalog plan.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use upkeep_core::{params::QuotePrice, DeskBuilder};
    /// # async {
    /// let desk = DeskBuilder::new().builtin_catalog().build().await?;
    /// let estimate = desk.quote(&QuotePrice {
    ///     plan: "premium".to_string(),
    ///     square_feet: "1200".to_string(),
    /// })?;
    /// assert_eq!(estimate.pricing.amount(), Some(279));
    /// # Result::<(), upkeep_core::BookingError>::Ok(())
    /// # };
    /// ```
    pub fn quote(&self, params: &QuotePrice) -> Result<Estimate> {
        let plan = self.catalog.lookup(&params.plan)?;
        let pricing = self
            .catalog
            .price(Some(plan.id), parse_square_feet(&params.square_feet));
        Ok(Estimate::new(Some(plan), pricing))
    }
}
