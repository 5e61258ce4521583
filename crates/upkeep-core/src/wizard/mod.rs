//! Booking wizard state machine.
//!
//! The wizard walks one customer through a fixed sequence of steps:
//!
//! ```text
//! ┌─────────────┐    ┌──────────────────┐    ┌──────────────┐    ┌─────────┐
//! │ Select Plan │───▶│ Property Details │───▶│ Contact Info │───▶│ Confirm │
//! └─────────────┘    └──────────────────┘    └──────────────┘    └─────────┘
//!        ▲                    ▲
//!        │                    └── deep link with a usable plan starts here
//!        └── submit resets the draft and returns here
//! ```
//!
//! Continue moves forward one step once the current step's required fields
//! are present. Back moves one step backwards and never loses data. Field
//! edits are accepted on any step.
//!
//! The labels and contact requirements come from the flow's
//! [`CustomerKind`], so homeowners and agents share one state machine.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use upkeep_core::{
//!     catalog::Catalog,
//!     models::{CustomerKind, PlanId, StepKind},
//!     wizard::{DeepLink, Navigation, Wizard},
//! };
//!
//! let catalog = Arc::new(Catalog::builtin());
//! let mut wizard = Wizard::from_deep_link(
//!     catalog,
//!     CustomerKind::Homeowner,
//!     &DeepLink::from_query("?plan=base"),
//! );
//! assert_eq!(wizard.step(), StepKind::PropertyDetails);
//! assert_eq!(wizard.draft().plan, Some(PlanId::Base));
//!
//! // Address and square footage are still missing
//! assert!(matches!(wizard.continue_step(), Navigation::Blocked { .. }));
//! ```

use std::sync::Arc;

use log::{debug, info, warn};
use serde::Serialize;

pub mod deep_link;
pub mod submission;


pub use deep_link::DeepLink;
pub use submission::{BookingAcknowledgment, SubmittedBooking};

use crate::{
    catalog::Catalog,
    error::{BookingError, Result},
    models::{BookingDraft, CustomerKind, Plan, PlanId, StepKind},
    params::UpdateBooking,
    pricing::Pricing,
};

/// Result of a Continue or Back action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Navigation {
    /// The wizard moved to another step
    Moved { from: StepKind, to: StepKind },
    /// Continue is disabled until these fields are filled in
    Blocked { missing: Vec<&'static str> },
    /// Nothing to move to: Back on the first step, Continue on the last
    Stayed { step: StepKind },
}

/// In-memory booking session for a single customer.
#[derive(Debug, Clone)]
pub struct Wizard {
    catalog: Arc<Catalog>,
    kind: CustomerKind,
    step: StepKind,
    draft: BookingDraft,
}

impl Wizard {
    /// Starts a plan-first flow at step 1 with an empty draft.
    pub fn new(catalog: Arc<Catalog>, kind: CustomerKind) -> Self {
        Self {
            catalog,
            kind,
            step: StepKind::SelectPlan,
            draft: BookingDraft::default(),
        }
    }

    /// Starts a flow from a deep link.
    ///
    /// A link naming a catalog plan offered to `kind` preselects that plan and
    /// skips straight to step 2. Any other value is ignored and the flow starts
    /// at plan selection.
    pub fn from_deep_link(catalog: Arc<Catalog>, kind: CustomerKind, link: &DeepLink) -> Self {
        let mut wizard = Self::new(catalog, kind);

        let Some(raw) = link.raw_plan() else {
            return wizard;
        };

        let usable = link
            .plan_id()
            .and_then(|id| wizard.catalog.get(id))
            .filter(|plan| plan.audience == kind)
            .map(|plan| plan.id);

        match usable {
            Some(id) => {
                debug!("Deep link preselected plan '{}'", id.as_str());
                wizard.draft.plan = Some(id);
                wizard.step = StepKind::PropertyDetails;
            }
            None => warn!(
                "Ignoring deep link plan '{}' for {} booking",
                raw,
                kind.as_str()
            ),
        }

        wizard
    }

    pub fn kind(&self) -> CustomerKind {
        self.kind
    }

    /// Current step.
    pub fn step(&self) -> StepKind {
        self.step
    }

    /// Current 1-based step number, always within `1..=step_count()`.
    pub fn step_number(&self) -> usize {
        self.step.position()
    }

    /// Number of steps in the flow.
    pub fn step_count(&self) -> usize {
        StepKind::ALL.len()
    }

    /// Progress-bar label of a step for this flow.
    pub fn label(&self, step: StepKind) -> &'static str {
        self.kind.step_label(step)
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// Plans the customer can choose from on step 1.
    pub fn available_plans(&self) -> Vec<&Plan> {
        self.catalog.plans_for(self.kind).collect()
    }

    /// The selected plan, if any.
    pub fn selected_plan(&self) -> Option<&Plan> {
        self.draft.plan.and_then(|id| self.catalog.get(id))
    }

    /// Live price estimate for the current draft.
    pub fn estimate(&self) -> Pricing {
        self.catalog.price(self.draft.plan, self.draft.square_feet())
    }

    /// Selects a plan on the plan-selection step.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidInput` when not on the plan step or when
    /// the plan is offered to the other kind of customer.
    /// Returns `BookingError::UnknownPlan` when the catalog lacks the plan.
    pub fn select_plan(&mut self, id: PlanId) -> Result<&Plan> {
        if self.step != StepKind::SelectPlan {
            return Err(BookingError::invalid_input("plan").with_reason(format!(
                "Plans can only be chosen on the '{}' step; go back first",
                self.label(StepKind::SelectPlan)
            )));
        }

        let plan = self
            .catalog
            .get(id)
            .ok_or_else(|| BookingError::UnknownPlan {
                key: id.as_str().to_string(),
            })?;

        if plan.audience != self.kind {
            return Err(BookingError::invalid_input("plan").with_reason(format!(
                "'{}' is not offered for {} bookings",
                id.as_str(),
                self.kind.as_str()
            )));
        }

        debug!("Selected plan '{}'", id.as_str());
        self.draft.plan = Some(id);
        Ok(plan)
    }

    /// Applies a partial update to the draft and returns the names of the
    /// fields that changed.
    ///
    /// The update is validated before anything is applied, so a rejected
    /// update leaves the draft untouched.
    pub fn update(&mut self, update: &UpdateBooking) -> Result<Vec<&'static str>> {
        let validated = update.validate()?;
        let draft = &mut self.draft;
        let mut changed = Vec::new();

        let text_fields: [(&'static str, &Option<String>, &mut String); 8] = [
            ("address", &update.address, &mut draft.property.address),
            ("square_feet", &update.square_feet, &mut draft.property.square_feet),
            ("name", &update.name, &mut draft.contact.name),
            ("email", &update.email, &mut draft.contact.email),
            ("phone", &update.phone, &mut draft.contact.phone),
            ("company", &update.company, &mut draft.contact.company),
            ("preferred_date", &update.preferred_date, &mut draft.schedule.preferred_date),
            ("notes", &update.notes, &mut draft.notes),
        ];

        for (field, new_value, current) in text_fields {
            if let Some(value) = new_value {
                if current != value {
                    current.clone_from(value);
                    changed.push(field);
                }
            }
        }

        if let Some(time_slot) = validated.time_slot {
            if draft.schedule.time_slot != time_slot {
                draft.schedule.time_slot = time_slot;
                changed.push("time_slot");
            }
        }

        if let Some(payment) = validated.payment {
            if draft.payment != payment {
                draft.payment = payment;
                changed.push("payment");
            }
        }

        debug!("Updated booking fields: {:?}", changed);
        Ok(changed)
    }

    /// Required fields of `step` that are still missing.
    pub fn missing_fields_for(&self, step: StepKind) -> Vec<&'static str> {
        let draft = &self.draft;
        let blank = |value: &str| value.trim().is_empty();
        let mut missing = Vec::new();

        match step {
            StepKind::SelectPlan => {
                if draft.plan.is_none() {
                    missing.push("plan");
                }
            }
            StepKind::PropertyDetails => {
                if blank(&draft.property.address) {
                    missing.push("address");
                }
                if draft.square_feet().is_none() {
                    missing.push("square_feet");
                }
            }
            StepKind::ContactInfo => {
                if blank(&draft.contact.name) {
                    missing.push("name");
                }
                if blank(&draft.contact.email) {
                    missing.push("email");
                }
                if blank(&draft.contact.phone) {
                    missing.push("phone");
                }
                if self.kind.requires_company() && blank(&draft.contact.company) {
                    missing.push("company");
                }
            }
            StepKind::Confirm => {}
        }

        missing
    }

    /// Required fields of the current step that are still missing.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.missing_fields_for(self.step)
    }

    /// Whether Continue is enabled.
    pub fn can_continue(&self) -> bool {
        self.next_step().is_some() && self.missing_fields().is_empty()
    }

    fn next_step(&self) -> Option<StepKind> {
        StepKind::at(self.step.position() + 1)
    }

    fn previous_step(&self) -> Option<StepKind> {
        StepKind::at(self.step.position() - 1)
    }

    /// Advances one step if the current step is complete.
    pub fn continue_step(&mut self) -> Navigation {
        let Some(next) = self.next_step() else {
            return Navigation::Stayed { step: self.step };
        };

        let missing = self.missing_fields();
        if !missing.is_empty() {
            debug!("Continue blocked on {:?}: missing {:?}", self.step, missing);
            return Navigation::Blocked { missing };
        }

        let from = std::mem::replace(&mut self.step, next);
        debug!("Moved from {:?} to {:?}", from, next);
        Navigation::Moved { from, to: next }
    }

    /// Retreats one step, keeping everything entered so far.
    pub fn back(&mut self) -> Navigation {
        match self.previous_step() {
            Some(previous) => {
                let from = std::mem::replace(&mut self.step, previous);
                debug!("Moved back from {:?} to {:?}", from, previous);
                Navigation::Moved { from, to: previous }
            }
            None => Navigation::Stayed { step: self.step },
        }
    }

    /// Submits the booking from the final step.
    ///
    /// Produces the acknowledgment shown to the customer, then resets the draft
    /// and returns to step 1. Nothing is sent anywhere or stored.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidInput` when not on the final step, or when
    /// a required field was cleared after its step was completed.
    pub fn submit(&mut self) -> Result<BookingAcknowledgment> {
        if self.step != StepKind::Confirm {
            return Err(BookingError::invalid_input("step").with_reason(format!(
                "Bookings can only be submitted from the '{}' step (currently on step {} of {})",
                self.label(StepKind::Confirm),
                self.step_number(),
                self.step_count()
            )));
        }

        let missing: Vec<&'static str> = StepKind::ALL
            .iter()
            .flat_map(|step| self.missing_fields_for(*step))
            .collect();
        if !missing.is_empty() {
            return Err(BookingError::invalid_input(missing.join(", "))
                .with_reason("Required booking fields are empty"));
        }

        let acknowledgment = BookingAcknowledgment::new(SubmittedBooking {
            kind: self.kind,
            plan: self.selected_plan().map(|plan| plan.name.clone()),
            pricing: self.estimate(),
            draft: self.draft.clone(),
        });

        info!(
            "Booking request submitted for plan '{}'",
            self.draft.plan.map(|id| id.as_str()).unwrap_or("none")
        );

        self.reset();
        Ok(acknowledgment)
    }

    /// Discards the draft and returns to step 1.
    pub fn reset(&mut self) {
        self.draft.reset();
        self.step = StepKind::SelectPlan;
    }
}
