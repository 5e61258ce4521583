//! Result wrapper types for displaying wizard actions and submissions.

use std::fmt;

use super::{datetime::PreferredDate, pricing::Dollars, status::OperationStatus};
use crate::{
    contact::ContactAcknowledgment,
    wizard::{BookingAcknowledgment, Navigation, Wizard},
};

/// Outcome of Continue or Back, followed by the view of the current step.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use upkeep_core::{
///     catalog::Catalog,
///     display::StepChange,
///     models::CustomerKind,
///     wizard::Wizard,
/// };
///
/// let mut wizard = Wizard::new(Arc::new(Catalog::builtin()), CustomerKind::Homeowner);
/// let navigation = wizard.continue_step();
/// let output = StepChange::new(navigation, &wizard).to_string();
/// assert!(output.starts_with("Error: Cannot continue past 'Select Plan'. Missing: plan"));
/// ```
pub struct StepChange<'a> {
    pub navigation: Navigation,
    pub wizard: &'a Wizard,
}

impl<'a> StepChange<'a> {
    pub fn new(navigation: Navigation, wizard: &'a Wizard) -> Self {
        Self { navigation, wizard }
    }

    /// Whether the action was refused because fields are missing.
    pub fn is_blocked(&self) -> bool {
        matches!(self.navigation, Navigation::Blocked { .. })
    }

    fn status(&self) -> OperationStatus {
        let wizard = self.wizard;
        match &self.navigation {
            Navigation::Moved { to, .. } => OperationStatus::success(format!(
                "Moved to step {} of {}: {}",
                to.position(),
                wizard.step_count(),
                wizard.label(*to)
            )),
            Navigation::Blocked { missing } => {
                OperationStatus::blocked(wizard.label(wizard.step()), missing)
            }
            Navigation::Stayed { step } => OperationStatus::success(format!(
                "Still on step {} of {}: {}",
                step.position(),
                wizard.step_count(),
                wizard.label(*step)
            )),
        }
    }
}

impl fmt::Display for StepChange<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status())?;
        writeln!(f)?;
        write!(f, "{}", self.wizard)
    }
}

/// Result of a draft update: the changed fields and the current step view.
pub struct BookingUpdate<'a> {
    pub changes: Vec<&'static str>,
    pub wizard: &'a Wizard,
}

impl<'a> BookingUpdate<'a> {
    pub fn new(changes: Vec<&'static str>, wizard: &'a Wizard) -> Self {
        Self { changes, wizard }
    }
}

impl fmt::Display for BookingUpdate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.changes.is_empty() {
            writeln!(f, "No changes made.")?;
        } else {
            writeln!(f, "Updated: {}", self.changes.join(", "))?;
        }
        writeln!(f)?;
        write!(f, "{}", self.wizard)
    }
}

impl fmt::Display for BookingAcknowledgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notice)?;

        let booking = &self.booking;
        let draft = &booking.draft;
        writeln!(f)?;
        writeln!(f, "## Request Summary")?;
        writeln!(f)?;
        if let Some(plan) = &booking.plan {
            writeln!(f, "- **Plan**: {plan}")?;
        }
        writeln!(f, "- **{}**: {}", booking.kind.address_label(), draft.property.address.trim())?;
        writeln!(f, "- **Contact**: {} <{}>", draft.contact.name.trim(), draft.contact.email.trim())?;
        if !draft.schedule.preferred_date.trim().is_empty() {
            writeln!(
                f,
                "- **Preferred Date**: {}",
                PreferredDate(&draft.schedule.preferred_date)
            )?;
        }
        if let Some(slot) = draft.schedule.time_slot {
            writeln!(f, "- **Preferred Time**: {slot}")?;
        }
        writeln!(f, "- **Payment**: {}", draft.payment)?;

        if let Some(quote) = booking.pricing.quote() {
            writeln!(
                f,
                "- **Estimated Price**: {}{}",
                Dollars(quote.price),
                quote.billing.suffix()
            )?;
            if let Some(advisory) = &quote.advisory {
                writeln!(f)?;
                writeln!(f, "> {advisory}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for ContactAcknowledgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notice)
    }
}
