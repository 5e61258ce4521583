//! Booking and contact handler operations for the Desk.

use std::sync::Arc;

use log::info;

use super::Desk;
use crate::{
    contact::{ContactAcknowledgment, PendingContact},
    display::{BookingUpdate, StepChange},
    error::Result,
    params::{PlanKey, SendContact, StartBooking, UpdateBooking},
    wizard::{BookingAcknowledgment, Wizard},
};

impl Desk {
    /// Handle starting a new booking, discarding any session in progress.
    ///
    /// A deep link naming a usable plan starts the wizard on step 2.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidInput` when the customer kind is not
    /// recognized.
    pub fn start_booking(&mut self, params: &StartBooking) -> Result<&Wizard> {
        let (kind, link) = params.validate()?;
        self.wizard = Wizard::from_deep_link(Arc::clone(&self.catalog), kind, &link);
        info!(
            "Started {} booking on step {}",
            kind.as_str(),
            self.wizard.step_number()
        );
        Ok(&self.wizard)
    }

    /// Handle choosing a plan on the first step.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::UnknownPlan` for unrecognized keys and
    /// `BookingError::InvalidInput` when the plan cannot be chosen now.
    pub fn select_plan(&mut self, params: &PlanKey) -> Result<&Wizard> {
        let id = params.validate()?;
        self.wizard.select_plan(id)?;
        Ok(&self.wizard)
    }

    /// Handle a partial update of the draft.
    pub fn update_booking(&mut self, params: &UpdateBooking) -> Result<BookingUpdate<'_>> {
        let changes = self.wizard.update(params)?;
        Ok(BookingUpdate::new(changes, &self.wizard))
    }

    /// Handle Continue.
    pub fn continue_booking(&mut self) -> StepChange<'_> {
        let navigation = self.wizard.continue_step();
        StepChange::new(navigation, &self.wizard)
    }

    /// Handle Back.
    pub fn back_booking(&mut self) -> StepChange<'_> {
        let navigation = self.wizard.back();
        StepChange::new(navigation, &self.wizard)
    }

    /// Handle submitting the booking from the final step.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidInput` when the wizard is not on its
    /// final step or required fields are empty.
    pub fn submit_booking(&mut self) -> Result<BookingAcknowledgment> {
        self.wizard.submit()
    }

    /// Handle sending a contact message.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidInput` when name, email or message is
    /// blank.
    pub async fn send_contact(&mut self, params: SendContact) -> Result<ContactAcknowledgment> {
        Ok(self.prepare_contact(params)?.deliver().await)
    }

    /// Handle validating a contact message without waiting for its delay.
    ///
    /// The form is cleared right away; the returned message is acknowledged
    /// by awaiting [`PendingContact::deliver`], which does not borrow the
    /// desk.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidInput` when name, email or message is
    /// blank.
    pub fn prepare_contact(&mut self, params: SendContact) -> Result<PendingContact> {
        self.contact.fill(params.into());
        self.contact.take_pending()
    }
}
