//! What a submitted booking produces.

use serde::Serialize;

use crate::{
    models::{Acknowledgment, BookingDraft, CustomerKind},
    pricing::Pricing,
};

pub const BOOKING_TITLE: &str = "Booking Request Submitted!";
pub const BOOKING_DESCRIPTION: &str =
    "We'll contact you within 24 hours to confirm your appointment.";

/// Snapshot of the draft at the moment it was submitted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SubmittedBooking {
    pub kind: CustomerKind,
    /// Display name of the selected plan
    pub plan: Option<String>,
    pub pricing: Pricing,
    pub draft: BookingDraft,
}

/// Acknowledgment returned by [`super::Wizard::submit`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookingAcknowledgment {
    pub notice: Acknowledgment,
    pub booking: SubmittedBooking,
}

impl BookingAcknowledgment {
    pub fn new(booking: SubmittedBooking) -> Self {
        Self {
            notice: Acknowledgment::new(BOOKING_TITLE, BOOKING_DESCRIPTION),
            booking,
        }
    }
}
