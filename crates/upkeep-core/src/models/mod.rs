//! Data models for plans, booking drafts and contact messages.
//!
//! This module contains the core domain models of the booking system. Display
//! implementations for these models live in [`crate::display::models`] so the
//! data structures stay free of presentation logic.
//!
//! # Model Overview
//!
//! - [`Plan`]: an immutable catalog entry with its square-footage [`Tier`]s
//! - [`BookingDraft`]: the mutable, session-scoped record the wizard edits
//! - [`Service`]: an individual service on the price list
//! - [`ContactMessage`]: the record behind the single-step contact form
//! - [`Acknowledgment`]: the notification shown after either form is submitted
//! - [`CustomerKind`] and [`StepKind`]: the tags that shape a wizard flow
//!
//! # Examples
//!
//! ```rust
//! use upkeep_core::models::{BookingDraft, PlanId};
//!
//! let mut draft = BookingDraft::default();
//! draft.plan = Some(PlanId::Base);
//! draft.property.square_feet = "2,400".to_string();
//! assert_eq!(draft.square_feet(), Some(2400));
//!
//! draft.reset();
//! assert_eq!(draft, BookingDraft::default());
//! ```

pub mod acknowledgment;
pub mod contact;
pub mod customer;
pub mod draft;
pub mod plan;
pub mod service;
pub mod step;

#[cfg(test)]
mod tests;

pub use acknowledgment::Acknowledgment;
pub use contact::ContactMessage;
pub use customer::CustomerKind;
pub use draft::{BookingDraft, ContactDetails, PaymentPreference, PropertyDetails, Schedule, TimeSlot};
pub use plan::{Billing, Plan, PlanCategory, PlanId, Tier};
pub use service::Service;
pub use step::StepKind;
