//! High-level front desk API for quoting, booking and contact requests.
//!
//! This module provides the main [`Desk`] interface. A desk owns one plan
//! catalog, one booking wizard session and one contact form, which is
//! everything a single visitor interacts with. The CLI and the MCP server both
//! drive their work through a desk and render what its handlers return.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Core State    │    │     Catalog     │
//! │ (plan_handlers, │───▶│ (Wizard,        │───▶│ (tiers, plans)  │
//! │  booking_...)   │    │  ContactForm)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!  Params in, display     State transitions      Immutable config
//!  wrappers out
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Desk`] instances with configuration
//! - [`plan_handlers`]: Catalog browsing and price quotes
//! - [`booking_handlers`]: Booking wizard actions and the contact form
//!
//! # Usage Examples
//!
//! ```rust
//! use upkeep_core::{
//!     params::{QuotePrice, StartBooking},
//!     DeskBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut desk = DeskBuilder::new().builtin_catalog().build().await?;
//!
//! let estimate = desk.quote(&QuotePrice {
//!     plan: "base".to_string(),
//!     square_feet: "1,800".to_string(),
//! })?;
//! assert_eq!(estimate.pricing.amount(), Some(280));
//!
//! desk.start_booking(&StartBooking {
//!     customer: None,
//!     link: Some("?plan=premium".to_string()),
//! })?;
//! assert_eq!(desk.wizard().step_number(), 2);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::{catalog::Catalog, contact::ContactForm, models::CustomerKind, wizard::Wizard};

pub mod booking_handlers;
pub mod builder;
pub mod plan_handlers;

#[cfg(test)]
mod tests;

pub use builder::DeskBuilder;

/// Main interface for one visitor's session.
#[derive(Debug, Clone)]
pub struct Desk {
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) wizard: Wizard,
    pub(crate) contact: ContactForm,
}

impl Desk {
    /// Creates a desk with a fresh homeowner wizard.
    pub(crate) fn new(catalog: Catalog, contact: ContactForm) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            wizard: Wizard::new(Arc::clone(&catalog), CustomerKind::Homeowner),
            catalog,
            contact,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current booking session.
    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn contact_form(&self) -> &ContactForm {
        &self.contact
    }
}
