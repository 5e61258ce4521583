//! Core library for the Upkeep property-maintenance booking tools.
//!
//! This crate provides the business logic behind quoting and booking: the plan
//! catalog with its square-footage tiers, the tier pricing resolver, the
//! multi-step booking wizard and the contact form. There is no persistence and
//! no network traffic; a submission only produces an acknowledgment and resets
//! local state.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): plain data, free of presentation logic
//! - **Display Wrappers** ([`display`]): markdown formatting for models,
//!   estimates, wizard steps and action outcomes
//! - **Terminal Rendering**: rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use upkeep_core::{
//!     params::{PlanKey, UpdateBooking},
//!     DeskBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut desk = DeskBuilder::new().build().await?;
//!
//! desk.select_plan(&PlanKey { plan: "base".to_string() })?;
//! desk.continue_booking();
//!
//! let update = desk.update_booking(&UpdateBooking {
//!     address: Some("123 Lake View Dr".to_string()),
//!     square_feet: Some("1,800".to_string()),
//!     ..Default::default()
//! })?;
//! println!("{}", update);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod contact;
pub mod desk;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod pricing;
pub mod wizard;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogBuilder};
pub use contact::{ContactAcknowledgment, ContactForm, PendingContact};
pub use desk::{Desk, DeskBuilder};
pub use display::{BookingUpdate, Estimate, OperationStatus, PlanList, ServiceList, StepChange};
pub use error::{BookingError, Result};
pub use models::{
    Acknowledgment, BookingDraft, ContactMessage, CustomerKind, PaymentPreference, Plan, PlanId,
    Service, StepKind, Tier, TimeSlot,
};
pub use params::{ListPlans, PlanKey, QuotePrice, SendContact, StartBooking, UpdateBooking};
pub use pricing::{Advisory, Pricing, Quote, Unavailable};
pub use wizard::{BookingAcknowledgment, DeepLink, Navigation, Wizard};
