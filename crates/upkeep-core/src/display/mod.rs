//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly; collections,
//! estimates and action outcomes get small wrapper types. Every formatter
//! produces markdown so the same text renders in a terminal and reads well as
//! an MCP tool response.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types & │    │   Formatted     │
//! │ (Plan, Wizard)  │───▶│ Format Helpers  │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (PlanList, ServiceList)
//! - [`datetime`]: Preferred-date formatting
//! - [`models`]: Display implementations for domain models
//! - [`pricing`]: Money, area and estimate formatting
//! - [`results`]: Wizard action outcomes and acknowledgments
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`wizard`]: The step-by-step booking view
//!
//! ## Usage Examples
//!
//! ```rust
//! use upkeep_core::{
//!     catalog::Catalog,
//!     display::{Dollars, Estimate, OperationStatus},
//!     models::PlanId,
//! };
//!
//! assert_eq!(Dollars(1099).to_string(), "$1,099");
//!
//! let catalog = Catalog::builtin();
//! let plan = catalog.get(PlanId::Base).unwrap();
//! let estimate = Estimate::new(Some(plan), catalog.price(Some(plan.id), Some(1201)));
//! assert!(estimate.to_string().contains("$280/month"));
//!
//! let status = OperationStatus::success("Booking started".to_string());
//! assert!(status.to_string().starts_with("Success:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod pricing;
pub mod results;
pub mod status;
pub mod wizard;

pub use collections::{PlanList, ServiceList};
pub use datetime::PreferredDate;
pub use pricing::{Dollars, Estimate, SquareFeet};
pub use results::{BookingUpdate, StepChange};
pub use status::OperationStatus;
