//! Parameter structures for booking operations
//!
//! This module contains shared parameter structures used by every interface
//! (CLI, MCP) without framework-specific derives. Interface layers wrap these
//! types and add their own derives, keeping the core free of clap and rmcp.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Textual fields (plan keys, time slots, payment preferences) are kept as
//! strings here and parsed by `validate` methods, so every interface reports
//! bad input through the same [`BookingError::InvalidInput`] messages.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{BookingError, Result},
    models::{ContactMessage, CustomerKind, PaymentPreference, PlanId, TimeSlot},
    wizard::DeepLink,
};

fn parse_customer(value: Option<&str>) -> Result<CustomerKind> {
    match value {
        None => Ok(CustomerKind::default()),
        Some(raw) => CustomerKind::from_str(raw).map_err(|_| {
            BookingError::invalid_input("customer")
                .with_reason(format!("Invalid customer kind: {raw}. Must be 'homeowner' or 'agent'"))
        }),
    }
}

/// Parameters for listing plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListPlans {
    /// Only list plans for this customer kind ('homeowner' or 'agent')
    #[serde(default)]
    pub audience: Option<String>,
}

impl ListPlans {
    /// Parses the audience filter.
    pub fn validate(&self) -> Result<Option<CustomerKind>> {
        self.audience
            .as_deref()
            .map(|raw| parse_customer(Some(raw)))
            .transpose()
    }
}

/// Parameters for operations on a single plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanKey {
    /// Plan key, e.g. 'base', 'premium', 'full-prep'
    pub plan: String,
}

/// Parameters for quoting a price.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct QuotePrice {
    /// Plan key, e.g. 'base'
    pub plan: String,
    /// Property square footage as typed, e.g. '2,400'
    pub square_feet: String,
}

/// Parameters for starting a new booking session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StartBooking {
    /// Customer kind: 'homeowner' (default) or 'agent'
    #[serde(default)]
    pub customer: Option<String>,
    /// Deep link: a query string such as '?plan=premium' or a bare plan key
    #[serde(default)]
    pub link: Option<String>,
}

impl StartBooking {
    /// Parses the customer kind and the deep link.
    pub fn validate(&self) -> Result<(CustomerKind, DeepLink)> {
        let kind = parse_customer(self.customer.as_deref())?;
        let link = self
            .link
            .as_deref()
            .map(DeepLink::parse)
            .unwrap_or_default();
        Ok((kind, link))
    }
}

/// Partial update of the booking draft.
///
/// Absent fields are left untouched. Present fields replace the current
/// value; an empty string clears a text field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateBooking {
    /// Property or listing address
    pub address: Option<String>,
    /// Square footage as typed, e.g. '2,400'
    pub square_feet: Option<String>,
    /// Full name
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Company, or brokerage for agents
    pub company: Option<String>,
    /// Preferred date, ideally YYYY-MM-DD
    pub preferred_date: Option<String>,
    /// Preferred time: 'morning', 'afternoon' or 'flexible'; empty clears it
    pub time_slot: Option<String>,
    /// Special instructions, access codes, etc.
    pub notes: Option<String>,
    /// Payment preference: 'online' or 'invoice'
    pub payment: Option<String>,
}

/// Validated [`UpdateBooking`] with parsed enum fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedUpdate {
    /// `Some(None)` clears the time slot.
    pub time_slot: Option<Option<TimeSlot>>,
    pub payment: Option<PaymentPreference>,
}

impl UpdateBooking {
    /// Validate the enum-valued fields.
    ///
    /// # Errors
    ///
    /// * `BookingError::InvalidInput` - When the time slot is not recognized
    /// * `BookingError::InvalidInput` - When the payment preference is not recognized
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upkeep_core::params::UpdateBooking;
    ///
    /// let update = UpdateBooking {
    ///     time_slot: Some("morning".to_string()),
    ///     ..Default::default()
    /// };
    /// assert!(update.validate().is_ok());
    ///
    /// let update = UpdateBooking {
    ///     payment: Some("bitcoin".to_string()),
    ///     ..Default::default()
    /// };
    /// assert!(update.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<ValidatedUpdate> {
        let time_slot = match self.time_slot.as_deref().map(str::trim) {
            None => None,
            Some("") => Some(None),
            Some(raw) => Some(Some(TimeSlot::from_str(raw).map_err(|_| {
                BookingError::invalid_input("time_slot").with_reason(format!(
                    "Invalid time slot: {raw}. Must be 'morning', 'afternoon' or 'flexible'"
                ))
            })?)),
        };

        let payment = self
            .payment
            .as_deref()
            .map(|raw| {
                PaymentPreference::from_str(raw).map_err(|_| {
                    BookingError::invalid_input("payment").with_reason(format!(
                        "Invalid payment preference: {raw}. Must be 'online' or 'invoice'"
                    ))
                })
            })
            .transpose()?;

        Ok(ValidatedUpdate { time_slot, payment })
    }

    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.address.is_none()
            && self.square_feet.is_none()
            && self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.company.is_none()
            && self.preferred_date.is_none()
            && self.time_slot.is_none()
            && self.notes.is_none()
            && self.payment.is_none()
    }
}

/// Parameters for sending a message through the contact form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SendContact {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

impl From<SendContact> for ContactMessage {
    fn from(val: SendContact) -> Self {
        ContactMessage {
            name: val.name,
            email: val.email,
            phone: val.phone,
            subject: val.subject,
            message: val.message,
        }
    }
}

impl PlanKey {
    /// Parses the plan key without consulting a catalog.
    pub fn validate(&self) -> Result<PlanId> {
        PlanId::from_str(&self.plan).map_err(|_| BookingError::UnknownPlan {
            key: self.plan.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_plans_validate() {
        assert_eq!(ListPlans::default().validate().unwrap(), None);
        let agent = ListPlans {
            audience: Some("agent".to_string()),
        };
        assert_eq!(agent.validate().unwrap(), Some(CustomerKind::Agent));
        let bad = ListPlans {
            audience: Some("landlord".to_string()),
        };
        assert!(matches!(bad.validate(), Err(BookingError::InvalidInput { .. })));
    }

    #[test]
    fn test_start_booking_validate() {
        let (kind, link) = StartBooking::default().validate().unwrap();
        assert_eq!(kind, CustomerKind::Homeowner);
        assert_eq!(link.plan_id(), None);

        let params = StartBooking {
            customer: Some("agent".to_string()),
            link: Some("?plan=luxury".to_string()),
        };
        let (kind, link) = params.validate().unwrap();
        assert_eq!(kind, CustomerKind::Agent);
        assert_eq!(link.plan_id(), Some(PlanId::Luxury));
    }

    #[test]
    fn test_update_booking_validate() {
        let update = UpdateBooking {
            time_slot: Some("Afternoon".to_string()),
            payment: Some("invoice".to_string()),
            ..Default::default()
        };
        let validated = update.validate().unwrap();
        assert_eq!(validated.time_slot, Some(Some(TimeSlot::Afternoon)));
        assert_eq!(validated.payment, Some(PaymentPreference::Invoice));

        let clear = UpdateBooking {
            time_slot: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(clear.validate().unwrap().time_slot, Some(None));

        let bad = UpdateBooking {
            time_slot: Some("midnight".to_string()),
            ..Default::default()
        };
        let err = bad.validate().unwrap_err();
        assert!(err.to_string().contains("time_slot"));
    }

    #[test]
    fn test_update_booking_is_empty() {
        assert!(UpdateBooking::default().is_empty());
        let update = UpdateBooking {
            notes: Some(String::new()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_plan_key_validate() {
        let key = PlanKey {
            plan: "full-prep".to_string(),
        };
        assert_eq!(key.validate().unwrap(), PlanId::FullPrep);
        let unknown = PlanKey {
            plan: "gold".to_string(),
        };
        assert!(matches!(unknown.validate(), Err(BookingError::UnknownPlan { .. })));
    }

    #[test]
    fn test_send_contact_into_message() {
        let params = SendContact {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: String::new(),
            subject: "Quote".to_string(),
            message: "Roof washing?".to_string(),
        };
        let message: ContactMessage = params.into();
        assert_eq!(message.subject, "Quote");
        assert!(message.missing_fields().is_empty());
    }
}
