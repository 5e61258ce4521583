//! Booking draft model definition and related functionality.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::PlanId;
use crate::pricing::parse_square_feet;

/// Preferred arrival window for a service visit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Flexible,
}

impl TimeSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Flexible => "flexible",
        }
    }

    /// Human-readable label including the time window.
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning (8am - 12pm)",
            TimeSlot::Afternoon => "Afternoon (12pm - 4pm)",
            TimeSlot::Flexible => "Flexible (Any time)",
        }
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" | "am" => Ok(TimeSlot::Morning),
            "afternoon" | "pm" => Ok(TimeSlot::Afternoon),
            "flexible" | "any" => Ok(TimeSlot::Flexible),
            _ => Err(format!("Invalid time slot: {s}")),
        }
    }
}

/// How the customer would like to pay once the booking is confirmed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentPreference {
    #[default]
    Online,
    Invoice,
}

impl PaymentPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentPreference::Online => "online",
            PaymentPreference::Invoice => "invoice",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentPreference::Online => "Pay Online",
            PaymentPreference::Invoice => "Request Invoice",
        }
    }
}

impl FromStr for PaymentPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "online" => Ok(PaymentPreference::Online),
            "invoice" => Ok(PaymentPreference::Invoice),
            _ => Err(format!("Invalid payment preference: {s}")),
        }
    }
}

/// Contact fields of a booking.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Company or brokerage; optional for homeowners
    #[serde(default)]
    pub company: String,
}

/// Property fields of a booking.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropertyDetails {
    pub address: String,
    /// Square footage exactly as typed
    pub square_feet: String,
}

/// Scheduling preferences of a booking.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schedule {
    /// Preferred date as typed, usually `YYYY-MM-DD`
    pub preferred_date: String,
    pub time_slot: Option<TimeSlot>,
}

/// Session-scoped record edited by the booking wizard.
///
/// A draft lives only as long as its wizard. Submitting resets it to
/// [`BookingDraft::default`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingDraft {
    /// Selected plan, absent until chosen
    pub plan: Option<PlanId>,
    #[serde(default)]
    pub contact: ContactDetails,
    #[serde(default)]
    pub property: PropertyDetails,
    #[serde(default)]
    pub schedule: Schedule,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub payment: PaymentPreference,
}

impl BookingDraft {
    /// Parsed square footage, absent when blank, zero or not a number.
    pub fn square_feet(&self) -> Option<u32> {
        parse_square_feet(&self.property.square_feet)
    }

    /// Restores every field to its initial empty value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
