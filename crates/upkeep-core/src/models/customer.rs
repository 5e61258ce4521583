//! Customer kinds and the wizard flow each one follows.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::StepKind;

/// Tagged variant over the two kinds of customer the booking flow serves.
///
/// Each variant carries its own step labels and contact requirements so the
/// wizard does not need a separate implementation per audience.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum CustomerKind {
    /// Property owner booking a membership
    #[default]
    Homeowner,

    /// Real estate agent booking listing preparation
    Agent,
}

impl FromStr for CustomerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "homeowner" | "owner" => Ok(CustomerKind::Homeowner),
            "agent" | "realtor" => Ok(CustomerKind::Agent),
            _ => Err(format!("Invalid customer kind: {s}")),
        }
    }
}

impl CustomerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerKind::Homeowner => "homeowner",
            CustomerKind::Agent => "agent",
        }
    }

    /// Label shown in the progress bar for the given step.
    pub fn step_label(&self, step: StepKind) -> &'static str {
        match (self, step) {
            (CustomerKind::Homeowner, StepKind::SelectPlan) => "Select Plan",
            (CustomerKind::Homeowner, StepKind::PropertyDetails) => "Property Details",
            (CustomerKind::Homeowner, StepKind::ContactInfo) => "Contact Info",
            (CustomerKind::Agent, StepKind::SelectPlan) => "Select Package",
            (CustomerKind::Agent, StepKind::PropertyDetails) => "Listing Details",
            (CustomerKind::Agent, StepKind::ContactInfo) => "Agent Info",
            (_, StepKind::Confirm) => "Confirm",
        }
    }

    /// Label of the address field.
    pub fn address_label(&self) -> &'static str {
        match self {
            CustomerKind::Homeowner => "Property Address",
            CustomerKind::Agent => "Listing Address",
        }
    }

    /// Label of the company field.
    pub fn company_label(&self) -> &'static str {
        match self {
            CustomerKind::Homeowner => "Company",
            CustomerKind::Agent => "Brokerage",
        }
    }

    /// Agents must name their brokerage; homeowners may leave it blank.
    pub fn requires_company(&self) -> bool {
        matches!(self, CustomerKind::Agent)
    }
}
