//! Wizard step kinds.

use serde::{Deserialize, Serialize};

/// The fixed, ordered steps of a booking flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Choose a plan from the catalog
    SelectPlan,
    /// Address and square footage
    PropertyDetails,
    /// Name, email, phone and company
    ContactInfo,
    /// Review, payment preference and submit
    Confirm,
}

impl StepKind {
    /// Every step in flow order.
    pub const ALL: [StepKind; 4] = [
        StepKind::SelectPlan,
        StepKind::PropertyDetails,
        StepKind::ContactInfo,
        StepKind::Confirm,
    ];

    /// 1-based position of the step.
    pub fn position(&self) -> usize {
        match self {
            StepKind::SelectPlan => 1,
            StepKind::PropertyDetails => 2,
            StepKind::ContactInfo => 3,
            StepKind::Confirm => 4,
        }
    }

    /// Step at a 1-based position.
    pub fn at(position: usize) -> Option<StepKind> {
        position
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }
}
