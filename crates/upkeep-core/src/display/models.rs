//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the data structures stay free of
//! presentation logic. Output is markdown.

use std::fmt;

use super::pricing::{Dollars, SquareFeet};
use crate::models::{Acknowledgment, CustomerKind, PaymentPreference, Plan, PlanId, TimeSlot};

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for CustomerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for PaymentPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Plan {
    /// One-line advertised price, e.g. `from $180/month`.
    pub(crate) fn starting_price_label(&self) -> String {
        match self.starting_price() {
            Some(price) => format!("from {}{}", Dollars(price), self.billing.suffix()),
            None => "pricing on request".to_string(),
        }
    }

    /// Compact form used in plan lists and on the plan selection step.
    pub(crate) fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} (`{}`)", self.name, self.id)?;
        writeln!(f)?;
        if !self.description.is_empty() {
            writeln!(f, "- **About**: {}", self.description)?;
        }
        writeln!(f, "- **For**: {}s", self.audience)?;
        writeln!(f, "- **Price**: {}", self.starting_price_label())?;
        writeln!(f)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} (`{}`)", self.name, self.id)?;
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }

        writeln!(f, "- For: {}s", self.audience)?;
        writeln!(f, "- Billing: {}", self.billing)?;
        writeln!(f, "- Price: {}", self.starting_price_label())?;

        if !self.tiers.is_empty() {
            writeln!(f, "\n## Pricing")?;
            writeln!(f)?;
            writeln!(f, "| Property size | Price |")?;
            writeln!(f, "|:-|-:|")?;
            for tier in &self.tiers {
                writeln!(
                    f,
                    "| up to {} | {}{} |",
                    SquareFeet(tier.max_square_feet),
                    Dollars(tier.price),
                    self.billing.suffix()
                )?;
            }
            if let Some(largest) = self.largest_tier() {
                writeln!(f)?;
                writeln!(
                    f,
                    "Larger than {}? Contact us for a custom quote.",
                    SquareFeet(largest.max_square_feet)
                )?;
            }
        }

        if !self.services.is_empty() {
            writeln!(f, "\n## Included Services")?;
            writeln!(f)?;
            for service in &self.services {
                writeln!(f, "- {service}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Acknowledgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**{}**", self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)
    }
}
