//! Money, area and price estimate formatting.

use std::fmt;

use crate::{
    models::{Billing, Plan},
    pricing::{Advisory, Pricing, Unavailable},
};

/// Groups digits in threes: `12500` becomes `12,500`.
fn grouped(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Whole-dollar amount, e.g. `$1,099`.
#[derive(Debug, Clone, Copy)]
pub struct Dollars(pub u32);

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", grouped(self.0))
    }
}

/// Property size, e.g. `2,400 sq ft`.
#[derive(Debug, Clone, Copy)]
pub struct SquareFeet(pub u32);

impl fmt::Display for SquareFeet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sq ft", grouped(self.0))
    }
}

impl fmt::Display for Billing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Billing::Monthly => write!(f, "monthly"),
            Billing::PerVisit => write!(f, "per visit"),
            Billing::OneTime => write!(f, "one-time"),
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::CustomQuote {
                largest_square_feet,
            } => write!(
                f,
                "Properties over {} may need a custom quote. Contact us for exact pricing.",
                SquareFeet(*largest_square_feet)
            ),
        }
    }
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unavailable::NoPlan => write!(f, "Select a plan to see pricing."),
            Unavailable::NoSquareFootage => {
                write!(f, "Enter the square footage to see pricing.")
            }
            Unavailable::NoTiers => write!(f, "This plan has no published pricing."),
        }
    }
}

/// A price lookup together with the name of the plan it was made for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Estimate {
    pub plan_name: Option<String>,
    /// Number of tiers the plan publishes
    pub tier_count: usize,
    pub pricing: Pricing,
}

impl Estimate {
    pub fn new(plan: Option<&Plan>, pricing: Pricing) -> Self {
        Self {
            plan_name: plan.map(|plan| plan.name.clone()),
            tier_count: plan.map_or(0, |plan| plan.tiers.len()),
            pricing,
        }
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Estimated Price")?;
        writeln!(f)?;

        let quote = match &self.pricing {
            Pricing::Quoted(quote) => quote,
            Pricing::Unavailable(reason) => return writeln!(f, "{reason}"),
        };

        writeln!(f, "**{}{}**", Dollars(quote.price), quote.billing.suffix())?;
        writeln!(f)?;
        if let Some(name) = &self.plan_name {
            writeln!(f, "- **Plan**: {name}")?;
        }
        writeln!(f, "- **Size**: {}", SquareFeet(quote.square_feet))?;
        writeln!(f, "- **Tier**: {} of {}", quote.tier, self.tier_count)?;

        if let Some(advisory) = &quote.advisory {
            writeln!(f)?;
            writeln!(f, "> {advisory}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::Catalog, models::PlanId};

    #[test]
    fn test_grouped_amounts() {
        assert_eq!(Dollars(0).to_string(), "$0");
        assert_eq!(Dollars(480).to_string(), "$480");
        assert_eq!(Dollars(1099).to_string(), "$1,099");
        assert_eq!(SquareFeet(1200).to_string(), "1,200 sq ft");
        assert_eq!(SquareFeet(1_250_000).to_string(), "1,250,000 sq ft");
    }

    #[test]
    fn test_estimate_in_range() {
        let catalog = Catalog::builtin();
        let plan = catalog.get(PlanId::Base).unwrap();
        let estimate = Estimate::new(Some(plan), catalog.price(Some(PlanId::Base), Some(2400)));
        let output = estimate.to_string();

        assert!(output.contains("**$280/month**"));
        assert!(output.contains("- **Plan**: Essential Care"));
        assert!(output.contains("- **Size**: 2,400 sq ft"));
        assert!(output.contains("- **Tier**: 2 of 4"));
        assert!(!output.contains("custom quote"));
    }

    #[test]
    fn test_estimate_with_advisory() {
        let catalog = Catalog::builtin();
        let plan = catalog.get(PlanId::Base).unwrap();
        let estimate = Estimate::new(Some(plan), catalog.price(Some(PlanId::Base), Some(6000)));
        let output = estimate.to_string();

        assert!(output.contains("**$480/month**"));
        assert!(output.contains("> Properties over 5,000 sq ft may need a custom quote."));
    }

    #[test]
    fn test_estimate_per_visit() {
        let catalog = Catalog::builtin();
        let plan = catalog.get(PlanId::Luxury).unwrap();
        let estimate = Estimate::new(Some(plan), catalog.price(Some(PlanId::Luxury), Some(7000)));
        assert!(estimate.to_string().contains("**$1,099 per visit**"));
    }

    #[test]
    fn test_estimate_unavailable() {
        let estimate = Estimate::new(None, Pricing::Unavailable(Unavailable::NoPlan));
        let output = estimate.to_string();
        assert!(output.contains("Select a plan to see pricing."));
        assert!(!output.contains('$'));
    }
}
