//! The step-by-step booking view.

use std::fmt;

use super::{datetime::PreferredDate, pricing::Estimate};
use crate::{
    models::{CustomerKind, StepKind},
    wizard::Wizard,
};

const EMPTY: &str = "_not provided_";
const REQUIRED: &str = "_required_";

fn field(value: &str, required: bool) -> &str {
    match value.trim() {
        "" if required => REQUIRED,
        "" => EMPTY,
        value => value,
    }
}

impl Wizard {
    fn title(&self) -> &'static str {
        match self.kind() {
            CustomerKind::Homeowner => "Book a Service",
            CustomerKind::Agent => "Book Listing Prep",
        }
    }

    fn fmt_progress(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = StepKind::ALL
            .iter()
            .map(|step| {
                let label = self.label(*step);
                if *step == self.step() {
                    format!("**{}. {}**", step.position(), label)
                } else if *step < self.step() {
                    format!("✓ {label}")
                } else {
                    format!("{}. {}", step.position(), label)
                }
            })
            .collect();
        writeln!(f, "{}", parts.join(" → "))
    }

    fn fmt_plans(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let selected = self.draft().plan;
        for plan in self.available_plans() {
            let marker = if Some(plan.id) == selected {
                " **(selected)**"
            } else {
                ""
            };
            writeln!(
                f,
                "- **{}** (`{}`): {}{marker}",
                plan.name,
                plan.id,
                plan.starting_price_label()
            )?;
        }
        Ok(())
    }

    fn fmt_property(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let draft = self.draft();
        writeln!(
            f,
            "- **{}**: {}",
            self.kind().address_label(),
            field(&draft.property.address, true)
        )?;
        writeln!(
            f,
            "- **Square Feet**: {}",
            field(&draft.property.square_feet, true)
        )?;
        self.fmt_schedule(f)?;
        writeln!(f, "- **Notes**: {}", field(&draft.notes, false))
    }

    fn fmt_schedule(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schedule = &self.draft().schedule;
        if schedule.preferred_date.trim().is_empty() {
            writeln!(f, "- **Preferred Date**: {EMPTY}")?;
        } else {
            writeln!(
                f,
                "- **Preferred Date**: {}",
                PreferredDate(&schedule.preferred_date)
            )?;
        }
        match schedule.time_slot {
            Some(slot) => writeln!(f, "- **Preferred Time**: {slot}"),
            None => writeln!(f, "- **Preferred Time**: {EMPTY}"),
        }
    }

    fn fmt_contact(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let contact = &self.draft().contact;
        writeln!(f, "- **Full Name**: {}", field(&contact.name, true))?;
        writeln!(f, "- **Email**: {}", field(&contact.email, true))?;
        writeln!(f, "- **Phone**: {}", field(&contact.phone, true))?;
        writeln!(
            f,
            "- **{}**: {}",
            self.kind().company_label(),
            field(&contact.company, self.kind().requires_company())
        )
    }

    fn fmt_review(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self
            .selected_plan()
            .map_or(REQUIRED, |plan| plan.name.as_str());
        writeln!(f, "### {}", self.label(StepKind::SelectPlan))?;
        writeln!(f)?;
        writeln!(f, "- **Plan**: {plan}")?;
        writeln!(f)?;
        writeln!(f, "### {}", self.label(StepKind::PropertyDetails))?;
        writeln!(f)?;
        self.fmt_property(f)?;
        writeln!(f)?;
        writeln!(f, "### {}", self.label(StepKind::ContactInfo))?;
        writeln!(f)?;
        self.fmt_contact(f)?;
        writeln!(f)?;
        writeln!(f, "### Payment")?;
        writeln!(f)?;
        writeln!(f, "- **Preference**: {}", self.draft().payment)
    }
}

impl fmt::Display for Wizard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# {}: Step {} of {}",
            self.title(),
            self.step_number(),
            self.step_count()
        )?;
        writeln!(f)?;
        self.fmt_progress(f)?;
        writeln!(f)?;
        writeln!(f, "## {}", self.label(self.step()))?;
        writeln!(f)?;

        match self.step() {
            StepKind::SelectPlan => self.fmt_plans(f)?,
            StepKind::PropertyDetails => self.fmt_property(f)?,
            StepKind::ContactInfo => self.fmt_contact(f)?,
            StepKind::Confirm => self.fmt_review(f)?,
        }

        if self.draft().plan.is_some() {
            writeln!(f)?;
            write!(f, "{}", Estimate::new(self.selected_plan(), self.estimate()))?;
        }

        let missing = self.missing_fields();
        writeln!(f)?;
        if self.step() == StepKind::Confirm {
            writeln!(f, "Ready to submit.")
        } else if missing.is_empty() {
            writeln!(f, "Ready to continue.")
        } else {
            writeln!(f, "Continue is disabled until you provide: {}", missing.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        catalog::Catalog,
        models::{CustomerKind, PlanId},
        params::UpdateBooking,
        wizard::{DeepLink, Wizard},
    };

    #[test]
    fn test_first_step_lists_audience_plans() {
        let wizard = Wizard::new(Arc::new(Catalog::builtin()), CustomerKind::Agent);
        let output = wizard.to_string();

        assert!(output.starts_with("# Book Listing Prep: Step 1 of 4"));
        assert!(output.contains("**1. Select Package** → 2. Listing Details → 3. Agent Info → 4. Confirm"));
        assert!(output.contains("- **Quick Refresh** (`refresh`): from $199 per visit"));
        assert!(!output.contains("Essential Care"));
        assert!(output.contains("Continue is disabled until you provide: plan"));
        assert!(!output.contains("## Estimated Price"));
    }

    #[test]
    fn test_deep_linked_view_shows_progress_and_estimate() {
        let mut wizard = Wizard::from_deep_link(
            Arc::new(Catalog::builtin()),
            CustomerKind::Homeowner,
            &DeepLink::plan("base"),
        );
        let output = wizard.to_string();
        assert!(output.contains("✓ Select Plan → **2. Property Details**"));
        assert!(output.contains("- **Property Address**: _required_"));
        assert!(output.contains("Enter the square footage to see pricing."));

        wizard
            .update(&UpdateBooking {
                address: Some("7 Ridge Rd".to_string()),
                square_feet: Some("1201".to_string()),
                ..Default::default()
            })
            .unwrap();
        let output = wizard.to_string();
        assert!(output.contains("**$280/month**"));
        assert!(output.contains("Ready to continue."));
    }

    #[test]
    fn test_confirm_step_reviews_everything() {
        let mut wizard = Wizard::new(Arc::new(Catalog::builtin()), CustomerKind::Homeowner);
        wizard.select_plan(PlanId::Estate).unwrap();
        wizard.continue_step();
        wizard
            .update(&UpdateBooking {
                address: Some("1 Lake Dr".to_string()),
                square_feet: Some("3000".to_string()),
                preferred_date: Some("2026-03-14".to_string()),
                time_slot: Some("afternoon".to_string()),
                ..Default::default()
            })
            .unwrap();
        wizard.continue_step();
        wizard
            .update(&UpdateBooking {
                name: Some("Sam".to_string()),
                email: Some("sam@example.com".to_string()),
                phone: Some("555-0100".to_string()),
                payment: Some("invoice".to_string()),
                ..Default::default()
            })
            .unwrap();
        wizard.continue_step();

        let output = wizard.to_string();
        assert!(output.contains("## Confirm"));
        assert!(output.contains("- **Plan**: Estate Care"));
        assert!(output.contains("- **Preferred Date**: Saturday, March 14, 2026"));
        assert!(output.contains("- **Preferred Time**: Afternoon (12pm - 4pm)"));
        assert!(output.contains("- **Company**: _not provided_"));
        assert!(output.contains("- **Preference**: Request Invoice"));
        assert!(output.contains("**$599/month**"));
        assert!(output.contains("Ready to submit."));
    }
}
