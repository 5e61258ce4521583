//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use super::pricing::Dollars;
use crate::models::{Plan, Service};

/// Newtype wrapper for displaying a list of catalog plans.
///
/// # Examples
///
/// ```rust
/// use upkeep_core::{catalog::Catalog, display::PlanList, models::CustomerKind};
///
/// let catalog = Catalog::builtin();
/// let plans = PlanList(catalog.plans_for(CustomerKind::Agent).cloned().collect());
/// assert_eq!(plans.len(), 3);
/// assert!(plans.to_string().contains("Luxury Listing"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanList(pub Vec<Plan>);

impl PlanList {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plans in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the plans.
    pub fn iter(&self) -> std::slice::Iter<'_, Plan> {
        self.0.iter()
    }
}

impl Index<usize> for PlanList {
    type Output = Plan;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PlanList {
    type Item = Plan;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlanList {
    type Item = &'a Plan;
    type IntoIter = std::slice::Iter<'a, Plan>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }

        let mut current = None;
        for plan in &self.0 {
            let category = plan.category();
            if current != Some(category) {
                writeln!(f, "## {}: {}", category.title(), category.subtitle())?;
                writeln!(f)?;
                current = Some(category);
            }
            plan.fmt_summary(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the individual service price list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceList(pub Vec<Service>);

impl ServiceList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ServiceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No services found.");
        }

        writeln!(f, "| Service | Starting at |")?;
        writeln!(f, "|:-|-:|")?;
        for service in &self.0 {
            writeln!(f, "| {} | from {} |", service.name, Dollars(service.starting_price))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_plan_list_display() {
        let plans = PlanList(Catalog::builtin().plans().to_vec());
        let output = plans.to_string();
        assert!(output.contains("### Essential Care (`base`)"));
        assert!(output.contains("- **Price**: from $180/month"));
        assert!(output.contains("### Quick Refresh (`refresh`)"));
        assert!(output.contains("- **For**: agents"));
        assert!(output.contains("### Deep Clean (`deep-clean`)"));
        assert!(output.contains("- **Price**: from $499\n"));
        assert_eq!(plans.iter().count(), 9);
        assert_eq!(plans[0].name, "Essential Care");
    }

    #[test]
    fn test_plan_list_groups_by_category() {
        let output = PlanList(Catalog::builtin().plans().to_vec()).to_string();
        let headings: Vec<&str> = output.lines().filter(|line| line.starts_with("## ")).collect();
        assert_eq!(
            headings,
            vec![
                "## Homeowner Memberships: Monthly Care",
                "## Homeowner Packages: One-Time Services",
                "## Agent Listing Prep: Listing Preparation",
            ]
        );
    }

    #[test]
    fn test_empty_plan_list() {
        assert_eq!(PlanList(vec![]).to_string(), "No plans found.\n");
    }

    #[test]
    fn test_service_list_display() {
        let services = ServiceList(Catalog::builtin().services().to_vec());
        let output = services.to_string();
        assert!(output.starts_with("| Service | Starting at |"));
        assert!(output.contains("| Window Cleaning | from $75 |"));
        assert!(output.contains("| Property Check-ins | from $50 |"));
        assert_eq!(services.len(), 6);
        assert_eq!(ServiceList(vec![]).to_string(), "No services found.\n");
    }
}
