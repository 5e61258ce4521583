//! Compiled-in plan catalog.

use crate::models::{Billing, CustomerKind, Plan, PlanId, Service, Tier};

fn included(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// The published plans: three homeowner memberships, three one-time
/// homeowner packages, then three agent listing-prep packages.
pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            id: PlanId::Base,
            name: "Essential Care".to_string(),
            description: "The smart starting point".to_string(),
            audience: CustomerKind::Homeowner,
            billing: Billing::Monthly,
            tiers: vec![
                Tier::new(1200, 180),
                Tier::new(2400, 280),
                Tier::new(3600, 380),
                Tier::new(5000, 480),
            ],
            services: included(&[
                "Monthly exterior window cleaning",
                "Quarterly gutter cleaning",
                "Property walkthrough each visit",
                "Priority scheduling",
                "Email service reports",
            ]),
        },
        Plan {
            id: PlanId::Premium,
            name: "Premium Care".to_string(),
            description: "Our most popular choice".to_string(),
            audience: CustomerKind::Homeowner,
            billing: Billing::Monthly,
            tiers: vec![
                Tier::new(1200, 279),
                Tier::new(2400, 379),
                Tier::new(3600, 479),
                Tier::new(5000, 579),
            ],
            services: included(&[
                "Everything in Essential Care",
                "Monthly pressure washing rotation",
                "Photo & video property reports",
                "Seasonal snow removal included",
                "Deck & patio deep cleaning",
            ]),
        },
        Plan {
            id: PlanId::Estate,
            name: "Estate Care".to_string(),
            description: "The ultimate in property care".to_string(),
            audience: CustomerKind::Homeowner,
            billing: Billing::Monthly,
            tiers: vec![
                Tier::new(2400, 449),
                Tier::new(3600, 599),
                Tier::new(5000, 749),
                Tier::new(7500, 899),
            ],
            services: included(&[
                "Everything in Premium Care",
                "Weekly property check-ins",
                "Dedicated account manager",
                "24/7 emergency response",
                "Concierge coordination",
                "Annual exterior wood treatment",
                "Priority winter services",
            ]),
        },
        Plan {
            id: PlanId::Seasonal,
            name: "Seasonal Refresh".to_string(),
            description: "Ideal for spring or fall property refresh".to_string(),
            audience: CustomerKind::Homeowner,
            billing: Billing::OneTime,
            tiers: vec![
                Tier::new(1200, 249),
                Tier::new(2400, 329),
                Tier::new(3600, 409),
                Tier::new(5000, 489),
            ],
            services: included(&[
                "Exterior window cleaning",
                "Gutter cleanout",
                "Front entrance pressure wash",
                "Screen cleaning",
            ]),
        },
        Plan {
            id: PlanId::DeepClean,
            name: "Deep Clean".to_string(),
            description: "Thorough cleaning for the entire property exterior".to_string(),
            audience: CustomerKind::Homeowner,
            billing: Billing::OneTime,
            tiers: vec![
                Tier::new(1200, 499),
                Tier::new(2400, 649),
                Tier::new(3600, 799),
                Tier::new(5000, 949),
            ],
            services: included(&[
                "All exterior windows",
                "Full pressure washing",
                "Gutter cleaning",
                "Deck restoration",
            ]),
        },
        Plan {
            id: PlanId::Restoration,
            name: "Complete Restoration".to_string(),
            description: "Full property exterior rejuvenation".to_string(),
            audience: CustomerKind::Homeowner,
            billing: Billing::OneTime,
            tiers: vec![
                Tier::new(1200, 899),
                Tier::new(2400, 1149),
                Tier::new(3600, 1399),
                Tier::new(5000, 1649),
            ],
            services: included(&[
                "Everything in Deep Clean",
                "Concrete sealing",
                "Exterior wood treatment",
            ]),
        },
        Plan {
            id: PlanId::Refresh,
            name: "Quick Refresh".to_string(),
            description: "Fast turnaround for light touch-ups".to_string(),
            audience: CustomerKind::Agent,
            billing: Billing::PerVisit,
            tiers: vec![
                Tier::new(1500, 199),
                Tier::new(3000, 249),
                Tier::new(5000, 299),
            ],
            services: included(&[
                "Exterior window cleaning",
                "Front entrance detailing",
                "Walkway pressure wash",
                "48-hour turnaround",
            ]),
        },
        Plan {
            id: PlanId::FullPrep,
            name: "Full Listing Prep".to_string(),
            description: "Complete exterior preparation for maximum listing impact".to_string(),
            audience: CustomerKind::Agent,
            billing: Billing::PerVisit,
            tiers: vec![
                Tier::new(1500, 399),
                Tier::new(3000, 499),
                Tier::new(5000, 599),
            ],
            services: included(&[
                "All exterior windows",
                "Full pressure washing",
                "Gutter cleaning",
                "Deck/patio detailing",
                "Photo-ready guarantee",
            ]),
        },
        Plan {
            id: PlanId::Luxury,
            name: "Luxury Listing".to_string(),
            description: "Premium prep for high-end properties".to_string(),
            audience: CustomerKind::Agent,
            billing: Billing::PerVisit,
            tiers: vec![
                Tier::new(3000, 699),
                Tier::new(5000, 899),
                Tier::new(8000, 1099),
            ],
            services: included(&[
                "Everything in Full Listing Prep",
                "Driveway restoration",
                "Outdoor furniture cleaning",
                "White-glove finish",
            ]),
        },
    ]
}

/// Services sold on their own, with their advertised starting prices.
pub fn services() -> Vec<Service> {
    vec![
        Service::new("windows", "Window Cleaning", 75),
        Service::new("pressure", "Pressure Washing", 150),
        Service::new("roof", "Roof Washing", 200),
        Service::new("gutters", "Gutter Cleaning", 100),
        Service::new("snow", "Snow Removal", 75),
        Service::new("checkins", "Property Check-ins", 50),
    ]
}
