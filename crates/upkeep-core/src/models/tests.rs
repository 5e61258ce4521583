#[cfg(test)]
mod model_tests {
    use std::str::FromStr;

    use crate::models::{
        Billing, BookingDraft, ContactMessage, CustomerKind, PaymentPreference, Plan, PlanCategory,
        PlanId, StepKind, Tier, TimeSlot,
    };

    fn create_test_plan() -> Plan {
        Plan {
            id: PlanId::Base,
            name: "Essential Care".to_string(),
            description: "The smart starting point".to_string(),
            audience: CustomerKind::Homeowner,
            billing: Billing::Monthly,
            tiers: vec![Tier::new(1200, 180), Tier::new(2400, 280)],
            services: vec!["Monthly exterior window cleaning".to_string()],
        }
    }

    #[test]
    fn test_plan_id_from_str() {
        assert_eq!(PlanId::from_str("base").unwrap(), PlanId::Base);
        assert_eq!(PlanId::from_str("PREMIUM").unwrap(), PlanId::Premium);
        assert_eq!(PlanId::from_str(" full_prep ").unwrap(), PlanId::FullPrep);
        assert_eq!(PlanId::from_str("fullprep").unwrap(), PlanId::FullPrep);
        assert!(PlanId::from_str("platinum").is_err());
        assert!(PlanId::from_str("").is_err());
        assert_eq!(PlanId::from_str("Deep_Clean").unwrap(), PlanId::DeepClean);
        assert_eq!(PlanId::from_str("seasonal-refresh").unwrap(), PlanId::Seasonal);
        assert_eq!(PlanId::from_str("complete-restoration").unwrap(), PlanId::Restoration);
    }

    #[test]
    fn test_plan_id_keys_parse_back() {
        for id in PlanId::ALL {
            assert_eq!(PlanId::from_str(id.as_str()).unwrap(), id);
        }
    }

    #[test]
    fn test_plan_id_serializes_kebab_case() {
        let json = serde_json::to_string(&PlanId::FullPrep).unwrap();
        assert_eq!(json, "\"full-prep\"");
    }

    #[test]
    fn test_plan_starting_price_and_largest_tier() {
        let plan = create_test_plan();
        assert_eq!(plan.starting_price(), Some(180));
        assert_eq!(plan.largest_tier(), Some(&Tier::new(2400, 280)));
    }

    #[test]
    fn test_plan_deserialize_defaults() {
        let json = r#"{"id":"estate","name":"Estate Care","tiers":[{"max_square_feet":3000,"price":449}]}"#;
        let plan: Plan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.audience, CustomerKind::Homeowner);
        assert_eq!(plan.billing, Billing::Monthly);
        assert!(plan.services.is_empty());
        assert!(plan.description.is_empty());
    }

    #[test]
    fn test_tier_covers_is_inclusive() {
        let tier = Tier::new(1200, 180);
        assert!(tier.covers(1200));
        assert!(tier.covers(1));
        assert!(!tier.covers(1201));
    }

    #[test]
    fn test_billing_suffix() {
        assert_eq!(Billing::Monthly.suffix(), "/month");
        assert_eq!(Billing::PerVisit.suffix(), " per visit");
        assert_eq!(Billing::OneTime.suffix(), "");
    }

    #[test]
    fn test_plan_category_follows_audience_and_billing() {
        let mut plan = create_test_plan();
        assert_eq!(plan.category(), PlanCategory::Membership);

        plan.billing = Billing::OneTime;
        assert_eq!(plan.category(), PlanCategory::HomeownerPackage);

        plan.audience = CustomerKind::Agent;
        assert_eq!(plan.category(), PlanCategory::ListingPrep);
        assert_eq!(PlanCategory::HomeownerPackage.subtitle(), "One-Time Services");
    }

    #[test]
    fn test_customer_kind_labels() {
        assert_eq!(CustomerKind::Homeowner.step_label(StepKind::SelectPlan), "Select Plan");
        assert_eq!(CustomerKind::Agent.step_label(StepKind::SelectPlan), "Select Package");
        assert_eq!(CustomerKind::Agent.step_label(StepKind::ContactInfo), "Agent Info");
        assert_eq!(CustomerKind::Agent.step_label(StepKind::Confirm), "Confirm");
        assert_eq!(CustomerKind::Agent.company_label(), "Brokerage");
        assert!(CustomerKind::Agent.requires_company());
        assert!(!CustomerKind::Homeowner.requires_company());
    }

    #[test]
    fn test_customer_kind_from_str() {
        assert_eq!(CustomerKind::from_str("Agent").unwrap(), CustomerKind::Agent);
        assert_eq!(CustomerKind::from_str("owner").unwrap(), CustomerKind::Homeowner);
        assert!(CustomerKind::from_str("tenant").is_err());
    }

    #[test]
    fn test_step_kind_positions() {
        for (index, step) in StepKind::ALL.iter().enumerate() {
            assert_eq!(step.position(), index + 1);
            assert_eq!(StepKind::at(index + 1), Some(*step));
        }
        assert_eq!(StepKind::at(0), None);
        assert_eq!(StepKind::at(5), None);
    }

    #[test]
    fn test_time_slot_and_payment_parse() {
        assert_eq!(TimeSlot::from_str("Morning").unwrap(), TimeSlot::Morning);
        assert_eq!(TimeSlot::from_str("any").unwrap(), TimeSlot::Flexible);
        assert!(TimeSlot::from_str("evening").is_err());
        assert_eq!(PaymentPreference::from_str("invoice").unwrap(), PaymentPreference::Invoice);
        assert_eq!(PaymentPreference::default(), PaymentPreference::Online);
        assert!(PaymentPreference::from_str("cash").is_err());
    }

    #[test]
    fn test_draft_square_feet_parsing() {
        let mut draft = BookingDraft::default();
        assert_eq!(draft.square_feet(), None);

        draft.property.square_feet = "1800".to_string();
        assert_eq!(draft.square_feet(), Some(1800));

        draft.property.square_feet = "big".to_string();
        assert_eq!(draft.square_feet(), None);

        draft.property.square_feet = "0".to_string();
        assert_eq!(draft.square_feet(), None);
    }

    #[test]
    fn test_draft_reset_restores_defaults() {
        let mut draft = BookingDraft {
            plan: Some(PlanId::Estate),
            notes: "Gate code 1234".to_string(),
            payment: PaymentPreference::Invoice,
            ..Default::default()
        };
        draft.contact.name = "Jordan Lee".to_string();
        draft.schedule.time_slot = Some(TimeSlot::Afternoon);

        draft.reset();
        assert_eq!(draft, BookingDraft::default());
        assert_eq!(draft.payment, PaymentPreference::Online);
        assert_eq!(draft.schedule.time_slot, None);
    }

    #[test]
    fn test_contact_message_missing_fields() {
        let mut message = ContactMessage::default();
        assert_eq!(message.missing_fields(), vec!["name", "email", "message"]);

        message.name = "Sam".to_string();
        message.email = "sam@example.com".to_string();
        message.message = "   ".to_string();
        assert_eq!(message.missing_fields(), vec!["message"]);

        message.message = "Do you clear roofs?".to_string();
        assert!(message.missing_fields().is_empty());
    }
}
