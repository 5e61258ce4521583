//! Tests for the desk module.

use std::time::Duration;

use super::*;
use crate::{
    error::BookingError,
    models::{PlanId, StepKind},
    params::{ListPlans, PlanKey, QuotePrice, SendContact, StartBooking, UpdateBooking},
    pricing::Unavailable,
};
use tempfile::TempDir;

/// Helper function to create a test desk on the built-in catalog
async fn create_test_desk() -> Desk {
    DeskBuilder::new()
        .builtin_catalog()
        .with_contact_delay(Duration::from_millis(1))
        .build()
        .await
        .expect("Failed to create desk")
}

fn quote_params(plan: &str, square_feet: &str) -> QuotePrice {
    QuotePrice {
        plan: plan.to_string(),
        square_feet: square_feet.to_string(),
    }
}

#[tokio::test]
async fn test_list_plans_filters_by_audience() {
    let desk = create_test_desk().await;

    let all = desk.list_plans(&ListPlans::default()).expect("Failed to list plans");
    assert_eq!(all.len(), 9);

    let homeowner = desk
        .list_plans(&ListPlans {
            audience: Some("homeowner".to_string()),
        })
        .expect("Failed to list plans");
    let ids: Vec<PlanId> = homeowner.iter().map(|plan| plan.id).collect();
    assert_eq!(
        ids,
        vec![
            PlanId::Base,
            PlanId::Premium,
            PlanId::Estate,
            PlanId::Seasonal,
            PlanId::DeepClean,
            PlanId::Restoration,
        ]
    );

    let err = desk
        .list_plans(&ListPlans {
            audience: Some("tenant".to_string()),
        })
        .unwrap_err();
    assert!(err.is_user_error());
}

#[tokio::test]
async fn test_list_services() {
    let desk = create_test_desk().await;

    let services = desk.list_services();
    assert_eq!(services.len(), 6);
    assert_eq!(services.0[0].name, "Window Cleaning");
    assert!(services.to_string().contains("| Snow Removal | from $75 |"));
}

#[tokio::test]
async fn test_quote_one_time_package() {
    let desk = create_test_desk().await;

    let estimate = desk.quote(&quote_params("deep-clean", "2400")).unwrap();
    assert_eq!(estimate.pricing.amount(), Some(649));
    assert!(estimate.to_string().contains("**$649**"));
}

#[tokio::test]
async fn test_show_plan() {
    let desk = create_test_desk().await;

    let plan = desk
        .show_plan(&PlanKey {
            plan: "Estate".to_string(),
        })
        .expect("Failed to show plan");
    assert_eq!(plan.name, "Estate Care");
    assert_eq!(plan.tiers.len(), 4);

    let err = desk
        .show_plan(&PlanKey {
            plan: "platinum".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, BookingError::UnknownPlan { ref key } if key == "platinum"));
}

#[tokio::test]
async fn test_quote_boundaries() {
    let desk = create_test_desk().await;

    let at = desk.quote(&quote_params("base", "1200")).unwrap();
    assert_eq!(at.pricing.amount(), Some(180));

    let above = desk.quote(&quote_params("base", "1,201")).unwrap();
    assert_eq!(above.pricing.amount(), Some(280));

    let oversized = desk.quote(&quote_params("base", "6000")).unwrap();
    assert_eq!(oversized.pricing.amount(), Some(480));
    assert!(oversized.pricing.quote().unwrap().advisory.is_some());
    assert_eq!(oversized.plan_name.as_deref(), Some("Essential Care"));
    assert_eq!(oversized.tier_count, 4);
}

#[tokio::test]
async fn test_quote_without_square_footage_is_unavailable() {
    let desk = create_test_desk().await;

    for input in ["", "0", "big"] {
        let estimate = desk.quote(&quote_params("premium", input)).unwrap();
        assert_eq!(
            estimate.pricing,
            crate::pricing::Pricing::Unavailable(Unavailable::NoSquareFootage)
        );
    }

    assert!(desk.quote(&quote_params("gold", "1000")).is_err());
}

#[tokio::test]
async fn test_booking_session_round_trip() {
    let mut desk = create_test_desk().await;

    let wizard = desk
        .start_booking(&StartBooking {
            customer: None,
            link: Some("/book?plan=premium".to_string()),
        })
        .expect("Failed to start booking");
    assert_eq!(wizard.step(), StepKind::PropertyDetails);

    let update = desk
        .update_booking(&UpdateBooking {
            address: Some("12 Birch Ln".to_string()),
            square_feet: Some("2000".to_string()),
            ..Default::default()
        })
        .expect("Failed to update booking");
    assert_eq!(update.changes, vec!["address", "square_feet"]);

    assert!(!desk.continue_booking().is_blocked());

    let blocked = desk.continue_booking();
    assert!(blocked.is_blocked());
    assert_eq!(blocked.wizard.step(), StepKind::ContactInfo);

    desk.update_booking(&UpdateBooking {
        name: Some("Pat".to_string()),
        email: Some("pat@example.com".to_string()),
        phone: Some("555-0142".to_string()),
        ..Default::default()
    })
    .unwrap();
    desk.continue_booking();
    assert_eq!(desk.wizard().step(), StepKind::Confirm);

    let ack = desk.submit_booking().expect("Failed to submit booking");
    assert_eq!(ack.booking.pricing.amount(), Some(379));
    assert_eq!(desk.wizard().step(), StepKind::SelectPlan);
    assert_eq!(desk.wizard().draft().plan, None);
}

#[tokio::test]
async fn test_start_booking_replaces_session() {
    let mut desk = create_test_desk().await;
    desk.select_plan(&PlanKey {
        plan: "base".to_string(),
    })
    .unwrap();
    assert_eq!(desk.wizard().draft().plan, Some(PlanId::Base));

    let wizard = desk
        .start_booking(&StartBooking {
            customer: Some("agent".to_string()),
            link: None,
        })
        .unwrap();
    assert_eq!(wizard.kind(), crate::models::CustomerKind::Agent);
    assert_eq!(wizard.draft().plan, None);

    let err = desk
        .select_plan(&PlanKey {
            plan: "base".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, BookingError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_back_booking_keeps_data() {
    let mut desk = create_test_desk().await;
    desk.start_booking(&StartBooking {
        customer: None,
        link: Some("estate".to_string()),
    })
    .unwrap();
    desk.update_booking(&UpdateBooking {
        notes: Some("Gate code 4411".to_string()),
        ..Default::default()
    })
    .unwrap();

    let change = desk.back_booking();
    assert!(!change.is_blocked());
    assert_eq!(change.wizard.step(), StepKind::SelectPlan);
    assert_eq!(desk.wizard().draft().notes, "Gate code 4411");
    assert_eq!(desk.wizard().draft().plan, Some(PlanId::Estate));
}

#[tokio::test]
async fn test_send_contact() {
    let mut desk = create_test_desk().await;

    let ack = desk
        .send_contact(SendContact {
            name: "Morgan".to_string(),
            email: "morgan@example.com".to_string(),
            phone: String::new(),
            subject: String::new(),
            message: "Can you winterize a cabin?".to_string(),
        })
        .await
        .expect("Failed to send contact message");
    assert_eq!(ack.notice.title, "Message Sent!");
    assert!(desk.contact_form().message().message.is_empty());

    let err = desk
        .send_contact(SendContact {
            name: "Morgan".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("email, message"));
}

#[tokio::test]
async fn test_builder_loads_catalog_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"{"plans": [{"id": "base", "name": "Starter", "tiers": [
            {"max_square_feet": 1000, "price": 100},
            {"max_square_feet": 2000, "price": 150}
        ]}]}"#,
    )
    .expect("Failed to write catalog");

    let desk = DeskBuilder::new()
        .with_catalog_path(Some(&path))
        .build()
        .await
        .expect("Failed to create desk");
    assert_eq!(desk.catalog().plans().len(), 1);
    assert_eq!(
        desk.quote(&quote_params("base", "1500")).unwrap().pricing.amount(),
        Some(150)
    );
    assert!(desk.quote(&quote_params("premium", "1500")).is_err());
}

#[tokio::test]
async fn test_builder_reports_missing_catalog_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = DeskBuilder::new()
        .with_catalog_path(Some(temp_dir.path().join("missing.json")))
        .build()
        .await;
    assert!(matches!(result, Err(BookingError::FileSystem { .. })));
}
