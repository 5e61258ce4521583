use std::time::Duration;

use upkeep_core::{Desk, DeskBuilder};

/// Helper function to create a test desk on the built-in catalog
pub async fn create_test_desk() -> Desk {
    DeskBuilder::new()
        .builtin_catalog()
        .with_contact_delay(Duration::ZERO)
        .build()
        .await
        .expect("Failed to create desk")
}
