//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;
use upkeep_core::{display::OperationStatus, params as core, Desk};

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// The wrapper adds the MCP-side derives (Deserialize, JsonSchema) around a
// core parameter type. #[serde(transparent)] passes JSON straight through to
// the wrapped type.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> McpParams<T>
where
    T: JsonSchema,
{
    pub fn into_inner(self) -> T {
        self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type ListPlans = McpParams<core::ListPlans>;
pub type PlanKey = McpParams<core::PlanKey>;
pub type QuotePrice = McpParams<core::QuotePrice>;
pub type StartBooking = McpParams<core::StartBooking>;
pub type UpdateBooking = McpParams<core::UpdateBooking>;
pub type SendContact = McpParams<core::SendContact>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(result: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(
        result.to_string(),
    )]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    desk: Arc<Mutex<Desk>>,
}

impl McpHandlers {
    pub fn new(desk: Arc<Mutex<Desk>>) -> Self {
        Self { desk }
    }

    pub async fn list_plans(&self, params: ListPlans) -> McpResult {
        debug!("list_plans: {:?}", params);

        let desk = self.desk.lock().await;
        let plans = desk
            .list_plans(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to list plans", &e))?;

        let title = match params.as_ref().audience.as_deref().map(str::trim) {
            Some(audience) if audience.eq_ignore_ascii_case("agent") => "Agent Listing Prep",
            Some(_) => "Homeowner Plans",
            None => "Plans",
        };
        text(format!("# {title}\n\n{plans}"))
    }

    pub async fn list_services(&self) -> McpResult {
        debug!("list_services");

        let services = self.desk.lock().await.list_services();
        text(format!("# Individual Services\n\n{services}"))
    }

    pub async fn show_plan(&self, params: PlanKey) -> McpResult {
        debug!("show_plan: {:?}", params);

        let plan = self
            .desk
            .lock()
            .await
            .show_plan(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to show plan", &e))?;
        text(plan)
    }

    pub async fn quote_price(&self, params: QuotePrice) -> McpResult {
        debug!("quote_price: {:?}", params);

        let estimate = self
            .desk
            .lock()
            .await
            .quote(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to quote price", &e))?;
        text(estimate)
    }

    pub async fn start_booking(&self, params: StartBooking) -> McpResult {
        debug!("start_booking: {:?}", params);

        let mut desk = self.desk.lock().await;
        let wizard = desk
            .start_booking(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to start booking", &e))?;

        let status = OperationStatus::success(format!(
            "Started a new {} booking on step {} of {}. Any previous booking was discarded.",
            wizard.kind(),
            wizard.step_number(),
            wizard.step_count()
        ));
        text(format!("{status}\n{wizard}"))
    }

    pub async fn select_plan(&self, params: PlanKey) -> McpResult {
        debug!("select_plan: {:?}", params);

        let mut desk = self.desk.lock().await;
        let wizard = desk
            .select_plan(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to select plan", &e))?;

        let name = wizard
            .selected_plan()
            .map_or_else(|| params.as_ref().plan.clone(), |plan| plan.name.clone());
        let status = OperationStatus::success(format!(
            "Selected {name}. Use 'continue_booking' to move on."
        ));
        text(format!("{status}\n{wizard}"))
    }

    pub async fn update_booking(&self, params: UpdateBooking) -> McpResult {
        debug!("update_booking: {:?}", params);

        let mut desk = self.desk.lock().await;
        let update = desk
            .update_booking(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to update booking", &e))?;
        text(update)
    }

    pub async fn continue_booking(&self) -> McpResult {
        debug!("continue_booking");

        let mut desk = self.desk.lock().await;
        let change = desk.continue_booking();
        text(change)
    }

    pub async fn back_booking(&self) -> McpResult {
        debug!("back_booking");

        let mut desk = self.desk.lock().await;
        let change = desk.back_booking();
        text(change)
    }

    pub async fn show_booking(&self) -> McpResult {
        debug!("show_booking");

        let desk = self.desk.lock().await;
        text(desk.wizard())
    }

    pub async fn submit_booking(&self) -> McpResult {
        debug!("submit_booking");

        let acknowledgment = self
            .desk
            .lock()
            .await
            .submit_booking()
            .map_err(|e| to_mcp_error("Failed to submit booking", &e))?;
        text(acknowledgment)
    }

    pub async fn send_contact_message(&self, params: SendContact) -> McpResult {
        debug!("send_contact_message: {:?}", params);

        // The lock is released before the acknowledgment delay
        let pending = self
            .desk
            .lock()
            .await
            .prepare_contact(params.into_inner())
            .map_err(|e| to_mcp_error("Failed to send message", &e))?;
        text(pending.deliver().await)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use upkeep_core::DeskBuilder;

    use super::*;

    async fn create_test_desk(contact_delay: Duration) -> Arc<Mutex<Desk>> {
        let desk = DeskBuilder::new()
            .builtin_catalog()
            .with_contact_delay(contact_delay)
            .build()
            .await
            .expect("Failed to create desk");
        Arc::new(Mutex::new(desk))
    }

    async fn create_test_handlers() -> McpHandlers {
        McpHandlers::new(create_test_desk(Duration::ZERO).await)
    }

    fn params<T: JsonSchema + serde::de::DeserializeOwned>(json: serde_json::Value) -> McpParams<T> {
        serde_json::from_value(json).expect("Failed to parse params")
    }

    fn result_text(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|content| content.as_text().map(|text| text.text.clone()))
            .collect()
    }

    #[tokio::test]
    async fn test_booking_through_tools() {
        let handlers = create_test_handlers().await;

        let started = handlers
            .start_booking(params(serde_json::json!({ "link": "?plan=base" })))
            .await
            .unwrap();
        assert!(result_text(&started).contains("step 2 of 4"));

        let updated = handlers
            .update_booking(params(serde_json::json!({
                "address": "1 Main St",
                "square_feet": "1201",
                "name": "Jo",
                "email": "jo@example.com",
                "phone": "555-0100"
            })))
            .await
            .unwrap();
        assert!(result_text(&updated).contains("**$280/month**"));

        handlers.continue_booking().await.unwrap();
        handlers.continue_booking().await.unwrap();

        let submitted = handlers.submit_booking().await.unwrap();
        assert!(result_text(&submitted).contains("Booking Request Submitted!"));

        let shown = handlers.show_booking().await.unwrap();
        assert!(result_text(&shown).contains("Step 1 of 4"));
    }

    #[tokio::test]
    async fn test_catalog_tools_include_packages_and_services() {
        let handlers = create_test_handlers().await;

        let plans = handlers
            .list_plans(params(serde_json::json!({ "audience": "homeowner" })))
            .await
            .unwrap();
        let plans = result_text(&plans);
        assert!(plans.starts_with("# Homeowner Plans"));
        assert!(plans.contains("## Homeowner Packages: One-Time Services"));
        assert!(plans.contains("Complete Restoration"));

        let services = handlers.list_services().await.unwrap();
        assert!(result_text(&services).contains("| Window Cleaning | from $75 |"));
    }

    #[tokio::test]
    async fn test_blocked_continue_is_not_a_protocol_error() {
        let handlers = create_test_handlers().await;
        let result = handlers.continue_booking().await.unwrap();
        assert!(result_text(&result).contains("Missing: plan"));
    }

    #[tokio::test]
    async fn test_unknown_plan_is_invalid_params() {
        let handlers = create_test_handlers().await;
        let err = handlers
            .quote_price(params(serde_json::json!({ "plan": "gold", "square_feet": "100" })))
            .await
            .unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_contact_delay_does_not_block_other_tools() {
        let desk = create_test_desk(Duration::from_millis(500)).await;
        let sender = McpHandlers::new(desk.clone());
        let other = McpHandlers::new(desk);

        let sending = tokio::spawn(async move {
            sender
                .send_contact_message(params(serde_json::json!({
                    "name": "Jordan",
                    "email": "jordan@example.com",
                    "message": "Do you service townhomes?"
                })))
                .await
        });
        tokio::time::sleep(Duration::from_millis(50)).await;

        let shown = tokio::time::timeout(Duration::from_millis(200), other.show_booking())
            .await
            .expect("show_booking waited for the contact delay")
            .unwrap();
        assert!(result_text(&shown).contains("Step 1 of 4"));

        let sent = sending.await.unwrap().unwrap();
        assert!(result_text(&sent).contains("Message Sent!"));
    }

    #[tokio::test]
    async fn test_contact_missing_fields_is_invalid_params() {
        let handlers = create_test_handlers().await;
        let err = handlers
            .send_contact_message(params(serde_json::json!({
                "name": "Jordan",
                "email": "",
                "message": ""
            })))
            .await
            .unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }
}
