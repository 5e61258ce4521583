//! MCP server implementation for Upkeep
//!
//! Exposes plan pricing and the booking wizard over the Model Context
//! Protocol. The server holds one desk, so one booking session is shared by
//! every tool call on the connection.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};
use upkeep_core::Desk;

pub mod errors;
pub mod handlers;

// Re-export parameter types and result type from handlers for external use
pub use handlers::{
    ListPlans, McpResult, PlanKey, QuotePrice, SendContact, StartBooking, UpdateBooking,
};

/// MCP server for Upkeep
#[derive(Clone)]
pub struct UpkeepMcpServer {
    desk: Arc<Mutex<Desk>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl UpkeepMcpServer {
    /// Create a new Upkeep MCP server
    pub fn new(desk: Desk) -> Self {
        Self {
            desk: Arc::new(Mutex::new(desk)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.desk.clone())
    }

    // Tool methods that delegate to handlers::McpHandlers methods
    #[tool(
        name = "list_plans",
        description = "List service plans with their starting prices, grouped by category. Use audience='homeowner' for monthly memberships and one-time packages or audience='agent' for per-visit listing preparation; omit it to list every plan."
    )]
    async fn list_plans(&self, params: Parameters<ListPlans>) -> McpResult {
        self.handlers().list_plans(params.0).await
    }

    #[tool(
        name = "list_services",
        description = "List individual services (window cleaning, pressure washing and so on) with their starting prices. These are a price list only; bookings are made against a plan."
    )]
    async fn list_services(&self) -> McpResult {
        self.handlers().list_services().await
    }

    #[tool(
        name = "show_plan",
        description = "Show one plan in full: description, every pricing tier with its square-footage breakpoint, and the included services. Plan keys: base, premium, estate, seasonal, deep-clean, restoration, refresh, full-prep, luxury."
    )]
    async fn show_plan(&self, params: Parameters<PlanKey>) -> McpResult {
        self.handlers().show_plan(params.0).await
    }

    #[tool(
        name = "quote_price",
        description = "Quote the price of a plan for a property size. Breakpoints are inclusive: a property exactly at a breakpoint gets that tier. Sizes above the largest breakpoint get the largest tier's price plus a custom-quote advisory. Square footage may contain commas, e.g. '2,400'."
    )]
    async fn quote_price(&self, params: Parameters<QuotePrice>) -> McpResult {
        self.handlers().quote_price(params.0).await
    }

    #[tool(
        name = "start_booking",
        description = "Start a new booking request, discarding any booking in progress. customer is 'homeowner' (default) or 'agent'. An optional deep link such as '?plan=premium' preselects that plan and starts on step 2; unknown plans in the link are ignored."
    )]
    async fn start_booking(&self, params: Parameters<StartBooking>) -> McpResult {
        self.handlers().start_booking(params.0).await
    }

    #[tool(
        name = "select_plan",
        description = "Select a plan on step 1 of the current booking. The plan must belong to the booking's customer kind. Selecting does not advance the step; call continue_booking afterwards."
    )]
    async fn select_plan(&self, params: Parameters<PlanKey>) -> McpResult {
        self.handlers().select_plan(params.0).await
    }

    #[tool(
        name = "update_booking",
        description = "Fill in booking fields on any step. Only provided fields change; an empty string clears a field. time_slot is 'morning', 'afternoon' or 'flexible'; payment is 'online' or 'invoice'. Returns the current step with the live price estimate."
    )]
    async fn update_booking(&self, params: Parameters<UpdateBooking>) -> McpResult {
        self.handlers().update_booking(params.0).await
    }

    #[tool(
        name = "continue_booking",
        description = "Advance to the next booking step. Refused, with the missing fields listed, until the current step's required fields are filled in."
    )]
    async fn continue_booking(&self) -> McpResult {
        self.handlers().continue_booking().await
    }

    #[tool(
        name = "back_booking",
        description = "Return to the previous booking step. Always allowed except on step 1; entered data is kept."
    )]
    async fn back_booking(&self) -> McpResult {
        self.handlers().back_booking().await
    }

    #[tool(
        name = "show_booking",
        description = "Show the current booking step, the data entered so far, the price estimate and what is still required."
    )]
    async fn show_booking(&self) -> McpResult {
        self.handlers().show_booking().await
    }

    #[tool(
        name = "submit_booking",
        description = "Submit the booking from the final Confirm step. Returns the acknowledgment with a request summary and resets the wizard to an empty step 1."
    )]
    async fn submit_booking(&self) -> McpResult {
        self.handlers().submit_booking().await
    }

    #[tool(
        name = "send_contact_message",
        description = "Send a message through the contact form. name, email and message are required; phone and subject are optional. Acknowledged after a short delay."
    )]
    async fn send_contact_message(&self, params: Parameters<SendContact>) -> McpResult {
        self.handlers().send_contact_message(params.0).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for UpkeepMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(r#"Upkeep prices home maintenance plans and takes booking requests.

## Core Concepts
- **Plans**: Monthly memberships for homeowners (base, premium, estate), one-time homeowner packages (seasonal, deep-clean, restoration) and per-visit listing preparation for real estate agents (refresh, full-prep, luxury)
- **Services**: Individual services with starting prices, listed by `list_services`. They are not booked directly
- **Tiers**: Each plan is priced by square footage. A tier covers every size up to and including its breakpoint
- **Booking**: A four-step wizard (Select Plan, Property Details, Contact Info, Confirm). Each step's required fields must be filled before continuing

## Workflow Examples

### Quoting a Price
1. Use `list_plans` to see the plans for an audience
2. Use `quote_price` with a plan key and square footage

### Booking a Service
1. Start with `start_booking`; pass link='?plan=premium' to skip plan selection
2. Pick a plan with `select_plan` if none was preselected, then `continue_booking`
3. Fill fields with `update_booking` and `continue_booking` through each step
4. Review with `show_booking`, then `submit_booking` on the Confirm step

## Notes
- `back_booking` never loses entered data
- Properties larger than a plan's largest tier are quoted at that tier and flagged for a custom quote
- Submitting resets the booking; nothing is sent to a remote service"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: UpkeepMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Upkeep MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
