//! Command-line argument wrappers and command handlers
//!
//! CLI argument structures carry the clap derives and convert into the core
//! parameter types, so the core stays free of clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Desk → Display → Renderer
//! ```

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use log::{debug, info};
use upkeep_core::{
    display::OperationStatus,
    models::StepKind,
    params::{ListPlans, PlanKey, QuotePrice, SendContact, StartBooking, UpdateBooking},
    Desk,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Customer kinds accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum AudienceArg {
    /// Homeowner memberships and one-time packages
    Homeowner,
    /// Real estate agent listing preparation
    Agent,
}

impl AudienceArg {
    fn as_str(self) -> &'static str {
        match self {
            AudienceArg::Homeowner => "homeowner",
            AudienceArg::Agent => "agent",
        }
    }
}

/// List plans in the catalog
#[derive(Args)]
pub struct ListPlansArgs {
    /// Only show plans for this kind of customer
    #[arg(long, value_enum)]
    pub audience: Option<AudienceArg>,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            audience: val.audience.map(|audience| audience.as_str().to_string()),
        }
    }
}

/// Show a plan with its pricing tiers and included services
#[derive(Args)]
pub struct ShowPlanArgs {
    #[arg(help = "Plan key, e.g. base, premium, estate, refresh, full-prep, luxury")]
    pub plan: String,
}

impl From<ShowPlanArgs> for PlanKey {
    fn from(val: ShowPlanArgs) -> Self {
        PlanKey { plan: val.plan }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// List plans in the catalog
    #[command(alias = "ls")]
    List(ListPlansArgs),
    /// Show a plan's pricing tiers and services
    #[command(alias = "s")]
    Show(ShowPlanArgs),
}

/// Quote a plan's price for a property size
///
/// Square footage is matched against the plan's tiers; each tier covers
/// properties up to and including its breakpoint. Properties larger than the
/// largest tier are quoted at that tier with a custom-quote note.
#[derive(Args)]
pub struct QuoteArgs {
    #[arg(help = "Plan key, e.g. base")]
    pub plan: String,
    #[arg(help = "Property square footage, e.g. 2400 or 2,400")]
    pub square_feet: String,
}

impl From<QuoteArgs> for QuotePrice {
    fn from(val: QuoteArgs) -> Self {
        QuotePrice {
            plan: val.plan,
            square_feet: val.square_feet,
        }
    }
}

/// Preferred arrival windows
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum TimeSlotArg {
    /// 8am - 12pm
    Morning,
    /// 12pm - 4pm
    Afternoon,
    /// Any time
    Flexible,
}

impl std::fmt::Display for TimeSlotArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeSlotArg::Morning => write!(f, "morning"),
            TimeSlotArg::Afternoon => write!(f, "afternoon"),
            TimeSlotArg::Flexible => write!(f, "flexible"),
        }
    }
}

/// Payment preferences
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PaymentArg {
    /// Pay online
    Online,
    /// Request an invoice
    Invoice,
}

impl std::fmt::Display for PaymentArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentArg::Online => write!(f, "online"),
            PaymentArg::Invoice => write!(f, "invoice"),
        }
    }
}

/// Walk a booking request through every wizard step and submit it
///
/// Each step is printed as it is reached. If a step is missing required
/// fields the command stops there and names them. Nothing is sent anywhere;
/// submitting only prints the acknowledgment.
#[derive(Args)]
pub struct BookArgs {
    /// Book listing prep as a real estate agent
    #[arg(long)]
    pub agent: bool,
    /// Deep link that preselects a plan, e.g. '?plan=premium'
    #[arg(long, conflicts_with = "plan")]
    pub link: Option<String>,
    /// Plan key to select on the first step
    #[arg(long)]
    pub plan: Option<String>,
    /// Property or listing address
    #[arg(long)]
    pub address: Option<String>,
    /// Property square footage
    #[arg(long)]
    pub square_feet: Option<String>,
    /// Full name
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// Company, or brokerage for agents
    #[arg(long)]
    pub company: Option<String>,
    /// Preferred date, e.g. 2026-03-14
    #[arg(long)]
    pub date: Option<String>,
    /// Preferred time of day
    #[arg(long, value_enum)]
    pub time: Option<TimeSlotArg>,
    /// Special instructions, access codes, etc.
    #[arg(long)]
    pub notes: Option<String>,
    /// Payment preference
    #[arg(long, value_enum)]
    pub payment: Option<PaymentArg>,
}

impl From<&BookArgs> for StartBooking {
    fn from(val: &BookArgs) -> Self {
        let customer = if val.agent { "agent" } else { "homeowner" };
        StartBooking {
            customer: Some(customer.to_string()),
            link: val.link.clone(),
        }
    }
}

impl From<&BookArgs> for UpdateBooking {
    fn from(val: &BookArgs) -> Self {
        UpdateBooking {
            address: val.address.clone(),
            square_feet: val.square_feet.clone(),
            name: val.name.clone(),
            email: val.email.clone(),
            phone: val.phone.clone(),
            company: val.company.clone(),
            preferred_date: val.date.clone(),
            time_slot: val.time.map(|slot| slot.to_string()),
            notes: val.notes.clone(),
            payment: val.payment.map(|payment| payment.to_string()),
        }
    }
}

/// Send a message through the contact form
#[derive(Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub message: Option<String>,
    /// Artificial delay before the message is acknowledged, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,
}

impl From<ContactArgs> for SendContact {
    fn from(val: ContactArgs) -> Self {
        SendContact {
            name: val.name.unwrap_or_default(),
            email: val.email.unwrap_or_default(),
            phone: val.phone.unwrap_or_default(),
            subject: val.subject.unwrap_or_default(),
            message: val.message.unwrap_or_default(),
        }
    }
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Runs CLI commands against a desk and renders the results.
pub struct Cli {
    desk: Desk,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(desk: Desk, renderer: TerminalRenderer) -> Self {
        Self { desk, renderer }
    }

    pub fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::List(args) => self.list_plans(&args.into()),
            PlanCommands::Show(args) => self.show_plan(&args.into()),
        }
    }

    pub fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let plans = self.desk.list_plans(params)?;
        let title = match params.audience.as_deref().map(str::trim) {
            Some(audience) if audience.eq_ignore_ascii_case("agent") => "Agent Listing Prep",
            Some(_) => "Homeowner Plans",
            None => "Plans",
        };
        self.renderer.render(&format!("# {title}\n\n{plans}"))
    }

    pub fn list_services(&self) -> Result<()> {
        let services = self.desk.list_services();
        self.renderer
            .render(&format!("# Individual Services\n\n{services}"))
    }

    fn show_plan(&self, params: &PlanKey) -> Result<()> {
        let plan = self.desk.show_plan(params)?;
        self.renderer.render(&plan.to_string())
    }

    pub fn quote(&self, args: QuoteArgs) -> Result<()> {
        let estimate = self.desk.quote(&args.into())?;
        self.renderer.render(&estimate.to_string())
    }

    /// Drives the wizard from start to submission, printing every step.
    pub fn book(mut self, args: BookArgs) -> Result<()> {
        self.desk.start_booking(&StartBooking::from(&args))?;

        let update = UpdateBooking::from(&args);
        if !update.is_empty() {
            let changes = self.desk.update_booking(&update)?.changes;
            debug!("Booking fields provided: {:?}", changes);
        }

        if self.desk.wizard().step() == StepKind::SelectPlan {
            if let Some(plan) = args.plan {
                self.desk
                    .select_plan(&PlanKey { plan })
                    .context("Failed to select plan")?;
            }
        }

        while self.desk.wizard().step() != StepKind::Confirm {
            self.renderer.render(&self.desk.wizard().to_string())?;
            self.renderer.render("\n---\n\n")?;

            let change = self.desk.continue_booking();
            if change.is_blocked() {
                let wizard = change.wizard;
                let missing = wizard.missing_fields();
                let status = OperationStatus::blocked(wizard.label(wizard.step()), &missing);
                self.renderer.render(&status.to_string())?;
                bail!("Booking incomplete: missing {}", missing.join(", "));
            }
        }

        self.renderer.render(&self.desk.wizard().to_string())?;
        self.renderer.render("\n---\n\n")?;

        let acknowledgment = self.desk.submit_booking()?;
        info!("Booking submitted from the command line");
        self.renderer.render(&acknowledgment.to_string())
    }

    pub async fn contact(mut self, args: ContactArgs) -> Result<()> {
        let acknowledgment = self.desk.send_contact(args.into()).await?;
        self.renderer.render(&acknowledgment.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_args() -> BookArgs {
        BookArgs {
            agent: true,
            link: Some("?plan=luxury".to_string()),
            plan: None,
            address: Some("1 Main St".to_string()),
            square_feet: None,
            name: None,
            email: None,
            phone: None,
            company: Some("Lakeside Realty".to_string()),
            date: None,
            time: Some(TimeSlotArg::Afternoon),
            notes: None,
            payment: Some(PaymentArg::Invoice),
        }
    }

    #[test]
    fn test_book_args_into_params() {
        let args = book_args();

        let start = StartBooking::from(&args);
        assert_eq!(start.customer.as_deref(), Some("agent"));
        assert_eq!(start.link.as_deref(), Some("?plan=luxury"));

        let update = UpdateBooking::from(&args);
        assert_eq!(update.company.as_deref(), Some("Lakeside Realty"));
        assert_eq!(update.time_slot.as_deref(), Some("afternoon"));
        assert_eq!(update.payment.as_deref(), Some("invoice"));
        assert!(update.validate().is_ok());
        assert_eq!(update.square_feet, None);
    }

    #[test]
    fn test_list_plans_args_into_params() {
        let params: ListPlans = ListPlansArgs {
            audience: Some(AudienceArg::Agent),
        }
        .into();
        assert_eq!(params.audience.as_deref(), Some("agent"));
        assert_eq!(params.validate().unwrap(), Some(upkeep_core::CustomerKind::Agent));
    }

    #[test]
    fn test_contact_args_default_to_blank() {
        let params: SendContact = ContactArgs {
            name: Some("Ana".to_string()),
            email: None,
            phone: None,
            subject: None,
            message: Some("Hello".to_string()),
            delay_ms: 0,
        }
        .into();
        assert_eq!(params.email, "");
        assert_eq!(params.message, "Hello");
    }
}
