mod assistant;
mod chart;
mod error;
mod messages;
mod projection;
mod savings;
mod tax;
mod types;

pub use assistant::{
    BUDGET_TIP, GREETING, QUICK_FACTS, Suggestion, SuggestionAction, TIPS, reply, tip_for_seed,
};
pub use error::{CalcError, Result};
pub use messages::{format_rupees, projection_message, savings_message, tax_message};
pub use projection::{project, project_investment};
pub use savings::{plan_savings, savings_plan};
pub use tax::{SURCHARGE_MULTIPLIER, TAX_SLABS, estimate_tax, tax_breakdown};
pub use types::{
    ChartPoint, ChartSeries, ChatReply, Intent, Projection, SavingsPlan, SlabCharge, TaxBreakdown,
    TaxSlab, Tool,
};
