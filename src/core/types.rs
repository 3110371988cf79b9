use serde::Serialize;

/// One bracket of a progressive schedule. `upper` is `None` for the top slab.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TaxSlab {
    pub lower: f64,
    pub upper: Option<f64>,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlabCharge {
    pub lower: f64,
    pub upper: Option<f64>,
    pub rate: f64,
    pub taxable_amount: f64,
    pub tax: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdown {
    pub income: f64,
    pub slabs: Vec<SlabCharge>,
    pub subtotal: f64,
    pub surcharge_multiplier: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsPlan {
    pub target: f64,
    pub periods: u32,
    pub per_period: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub principal: f64,
    pub rate_pct: f64,
    pub years: u32,
    pub contribution: f64,
    pub balances: Vec<f64>,
    pub final_value: f64,
    pub total_contributed: f64,
    pub growth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: u32,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ChartPoint>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    SavingsGoal,
    TaxEstimator,
    InvestmentProjection,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    Savings,
    Tax,
    Investment,
    General,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub intent: Intent,
    pub text: String,
    pub suggested_tool: Option<Tool>,
}
