//! Validated requests shared by the CLI and the HTTP API.
//!
//! `validate()` applies only the caps the chat prompts enforced (600 months,
//! 100 years, non-empty messages). Amount and rate checks belong to the
//! calculators; `run()` surfaces their `CalcError` text unchanged.

use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::{
    ChartSeries, ChatReply, Projection, SavingsPlan, TaxBreakdown, plan_savings, project,
    projection_message, reply, savings_message, tax_breakdown, tax_message,
};

pub const MAX_SAVINGS_MONTHS: u32 = 600;
pub const MAX_PROJECTION_YEARS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxRequest {
    pub income: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsRequest {
    pub target: f64,
    pub months: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionRequest {
    pub principal: f64,
    pub rate: f64,
    pub years: u32,
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxOutcome {
    pub breakdown: TaxBreakdown,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsOutcome {
    pub plan: SavingsPlan,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionOutcome {
    pub projection: Projection,
    pub chart: ChartSeries,
    pub message: String,
}

impl Default for TaxRequest {
    fn default() -> Self {
        Self { income: 500_000.0 }
    }
}

impl Default for SavingsRequest {
    fn default() -> Self {
        Self {
            target: 20_000.0,
            months: 6,
        }
    }
}

impl Default for ProjectionRequest {
    fn default() -> Self {
        Self {
            principal: 100_000.0,
            rate: 8.0,
            years: 10,
            contribution: 0.0,
        }
    }
}

impl TaxRequest {
    pub fn run(&self) -> Result<TaxOutcome, String> {
        let breakdown = tax_breakdown(self.income).map_err(|e| e.to_string())?;
        let message = tax_message(&breakdown);
        Ok(TaxOutcome { breakdown, message })
    }
}

impl SavingsRequest {
    pub fn validate(self) -> Result<Self, String> {
        if !(1..=MAX_SAVINGS_MONTHS).contains(&self.months) {
            return Err(format!("months must be between 1 and {MAX_SAVINGS_MONTHS}"));
        }
        Ok(self)
    }

    pub fn run(&self) -> Result<SavingsOutcome, String> {
        let plan = plan_savings(self.target, self.months).map_err(|e| e.to_string())?;
        let message = savings_message(&plan);
        Ok(SavingsOutcome { plan, message })
    }
}

impl ProjectionRequest {
    pub fn validate(self) -> Result<Self, String> {
        if !(1..=MAX_PROJECTION_YEARS).contains(&self.years) {
            return Err(format!("years must be between 1 and {MAX_PROJECTION_YEARS}"));
        }
        Ok(self)
    }

    pub fn run(&self) -> Result<ProjectionOutcome, String> {
        let projection = project(self.principal, self.rate, self.years, self.contribution)
            .map_err(|e| e.to_string())?;
        let chart = ChartSeries::from_projection(&projection);
        let message = projection_message(&projection);
        Ok(ProjectionOutcome {
            projection,
            chart,
            message,
        })
    }
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, seed: Option<u64>) -> Self {
        Self {
            message: message.into(),
            seed: seed.unwrap_or_else(clock_seed),
        }
    }

    pub fn validate(self) -> Result<Self, String> {
        let message = self.message.trim();
        if message.is_empty() {
            return Err("message must not be empty".to_string());
        }
        Ok(Self {
            message: message.to_string(),
            seed: self.seed,
        })
    }

    pub fn run(&self) -> ChatReply {
        reply(&self.message, self.seed)
    }
}

/// Seed for callers that did not ask for a reproducible tip.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
