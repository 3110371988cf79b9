use tracing::trace;

use super::error::{CalcError, Result, ensure_amount, ensure_periods, ensure_rate_pct};
use super::types::Projection;

/// Year-end balances under annual compounding. Each year grows the running
/// balance first and adds `contribution` afterwards.
pub fn project_investment(
    principal: f64,
    annual_rate_pct: f64,
    years: u32,
    contribution: f64,
) -> Result<Vec<f64>> {
    let principal = ensure_amount("principal", principal)?;
    let rate_pct = ensure_rate_pct("rate", annual_rate_pct)?;
    let years = ensure_periods("years", years)?;
    let contribution = ensure_amount("contribution", contribution)?;

    let growth_factor = 1.0 + rate_pct / 100.0;
    let mut balance = principal;
    let mut balances = Vec::with_capacity(years as usize);
    for _ in 0..years {
        balance = balance * growth_factor + contribution;
        balances.push(balance);
    }
    if !balance.is_finite() {
        return Err(CalcError::invalid(
            "rate",
            "projection overflows the representable range",
        ));
    }
    Ok(balances)
}

pub fn project(
    principal: f64,
    annual_rate_pct: f64,
    years: u32,
    contribution: f64,
) -> Result<Projection> {
    let balances = project_investment(principal, annual_rate_pct, years, contribution)?;
    let final_value = balances.last().copied().unwrap_or(principal);
    let total_contributed = contribution * years as f64;
    let growth = final_value - principal - total_contributed;
    trace!(years, final_value, growth, "projection computed");

    Ok(Projection {
        principal,
        rate_pct: annual_rate_pct,
        years,
        contribution,
        balances,
        final_value,
        total_contributed,
        growth,
    })
}
