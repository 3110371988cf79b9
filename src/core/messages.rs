//! Chat-panel wording for calculator results.

use super::types::{Projection, SavingsPlan, TaxBreakdown};

const RUPEE: char = '₹';

/// Whole-rupee amount with comma thousands separators, e.g. `₹1,234,568`.
pub fn format_rupees(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let negative = value.is_sign_negative() && digits != "0";

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if negative {
        grouped.push('-');
    }
    grouped.push(RUPEE);
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn savings_message(plan: &SavingsPlan) -> String {
    format!(
        "Save {}/month to reach {} in {} months.",
        format_rupees(plan.per_period),
        format_rupees(plan.target),
        plan.periods
    )
}

pub fn tax_message(breakdown: &TaxBreakdown) -> String {
    format!(
        "Estimated tax on {} : {} (example slabs).",
        format_rupees(breakdown.income),
        format_rupees(breakdown.total)
    )
}

pub fn projection_message(projection: &Projection) -> String {
    format!(
        "Projection: {} after {} years.",
        format_rupees(projection.final_value),
        projection.years
    )
}
