use tracing::trace;

use super::error::{Result, ensure_amount};
use super::types::{SlabCharge, TaxBreakdown, TaxSlab};

/// Illustrative progressive schedule. Not a tax-compliant table.
pub const TAX_SLABS: [TaxSlab; 4] = [
    TaxSlab {
        lower: 0.0,
        upper: Some(250_000.0),
        rate: 0.0,
    },
    TaxSlab {
        lower: 250_000.0,
        upper: Some(500_000.0),
        rate: 0.05,
    },
    TaxSlab {
        lower: 500_000.0,
        upper: Some(1_000_000.0),
        rate: 0.20,
    },
    TaxSlab {
        lower: 1_000_000.0,
        upper: None,
        rate: 0.30,
    },
];

/// Flat cess applied on top of the slab subtotal.
pub const SURCHARGE_MULTIPLIER: f64 = 1.04;

pub fn estimate_tax(annual_income: f64) -> Result<f64> {
    Ok(tax_breakdown(annual_income)?.total)
}

pub fn tax_breakdown(annual_income: f64) -> Result<TaxBreakdown> {
    let income = ensure_amount("income", annual_income)?;

    let slabs: Vec<SlabCharge> = TAX_SLABS.iter().map(|slab| charge_for(slab, income)).collect();
    let subtotal: f64 = slabs.iter().map(|c| c.tax).sum();
    let total = subtotal * SURCHARGE_MULTIPLIER;
    trace!(income, subtotal, total, "tax estimated");

    Ok(TaxBreakdown {
        income,
        slabs,
        subtotal,
        surcharge_multiplier: SURCHARGE_MULTIPLIER,
        total,
    })
}

fn charge_for(slab: &TaxSlab, income: f64) -> SlabCharge {
    let capped = slab.upper.map_or(income, |upper| income.min(upper));
    let taxable_amount = (capped - slab.lower).max(0.0);
    SlabCharge {
        lower: slab.lower,
        upper: slab.upper,
        rate: slab.rate,
        taxable_amount,
        tax: taxable_amount * slab.rate,
    }
}
