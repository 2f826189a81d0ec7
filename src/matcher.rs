// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::BudgetError;
use crate::models::PackageRecord;
use rust_decimal::Decimal;

pub const DEFAULT_TOLERANCE_PERCENT: Decimal = Decimal::TEN;

/// Widest tolerance accepted as a stored setting.
pub const MAX_TOLERANCE_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Price range considered affordable for a budget.
///
/// The band reaches twice as far below the budget as above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub budget: Decimal,
    pub lower: Decimal,
    pub upper: Decimal,
}

impl Band {
    pub fn new(budget: Decimal, tolerance_percent: Decimal) -> Result<Self, BudgetError> {
        if budget <= Decimal::ZERO {
            return Err(BudgetError::NonPositiveBudget(budget));
        }
        let out_of_range = || BudgetError::BandOutOfRange {
            budget,
            tolerance: tolerance_percent,
        };
        let fraction = tolerance_percent / Decimal::ONE_HUNDRED;
        let lower = Decimal::TWO
            .checked_mul(fraction)
            .and_then(|below| Decimal::ONE.checked_sub(below))
            .and_then(|factor| budget.checked_mul(factor))
            .ok_or_else(out_of_range)?;
        let upper = Decimal::ONE
            .checked_add(fraction)
            .and_then(|factor| budget.checked_mul(factor))
            .ok_or_else(out_of_range)?;
        Ok(Self {
            budget,
            lower,
            upper,
        })
    }

    pub fn contains(&self, price: Decimal) -> bool {
        self.lower <= price && price <= self.upper
    }

    pub fn distance(&self, price: Decimal) -> Decimal {
        price.saturating_sub(self.budget).abs()
    }
}

/// Packages priced within the band around `budget`, closest first.
/// Packages at the same distance keep their catalogue order.
pub fn match_packages(
    budget: Decimal,
    catalogue: &[PackageRecord],
    tolerance_percent: Decimal,
) -> Result<Vec<&PackageRecord>, BudgetError> {
    let band = Band::new(budget, tolerance_percent)?;
    let mut matched: Vec<&PackageRecord> =
        catalogue.iter().filter(|p| band.contains(p.price)).collect();
    matched.sort_by_key(|p| band.distance(p.price));
    Ok(matched)
}
