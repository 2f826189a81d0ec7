// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error types raised by the savings simulator, the package matcher and the
//! contact link builder. All of them are recoverable: the caller re-prompts
//! for valid input.

use rust_decimal::Decimal;
use thiserror::Error;

/// A savings plan that cannot be projected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("Target cost must be greater than zero (got {0})")]
    NonPositiveTarget(Decimal),

    #[error("Saving horizon must be at least one month")]
    EmptyHorizon,

    #[error("{field} cannot be negative (got {value})")]
    NegativeAmount { field: &'static str, value: Decimal },

    #[error("Saving horizon cannot exceed {max} months (got {got})")]
    HorizonTooLong { max: u32, got: u32 },

    #[error("Plan amounts are too large to project")]
    AmountTooLarge,
}

/// A budget the matcher cannot band around.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    #[error("Budget must be greater than zero (got {0})")]
    NonPositiveBudget(Decimal),

    #[error("Price band around {budget} at {tolerance}% is out of range")]
    BandOutOfRange { budget: Decimal, tolerance: Decimal },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Invalid WhatsApp number '{0}', expected 8 to 15 digits")]
    InvalidNumber(String),
}
