// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What the pilgrim wants to save for and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsPlan {
    pub target_cost: Decimal,
    pub initial_balance: Decimal,
    pub monthly_contribution: Decimal,
    pub horizon_months: u32,
}

/// One row of the month-by-month saving schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionEntry {
    pub month: u32,
    pub contribution: Decimal,
    /// Balance without any top-up.
    pub balance: Decimal,
    pub progress_percent: Decimal,
    pub top_up: Decimal,
    pub balance_with_top_up: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub final_balance: Decimal,
    pub months_to_target: u32,
    pub shortfall: Decimal,
    pub top_up_per_month: Decimal,
    pub recommendation: String,
    pub entries: Vec<ProjectionEntry>,
}

/// A sellable umrah package as supplied by the catalogue.
///
/// Only `price` matters to the matcher; the remaining fields are carried
/// through for display and for the contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub category: String,
    pub airline: String,
    pub airport_name: String,
    pub airport_code: String,
    pub price: Decimal,
    pub hotel_makkah: String,
    pub hotel_madinah: String,
    pub package_type: String,
    pub departure_date: NaiveDate,
    #[serde(default)]
    pub seats_available: Option<u32>,
    #[serde(default)]
    pub image: Option<String>,
}

impl PackageRecord {
    pub fn is_sold_out(&self) -> bool {
        self.seats_available == Some(0)
    }

    pub fn seat_text(&self) -> String {
        match self.seats_available {
            Some(0) => "Sold out".to_string(),
            Some(1) => "1 seat left".to_string(),
            Some(n) => format!("{} seats left", n),
            None => "Seats on request".to_string(),
        }
    }
}
