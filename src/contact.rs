// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! WhatsApp deep links carrying package or savings plan details as plain text.

use crate::errors::ContactError;
use crate::models::{PackageRecord, SavingsPlan, SimulationResult};
use crate::utils::fmt_money;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Url;
use rust_decimal::Decimal;

static PHONE_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{8,15}$").unwrap());

/// Reduce a phone number to the digits-only international form wa.me expects.
/// Local Indonesian numbers (`08...`) are rewritten to `628...`.
pub fn normalize_number(raw: &str) -> Result<String, ContactError> {
    let digits: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '+' | '(' | ')' | '.'))
        .collect();
    let digits = match digits.strip_prefix('0') {
        Some(rest) => format!("62{}", rest),
        None => digits,
    };
    if PHONE_DIGITS.is_match(&digits) {
        Ok(digits)
    } else {
        Err(ContactError::InvalidNumber(raw.to_string()))
    }
}

pub fn whatsapp_link(number: &str, text: &str) -> Result<Url, ContactError> {
    let digits = normalize_number(number)?;
    Url::parse_with_params(&format!("https://wa.me/{}", digits), &[("text", text)])
        .map_err(|_| ContactError::InvalidNumber(number.to_string()))
}

pub fn package_message(pkg: &PackageRecord) -> String {
    [
        "Assalamualaikum, I would like to book this umrah package:".to_string(),
        format!("Package: {}", pkg.title),
        format!("Category: {}", pkg.category),
        format!("Departure: {}", pkg.departure_date.format("%d %B %Y")),
        format!("Price: {}", fmt_money(&pkg.price)),
        format!("Airline: {}", pkg.airline),
        format!("Hotel Makkah: {}", pkg.hotel_makkah),
        format!("Hotel Madinah: {}", pkg.hotel_madinah),
        format!("Seats: {}", pkg.seat_text()),
    ]
    .join("\n")
}

pub fn plan_message(plan: &SavingsPlan, result: &SimulationResult) -> String {
    let mut lines = vec![
        "Assalamualaikum, I would like to consult about my umrah savings plan:".to_string(),
        format!("Target cost: {}", fmt_money(&plan.target_cost)),
        format!("Initial savings: {}", fmt_money(&plan.initial_balance)),
        format!("Monthly saving: {}", fmt_money(&plan.monthly_contribution)),
        format!("Period: {} months", plan.horizon_months),
        format!("Projected savings: {}", fmt_money(&result.final_balance)),
    ];
    if result.top_up_per_month > Decimal::ZERO {
        lines.push(format!(
            "Top-up needed: {} per month",
            fmt_money(&result.top_up_per_month)
        ));
    }
    lines.join("\n")
}
