// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::contact::normalize_number;
use crate::db::load_packages;
use crate::utils::{get_whatsapp_number, pretty_table};
use anyhow::Result;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::Connection;
use rust_decimal::Decimal;

static AIRPORT_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{3}$").unwrap());

/// Catalogue and settings problems as (issue, detail) pairs.
pub fn find_issues(conn: &Connection, today: NaiveDate) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();

    for p in load_packages(conn)? {
        let label = format!("#{} {}", p.id.unwrap_or_default(), p.title);
        if p.price <= Decimal::ZERO {
            rows.push(vec!["non_positive_price".into(), label.clone()]);
        }
        if p.is_sold_out() {
            rows.push(vec!["sold_out".into(), label.clone()]);
        }
        if !AIRPORT_CODE.is_match(&p.airport_code) {
            rows.push(vec![
                "bad_airport_code".into(),
                format!("{} ({})", label, p.airport_code),
            ]);
        }
        if p.departure_date < today {
            rows.push(vec![
                "departed".into(),
                format!("{} on {}", label, p.departure_date),
            ]);
        }
    }

    match get_whatsapp_number(conn)? {
        None => rows.push(vec!["whatsapp_not_set".into(), String::new()]),
        Some(n) if normalize_number(&n).is_err() => {
            rows.push(vec!["bad_whatsapp_number".into(), n]);
        }
        Some(_) => {}
    }
    Ok(rows)
}

pub fn handle(conn: &Connection) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let rows = find_issues(conn, today)?;
    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
