// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::packages::package_rows;
use crate::commands::simulate::plan_from_args;
use crate::db::load_packages;
use crate::matcher::{Band, match_packages};
use crate::models::PackageRecord;
use crate::savings::project;
use crate::utils::{fmt_money, get_tolerance, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result};
use rusqlite::Connection;
use rust_decimal::Decimal;
use tracing::debug;

/// The band a `match` invocation searched and the packages it found, closest first.
#[derive(Debug)]
pub struct Selection {
    pub band: Band,
    pub packages: Vec<PackageRecord>,
}

pub fn select(conn: &Connection, sub: &clap::ArgMatches) -> Result<Selection> {
    let budget = resolve_budget(sub)?;
    let tolerance = match sub.get_one::<String>("tolerance") {
        Some(t) => parse_decimal(t).context("Invalid --tolerance")?,
        None => get_tolerance(conn)?,
    };

    let mut catalogue = load_packages(conn)?;
    if sub.get_flag("available") {
        catalogue.retain(|p| !p.is_sold_out());
    }
    let band = Band::new(budget, tolerance)?;
    debug!(
        budget = %band.budget,
        lower = %band.lower,
        upper = %band.upper,
        catalogue = catalogue.len(),
        "matching packages"
    );
    let packages = match_packages(budget, &catalogue, tolerance)?
        .into_iter()
        .cloned()
        .collect();
    Ok(Selection { band, packages })
}

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let Selection { band, packages } = select(conn, sub)?;

    if maybe_print_json(json_flag, jsonl_flag, &packages)? {
        return Ok(());
    }
    println!(
        "Budget {} (band {} to {})",
        fmt_money(&band.budget),
        fmt_money(&band.lower),
        fmt_money(&band.upper)
    );
    if packages.is_empty() {
        println!("No packages found around this budget.");
        return Ok(());
    }
    println!(
        "{}",
        pretty_table(
            &["ID", "Package", "Category", "Departure", "Price", "Airline", "Hotels", "Seats"],
            package_rows(packages.iter()),
        )
    );
    Ok(())
}

/// `--budget` wins; otherwise the plan's projected final balance is the budget.
fn resolve_budget(sub: &clap::ArgMatches) -> Result<Decimal> {
    if let Some(b) = sub.get_one::<String>("budget") {
        return parse_decimal(b).context("Invalid --budget");
    }
    let plan = plan_from_args(sub)
        .context("Pass --budget, or --target/--monthly/--months to derive one")?;
    Ok(project(&plan)?.final_balance)
}
