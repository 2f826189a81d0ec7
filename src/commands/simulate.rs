// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{SavingsPlan, SimulationResult};
use crate::savings::project;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tracing::debug;

/// Read the plan flags shared by `simulate`, `match` and `contact plan`.
pub fn plan_from_args(sub: &clap::ArgMatches) -> Result<SavingsPlan> {
    let amount = |name: &str| -> Result<Decimal> {
        let raw = sub
            .get_one::<String>(name)
            .with_context(|| format!("--{} is required", name))?;
        parse_decimal(raw).with_context(|| format!("Invalid --{}", name))
    };
    let horizon_months = *sub
        .get_one::<u32>("months")
        .context("--months is required")?;
    Ok(SavingsPlan {
        target_cost: amount("target")?,
        initial_balance: amount("initial")?,
        monthly_contribution: amount("monthly")?,
        horizon_months,
    })
}

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let plan = plan_from_args(sub)?;
    let result = project(&plan)?;
    debug!(
        final_balance = %result.final_balance,
        shortfall = %result.shortfall,
        top_up = %result.top_up_per_month,
        "plan projected"
    );

    if jsonl_flag {
        maybe_print_json(false, true, &result.entries)?;
        return Ok(());
    }
    if maybe_print_json(json_flag, false, &result)? {
        return Ok(());
    }

    println!("{}", summary_table(&plan, &result));
    if sub.get_flag("schedule") {
        println!("{}", schedule_table(&result));
    }
    println!("{}", result.recommendation);
    Ok(())
}

pub fn summary_table(plan: &SavingsPlan, result: &SimulationResult) -> comfy_table::Table {
    let rows = vec![
        vec!["Target cost".into(), fmt_money(&plan.target_cost)],
        vec!["Initial balance".into(), fmt_money(&plan.initial_balance)],
        vec!["Monthly contribution".into(), fmt_money(&plan.monthly_contribution)],
        vec!["Months".into(), plan.horizon_months.to_string()],
        vec!["Final balance".into(), fmt_money(&result.final_balance)],
        vec!["Shortfall".into(), fmt_money(&result.shortfall)],
        vec!["Top-up / month".into(), fmt_money(&result.top_up_per_month)],
        vec!["Months to target".into(), result.months_to_target.to_string()],
    ];
    pretty_table(&["Plan", "Value"], rows)
}

pub fn schedule_table(result: &SimulationResult) -> comfy_table::Table {
    let rows = result
        .entries
        .iter()
        .map(|e| {
            vec![
                e.month.to_string(),
                fmt_money(&e.contribution),
                fmt_money(&e.balance),
                fmt_percent(&e.progress_percent),
                fmt_money(&e.top_up),
                fmt_money(&e.balance_with_top_up),
            ]
        })
        .collect();
    pretty_table(
        &["Month", "Contribution", "Balance", "Progress", "Top-up", "With top-up"],
        rows,
    )
}
