// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::contact::normalize_number;
use crate::matcher::MAX_TOLERANCE_PERCENT;
use crate::utils::{
    get_tolerance, get_whatsapp_number, parse_decimal, pretty_table, set_tolerance,
    set_whatsapp_number,
};
use anyhow::{Result, bail};
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-whatsapp", sub)) => {
            let number = normalize_number(sub.get_one::<String>("number").unwrap())?;
            set_whatsapp_number(conn, &number)?;
            println!("WhatsApp number set to {}", number);
        }
        Some(("set-tolerance", sub)) => {
            let pct = parse_decimal(sub.get_one::<String>("percent").unwrap())?;
            if pct < Decimal::ZERO || pct > MAX_TOLERANCE_PERCENT {
                bail!("Tolerance must be between 0 and {}%", MAX_TOLERANCE_PERCENT);
            }
            set_tolerance(conn, pct)?;
            println!("Match tolerance set to {}%", pct);
        }
        Some(("show", _)) => show(conn)?,
        _ => {}
    }
    Ok(())
}

fn show(conn: &Connection) -> Result<()> {
    let number = get_whatsapp_number(conn)?.unwrap_or_else(|| "(not set)".to_string());
    let rows = vec![
        vec!["whatsapp_number".to_string(), number],
        vec![
            "tolerance_percent".to_string(),
            get_tolerance(conn)?.to_string(),
        ],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
    Ok(())
}
