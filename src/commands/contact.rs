// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::simulate::plan_from_args;
use crate::contact::{package_message, plan_message, whatsapp_link};
use crate::db::package_by_id;
use crate::savings::project;
use crate::utils::get_whatsapp_number;
use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let text = match m.subcommand() {
        Some(("package", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            package_message(&package_by_id(conn, id)?)
        }
        Some(("plan", sub)) => {
            let plan = plan_from_args(sub)?;
            let result = project(&plan)?;
            plan_message(&plan, &result)
        }
        _ => return Ok(()),
    };
    let number = get_whatsapp_number(conn)?
        .context("No WhatsApp number configured; run `umrahsave config set-whatsapp`")?;
    println!("{}", whatsapp_link(&number, &text)?);
    Ok(())
}
