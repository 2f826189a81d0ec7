// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

use umrahsave::{cli, commands, db};

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("UMRAHSAVE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    // stderr keeps stdout clean for --json output
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    // simulate needs no catalogue
    if let Some(("simulate", sub)) = matches.subcommand() {
        return commands::simulate::handle(sub);
    }

    let mut conn = db::open_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("match", sub)) => commands::matching::handle(&conn, sub)?,
        Some(("package", sub)) => commands::packages::handle(&mut conn, sub)?,
        Some(("contact", sub)) => commands::contact::handle(&conn, sub)?,
        Some(("config", sub)) => commands::config::handle(&conn, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&conn)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
