// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{delete_package, insert_package, load_packages};
use crate::models::PackageRecord;
use crate::utils::{fmt_money, http_client, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::{Context, Result, anyhow, bail};
use rusqlite::Connection;
use rust_decimal::Decimal;
use tracing::{info, warn};

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("import", sub)) => import(conn, sub)?,
        Some(("export", sub)) => export(conn, sub)?,
        Some(("fetch", sub)) => fetch(conn, sub)?,
        Some(("remove", sub)) => remove(conn, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn package_rows<'a>(pkgs: impl IntoIterator<Item = &'a PackageRecord>) -> Vec<Vec<String>> {
    pkgs.into_iter()
        .map(|p| {
            vec![
                p.id.map(|id| id.to_string()).unwrap_or_default(),
                p.title.clone(),
                p.category.clone(),
                p.departure_date.format("%d %b %Y").to_string(),
                fmt_money(&p.price),
                format!("{} ({})", p.airline, p.airport_code),
                format!("{} / {}", p.hotel_makkah, p.hotel_madinah),
                p.seat_text(),
            ]
        })
        .collect()
}

fn text(sub: &clap::ArgMatches, name: &str) -> Result<String> {
    let v = sub
        .get_one::<String>(name)
        .map(|s| s.trim().to_string())
        .with_context(|| format!("--{} is required", name))?;
    if v.is_empty() {
        bail!("--{} cannot be empty", name);
    }
    Ok(v)
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let price = parse_decimal(&text(sub, "price")?)?;
    if price <= Decimal::ZERO {
        bail!("Package price must be greater than zero");
    }
    let pkg = PackageRecord {
        id: None,
        title: text(sub, "title")?,
        category: text(sub, "category")?,
        airline: text(sub, "airline")?,
        airport_name: text(sub, "airport-name")?,
        airport_code: text(sub, "airport-code")?.to_uppercase(),
        price,
        hotel_makkah: text(sub, "hotel-makkah")?,
        hotel_madinah: text(sub, "hotel-madinah")?,
        package_type: text(sub, "type")?,
        departure_date: parse_date(&text(sub, "date")?)?,
        seats_available: sub.get_one::<u32>("seats").copied(),
        image: sub
            .get_one::<String>("image")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
    };
    let id = insert_package(conn, &pkg)?;
    info!(id, title = %pkg.title, "package added");
    println!("Added package #{} {} at {}", id, pkg.title, fmt_money(&pkg.price));
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut pkgs = load_packages(conn)?;
    if sub.get_flag("available") {
        pkgs.retain(|p| !p.is_sold_out());
    }
    if !maybe_print_json(json_flag, jsonl_flag, &pkgs)? {
        println!(
            "{}",
            pretty_table(
                &["ID", "Package", "Category", "Departure", "Price", "Airline", "Hotels", "Seats"],
                package_rows(&pkgs),
            )
        );
    }
    Ok(())
}

fn read_csv(path: &str) -> Result<Vec<PackageRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;
    let mut out = Vec::new();
    for (i, rec) in rdr.deserialize::<PackageRecord>().enumerate() {
        // header is line 1
        out.push(rec.with_context(|| format!("Invalid package on line {}", i + 2))?);
    }
    Ok(out)
}

fn read_json(path: &str) -> Result<Vec<PackageRecord>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("Open JSON {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid package list in {}", path))
}

/// Insert `pkgs` in one transaction, skipping unpriced ones. Returns the count stored.
pub fn store_packages(conn: &mut Connection, pkgs: &[PackageRecord]) -> Result<usize> {
    let tx = conn.transaction()?;
    let mut stored = 0;
    for p in pkgs {
        if p.price <= Decimal::ZERO {
            warn!(title = %p.title, price = %p.price, "skipping package without a positive price");
            continue;
        }
        insert_package(&tx, p)?;
        stored += 1;
    }
    tx.commit()?;
    Ok(stored)
}

fn import(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let fmt = sub.get_one::<String>("format").unwrap().trim().to_lowercase();
    let pkgs = match fmt.as_str() {
        "csv" => read_csv(path)?,
        "json" => read_json(path)?,
        other => return Err(anyhow!("Unknown format: {} (use csv|json)", other)),
    };
    let stored = store_packages(conn, &pkgs)?;
    info!(stored, total = pkgs.len(), path, "catalogue imported");
    println!("Imported {} packages from {}", stored, path);
    Ok(())
}

fn export(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let fmt = sub.get_one::<String>("format").unwrap().trim().to_lowercase();
    let pkgs = load_packages(conn)?;
    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(path)?;
            for p in &pkgs {
                wtr.serialize(p)?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(path, serde_json::to_string_pretty(&pkgs)?)?;
        }
        other => return Err(anyhow!("Unknown format: {} (use csv|json)", other)),
    }
    println!("Exported {} packages to {}", pkgs.len(), path);
    Ok(())
}

fn fetch(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let url = sub.get_one::<String>("url").unwrap().trim();
    let client = http_client()?;
    let resp = client.get(url).send()?.error_for_status()?;
    let pkgs: Vec<PackageRecord> = resp
        .json()
        .with_context(|| format!("Invalid package list from {}", url))?;
    let stored = store_packages(conn, &pkgs)?;
    info!(stored, url, "catalogue fetched");
    println!("Fetched {} packages from {}", stored, url);
    Ok(())
}

fn remove(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if delete_package(conn, id)? {
        println!("Removed package #{}", id);
    } else {
        println!("Package #{} not found", id);
    }
    Ok(())
}
