// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::PackageRecord;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, Row, params};
use rust_decimal::Decimal;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.umrahsave", "Umrahsave", "umrahsave"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("umrahsave.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS packages(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        category TEXT NOT NULL,
        airline TEXT NOT NULL,
        airport_name TEXT NOT NULL,
        airport_code TEXT NOT NULL,
        price TEXT NOT NULL, -- IDR, decimal text
        hotel_makkah TEXT NOT NULL,
        hotel_madinah TEXT NOT NULL,
        package_type TEXT NOT NULL,
        departure_date TEXT NOT NULL,
        seats_available INTEGER,
        image TEXT,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_packages_departure ON packages(departure_date);
    "#,
    )?;
    Ok(())
}

pub fn insert_package(conn: &Connection, p: &PackageRecord) -> Result<i64> {
    conn.execute(
        "INSERT INTO packages(title, category, airline, airport_name, airport_code, price, \
         hotel_makkah, hotel_madinah, package_type, departure_date, seats_available, image) \
         VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10,?11,?12)",
        params![
            p.title,
            p.category,
            p.airline,
            p.airport_name,
            p.airport_code,
            p.price.to_string(),
            p.hotel_makkah,
            p.hotel_madinah,
            p.package_type,
            p.departure_date.to_string(),
            p.seats_available,
            p.image.as_deref()
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

const PACKAGE_COLUMNS: &str = "id, title, category, airline, airport_name, airport_code, price, \
     hotel_makkah, hotel_madinah, package_type, departure_date, seats_available, image";

type RawPackage = (PackageRecord, String, String);

fn read_row(r: &Row<'_>) -> rusqlite::Result<RawPackage> {
    // price and date are parsed afterwards so bad rows get a readable error
    let price: String = r.get(6)?;
    let date: String = r.get(10)?;
    Ok((
        PackageRecord {
            id: Some(r.get(0)?),
            title: r.get(1)?,
            category: r.get(2)?,
            airline: r.get(3)?,
            airport_name: r.get(4)?,
            airport_code: r.get(5)?,
            price: Decimal::ZERO,
            hotel_makkah: r.get(7)?,
            hotel_madinah: r.get(8)?,
            package_type: r.get(9)?,
            departure_date: chrono::NaiveDate::MIN,
            seats_available: r.get(11)?,
            image: r.get(12)?,
        },
        price,
        date,
    ))
}

fn finish(raw: RawPackage) -> Result<PackageRecord> {
    let (mut p, price, date) = raw;
    p.price = price
        .parse::<Decimal>()
        .with_context(|| format!("Invalid price '{}' for package '{}'", price, p.title))?;
    p.departure_date = chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .with_context(|| format!("Invalid departure date '{}' for package '{}'", date, p.title))?;
    Ok(p)
}

/// The whole catalogue in departure order.
pub fn load_packages(conn: &Connection) -> Result<Vec<PackageRecord>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM packages ORDER BY departure_date, id",
        PACKAGE_COLUMNS
    ))?;
    let rows = stmt.query_map([], read_row)?;
    let mut out = Vec::new();
    for row in rows {
        out.push(finish(row?)?);
    }
    Ok(out)
}

pub fn package_by_id(conn: &Connection, id: i64) -> Result<PackageRecord> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM packages WHERE id=?1",
        PACKAGE_COLUMNS
    ))?;
    let raw = stmt
        .query_row(params![id], read_row)
        .with_context(|| format!("Package #{} not found", id))?;
    finish(raw)
}

pub fn delete_package(conn: &Connection, id: i64) -> Result<bool> {
    let n = conn.execute("DELETE FROM packages WHERE id=?1", params![id])?;
    Ok(n > 0)
}
