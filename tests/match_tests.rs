// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use umrahsave::{
    BudgetError, DEFAULT_TOLERANCE_PERCENT, PackageRecord, PlanError, SavingsPlan, cli, commands::matching,
    db, match_packages, project, utils,
};

fn pkg(title: &str, price: Decimal, seats: Option<u32>) -> PackageRecord {
    PackageRecord {
        id: None,
        title: title.to_string(),
        category: "Reguler".into(),
        airline: "Saudia".into(),
        airport_name: "Soekarno-Hatta".into(),
        airport_code: "CGK".into(),
        price,
        hotel_makkah: "Makkah Towers".into(),
        hotel_madinah: "Dallah Taibah".into(),
        package_type: "9 Hari".into(),
        departure_date: NaiveDate::from_ymd_opt(2026, 11, 20).unwrap(),
        seats_available: seats,
        image: None,
    }
}

fn seeded_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    for p in [
        pkg("Hemat", dec!(22000000), Some(10)),
        pkg("Reguler", dec!(24500000), Some(0)),
        pkg("Plus", dec!(27000000), Some(4)),
        pkg("VIP", dec!(45000000), Some(8)),
    ] {
        db::insert_package(&conn, &p).unwrap();
    }
    conn
}

fn run(conn: &Connection, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["umrahsave", "match"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("match", sub)) => matching::handle(conn, sub),
        _ => panic!("match command not parsed"),
    }
}

#[test]
fn plan_final_balance_drives_the_match() {
    let conn = seeded_conn();
    let plan = SavingsPlan {
        target_cost: dec!(30000000),
        initial_balance: dec!(0),
        monthly_contribution: dec!(1000000),
        horizon_months: 24,
    };
    let result = project(&plan).unwrap();
    let catalogue = db::load_packages(&conn).unwrap();
    let matched = match_packages(result.final_balance, &catalogue, DEFAULT_TOLERANCE_PERCENT).unwrap();
    // band for 24M is 19.2M to 26.4M
    let titles: Vec<&str> = matched.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Reguler", "Hemat"]);

    run(&conn, &["--target", "30000000", "--monthly", "1000000", "--months", "24"]).unwrap();
}

fn select(conn: &Connection, args: &[&str]) -> anyhow::Result<matching::Selection> {
    let mut argv = vec!["umrahsave", "match"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("match", sub)) => matching::select(conn, sub),
        _ => panic!("match command not parsed"),
    }
}

fn titles(selection: &matching::Selection) -> Vec<&str> {
    selection.packages.iter().map(|p| p.title.as_str()).collect()
}

#[test]
fn tolerance_flag_narrows_the_band() {
    let conn = seeded_conn();
    let narrow = select(&conn, &["--budget", "25000000", "--tolerance", "5"]).unwrap();
    assert_eq!(narrow.band.lower, dec!(22500000));
    assert_eq!(narrow.band.upper, dec!(26250000));
    assert_eq!(titles(&narrow), vec!["Reguler"]);

    let open = select(&conn, &["--budget", "25000000", "--tolerance", "5", "--available"]).unwrap();
    assert!(open.packages.is_empty());
    run(&conn, &["--budget", "25000000", "--tolerance", "5", "--available", "--json"]).unwrap();
}

#[test]
fn oversized_tolerance_flag_is_an_error() {
    let conn = seeded_conn();
    let err = select(&conn, &["--budget", "20000000", "--tolerance", "1000000000000000000000000"])
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<BudgetError>(),
        Some(BudgetError::BandOutOfRange { .. })
    ));
}

#[test]
fn plan_with_overlong_horizon_is_an_error() {
    let conn = seeded_conn();
    let err = select(
        &conn,
        &["--target", "30000000", "--monthly", "1000000", "--months", "4294967295"],
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PlanError>(),
        Some(PlanError::HorizonTooLong { .. })
    ));
}

#[test]
fn handler_needs_budget_or_plan() {
    let conn = seeded_conn();
    assert!(run(&conn, &[]).is_err());
}

#[test]
fn handler_rejects_non_positive_budget() {
    let conn = seeded_conn();
    let err = run(&conn, &["--budget", "0"]).unwrap_err();
    assert_eq!(
        err.downcast_ref::<BudgetError>(),
        Some(&BudgetError::NonPositiveBudget(Decimal::ZERO))
    );
}

#[test]
fn configured_tolerance_is_used_by_default() {
    let conn = seeded_conn();
    assert_eq!(utils::get_tolerance(&conn).unwrap(), DEFAULT_TOLERANCE_PERCENT);
    utils::set_tolerance(&conn, dec!(25)).unwrap();
    assert_eq!(utils::get_tolerance(&conn).unwrap(), dec!(25));
    run(&conn, &["--budget", "40000000"]).unwrap();
}

#[test]
fn sold_out_packages_still_match_unless_filtered() {
    let conn = seeded_conn();
    let all = select(&conn, &["--budget", "25000000"]).unwrap();
    assert_eq!(titles(&all), vec!["Reguler", "Plus", "Hemat"]);

    let open = select(&conn, &["--budget", "25000000", "--available"]).unwrap();
    assert_eq!(titles(&open), vec!["Plus", "Hemat"]);
    assert_eq!(open.band, all.band);
}
