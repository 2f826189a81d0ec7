// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, arg, crate_version};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(arg!(--json "Print as pretty JSON").action(ArgAction::SetTrue))
        .arg(
            arg!(--jsonl "Print as JSON lines")
                .action(ArgAction::SetTrue)
                .conflicts_with("json"),
        )
}

/// Plan inputs shared by `simulate`, `match` and `contact plan`.
fn plan_args(cmd: Command, required: bool) -> Command {
    cmd.arg(
        arg!(--target <AMOUNT> "Target package price (IDR)")
            .required(required)
            .allow_negative_numbers(true),
    )
    .arg(
        arg!(--initial <AMOUNT> "Savings already set aside (IDR)")
            .required(false)
            .default_value("0")
            .allow_negative_numbers(true),
    )
    .arg(
        arg!(--monthly <AMOUNT> "Monthly contribution (IDR)")
            .required(required)
            .allow_negative_numbers(true),
    )
    .arg(
        Arg::new("months")
            .long("months")
            .value_name("N")
            .help("Saving period in months")
            .value_parser(clap::value_parser!(u32))
            .required(required),
    )
}

fn package_fields(cmd: Command) -> Command {
    cmd.arg(arg!(--title <TITLE>).required(true))
        .arg(arg!(--category <CATEGORY>).required(true))
        .arg(arg!(--airline <AIRLINE>).required(true))
        .arg(arg!(--"airport-name" <NAME>).required(true))
        .arg(arg!(--"airport-code" <CODE>).required(true))
        .arg(arg!(--price <AMOUNT>).required(true))
        .arg(arg!(--"hotel-makkah" <HOTEL>).required(true))
        .arg(arg!(--"hotel-madinah" <HOTEL>).required(true))
        .arg(arg!(--"type" <TYPE> "Package type, e.g. '9 Hari'").required(true))
        .arg(arg!(--date <DATE> "Departure date YYYY-MM-DD").required(true))
        .arg(
            Arg::new("seats")
                .long("seats")
                .value_name("N")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(arg!(--image <PATH>).required(false))
}

pub fn build_cli() -> Command {
    Command::new("umrahsave")
        .version(crate_version!())
        .about("Umrah savings simulator and package matcher")
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Create the local catalogue database"))
        .subcommand(json_flags(plan_args(
            Command::new("simulate")
                .about("Project a savings plan month by month")
                .arg(
                    arg!(--schedule "Show the monthly schedule table")
                        .action(ArgAction::SetTrue),
                ),
            true,
        )))
        .subcommand(json_flags(plan_args(
            Command::new("match")
                .about("Find packages priced around a budget or a plan's final balance")
                .arg(
                    arg!(--budget <AMOUNT> "Budget to match (IDR)")
                        .required(false)
                        .allow_negative_numbers(true),
                )
                .arg(
                    arg!(--tolerance <PERCENT> "Band width in percent")
                        .required(false)
                        .allow_negative_numbers(true),
                )
                .arg(
                    arg!(--available "Skip sold-out packages").action(ArgAction::SetTrue),
                ),
            false,
        )))
        .subcommand(
            Command::new("package")
                .about("Manage the package catalogue")
                .subcommand(package_fields(Command::new("add").about("Add a package")))
                .subcommand(json_flags(
                    Command::new("list").about("List catalogue packages").arg(
                        arg!(--available "Skip sold-out packages").action(ArgAction::SetTrue),
                    ),
                ))
                .subcommand(
                    Command::new("import")
                        .about("Import packages from a CSV or JSON file")
                        .arg(arg!(--path <FILE>).required(true))
                        .arg(
                            arg!(--format <FMT> "csv|json")
                                .required(false)
                                .default_value("csv"),
                        ),
                )
                .subcommand(
                    Command::new("export")
                        .about("Export the catalogue to CSV or JSON")
                        .arg(arg!(--path <FILE>).required(true))
                        .arg(
                            arg!(--format <FMT> "csv|json")
                                .required(false)
                                .default_value("csv"),
                        ),
                )
                .subcommand(
                    Command::new("fetch")
                        .about("Download a JSON package list from a catalogue endpoint")
                        .arg(arg!(--url <URL>).required(true)),
                )
                .subcommand(
                    Command::new("remove").about("Delete a package by id").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(clap::value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("contact")
                .about("Build a WhatsApp link to the agency")
                .subcommand(
                    Command::new("package").about("Link asking about a stored package").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(clap::value_parser!(i64)),
                    ),
                )
                .subcommand(plan_args(
                    Command::new("plan").about("Link sharing a savings plan summary"),
                    true,
                )),
        )
        .subcommand(
            Command::new("config")
                .about("Agency settings")
                .subcommand(
                    Command::new("set-whatsapp")
                        .about("Set the agency WhatsApp number")
                        .arg(arg!(--number <NUMBER>).required(true)),
                )
                .subcommand(
                    Command::new("set-tolerance")
                        .about("Set the default match tolerance (0 to 100 percent)")
                        .arg(
                            arg!(--percent <PERCENT>)
                                .required(true)
                                .allow_negative_numbers(true),
                        ),
                )
                .subcommand(Command::new("show").about("Show current settings")),
        )
        .subcommand(Command::new("doctor").about("Check the catalogue for problems"))
}
