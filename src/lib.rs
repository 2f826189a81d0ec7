// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod contact;
pub mod db;
pub mod errors;
pub mod matcher;
pub mod models;
pub mod savings;
pub mod utils;

pub use errors::{BudgetError, ContactError, PlanError};
pub use matcher::{Band, DEFAULT_TOLERANCE_PERCENT, MAX_TOLERANCE_PERCENT, match_packages};
pub use models::{PackageRecord, ProjectionEntry, SavingsPlan, SimulationResult};
pub use savings::project;
