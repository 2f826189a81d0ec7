// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Month-by-month savings projection towards an umrah package price.

use crate::errors::PlanError;
use crate::models::{ProjectionEntry, SavingsPlan, SimulationResult};
use crate::utils::fmt_money;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// A century of monthly saving.
pub const MAX_HORIZON_MONTHS: u32 = 1200;

fn checked(v: Option<Decimal>) -> Result<Decimal, PlanError> {
    v.ok_or(PlanError::AmountTooLarge)
}

pub fn validate(plan: &SavingsPlan) -> Result<(), PlanError> {
    if plan.target_cost <= Decimal::ZERO {
        return Err(PlanError::NonPositiveTarget(plan.target_cost));
    }
    if plan.horizon_months < 1 {
        return Err(PlanError::EmptyHorizon);
    }
    if plan.horizon_months > MAX_HORIZON_MONTHS {
        return Err(PlanError::HorizonTooLong {
            max: MAX_HORIZON_MONTHS,
            got: plan.horizon_months,
        });
    }
    for (field, value) in [
        ("Initial balance", plan.initial_balance),
        ("Monthly contribution", plan.monthly_contribution),
    ] {
        if value < Decimal::ZERO {
            return Err(PlanError::NegativeAmount { field, value });
        }
    }
    Ok(())
}

/// Project `plan` over its horizon.
///
/// The running `balance` of each entry follows the plan as entered; the
/// flat top-up is reported next to it in `balance_with_top_up`. The top-up
/// is rounded up so the adjusted plan never falls short of the target.
pub fn project(plan: &SavingsPlan) -> Result<SimulationResult, PlanError> {
    validate(plan)?;

    let horizon = Decimal::from(plan.horizon_months);
    let final_balance = checked(
        plan.monthly_contribution
            .checked_mul(horizon)
            .and_then(|saved| plan.initial_balance.checked_add(saved)),
    )?;
    // both sides are non-negative, so the difference cannot overflow
    let shortfall = (plan.target_cost - final_balance).max(Decimal::ZERO);
    let top_up_per_month = if shortfall > Decimal::ZERO {
        (shortfall / horizon).ceil()
    } else {
        Decimal::ZERO
    };

    let mut entries = Vec::with_capacity(plan.horizon_months as usize);
    let mut balance = plan.initial_balance;
    for month in 1..=plan.horizon_months {
        balance = checked(balance.checked_add(plan.monthly_contribution))?;
        let progress_percent = if balance >= plan.target_cost {
            HUNDRED
        } else {
            balance / plan.target_cost * HUNDRED
        };
        let balance_with_top_up = checked(
            top_up_per_month
                .checked_mul(Decimal::from(month))
                .and_then(|extra| balance.checked_add(extra)),
        )?;
        entries.push(ProjectionEntry {
            month,
            contribution: plan.monthly_contribution,
            balance,
            progress_percent,
            top_up: top_up_per_month,
            balance_with_top_up,
        });
    }

    let months_to_target = months_to_target(plan, shortfall);
    let recommendation = recommendation(shortfall, top_up_per_month);

    Ok(SimulationResult {
        final_balance,
        months_to_target,
        shortfall,
        top_up_per_month,
        recommendation,
        entries,
    })
}

fn months_to_target(plan: &SavingsPlan, shortfall: Decimal) -> u32 {
    if shortfall > Decimal::ZERO {
        return plan.horizon_months;
    }
    if plan.monthly_contribution.is_zero() {
        // no shortfall without contributions means the target is already met
        return 0;
    }
    let Some(needed) =
        (plan.target_cost - plan.initial_balance).checked_div(plan.monthly_contribution)
    else {
        return plan.horizon_months;
    };
    needed
        .ceil()
        .max(Decimal::ONE)
        .min(Decimal::from(plan.horizon_months))
        .to_u32()
        .unwrap_or(plan.horizon_months)
}

fn recommendation(shortfall: Decimal, top_up_per_month: Decimal) -> String {
    if shortfall > Decimal::ZERO {
        format!(
            "Top up {} every month to reach your umrah target on time.",
            fmt_money(&top_up_per_month)
        )
    } else {
        "Your umrah target is achievable with this plan. Pick a package that fits your budget."
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};
    use rust_decimal_macros::dec;

    fn plan(target: Decimal, initial: Decimal, monthly: Decimal, months: u32) -> SavingsPlan {
        SavingsPlan {
            target_cost: target,
            initial_balance: initial,
            monthly_contribution: monthly,
            horizon_months: months,
        }
    }

    #[test]
    fn exact_target_is_reached_at_horizon() {
        let r = project(&plan(dec!(30000000), dec!(0), dec!(1250000), 24)).unwrap();
        assert_eq!(r.final_balance, dec!(30000000));
        assert_eq!(r.shortfall, Decimal::ZERO);
        assert_eq!(r.months_to_target, 24);
        assert_eq!(r.top_up_per_month, Decimal::ZERO);
        assert_eq!(r.entries.len(), 24);
        assert_eq!(r.entries[23].progress_percent, dec!(100));
        assert!(r.recommendation.contains("achievable"));
    }

    #[test]
    fn shortfall_produces_ceiling_top_up() {
        let r = project(&plan(dec!(30000000), dec!(0), dec!(1000000), 24)).unwrap();
        assert_eq!(r.final_balance, dec!(24000000));
        assert_eq!(r.shortfall, dec!(6000000));
        assert_eq!(r.top_up_per_month, dec!(250000));
        assert_eq!(r.months_to_target, 24);
        assert_eq!(r.entries[23].balance_with_top_up, dec!(30000000));
        assert!(r.recommendation.contains("IDR 250.000"));
    }

    #[test]
    fn top_up_rounds_up_uneven_shortfall() {
        let r = project(&plan(dec!(1000), dec!(0), dec!(0), 3)).unwrap();
        assert_eq!(r.top_up_per_month, dec!(334));
        assert!(r.entries[2].balance_with_top_up >= dec!(1000));
    }

    #[test]
    fn balance_excludes_top_up() {
        let r = project(&plan(dec!(100), dec!(10), dec!(5), 4)).unwrap();
        let balances: Vec<Decimal> = r.entries.iter().map(|e| e.balance).collect();
        assert_eq!(balances, vec![dec!(15), dec!(20), dec!(25), dec!(30)]);
        assert_eq!(r.top_up_per_month, dec!(18));
        assert_eq!(r.entries[0].balance_with_top_up, dec!(33));
        assert_eq!(r.entries[1].progress_percent, dec!(20));
    }

    #[test]
    fn early_break_even_month() {
        let r = project(&plan(dec!(1000), dec!(100), dec!(200), 12)).unwrap();
        // 100 + 200 * 5 = 1100 is the first balance at or above 1000
        assert_eq!(r.months_to_target, 5);
        assert_eq!(r.entries[11].progress_percent, dec!(100));
    }

    #[test]
    fn already_funded_without_contribution_needs_zero_months() {
        let r = project(&plan(dec!(1000), dec!(1500), dec!(0), 6)).unwrap();
        assert_eq!(r.months_to_target, 0);
        assert_eq!(r.shortfall, Decimal::ZERO);
    }

    #[test]
    fn already_funded_with_contribution_clamps_to_first_month() {
        let r = project(&plan(dec!(1000), dec!(1500), dec!(100), 6)).unwrap();
        assert_eq!(r.months_to_target, 1);
    }

    #[test]
    fn rejects_invalid_plans() {
        assert_eq!(
            project(&plan(dec!(0), dec!(0), dec!(1), 1)),
            Err(PlanError::NonPositiveTarget(dec!(0)))
        );
        assert_eq!(
            project(&plan(dec!(10), dec!(0), dec!(1), 0)),
            Err(PlanError::EmptyHorizon)
        );
        assert!(matches!(
            project(&plan(dec!(10), dec!(-1), dec!(1), 2)),
            Err(PlanError::NegativeAmount { field: "Initial balance", .. })
        ));
        assert!(matches!(
            project(&plan(dec!(10), dec!(0), dec!(-5), 2)),
            Err(PlanError::NegativeAmount { field: "Monthly contribution", .. })
        ));
    }

    #[test]
    fn oversized_amounts_are_reported_not_panicked() {
        assert_eq!(
            project(&plan(dec!(1000), Decimal::MAX, dec!(1), 2)),
            Err(PlanError::AmountTooLarge)
        );
        assert_eq!(
            project(&plan(Decimal::MAX, dec!(0), Decimal::MAX, 3)),
            Err(PlanError::AmountTooLarge)
        );
    }

    #[test]
    fn near_max_balance_still_projects() {
        let r = project(&plan(dec!(1), Decimal::MAX - dec!(10), dec!(1), 3)).unwrap();
        assert_eq!(r.entries[2].progress_percent, HUNDRED);
        assert_eq!(r.months_to_target, 1);
    }

    #[test]
    fn horizon_is_capped() {
        assert_eq!(
            project(&plan(dec!(1000), dec!(0), dec!(1), u32::MAX)),
            Err(PlanError::HorizonTooLong {
                max: MAX_HORIZON_MONTHS,
                got: u32::MAX
            })
        );
        let r = project(&plan(dec!(1000), dec!(0), dec!(1), MAX_HORIZON_MONTHS)).unwrap();
        assert_eq!(r.entries.len(), MAX_HORIZON_MONTHS as usize);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_projection_invariants(
            target in 1u64..200_000_000,
            initial in 0u64..100_000_000,
            monthly in 0u64..5_000_000,
            months in 1u32..120
        ) {
            let p = plan(Decimal::from(target), Decimal::from(initial), Decimal::from(monthly), months);
            let r = project(&p).unwrap();

            prop_assert_eq!(r.entries.len(), months as usize);
            for pair in r.entries.windows(2) {
                prop_assert!(pair[0].balance <= pair[1].balance);
            }
            for e in &r.entries {
                prop_assert!(e.progress_percent <= HUNDRED);
            }
            if r.shortfall > Decimal::ZERO {
                let adjusted = p.initial_balance
                    + Decimal::from(months) * (p.monthly_contribution + r.top_up_per_month);
                prop_assert!(adjusted >= p.target_cost);
                prop_assert_eq!(r.months_to_target, months);
            } else {
                prop_assert!(r.months_to_target <= months);
            }

            // no hidden state between calls
            prop_assert_eq!(project(&p).unwrap(), r);
        }
    }
}
