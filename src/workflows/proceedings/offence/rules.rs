//! Named predicates behind the offence derivations.
//!
//! Each derived field composes these explicitly so the rule table can be
//! read (and tested) one condition at a time.

use chrono::NaiveDate;

use super::super::context::DerivationContext;
use super::super::domain::{SubmittedOffence, SubmittedPlea, SubmittedVerdict};

pub const SUMMARY_ONLY_MODE: &str = "Summary";
pub const EITHER_WAY_MODE: &str = "Either Way";

const GUILTY_PLEAS: [&str; 2] = ["GUILTY", "INDICATED_GUILTY"];
const GUILTY_VERDICT_CATEGORY: &str = "GUILTY";

/// Magistrates' submission initiated as a trial or committal for sentence.
pub fn magistrates_trial_initiation(ctx: &DerivationContext<'_>) -> bool {
    ctx.is_magistrates_submission() && ctx.is_trial_or_committal()
}

pub fn plea_is_guilty(plea: Option<&SubmittedPlea>) -> bool {
    plea.is_some_and(|plea| {
        GUILTY_PLEAS
            .iter()
            .any(|guilty| plea.plea_value.trim().eq_ignore_ascii_case(guilty))
    })
}

pub fn verdict_is_guilty(verdict: Option<&SubmittedVerdict>) -> bool {
    verdict.is_some_and(|verdict| {
        verdict
            .category
            .trim()
            .eq_ignore_ascii_case(GUILTY_VERDICT_CATEGORY)
    })
}

pub fn has_convicting_court_code(offence: &SubmittedOffence) -> bool {
    offence
        .convicting_court_code
        .as_deref()
        .is_some_and(|code| !code.trim().is_empty())
}

/// Allocation is recorded for summary-only offences, and for either-way
/// offences where the prosecutor gave a mode-of-trial reason.
pub fn allocation_applies(
    ctx: &DerivationContext<'_>,
    mode_of_trial: Option<&str>,
    offence: &SubmittedOffence,
) -> bool {
    if !magistrates_trial_initiation(ctx) {
        return false;
    }

    match mode_of_trial {
        Some(SUMMARY_ONLY_MODE) => true,
        Some(EITHER_WAY_MODE) => offence.mode_of_trial_reason_id.is_some(),
        _ => false,
    }
}

/// Plea date wins over verdict date; civil cases never carry a conviction.
pub fn conviction_date(
    ctx: &DerivationContext<'_>,
    offence: &SubmittedOffence,
) -> Option<NaiveDate> {
    if ctx.civil || !magistrates_trial_initiation(ctx) {
        return None;
    }

    if plea_is_guilty(offence.plea.as_ref()) {
        return offence.plea.as_ref().map(|plea| plea.plea_date);
    }

    if verdict_is_guilty(offence.verdict.as_ref()) {
        return offence.verdict.as_ref().map(|verdict| verdict.verdict_date);
    }

    None
}

/// Case still awaiting trial: nothing admitted, nothing found, no convicting court.
pub fn custody_time_limit_applies(ctx: &DerivationContext<'_>, offence: &SubmittedOffence) -> bool {
    magistrates_trial_initiation(ctx)
        && !plea_is_guilty(offence.plea.as_ref())
        && !verdict_is_guilty(offence.verdict.as_ref())
        && !has_convicting_court_code(offence)
}

pub fn convicting_court_applies(ctx: &DerivationContext<'_>, offence: &SubmittedOffence) -> bool {
    magistrates_trial_initiation(ctx) && has_convicting_court_code(offence)
}

pub fn committing_court_applies(ctx: &DerivationContext<'_>) -> bool {
    magistrates_trial_initiation(ctx) && ctx.received_from_court_code.is_some()
}
