//! Raw offence to canonical offence.

mod courts;
pub mod rules;

pub(crate) use courts::court_centre_from_unit;

use tracing::debug;

use super::canonical::{
    AllocationDecision, CommittingCourt, Offence, OffenceFacts, Plea, Verdict, VerdictType,
};
use super::context::DerivationContext;
use super::domain::SubmittedOffence;
use super::error::ConversionError;
use super::non_blank;

/// Derive every offence of one defendant, keeping submission order.
pub fn derive_offences(
    ctx: &DerivationContext<'_>,
    offences: &[SubmittedOffence],
) -> Result<Vec<Offence>, ConversionError> {
    let committing_court = if rules::committing_court_applies(ctx) {
        courts::committing_court(ctx)?
    } else {
        None
    };

    offences
        .iter()
        .enumerate()
        .map(|(position, offence)| {
            derive_offence(ctx, offence, position, committing_court.as_ref())
        })
        .collect()
}

fn derive_offence(
    ctx: &DerivationContext<'_>,
    raw: &SubmittedOffence,
    position: usize,
    committing_court: Option<&CommittingCourt>,
) -> Result<Offence, ConversionError> {
    let metadata = ctx.reference.offence(&raw.cjs_offence_code);
    if metadata.is_none() {
        debug!(
            case_id = %ctx.case_id,
            offence_code = %raw.cjs_offence_code,
            "offence code unknown, mode of trial left empty"
        );
    }
    let mode_of_trial = metadata.and_then(|offence| offence.mode_of_trial.clone());

    let convicting_court = match raw.convicting_court_code.as_deref() {
        Some(code) if rules::convicting_court_applies(ctx, raw) => {
            courts::convicting_court(ctx, code)?
        }
        _ => None,
    };

    let custody_time_limit = if rules::custody_time_limit_applies(ctx, raw) {
        ctx.custody_time_limit
    } else {
        None
    };

    Ok(Offence {
        id: raw.id,
        offence_code: raw.cjs_offence_code.clone(),
        order_index: raw.order_index.unwrap_or(position as u32 + 1),
        offence_title: metadata.map(|offence| offence.title.clone()),
        offence_title_welsh: metadata.and_then(|offence| offence.welsh_title.clone()),
        wording: raw.wording.clone(),
        wording_welsh: raw.wording_welsh.clone(),
        arrest_date: raw.arrest_date,
        charge_date: raw.charge_date,
        start_date: raw.committed_date,
        end_date: raw.committed_end_date,
        laid_date: raw.laid_date,
        allocation_decision: allocation_decision(ctx, raw, mode_of_trial.as_deref()),
        mode_of_trial,
        offence_legislation: metadata.and_then(|offence| offence.legislation.clone()),
        offence_legislation_welsh: metadata.and_then(|offence| offence.welsh_legislation.clone()),
        plea: raw.plea.as_ref().map(|plea| Plea {
            offence_id: raw.id,
            plea_value: plea.plea_value.clone(),
            plea_date: plea.plea_date,
        }),
        verdict: raw.verdict.as_ref().map(|verdict| Verdict {
            offence_id: raw.id,
            verdict_date: verdict.verdict_date,
            verdict_type: VerdictType {
                category: verdict.category.clone(),
                category_type: verdict.category_type.clone(),
                description: verdict.description.clone(),
            },
        }),
        conviction_date: rules::conviction_date(ctx, raw),
        committing_court: committing_court.cloned(),
        convicting_court,
        custody_time_limit,
        offence_facts: offence_facts(ctx, raw),
        dvla_offence_code: metadata.and_then(|offence| offence.dvla_code.clone()),
        max_penalty: metadata.and_then(|offence| offence.max_penalty.clone()),
        endorsable_flag: metadata.is_some_and(|offence| offence.endorsable),
        reporting_restriction: metadata.and_then(|offence| offence.report_restriction.clone()),
        is_civil: ctx.civil,
    })
}

fn allocation_decision(
    ctx: &DerivationContext<'_>,
    raw: &SubmittedOffence,
    mode_of_trial: Option<&str>,
) -> Option<AllocationDecision> {
    if !rules::allocation_applies(ctx, mode_of_trial, raw) {
        return None;
    }

    let tables = &ctx.reference.tables;
    let reason = match raw.mode_of_trial_reason_id {
        Some(id) => tables.mode_of_trial_reason(id),
        None => tables.summary_only_reason(),
    }?;

    Some(AllocationDecision {
        offence_id: raw.id,
        mot_reason_id: reason.id,
        sequence_number: reason.seq_num,
        mot_reason_code: reason.code.clone(),
        mot_reason_description: reason.description.clone(),
    })
}

/// Omitted entirely unless at least one fact was submitted.
fn offence_facts(ctx: &DerivationContext<'_>, raw: &SubmittedOffence) -> Option<OffenceFacts> {
    let vehicle_code = non_blank(raw.vehicle_code.as_deref());
    let vehicle_registration = non_blank(raw.vehicle_registration.as_deref());
    let alcohol_method = non_blank(raw.alcohol_level_method.as_deref());

    if vehicle_code.is_none()
        && vehicle_registration.is_none()
        && alcohol_method.is_none()
        && raw.alcohol_level_amount.is_none()
    {
        return None;
    }

    let alcohol_reading_method_description = alcohol_method
        .as_deref()
        .and_then(|code| ctx.reference.tables.alcohol_level_method(code))
        .map(|method| method.description.clone());

    Some(OffenceFacts {
        vehicle_code,
        vehicle_registration,
        alcohol_reading_method_code: alcohol_method,
        alcohol_reading_method_description,
        alcohol_reading_amount: raw.alcohol_level_amount,
    })
}
