//! Composes derived parties, offences and identifiers into a prosecution case
//! or a court application.

mod application;

pub use application::{box_hearing_request, build_court_application};

use tracing::debug;
use uuid::Uuid;

use super::canonical::{CaseMarker, Defendant, FeeRecord, FeeStatus, FeeType, ProsecutionCase};
use super::context::DerivationContext;
use super::domain::{CivilFees, SubmittedCase};
use super::error::ConversionError;
use super::non_blank;
use super::party::resolve_case_identifier;
use super::reference::ReferenceTables;

/// Marker codes enriched from the reference table. Unknown codes are dropped.
pub fn case_markers(tables: &ReferenceTables, case_id: Uuid, codes: &[String]) -> Vec<CaseMarker> {
    codes
        .iter()
        .filter_map(|code| {
            let marker = tables.case_marker(code.trim());
            if marker.is_none() {
                debug!(%case_id, marker_code = %code, "case marker not in reference data");
            }
            marker
        })
        .map(|marker| CaseMarker {
            marker_type_id: marker.id,
            marker_type_code: marker.code.clone(),
            marker_type_description: marker.description.clone(),
        })
        .collect()
}

pub fn parse_fee_status(value: &str) -> Result<FeeStatus, ConversionError> {
    match value.trim().to_ascii_uppercase().as_str() {
        "OUTSTANDING" => Ok(FeeStatus::Outstanding),
        "SATISFIED" => Ok(FeeStatus::Satisfied),
        "NOT_APPLICABLE" => Ok(FeeStatus::NotApplicable),
        "REDIRECTED" => Ok(FeeStatus::Redirected),
        "REFUNDED" => Ok(FeeStatus::Refunded),
        _ => Err(ConversionError::unsupported("fee status", value)),
    }
}

/// Group cases always carry both fee records; other civil cases carry
/// whichever statuses were supplied; criminal cases carry none.
pub fn fee_records(case: &SubmittedCase) -> Result<Vec<FeeRecord>, ConversionError> {
    if case.group.is_some() {
        let payment_reference = non_blank(case.payment_reference.as_deref());
        let initial_status = if payment_reference.is_some() {
            FeeStatus::Satisfied
        } else {
            FeeStatus::Outstanding
        };

        return Ok(vec![
            FeeRecord {
                fee_type: FeeType::Initial,
                fee_status: initial_status,
                payment_reference,
            },
            FeeRecord {
                fee_type: FeeType::Contested,
                fee_status: FeeStatus::NotApplicable,
                payment_reference: None,
            },
        ]);
    }

    match case.civil_fees.as_ref() {
        Some(fees) if case.civil() => civil_fee_records(fees),
        _ => Ok(Vec::new()),
    }
}

fn civil_fee_records(fees: &CivilFees) -> Result<Vec<FeeRecord>, ConversionError> {
    let entries = [
        (
            FeeType::Initial,
            fees.initial_fee_status.as_deref(),
            fees.initial_payment_reference.as_deref(),
        ),
        (
            FeeType::Contested,
            fees.contested_fee_status.as_deref(),
            fees.contested_payment_reference.as_deref(),
        ),
    ];

    let mut records = Vec::new();
    for (fee_type, status, reference) in entries {
        let Some(status) = non_blank(status) else {
            continue;
        };
        records.push(FeeRecord {
            fee_type,
            fee_status: parse_fee_status(&status)?,
            payment_reference: non_blank(reference),
        });
    }

    Ok(records)
}

pub fn build_prosecution_case(
    ctx: &DerivationContext<'_>,
    case: &SubmittedCase,
    defendants: Vec<Defendant>,
) -> Result<ProsecutionCase, ConversionError> {
    let prosecution_case_identifier = resolve_case_identifier(ctx, case)?;

    // only the first defendant's first offence is consulted
    let first_offence = case
        .defendants
        .first()
        .and_then(|defendant| defendant.offences.first());

    Ok(ProsecutionCase {
        id: case.case_id,
        initiation_code: case.initiation_code,
        origination_organisation: case.originating_organisation.clone(),
        prosecution_case_identifier,
        case_markers: case_markers(&ctx.reference.tables, case.case_id, &case.case_marker_codes),
        defendants,
        statement_of_facts: first_offence.and_then(|offence| offence.statement_of_facts.clone()),
        statement_of_facts_welsh: first_offence
            .and_then(|offence| offence.statement_of_facts_welsh.clone()),
        is_civil: ctx.civil,
        group_id: case.group.as_ref().map(|group| group.group_id),
        is_group_master: case.is_group_master(),
        is_group_member: case.group.is_some(),
        fees: fee_records(case)?,
    })
}
