//! Listing requests for the first hearing.
//!
//! A magistrates' submission may carry an explicit new-hearing request. When
//! no defendant has initial-hearing data that request replaces the derived
//! one; otherwise it is listed in addition to it.

pub mod language;
pub mod timing;

use chrono::Duration;
use tracing::debug;

use super::canonical::{
    CourtCentre, HearingRequest, HearingType, JurisdictionType, ListDefendantRequest,
    SummonsRequired,
};
use super::context::DerivationContext;
use super::domain::{ExplicitHearingRequest, SubmittedDefendant};
use super::error::ConversionError;
use super::offence::court_centre_from_unit;
use super::reference::CROWN_LEVEL_ONE_CODE;

pub fn build_hearing_requests(
    ctx: &DerivationContext<'_>,
    defendants: &[SubmittedDefendant],
    default_minutes: u32,
) -> Result<Vec<HearingRequest>, ConversionError> {
    let explicit = ctx.new_hearing.filter(|_| ctx.is_magistrates_submission());
    let has_initial_hearing = defendants
        .iter()
        .any(|defendant| defendant.initial_hearing.is_some());

    if let Some(explicit) = explicit {
        if !has_initial_hearing {
            debug!(case_id = %ctx.case_id, "listing from explicit hearing request only");
            return Ok(vec![explicit_request(ctx, explicit, default_minutes)]);
        }
    }

    let mut requests = vec![standard_request(ctx, defendants, default_minutes)?];
    if let Some(explicit) = explicit {
        requests.push(explicit_request(ctx, explicit, default_minutes));
    }

    Ok(requests)
}

/// Originating court as a court centre, with the jurisdiction it lists in.
pub(crate) fn originating_court(
    ctx: &DerivationContext<'_>,
) -> Result<(CourtCentre, JurisdictionType), ConversionError> {
    let unit = ctx.reference.organisation_unit.as_ref().ok_or_else(|| {
        ConversionError::missing_reference(
            ctx.case_id,
            format!(
                "no organisation unit for court {}",
                ctx.originating_court_code
            ),
        )
    })?;

    let mut court_centre = court_centre_from_unit(unit);
    if let Some(room) = unit.court_room.as_ref() {
        court_centre.room_id = Some(room.id);
        court_centre.room_name = Some(room.name.clone());
    }

    let crown = ctx.is_magistrates_submission() && unit.is_level_one(CROWN_LEVEL_ONE_CODE);
    let jurisdiction = if crown {
        JurisdictionType::Crown
    } else {
        JurisdictionType::Magistrates
    };

    Ok((court_centre, jurisdiction))
}

fn standard_request(
    ctx: &DerivationContext<'_>,
    defendants: &[SubmittedDefendant],
    default_minutes: u32,
) -> Result<HearingRequest, ConversionError> {
    let (mut court_centre, jurisdiction_type) = originating_court(ctx)?;

    let first_hearing = defendants
        .first()
        .and_then(|defendant| defendant.initial_hearing.as_ref());
    if let Some(hearing) = first_hearing {
        if hearing.court_room_id.is_some() || hearing.court_room_name.is_some() {
            court_centre.room_id = hearing.court_room_id;
            court_centre.room_name = hearing.court_room_name.clone();
        }
    }

    let hearing_type = ctx.reference.tables.hearing_type.as_ref().ok_or_else(|| {
        ConversionError::missing_reference(ctx.case_id, "no hearing type configured")
    })?;

    let estimated_minutes = first_hearing
        .and_then(|hearing| hearing.hearing_duration_minutes)
        .or(hearing_type.default_duration_minutes)
        .unwrap_or(default_minutes);

    let listed_start_date_time = timing::first_hearing_start(defendants);
    let listed_end_date_time = listed_start_date_time
        .map(|start| start + Duration::minutes(i64::from(estimated_minutes)));

    Ok(HearingRequest {
        court_centre,
        hearing_type: HearingType {
            id: hearing_type.id,
            description: hearing_type.description.clone(),
        },
        jurisdiction_type,
        estimated_minutes,
        listed_start_date_time,
        listed_end_date_time,
        earliest_start_date_time: None,
        end_date: None,
        booked_slots: Vec::new(),
        priority: None,
        special_requirements: Vec::new(),
        defendant_listing_needs: defendants
            .iter()
            .map(|defendant| listing_needs(ctx, defendant))
            .collect(),
    })
}

fn listing_needs(
    ctx: &DerivationContext<'_>,
    defendant: &SubmittedDefendant,
) -> ListDefendantRequest {
    ListDefendantRequest {
        prosecution_case_id: ctx.case_id,
        defendant_id: defendant.id,
        offence_ids: defendant.offences.iter().map(|offence| offence.id).collect(),
        hearing_language_needs: defendant
            .language_requirement
            .as_deref()
            .and_then(language::language_needs)
            .map(|needs| needs.hearing),
        summons_required: Some(SummonsRequired::FirstHearing),
        summons_approved_outcome: ctx.summons_approved.cloned(),
    }
}

fn explicit_request(
    ctx: &DerivationContext<'_>,
    explicit: &ExplicitHearingRequest,
    default_minutes: u32,
) -> HearingRequest {
    let estimated_minutes = explicit
        .estimated_minutes
        .or_else(|| {
            ctx.reference
                .tables
                .hearing_type
                .as_ref()
                .and_then(|hearing_type| hearing_type.default_duration_minutes)
        })
        .unwrap_or(default_minutes);

    HearingRequest {
        court_centre: explicit.court_centre.clone(),
        hearing_type: explicit.hearing_type.clone(),
        jurisdiction_type: explicit.jurisdiction_type,
        estimated_minutes,
        listed_start_date_time: explicit.listed_start_date_time,
        listed_end_date_time: None,
        earliest_start_date_time: explicit.earliest_start_date_time,
        end_date: explicit.end_date,
        booked_slots: explicit.booked_slots.clone(),
        priority: explicit.priority.clone(),
        special_requirements: explicit.special_requirements.clone(),
        defendant_listing_needs: explicit
            .defendant_listing_needs
            .iter()
            .map(|needs| ListDefendantRequest {
                prosecution_case_id: ctx.case_id,
                ..needs.clone()
            })
            .collect(),
    }
}
