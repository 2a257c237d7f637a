use tracing::debug;

use super::super::canonical::{CommittingCourt, CourtCentre, CourtHouseType};
use super::super::context::DerivationContext;
use super::super::error::ConversionError;
use super::super::reference::{OrganisationUnit, MAGISTRATES_LEVEL_ONE_CODE};

pub(crate) fn court_centre_from_unit(unit: &OrganisationUnit) -> CourtCentre {
    CourtCentre {
        id: unit.id,
        name: unit.level3_name.clone(),
        welsh_name: unit.level3_welsh_name.clone(),
        code: unit
            .court_location_code
            .clone()
            .or_else(|| unit.lja.clone()),
        room_id: None,
        room_name: None,
    }
}

/// Court the case was received from, classified by organisation level.
pub(crate) fn committing_court(
    ctx: &DerivationContext<'_>,
) -> Result<Option<CommittingCourt>, ConversionError> {
    let Some(code) = ctx.received_from_court_code else {
        return Ok(None);
    };

    let unit = ctx.accessor.organisation_units(code)?.into_iter().next();
    if unit.is_none() {
        debug!(case_id = %ctx.case_id, court_code = code, "committing court not in reference data");
    }

    Ok(unit.map(|unit| CommittingCourt {
        court_house_type: if unit.is_level_one(MAGISTRATES_LEVEL_ONE_CODE) {
            CourtHouseType::Magistrates
        } else {
            CourtHouseType::Crown
        },
        court_house_code: unit.oucode.clone(),
        court_house_name: unit.level3_name.clone(),
        court_centre_id: unit.id,
    }))
}

pub(crate) fn convicting_court(
    ctx: &DerivationContext<'_>,
    court_code: &str,
) -> Result<Option<CourtCentre>, ConversionError> {
    let unit = ctx
        .accessor
        .organisation_units(court_code.trim())?
        .into_iter()
        .next();
    if unit.is_none() {
        debug!(case_id = %ctx.case_id, court_code, "convicting court not in reference data");
    }

    Ok(unit.as_ref().map(court_centre_from_unit))
}
