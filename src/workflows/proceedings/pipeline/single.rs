use tracing::debug;

use super::super::assembler::build_prosecution_case;
use super::super::commands::InitiateCourtProceedings;
use super::super::context::DerivationContext;
use super::super::domain::SubmittedCase;
use super::super::error::ConversionError;
use super::super::hearing::build_hearing_requests;
use super::super::party::build_defendants;
use super::require_defendants;
use crate::config::ConversionConfig;

/// One submitted case to one set of proceedings.
pub fn initiate_court_proceedings(
    ctx: &DerivationContext<'_>,
    case: &SubmittedCase,
    config: &ConversionConfig,
) -> Result<InitiateCourtProceedings, ConversionError> {
    require_defendants(ctx, case)?;

    let defendants = build_defendants(ctx, &case.defendants)?;
    let list_hearing_requests =
        build_hearing_requests(ctx, &case.defendants, config.default_hearing_minutes)?;
    let prosecution_case = build_prosecution_case(ctx, case, defendants)?;

    debug!(
        case_id = %case.case_id,
        defendants = prosecution_case.defendants.len(),
        hearings = list_hearing_requests.len(),
        "prosecution case assembled"
    );

    Ok(InitiateCourtProceedings {
        prosecution_case,
        list_hearing_requests,
    })
}
