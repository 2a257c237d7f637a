use super::super::commands::AddDefendantsToCourtProceedings;
use super::super::context::DerivationContext;
use super::super::domain::SubmittedCase;
use super::super::error::ConversionError;
use super::super::hearing::build_hearing_requests;
use super::super::party::build_defendants;
use super::require_defendants;
use crate::config::ConversionConfig;

/// Defendants submitted against a case already in progression. Only the new
/// defendants are converted and listed.
pub fn add_defendants(
    ctx: &DerivationContext<'_>,
    case: &SubmittedCase,
    config: &ConversionConfig,
) -> Result<AddDefendantsToCourtProceedings, ConversionError> {
    require_defendants(ctx, case)?;

    Ok(AddDefendantsToCourtProceedings {
        prosecution_case_id: case.case_id,
        defendants: build_defendants(ctx, &case.defendants)?,
        list_hearing_requests: build_hearing_requests(
            ctx,
            &case.defendants,
            config.default_hearing_minutes,
        )?,
    })
}
