use super::super::assembler::{box_hearing_request, build_court_application};
use super::super::commands::InitiateCourtApplicationProceedings;
use super::super::context::DerivationContext;
use super::super::domain::{InitiationCode, SubmittedCase};
use super::super::error::ConversionError;
use super::super::party::{build_defendants, resolve_case_identifier};
use super::require_defendants;
use crate::config::ConversionConfig;

/// Application proceedings listed at a box hearing ahead of the first hearing.
///
/// Summons approval is still required while no approved outcome has been
/// recorded against the case.
pub fn initiate_application_proceedings(
    ctx: &DerivationContext<'_>,
    case: &SubmittedCase,
    config: &ConversionConfig,
) -> Result<InitiateCourtApplicationProceedings, ConversionError> {
    let application = case.application.as_ref().ok_or_else(|| {
        ConversionError::missing_data(ctx.case_id, "no application details on the submission")
    })?;
    require_defendants(ctx, case)?;

    let summons_approval_required = ctx.summons_approved.is_none();
    let summons_required = ctx.initiation_code == InitiationCode::Summons;

    let defendants = build_defendants(ctx, &case.defendants)?;
    let identifier = resolve_case_identifier(ctx, case)?;
    let court_application = build_court_application(
        ctx,
        case,
        application,
        identifier,
        &defendants,
        summons_required,
    )?;
    let box_hearing = box_hearing_request(ctx, case, config.box_hearing_lead_days)?;

    Ok(InitiateCourtApplicationProceedings {
        court_application,
        box_hearing,
        summons_approval_required,
    })
}
