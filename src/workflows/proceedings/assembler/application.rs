use chrono::{Duration, NaiveDate};
use tracing::debug;

use super::super::canonical::{
    ApplicationStatus, BoxHearingRequest, CourtApplication, CourtApplicationCase,
    CourtApplicationType, Defendant, ProsecutionCaseIdentifier,
};
use super::super::context::DerivationContext;
use super::super::domain::{SubmissionChannel, SubmittedApplication, SubmittedCase};
use super::super::error::ConversionError;
use super::super::hearing::{originating_court, timing};
use super::super::party::{applicant_from_identifier, respondent_from_defendant};
use super::super::reference::ApplicationTypeReference;
use super::case_markers;

/// Court application raised on behalf of the prosecutor against every
/// defendant of the case. The first defendant is the subject.
pub fn build_court_application(
    ctx: &DerivationContext<'_>,
    case: &SubmittedCase,
    application: &SubmittedApplication,
    identifier: ProsecutionCaseIdentifier,
    defendants: &[Defendant],
    summons_required: bool,
) -> Result<CourtApplication, ConversionError> {
    let application_type = application_type(ctx, application)?;

    let respondents: Vec<_> = defendants
        .iter()
        .map(|defendant| respondent_from_defendant(defendant, summons_required))
        .collect();
    let subject = respondents.first().cloned().ok_or_else(|| {
        ConversionError::missing_data(
            ctx.case_id,
            "application has no defendant to name as subject",
        )
    })?;

    let offence_ids = defendants
        .iter()
        .flat_map(|defendant| defendant.offences.iter())
        .map(|offence| offence.id)
        .collect();

    Ok(CourtApplication {
        id: application.application_id,
        application_type: CourtApplicationType {
            id: application_type.id,
            code: application_type.code,
            application_type: application_type.application_type,
            legislation: application_type.legislation,
            link_type: application_type.link_type,
        },
        application_received_date: application.received_date,
        application_reference: application.application_reference.clone(),
        application_particulars: application.particulars.clone(),
        applicant: applicant_from_identifier(application.application_id, &identifier),
        subject,
        respondents,
        application_status: ApplicationStatus::Draft,
        court_application_cases: vec![CourtApplicationCase {
            prosecution_case_id: case.case_id,
            prosecution_case_identifier: identifier,
            is_sjp: ctx.channel == SubmissionChannel::SingleJusticeProcedure,
            offence_ids,
        }],
        case_markers: case_markers(&ctx.reference.tables, case.case_id, &case.case_marker_codes),
    })
}

fn application_type(
    ctx: &DerivationContext<'_>,
    application: &SubmittedApplication,
) -> Result<ApplicationTypeReference, ConversionError> {
    if let Some(id) = application.application_type_id {
        return ctx.accessor.application_type(id)?.ok_or_else(|| {
            ConversionError::missing_reference(
                ctx.case_id,
                format!("application type {id} not found"),
            )
        });
    }

    ctx.accessor
        .first_hearing_application_type()?
        .ok_or_else(|| ConversionError::ReferenceInvariant {
            cause: "no first-hearing application type configured".to_string(),
        })
}

/// Box hearing at the originating court. The application is due `lead_days`
/// before the first hearing, but never before today.
pub fn box_hearing_request(
    ctx: &DerivationContext<'_>,
    case: &SubmittedCase,
    lead_days: i64,
) -> Result<BoxHearingRequest, ConversionError> {
    let hearing_date = box_hearing_date(case).ok_or_else(|| {
        ConversionError::missing_data(
            ctx.case_id,
            "no defendant initial hearing to schedule the box hearing from",
        )
    })?;

    let (court_centre, jurisdiction_type) = originating_court(ctx)?;
    let application_due_date =
        application_due_date(hearing_date, lead_days, ctx.now.date_naive())?;
    debug!(
        case_id = %ctx.case_id,
        %hearing_date,
        %application_due_date,
        "box hearing due date"
    );

    Ok(BoxHearingRequest {
        court_centre,
        jurisdiction_type,
        application_due_date,
    })
}

fn box_hearing_date(case: &SubmittedCase) -> Option<NaiveDate> {
    timing::first_hearing_start(&case.defendants)
        .map(|start| start.date_naive())
        .or_else(|| {
            case.defendants
                .iter()
                .filter_map(|defendant| defendant.initial_hearing.as_ref())
                .find_map(|hearing| hearing.hearing_date())
        })
}

pub(crate) fn application_due_date(
    hearing_date: NaiveDate,
    lead_days: i64,
    today: NaiveDate,
) -> Result<NaiveDate, ConversionError> {
    if lead_days < 0 {
        return Err(ConversionError::configuration(format!(
            "box hearing lead days must not be negative, got {lead_days}"
        )));
    }

    let due = Duration::try_days(lead_days)
        .and_then(|lead| hearing_date.checked_sub_signed(lead))
        .ok_or_else(|| {
            ConversionError::configuration(format!(
                "box hearing lead of {lead_days} days falls outside the calendar"
            ))
        })?;
    Ok(due.max(today))
}
