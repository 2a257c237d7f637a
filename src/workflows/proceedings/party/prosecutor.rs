use tracing::debug;
use uuid::Uuid;

use super::super::canonical::{ApplicantParty, ProsecutingAuthority, ProsecutionCaseIdentifier};
use super::super::context::DerivationContext;
use super::super::domain::{ContactDetails, SubmittedCase};
use super::super::error::ConversionError;
use super::super::reference::ProsecutorReference;

/// Resolve the prosecuting authority: embedded details first, then a lookup
/// by authority id, then by organisation-unit code.
pub fn resolve_case_identifier(
    ctx: &DerivationContext<'_>,
    case: &SubmittedCase,
) -> Result<ProsecutionCaseIdentifier, ConversionError> {
    let submitted = &case.prosecutor;

    if submitted.is_embedded() {
        return Ok(ProsecutionCaseIdentifier {
            prosecution_authority_id: submitted.prosecution_authority_id,
            prosecution_authority_code: submitted.prosecution_authority_code.clone(),
            prosecution_authority_name: submitted
                .prosecution_authority_name
                .clone()
                .unwrap_or_default(),
            prosecution_authority_ou_code: submitted.prosecution_authority_ou_code.clone(),
            case_urn: case.urn.clone(),
            address: submitted.address.clone(),
            contact: submitted.contact.clone(),
            informant: submitted.informant.clone(),
        });
    }

    let by_id = match submitted.prosecution_authority_id {
        Some(id) => ctx.accessor.prosecutor_by_id(id)?,
        None => None,
    };

    let reference = match by_id {
        Some(reference) => Some(reference),
        None => {
            let oucode = submitted
                .prosecution_authority_ou_code
                .as_deref()
                .unwrap_or(ctx.originating_court_code);
            debug!(case_id = %ctx.case_id, oucode, "resolving prosecutor by organisation unit");
            ctx.accessor.prosecutor_by_ou_code(oucode)?
        }
    };

    let reference = reference.ok_or_else(|| {
        ConversionError::missing_reference(ctx.case_id, "prosecuting authority not found")
    })?;

    Ok(identifier_from_reference(case, reference))
}

fn identifier_from_reference(
    case: &SubmittedCase,
    reference: ProsecutorReference,
) -> ProsecutionCaseIdentifier {
    ProsecutionCaseIdentifier {
        prosecution_authority_id: Some(reference.id),
        prosecution_authority_code: Some(reference.short_name),
        prosecution_authority_name: reference.full_name,
        prosecution_authority_ou_code: reference.oucode,
        case_urn: case.urn.clone(),
        address: reference.address,
        contact: reference.contact_email.map(|email| ContactDetails {
            primary_email: Some(email),
            ..ContactDetails::default()
        }),
        informant: case.prosecutor.informant.clone(),
    }
}

/// Applicant id is a name-based UUID under the application id.
pub fn applicant_from_identifier(
    application_id: Uuid,
    identifier: &ProsecutionCaseIdentifier,
) -> ApplicantParty {
    let prosecuting_authority = ProsecutingAuthority {
        prosecution_authority_id: identifier.prosecution_authority_id,
        prosecution_authority_code: identifier.prosecution_authority_code.clone(),
        name: identifier.prosecution_authority_name.clone(),
        address: identifier.address.clone(),
        contact: identifier.contact.clone(),
    };

    ApplicantParty {
        id: Uuid::new_v5(&application_id, b"applicant"),
        prosecuting_authority,
    }
}
