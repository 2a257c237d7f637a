use super::super::commands::{
    CreateSjpCase, SjpDefendant, SjpDefendantIdentity, SjpGender, SjpOffence, SjpPerson,
};
use super::super::context::DerivationContext;
use super::super::domain::{SubmittedCase, SubmittedDefendant, SubmittedOffence};
use super::super::error::ConversionError;
use super::super::party::person::{parse_gender, resolve_nationality};
use super::super::party::resolve_case_identifier;

/// Single justice procedure cases are created from the first defendant only.
pub fn create_sjp_case(
    ctx: &DerivationContext<'_>,
    case: &SubmittedCase,
) -> Result<CreateSjpCase, ConversionError> {
    let defendant = case.defendants.first().ok_or_else(|| {
        ConversionError::missing_data(
            ctx.case_id,
            "single justice procedure case has no defendant",
        )
    })?;

    let identifier = resolve_case_identifier(ctx, case)?;
    let prosecuting_authority = identifier
        .prosecution_authority_code
        .unwrap_or(identifier.prosecution_authority_name);

    Ok(CreateSjpCase {
        case_id: case.case_id,
        urn: case.urn.clone(),
        prosecuting_authority,
        posting_date: case.posting_date,
        defendant: sjp_defendant(ctx, defendant)?,
    })
}

fn sjp_defendant(
    ctx: &DerivationContext<'_>,
    defendant: &SubmittedDefendant,
) -> Result<SjpDefendant, ConversionError> {
    let tables = &ctx.reference.tables;

    let individual = defendant.individual.as_ref();
    let (identity, nationality_code) = match (defendant.organisation_name(), individual) {
        (Some(name), _) => (SjpDefendantIdentity::LegalEntityName(name.to_string()), None),
        (None, Some(individual)) => {
            let gender = parse_gender(individual.gender.as_deref())?;
            let gender = SjpGender::try_from(gender)
                .map_err(|_| ConversionError::unsupported("gender", "NOT_SPECIFIED"))?;

            (
                SjpDefendantIdentity::Person(SjpPerson {
                    title: individual.title.clone(),
                    first_name: individual.forename.clone(),
                    last_name: individual.surname.clone(),
                    date_of_birth: individual.date_of_birth,
                    gender,
                    national_insurance_number: individual.national_insurance_number.clone(),
                    driver_number: individual.driver_number.clone(),
                }),
                resolve_nationality(tables, individual.nationality.as_deref())
                    .map(|nationality| nationality.code),
            )
        }
        (None, None) => {
            return Err(ConversionError::missing_data(
                ctx.case_id,
                format!(
                    "defendant {} has neither individual nor organisation details",
                    defendant.id
                ),
            ))
        }
    };

    Ok(SjpDefendant {
        id: defendant.id,
        identity,
        address: defendant.address.clone(),
        contact: defendant.contact.clone(),
        nationality_code,
        offences: defendant
            .offences
            .iter()
            .map(|offence| sjp_offence(ctx, offence))
            .collect(),
    })
}

fn sjp_offence(ctx: &DerivationContext<'_>, offence: &SubmittedOffence) -> SjpOffence {
    SjpOffence {
        id: offence.id,
        offence_code: offence.cjs_offence_code.clone(),
        wording: offence.wording.clone(),
        wording_welsh: offence.wording_welsh.clone(),
        committed_date: offence.committed_date,
        charge_date: offence.charge_date,
        laid_date: offence.laid_date,
        prosecution_facts: offence.statement_of_facts.clone(),
        endorsable: ctx
            .reference
            .offence(&offence.cjs_offence_code)
            .is_some_and(|metadata| metadata.endorsable),
    }
}
