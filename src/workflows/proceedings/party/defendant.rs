use super::super::canonical::{
    Alias, AssociatedPerson, AssociatedRole, Defendant, DefendantParty, Organisation,
    PersonDefendant,
};
use super::super::context::DerivationContext;
use super::super::domain::{SubmittedAlias, SubmittedDefendant};
use super::super::error::ConversionError;
use super::super::offence::derive_offences;
use super::person::{
    defendant_is_youth, middle_name, person_from_individual, person_from_parent,
    resolve_bail_status,
};

pub fn build_defendant(
    ctx: &DerivationContext<'_>,
    raw: &SubmittedDefendant,
) -> Result<Defendant, ConversionError> {
    let tables = &ctx.reference.tables;

    let (party, associated_persons) = match (raw.organisation_name(), raw.individual.as_ref()) {
        (Some(name), _) => (
            DefendantParty::LegalEntityDefendant(Box::new(Organisation {
                name: name.to_string(),
                address: raw.address.clone(),
                contact: raw.contact.clone(),
            })),
            Vec::new(),
        ),
        (None, Some(individual)) => {
            let person_details = person_from_individual(tables, individual, raw)?;
            let associated_persons = match individual.parent_guardian.as_ref() {
                Some(parent) => vec![AssociatedPerson {
                    person: person_from_parent(parent)?,
                    role: AssociatedRole::ParentGuardian,
                }],
                None => Vec::new(),
            };

            (
                DefendantParty::PersonDefendant(Box::new(PersonDefendant {
                    person_details,
                    bail_status: resolve_bail_status(tables, raw.custody_status.as_deref()),
                    arrest_summons_number: individual.arrest_summons_number.clone(),
                    driver_number: individual.driver_number.clone(),
                    pnc_id: individual.pnc_id.clone(),
                })),
                associated_persons,
            )
        }
        (None, None) => {
            return Err(ConversionError::missing_data(
                ctx.case_id,
                format!(
                    "defendant {} has neither individual nor organisation details",
                    raw.id
                ),
            ))
        }
    };

    Ok(Defendant {
        id: raw.id,
        master_defendant_id: raw.id,
        prosecution_case_id: ctx.case_id,
        prosecution_authority_reference: raw.prosecutor_defendant_reference.clone(),
        party,
        aliases: raw.aliases.iter().map(alias).collect(),
        associated_persons,
        offences: derive_offences(ctx, &raw.offences)?,
        is_youth: defendant_is_youth(raw),
    })
}

pub fn build_defendants(
    ctx: &DerivationContext<'_>,
    defendants: &[SubmittedDefendant],
) -> Result<Vec<Defendant>, ConversionError> {
    defendants
        .iter()
        .map(|defendant| build_defendant(ctx, defendant))
        .collect()
}

fn alias(raw: &SubmittedAlias) -> Alias {
    Alias {
        title: raw.title.clone(),
        first_name: raw.forename.clone(),
        middle_name: middle_name(raw.forename2.as_deref(), raw.forename3.as_deref()),
        last_name: raw.surname.clone(),
        legal_entity_name: raw.organisation_name.clone(),
    }
}
