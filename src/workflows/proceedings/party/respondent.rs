use super::super::canonical::{Defendant, DefendantParty, RespondentIdentity, RespondentParty};

/// Defendants become application respondents with their identity carried over.
pub fn respondent_from_defendant(defendant: &Defendant, summons_required: bool) -> RespondentParty {
    let identity = match &defendant.party {
        DefendantParty::PersonDefendant(person) => {
            RespondentIdentity::PersonDetails(Box::new(person.person_details.clone()))
        }
        DefendantParty::LegalEntityDefendant(organisation) => {
            RespondentIdentity::LegalEntity(organisation.clone())
        }
    };

    RespondentParty {
        id: defendant.id,
        master_defendant_id: defendant.master_defendant_id,
        identity,
        summons_required,
        notification_required: true,
    }
}
