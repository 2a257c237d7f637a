use super::super::canonical::Defendant;
use super::super::commands::NotifyDefenceOfNewCase;
use super::super::domain::SubmittedCase;
use super::super::non_blank;

/// One notification per defendant whose defence organisation gave an email.
pub fn notifications(
    case: &SubmittedCase,
    defendants: &[Defendant],
) -> Vec<NotifyDefenceOfNewCase> {
    case.defendants
        .iter()
        .filter_map(|submitted| {
            let organisation = submitted.defence_organisation.as_ref()?;
            let defence_email = non_blank(organisation.email.as_deref())?;
            let defendant = defendants
                .iter()
                .find(|defendant| defendant.id == submitted.id)?;

            Some(NotifyDefenceOfNewCase {
                case_id: case.case_id,
                urn: case.urn.clone(),
                defendant_id: defendant.id,
                defendant_name: defendant.party.display_name(),
                defence_organisation: organisation.name.clone(),
                defence_email,
            })
        })
        .collect()
}
