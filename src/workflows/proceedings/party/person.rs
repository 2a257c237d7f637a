use chrono::NaiveDate;

use super::super::canonical::{BailStatus, Ethnicity, Gender, Nationality, Person};
use super::super::domain::{InitialHearing, ParentGuardian, SubmittedDefendant, SubmittedIndividual};
use super::super::error::ConversionError;
use super::super::hearing::language::language_needs;
use super::super::non_blank;
use super::super::reference::ReferenceTables;

const ADULT_AGE_YEARS: u32 = 18;

/// Join the second and third given names; `None` when neither is present.
pub fn middle_name(forename2: Option<&str>, forename3: Option<&str>) -> Option<String> {
    let parts: Vec<String> = [forename2, forename3]
        .into_iter()
        .filter_map(non_blank)
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Absent gender is recorded as not known; unrecognised values are fatal.
pub fn parse_gender(value: Option<&str>) -> Result<Gender, ConversionError> {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(Gender::NotKnown);
    };

    match raw.to_ascii_uppercase().as_str() {
        "M" | "MALE" | "1" => Ok(Gender::Male),
        "F" | "FEMALE" | "2" => Ok(Gender::Female),
        "0" | "NOT_KNOWN" => Ok(Gender::NotKnown),
        "9" | "NOT_SPECIFIED" => Ok(Gender::NotSpecified),
        _ => Err(ConversionError::unsupported("gender", raw)),
    }
}

/// Either half may resolve on its own; nothing resolved means no record.
pub fn resolve_ethnicity(
    tables: &ReferenceTables,
    self_defined: Option<&str>,
    observed: Option<i32>,
) -> Option<Ethnicity> {
    let self_defined = self_defined
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .and_then(|code| tables.self_defined_ethnicity(code));
    let observed = observed.and_then(|code| tables.observed_ethnicity(code));

    if self_defined.is_none() && observed.is_none() {
        return None;
    }

    Some(Ethnicity {
        self_defined_ethnicity_id: self_defined.map(|ethnicity| ethnicity.id),
        self_defined_ethnicity_code: self_defined.map(|ethnicity| ethnicity.code.clone()),
        self_defined_ethnicity_description: self_defined
            .map(|ethnicity| ethnicity.description.clone()),
        observed_ethnicity_id: observed.map(|ethnicity| ethnicity.id),
        observed_ethnicity_code: observed.map(|ethnicity| ethnicity.code.clone()),
        observed_ethnicity_description: observed.map(|ethnicity| ethnicity.description.clone()),
    })
}

pub fn resolve_nationality(tables: &ReferenceTables, value: Option<&str>) -> Option<Nationality> {
    let value = value.map(str::trim).filter(|value| !value.is_empty())?;
    tables.nationality(value).map(|nationality| Nationality {
        id: nationality.id,
        code: nationality.iso_code.clone(),
        description: nationality.description.clone(),
    })
}

pub fn resolve_bail_status(
    tables: &ReferenceTables,
    custody_status: Option<&str>,
) -> Option<BailStatus> {
    tables
        .bail_status(custody_status?)
        .map(|status| BailStatus {
            id: status.id,
            code: status.code.clone(),
            description: status.description.clone(),
        })
}

/// Under 18 in whole years on the day of the first hearing.
pub fn is_youth(
    date_of_birth: Option<NaiveDate>,
    initial_hearing: Option<&InitialHearing>,
) -> bool {
    let (Some(date_of_birth), Some(hearing_date)) = (
        date_of_birth,
        initial_hearing.and_then(InitialHearing::hearing_date),
    ) else {
        return false;
    };

    hearing_date
        .years_since(date_of_birth)
        .is_some_and(|years| years < ADULT_AGE_YEARS)
}

pub fn defendant_is_youth(defendant: &SubmittedDefendant) -> bool {
    if defendant.organisation_name().is_some() {
        return false;
    }

    defendant.individual.as_ref().is_some_and(|individual| {
        is_youth(individual.date_of_birth, defendant.initial_hearing.as_ref())
    })
}

pub(crate) fn person_from_individual(
    tables: &ReferenceTables,
    individual: &SubmittedIndividual,
    defendant: &SubmittedDefendant,
) -> Result<Person, ConversionError> {
    Ok(Person {
        title: individual.title.clone(),
        first_name: individual.forename.clone(),
        middle_name: middle_name(
            individual.forename2.as_deref(),
            individual.forename3.as_deref(),
        ),
        last_name: individual.surname.clone(),
        date_of_birth: individual.date_of_birth,
        gender: parse_gender(individual.gender.as_deref())?,
        address: defendant.address.clone(),
        contact: defendant.contact.clone(),
        ethnicity: resolve_ethnicity(
            tables,
            individual.self_defined_ethnicity.as_deref(),
            individual.observed_ethnicity,
        ),
        nationality: resolve_nationality(tables, individual.nationality.as_deref()),
        additional_nationality: resolve_nationality(
            tables,
            individual.additional_nationality.as_deref(),
        ),
        documentation_language_needs: defendant
            .language_requirement
            .as_deref()
            .and_then(language_needs)
            .map(|needs| needs.documentation),
        national_insurance_number: individual.national_insurance_number.clone(),
        occupation: individual.occupation.clone(),
    })
}

pub(crate) fn person_from_parent(parent: &ParentGuardian) -> Result<Person, ConversionError> {
    Ok(Person {
        title: parent.title.clone(),
        first_name: parent.forename.clone(),
        middle_name: middle_name(parent.forename2.as_deref(), parent.forename3.as_deref()),
        last_name: parent.surname.clone(),
        date_of_birth: parent.date_of_birth,
        gender: parse_gender(parent.gender.as_deref())?,
        address: parent.address.clone(),
        contact: parent.contact.clone(),
        ethnicity: None,
        nationality: None,
        additional_nationality: None,
        documentation_language_needs: None,
        national_insurance_number: None,
        occupation: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hearing_on(date: &str) -> InitialHearing {
        InitialHearing {
            date_of_hearing: Some(date.to_string()),
            ..InitialHearing::default()
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn youth_boundary_is_the_eighteenth_birthday() {
        let hearing = hearing_on("2024-03-15");

        assert!(is_youth(Some(date(2006, 3, 16)), Some(&hearing)));
        assert!(!is_youth(Some(date(2006, 3, 15)), Some(&hearing)));
    }

    #[test]
    fn youth_requires_both_dates() {
        assert!(!is_youth(None, Some(&hearing_on("2024-03-15"))));
        assert!(!is_youth(Some(date(2010, 1, 1)), None));
        assert!(!is_youth(Some(date(2010, 1, 1)), Some(&InitialHearing::default())));
    }

    #[test]
    fn middle_name_is_omitted_or_joined() {
        assert_eq!(middle_name(None, None), None);
        assert_eq!(middle_name(Some("  "), None), None);
        assert_eq!(middle_name(Some("Ann"), None).as_deref(), Some("Ann"));
        assert_eq!(middle_name(None, Some(" Marie ")).as_deref(), Some("Marie"));
        assert_eq!(
            middle_name(Some("Ann"), Some("Marie")).as_deref(),
            Some("Ann Marie")
        );
    }

    #[test]
    fn gender_codes_map_and_unknown_values_fail() {
        assert_eq!(parse_gender(Some("m")).expect("male"), Gender::Male);
        assert_eq!(parse_gender(Some("2")).expect("female"), Gender::Female);
        assert_eq!(parse_gender(None).expect("absent"), Gender::NotKnown);
        assert_eq!(
            parse_gender(Some("not_specified")).expect("not specified"),
            Gender::NotSpecified
        );

        let error = parse_gender(Some("X")).expect_err("unknown gender rejected");
        assert!(error.to_string().contains("'X'"));
    }
}
