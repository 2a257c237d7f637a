use pretty_assertions::assert_eq;

use super::common::*;
use crate::workflows::proceedings::canonical::{
    AssociatedRole, Defendant, DefendantParty, Ethnicity, Gender, Language, PersonDefendant,
};
use crate::workflows::proceedings::context::{ConversionParameters, DerivationContext};
use crate::workflows::proceedings::domain::{
    ParentGuardian, SubmittedAlias, SubmittedCase, SubmittedDefendant, SubmittedProsecutor,
};
use crate::workflows::proceedings::error::ConversionError;
use crate::workflows::proceedings::party::{
    build_defendant, resolve_case_identifier, resolve_ethnicity, resolve_nationality,
};

fn build(
    case: &SubmittedCase,
    defendant: &SubmittedDefendant,
) -> Result<Defendant, ConversionError> {
    let accessor = reference_data();
    let bundle = bundle_for(case, &accessor);
    let ctx = DerivationContext::build(case, &bundle, &accessor, &ConversionParameters::at(now()));
    build_defendant(&ctx, defendant)
}

fn person_defendant(defendant: &Defendant) -> &PersonDefendant {
    defendant
        .party
        .person()
        .unwrap_or_else(|| panic!("expected person defendant, got {:?}", defendant.party))
}

#[test]
fn ethnicity_halves_resolve_independently() {
    let tables = tables();

    let self_defined_only = resolve_ethnicity(&tables, Some("w1"), None).expect("ethnicity");
    assert_eq!(
        self_defined_only,
        Ethnicity {
            self_defined_ethnicity_id: Some(id(0x1001)),
            self_defined_ethnicity_code: Some("W1".to_string()),
            self_defined_ethnicity_description: Some("White - British".to_string()),
            ..Ethnicity::default()
        }
    );

    let observed_only = resolve_ethnicity(&tables, Some("ZZ"), Some(1)).expect("ethnicity");
    assert_eq!(observed_only.self_defined_ethnicity_id, None);
    assert_eq!(observed_only.observed_ethnicity_code.as_deref(), Some("01"));

    assert_eq!(resolve_ethnicity(&tables, None, None), None);
    assert_eq!(resolve_ethnicity(&tables, Some("ZZ"), Some(42)), None);
}

#[test]
fn nationality_matches_iso_or_cjs_code() {
    let tables = tables();

    let by_cjs = resolve_nationality(&tables, Some("UK")).expect("by cjs code");
    assert_eq!(by_cjs.code, "GBR");
    assert_eq!(resolve_nationality(&tables, Some("GBR")), Some(by_cjs));
    assert_eq!(resolve_nationality(&tables, Some("FRA")), None);
    assert_eq!(resolve_nationality(&tables, None), None);
}

#[test]
fn individual_becomes_person_defendant() {
    let submitted = magistrates_trial_case();
    let mut raw = defendant();
    raw.custody_status = Some("C".to_string());
    raw.language_requirement = Some("W".to_string());
    if let Some(individual) = raw.individual.as_mut() {
        individual.forename2 = Some("Ann".to_string());
        individual.nationality = Some("UK".to_string());
        individual.self_defined_ethnicity = Some("W1".to_string());
    }

    let built = build(&submitted, &raw).expect("defendant builds");
    let person = person_defendant(&built);

    assert_eq!(built.id, defendant_id());
    assert_eq!(built.master_defendant_id, defendant_id());
    assert_eq!(built.prosecution_case_id, case_id());
    assert_eq!(
        built.prosecution_authority_reference.as_deref(),
        Some("TFL-0001")
    );
    assert_eq!(person.person_details.first_name, "Jane");
    assert_eq!(person.person_details.middle_name.as_deref(), Some("Ann"));
    assert_eq!(person.person_details.gender, Gender::Female);
    assert_eq!(
        person.person_details.documentation_language_needs,
        Some(Language::Welsh)
    );
    assert_eq!(
        person
            .person_details
            .nationality
            .as_ref()
            .map(|nationality| nationality.code.as_str()),
        Some("GBR")
    );
    assert_eq!(
        person
            .bail_status
            .as_ref()
            .map(|status| status.description.as_str()),
        Some("Custody")
    );
    assert!(!built.is_youth);
    assert_eq!(built.offences.len(), 1);
}

#[test]
fn bail_status_requires_exact_code() {
    let submitted = magistrates_trial_case();
    let mut raw = defendant();
    raw.custody_status = Some("c".to_string());

    let built = build(&submitted, &raw).expect("defendant builds");
    assert_eq!(person_defendant(&built).bail_status, None);
}

#[test]
fn organisation_name_wins_over_individual() {
    let submitted = magistrates_trial_case();
    let mut raw = defendant();
    raw.organisation_name = Some("Acme Haulage Ltd".to_string());

    let built = build(&submitted, &raw).expect("defendant builds");
    match &built.party {
        DefendantParty::LegalEntityDefendant(organisation) => {
            assert_eq!(organisation.name, "Acme Haulage Ltd")
        }
        other => panic!("expected legal entity, got {other:?}"),
    }
    assert!(!built.is_youth);

    let json = serde_json::to_value(&built).expect("serialize defendant");
    assert!(json.get("legalEntityDefendant").is_some());
    assert!(json.get("personDefendant").is_none());
}

#[test]
fn defendant_without_identity_is_missing_data() {
    let submitted = magistrates_trial_case();
    let mut raw = defendant();
    raw.individual = None;
    raw.organisation_name = Some("   ".to_string());

    match build(&submitted, &raw) {
        Err(ConversionError::MissingData { case_id: failed, .. }) => assert_eq!(failed, case_id()),
        other => panic!("expected missing data, got {other:?}"),
    }
}

#[test]
fn unsupported_gender_fails_the_defendant() {
    let submitted = magistrates_trial_case();
    let mut raw = defendant();
    if let Some(individual) = raw.individual.as_mut() {
        individual.gender = Some("X".to_string());
    }

    match build(&submitted, &raw) {
        Err(ConversionError::Unsupported { field, value }) => {
            assert_eq!(field, "gender");
            assert_eq!(value, "X");
        }
        other => panic!("expected unsupported gender, got {other:?}"),
    }
}

#[test]
fn youth_flag_turns_on_the_eighteenth_birthday() {
    let submitted = magistrates_trial_case();

    let mut day_before = defendant();
    if let Some(individual) = day_before.individual.as_mut() {
        individual.date_of_birth = Some(date(2006, 3, 21));
    }
    assert!(build(&submitted, &day_before).expect("builds").is_youth);

    let mut birthday = defendant();
    if let Some(individual) = birthday.individual.as_mut() {
        individual.date_of_birth = Some(date(2006, 3, 20));
    }
    assert!(!build(&submitted, &birthday).expect("builds").is_youth);

    let mut no_hearing = day_before.clone();
    no_hearing.initial_hearing = None;
    assert!(!build(&submitted, &no_hearing).expect("builds").is_youth);
}

#[test]
fn parent_guardian_and_aliases_are_carried() {
    let submitted = magistrates_trial_case();
    let mut raw = defendant();
    raw.aliases = vec![SubmittedAlias {
        forename: Some("Janet".to_string()),
        forename3: Some("Lee".to_string()),
        surname: Some("Doe".to_string()),
        ..SubmittedAlias::default()
    }];
    if let Some(individual) = raw.individual.as_mut() {
        individual.date_of_birth = Some(date(2010, 1, 1));
        individual.parent_guardian = Some(ParentGuardian {
            forename: "John".to_string(),
            surname: "Doe".to_string(),
            gender: Some("M".to_string()),
            ..ParentGuardian::default()
        });
    }

    let built = build(&submitted, &raw).expect("defendant builds");

    assert!(built.is_youth);
    assert_eq!(built.aliases.len(), 1);
    assert_eq!(built.aliases[0].middle_name.as_deref(), Some("Lee"));
    assert_eq!(built.associated_persons.len(), 1);
    assert_eq!(
        built.associated_persons[0].role,
        AssociatedRole::ParentGuardian
    );
    assert_eq!(built.associated_persons[0].person.first_name, "John");
    assert_eq!(built.associated_persons[0].person.gender, Gender::Male);
}

#[test]
fn embedded_prosecutor_needs_no_lookup() {
    let mut submitted = magistrates_trial_case();
    submitted.prosecutor = SubmittedProsecutor {
        prosecution_authority_code: Some("DVLA".to_string()),
        prosecution_authority_name: Some("Driver and Vehicle Licensing Agency".to_string()),
        informant: Some("Officer 12".to_string()),
        ..SubmittedProsecutor::default()
    };
    let accessor = RecordingAccessor::new(reference_data());
    let bundle = bundle_for(&submitted, &accessor);
    let parameters = ConversionParameters::at(now());
    let ctx = DerivationContext::build(&submitted, &bundle, &accessor, &parameters);

    let identifier = resolve_case_identifier(&ctx, &submitted).expect("identifier");

    assert_eq!(
        identifier.prosecution_authority_code.as_deref(),
        Some("DVLA")
    );
    assert_eq!(identifier.case_urn, "TFL24000001");
    assert_eq!(identifier.informant.as_deref(), Some("Officer 12"));
    assert!(accessor
        .calls()
        .iter()
        .all(|call| !call.starts_with("prosecutor")));
}

#[test]
fn prosecutor_lookup_falls_back_from_id_to_ou_code() {
    let mut submitted = magistrates_trial_case();
    submitted.prosecutor = SubmittedProsecutor {
        prosecution_authority_id: Some(id(0xDEAD)),
        prosecution_authority_ou_code: Some("GAFTL00".to_string()),
        ..SubmittedProsecutor::default()
    };
    let accessor = RecordingAccessor::new(reference_data());
    let bundle = bundle_for(&submitted, &accessor);
    let parameters = ConversionParameters::at(now());
    let ctx = DerivationContext::build(&submitted, &bundle, &accessor, &parameters);

    let identifier = resolve_case_identifier(&ctx, &submitted).expect("identifier");

    assert_eq!(identifier.prosecution_authority_id, Some(prosecutor().id));
    assert_eq!(
        identifier.prosecution_authority_name,
        "Transport for London"
    );
    assert_eq!(
        identifier
            .contact
            .as_ref()
            .and_then(|contact| contact.primary_email.as_deref()),
        Some("prosecutions@tfl.example")
    );
    let calls = accessor.calls();
    assert!(calls.contains(&format!("prosecutor_by_id:{}", id(0xDEAD))));
    assert!(calls.contains(&"prosecutor_by_ou_code:GAFTL00".to_string()));
}

#[test]
fn unresolvable_prosecutor_is_missing_reference_data() {
    let mut submitted = magistrates_trial_case();
    submitted.prosecutor = SubmittedProsecutor::default();
    let accessor = reference_data();
    let bundle = bundle_for(&submitted, &accessor);
    let parameters = ConversionParameters::at(now());
    let ctx = DerivationContext::build(&submitted, &bundle, &accessor, &parameters);

    match resolve_case_identifier(&ctx, &submitted) {
        Err(ConversionError::MissingReferenceData { case_id: failed, .. }) => {
            assert_eq!(failed, case_id())
        }
        other => panic!("expected missing reference data, got {other:?}"),
    }
}
