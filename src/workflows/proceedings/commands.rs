use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::canonical::{
    BoxHearingRequest, CourtApplication, Defendant, Gender, HearingRequest, ProsecutionCase,
};
use super::domain::{Address, ContactDetails};

/// Single case sent to court progression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateCourtProceedings {
    pub prosecution_case: ProsecutionCase,
    pub list_hearing_requests: Vec<HearingRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateCourtProceedingsForGroupCases {
    pub group_id: Uuid,
    pub master_case_id: Uuid,
    pub prosecution_cases: Vec<ProsecutionCase>,
    pub list_hearing_requests: Vec<HearingRequest>,
}

/// Application raised ahead of a box hearing, e.g. summons pre-approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateCourtApplicationProceedings {
    pub court_application: CourtApplication,
    pub box_hearing: BoxHearingRequest,
    pub summons_approval_required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDefendantsToCourtProceedings {
    pub prosecution_case_id: Uuid,
    pub defendants: Vec<Defendant>,
    pub list_hearing_requests: Vec<HearingRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSjpCase {
    pub case_id: Uuid,
    pub urn: String,
    pub prosecuting_authority: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posting_date: Option<NaiveDate>,
    pub defendant: SjpDefendant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SjpGender {
    Male,
    Female,
    NotKnown,
}

impl TryFrom<Gender> for SjpGender {
    type Error = Gender;

    fn try_from(value: Gender) -> Result<Self, Self::Error> {
        match value {
            Gender::Male => Ok(Self::Male),
            Gender::Female => Ok(Self::Female),
            Gender::NotKnown => Ok(Self::NotKnown),
            Gender::NotSpecified => Err(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SjpPerson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    pub gender: SjpGender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_insurance_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SjpDefendantIdentity {
    Person(SjpPerson),
    LegalEntityName(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SjpOffence {
    pub id: Uuid,
    pub offence_code: String,
    pub wording: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wording_welsh: Option<String>,
    pub committed_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laid_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prosecution_facts: Option<String>,
    #[serde(default)]
    pub endorsable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SjpDefendant {
    pub id: Uuid,
    #[serde(flatten)]
    pub identity: SjpDefendantIdentity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality_code: Option<String>,
    pub offences: Vec<SjpOffence>,
}

/// Tells the defence organisation named on the submission about the new case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyDefenceOfNewCase {
    pub case_id: Uuid,
    pub urn: String,
    pub defendant_id: Uuid,
    pub defendant_name: String,
    pub defence_organisation: String,
    pub defence_email: String,
}

/// Everything a single submission can turn into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum ProceedingsCommand {
    InitiateCourtProceedings(Box<InitiateCourtProceedings>),
    InitiateCourtProceedingsForGroupCases(InitiateCourtProceedingsForGroupCases),
    InitiateCourtApplicationProceedings(Box<InitiateCourtApplicationProceedings>),
    AddDefendantsToCourtProceedings(AddDefendantsToCourtProceedings),
    CreateSjpCase(Box<CreateSjpCase>),
    NotifyDefenceOfNewCase(NotifyDefenceOfNewCase),
}

impl ProceedingsCommand {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InitiateCourtProceedings(_) => "initiate-court-proceedings",
            Self::InitiateCourtProceedingsForGroupCases(_) => {
                "initiate-court-proceedings-for-group-cases"
            }
            Self::InitiateCourtApplicationProceedings(_) => {
                "initiate-court-application-proceedings"
            }
            Self::AddDefendantsToCourtProceedings(_) => "add-defendants-to-court-proceedings",
            Self::CreateSjpCase(_) => "create-sjp-case",
            Self::NotifyDefenceOfNewCase(_) => "notify-defence-of-new-case",
        }
    }
}

impl From<InitiateCourtProceedings> for ProceedingsCommand {
    fn from(command: InitiateCourtProceedings) -> Self {
        Self::InitiateCourtProceedings(Box::new(command))
    }
}

impl From<InitiateCourtApplicationProceedings> for ProceedingsCommand {
    fn from(command: InitiateCourtApplicationProceedings) -> Self {
        Self::InitiateCourtApplicationProceedings(Box::new(command))
    }
}

impl From<CreateSjpCase> for ProceedingsCommand {
    fn from(command: CreateSjpCase) -> Self {
        Self::CreateSjpCase(Box::new(command))
    }
}
