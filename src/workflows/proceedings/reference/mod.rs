//! Read-only reference data consumed by the conversion pipeline.
//!
//! Tables that arrive with the case live in [`ReferenceTables`]; organisation
//! units, prosecutors and application types are queried live through a
//! [`ReferenceDataAccessor`].

mod memory;
pub mod tables;

pub use memory::InMemoryReferenceData;

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::domain::{Address, SubmittedCase};

/// Link type marking the application type used for first hearings.
pub const FIRST_HEARING_LINK_TYPE: &str = "FIRST_HEARING";
/// Organisation level-1 code of magistrates' courts.
pub const MAGISTRATES_LEVEL_ONE_CODE: &str = "B";
/// Organisation level-1 code of the Crown Court.
pub const CROWN_LEVEL_ONE_CODE: &str = "C";
pub const SUMMARY_ONLY_REASON_DESCRIPTION: &str = "Summary-only offence";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffenceReference {
    pub cjs_offence_code: String,
    pub title: String,
    #[serde(default, deserialize_with = "tables::blank_as_none")]
    pub welsh_title: Option<String>,
    #[serde(default, deserialize_with = "tables::blank_as_none")]
    pub legislation: Option<String>,
    #[serde(default, deserialize_with = "tables::blank_as_none")]
    pub welsh_legislation: Option<String>,
    #[serde(default, deserialize_with = "tables::blank_as_none")]
    pub mode_of_trial: Option<String>,
    #[serde(default, deserialize_with = "tables::blank_as_none")]
    pub dvla_code: Option<String>,
    #[serde(default, deserialize_with = "tables::blank_as_none")]
    pub max_penalty: Option<String>,
    #[serde(default)]
    pub endorsable: bool,
    #[serde(default, deserialize_with = "tables::blank_as_none")]
    pub report_restriction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtRoom {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganisationUnit {
    pub id: Uuid,
    pub oucode: String,
    #[serde(default)]
    pub org_level1_code: Option<String>,
    pub level3_name: String,
    #[serde(default)]
    pub level3_welsh_name: Option<String>,
    #[serde(default)]
    pub lja: Option<String>,
    #[serde(default)]
    pub court_location_code: Option<String>,
    #[serde(default)]
    pub court_room: Option<CourtRoom>,
}

impl OrganisationUnit {
    pub fn is_level_one(&self, code: &str) -> bool {
        self.org_level1_code.as_deref() == Some(code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProsecutorReference {
    pub id: Uuid,
    pub short_name: String,
    pub full_name: String,
    #[serde(default)]
    pub oucode: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationTypeReference {
    pub id: Uuid,
    pub code: String,
    pub application_type: String,
    #[serde(default)]
    pub legislation: Option<String>,
    pub link_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeOfTrialReason {
    pub id: Uuid,
    pub seq_num: i32,
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BailStatusReference {
    pub id: Uuid,
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthnicityReference {
    pub id: Uuid,
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalityReference {
    pub id: Uuid,
    pub iso_code: String,
    #[serde(default, deserialize_with = "tables::blank_as_none")]
    pub cjs_code: Option<String>,
    pub description: String,
}

impl NationalityReference {
    pub fn matches(&self, value: &str) -> bool {
        self.iso_code == value || self.cjs_code.as_deref() == Some(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlcoholLevelMethod {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseMarkerReference {
    pub id: Uuid,
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HearingTypeReference {
    pub id: Uuid,
    pub description: String,
    #[serde(default)]
    pub default_duration_minutes: Option<u32>,
}

/// Tables shipped with each case rather than queried per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceTables {
    #[serde(default)]
    pub self_defined_ethnicities: Vec<EthnicityReference>,
    #[serde(default)]
    pub observed_ethnicities: Vec<EthnicityReference>,
    #[serde(default)]
    pub nationalities: Vec<NationalityReference>,
    #[serde(default)]
    pub mode_of_trial_reasons: Vec<ModeOfTrialReason>,
    #[serde(default)]
    pub bail_statuses: Vec<BailStatusReference>,
    #[serde(default)]
    pub alcohol_level_methods: Vec<AlcoholLevelMethod>,
    #[serde(default)]
    pub case_markers: Vec<CaseMarkerReference>,
    #[serde(default)]
    pub hearing_type: Option<HearingTypeReference>,
}

impl ReferenceTables {
    pub fn self_defined_ethnicity(&self, code: &str) -> Option<&EthnicityReference> {
        self.self_defined_ethnicities
            .iter()
            .find(|ethnicity| ethnicity.code.eq_ignore_ascii_case(code))
    }

    /// Observed codes are integers; reference codes that do not parse never match.
    pub fn observed_ethnicity(&self, code: i32) -> Option<&EthnicityReference> {
        self.observed_ethnicities
            .iter()
            .find(|ethnicity| ethnicity.code.trim().parse::<i32>().ok() == Some(code))
    }

    pub fn nationality(&self, value: &str) -> Option<&NationalityReference> {
        self.nationalities
            .iter()
            .find(|nationality| nationality.matches(value))
    }

    pub fn bail_status(&self, custody_status_code: &str) -> Option<&BailStatusReference> {
        self.bail_statuses
            .iter()
            .find(|status| status.code == custody_status_code)
    }

    pub fn mode_of_trial_reason(&self, id: Uuid) -> Option<&ModeOfTrialReason> {
        self.mode_of_trial_reasons
            .iter()
            .find(|reason| reason.id == id)
    }

    pub fn summary_only_reason(&self) -> Option<&ModeOfTrialReason> {
        self.mode_of_trial_reasons
            .iter()
            .find(|reason| reason.description == SUMMARY_ONLY_REASON_DESCRIPTION)
    }

    pub fn alcohol_level_method(&self, code: &str) -> Option<&AlcoholLevelMethod> {
        self.alcohol_level_methods
            .iter()
            .find(|method| method.code == code)
    }

    pub fn case_marker(&self, code: &str) -> Option<&CaseMarkerReference> {
        self.case_markers.iter().find(|marker| marker.code == code)
    }
}

/// Reference snapshot scoped to one conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceDataBundle {
    pub tables: ReferenceTables,
    /// Originating court, including its default courtroom.
    pub organisation_unit: Option<OrganisationUnit>,
    offences: HashMap<String, OffenceReference>,
}

impl ReferenceDataBundle {
    pub fn new(tables: ReferenceTables) -> Self {
        Self {
            tables,
            organisation_unit: None,
            offences: HashMap::new(),
        }
    }

    /// Resolve the originating court and prefetch offence metadata for `case`.
    pub fn for_case<A>(
        tables: ReferenceTables,
        accessor: &A,
        case: &SubmittedCase,
    ) -> Result<Self, ReferenceDataError>
    where
        A: ReferenceDataAccessor + ?Sized,
    {
        let mut bundle = Self::new(tables);
        bundle.organisation_unit = accessor
            .organisation_units(&case.originating_organisation)?
            .into_iter()
            .next();
        bundle.prefetch_offences(accessor, case)?;
        Ok(bundle)
    }

    pub fn with_organisation_unit(mut self, unit: OrganisationUnit) -> Self {
        self.organisation_unit = Some(unit);
        self
    }

    pub fn with_offence(mut self, offence: OffenceReference) -> Self {
        self.offences
            .insert(offence.cjs_offence_code.clone(), offence);
        self
    }

    /// Query each distinct offence code once. Codes the accessor does not know
    /// are left out and surface as absent metadata later.
    pub fn prefetch_offences<A>(
        &mut self,
        accessor: &A,
        case: &SubmittedCase,
    ) -> Result<(), ReferenceDataError>
    where
        A: ReferenceDataAccessor + ?Sized,
    {
        let codes: BTreeSet<&str> = case
            .defendants
            .iter()
            .flat_map(|defendant| defendant.offences.iter())
            .map(|offence| offence.cjs_offence_code.as_str())
            .filter(|code| !self.offences.contains_key(*code))
            .collect();

        for code in codes {
            match accessor.offence(code)? {
                Some(offence) => {
                    self.offences.insert(code.to_string(), offence);
                }
                None => debug!(offence_code = code, "no offence metadata in reference data"),
            }
        }

        Ok(())
    }

    pub fn offence(&self, cjs_offence_code: &str) -> Option<&OffenceReference> {
        self.offences.get(cjs_offence_code)
    }
}

/// Query contract against the externally owned reference data store.
pub trait ReferenceDataAccessor: Send + Sync {
    fn offence(&self, cjs_offence_code: &str)
        -> Result<Option<OffenceReference>, ReferenceDataError>;
    fn organisation_units(&self, oucode: &str)
        -> Result<Vec<OrganisationUnit>, ReferenceDataError>;
    fn prosecutor_by_id(&self, id: Uuid) -> Result<Option<ProsecutorReference>, ReferenceDataError>;
    fn prosecutor_by_ou_code(
        &self,
        oucode: &str,
    ) -> Result<Option<ProsecutorReference>, ReferenceDataError>;
    fn application_type(
        &self,
        id: Uuid,
    ) -> Result<Option<ApplicationTypeReference>, ReferenceDataError>;
    fn application_types(&self) -> Result<Vec<ApplicationTypeReference>, ReferenceDataError>;

    fn first_hearing_application_type(
        &self,
    ) -> Result<Option<ApplicationTypeReference>, ReferenceDataError> {
        Ok(self
            .application_types()?
            .into_iter()
            .find(|application_type| application_type.link_type == FIRST_HEARING_LINK_TYPE))
    }
}

/// Accessor failure.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceDataError {
    #[error("reference data unavailable: {0}")]
    Unavailable(String),
    #[error("invalid reference table: {0}")]
    Table(#[from] csv::Error),
}
