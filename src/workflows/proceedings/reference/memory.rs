use std::collections::HashMap;

use uuid::Uuid;

use super::{
    ApplicationTypeReference, OffenceReference, OrganisationUnit, ProsecutorReference,
    ReferenceDataAccessor, ReferenceDataError,
};

/// Accessor over an owned snapshot, for hosts that preload reference data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReferenceData {
    offences: HashMap<String, OffenceReference>,
    organisation_units: Vec<OrganisationUnit>,
    prosecutors: Vec<ProsecutorReference>,
    application_types: Vec<ApplicationTypeReference>,
}

impl InMemoryReferenceData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offence(mut self, offence: OffenceReference) -> Self {
        self.offences
            .insert(offence.cjs_offence_code.clone(), offence);
        self
    }

    pub fn with_organisation_unit(mut self, unit: OrganisationUnit) -> Self {
        self.organisation_units.push(unit);
        self
    }

    pub fn with_prosecutor(mut self, prosecutor: ProsecutorReference) -> Self {
        self.prosecutors.push(prosecutor);
        self
    }

    pub fn with_application_type(mut self, application_type: ApplicationTypeReference) -> Self {
        self.application_types.push(application_type);
        self
    }
}

impl ReferenceDataAccessor for InMemoryReferenceData {
    fn offence(
        &self,
        cjs_offence_code: &str,
    ) -> Result<Option<OffenceReference>, ReferenceDataError> {
        Ok(self.offences.get(cjs_offence_code).cloned())
    }

    fn organisation_units(
        &self,
        oucode: &str,
    ) -> Result<Vec<OrganisationUnit>, ReferenceDataError> {
        Ok(self
            .organisation_units
            .iter()
            .filter(|unit| unit.oucode == oucode)
            .cloned()
            .collect())
    }

    fn prosecutor_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ProsecutorReference>, ReferenceDataError> {
        Ok(self
            .prosecutors
            .iter()
            .find(|prosecutor| prosecutor.id == id)
            .cloned())
    }

    fn prosecutor_by_ou_code(
        &self,
        oucode: &str,
    ) -> Result<Option<ProsecutorReference>, ReferenceDataError> {
        Ok(self
            .prosecutors
            .iter()
            .find(|prosecutor| prosecutor.oucode.as_deref() == Some(oucode))
            .cloned())
    }

    fn application_type(
        &self,
        id: Uuid,
    ) -> Result<Option<ApplicationTypeReference>, ReferenceDataError> {
        Ok(self
            .application_types
            .iter()
            .find(|application_type| application_type.id == id)
            .cloned())
    }

    fn application_types(&self) -> Result<Vec<ApplicationTypeReference>, ReferenceDataError> {
        Ok(self.application_types.clone())
    }
}
