//! Loaders for reference tables exported as CSV.

use std::io::Read;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use super::{
    AlcoholLevelMethod, BailStatusReference, CaseMarkerReference, EthnicityReference,
    ModeOfTrialReason, NationalityReference, ReferenceDataError,
};

pub fn read_table<T, R>(reader: R) -> Result<Vec<T>, ReferenceDataError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for row in csv_reader.deserialize::<T>() {
        rows.push(row?);
    }

    Ok(rows)
}

pub fn ethnicities<R: Read>(reader: R) -> Result<Vec<EthnicityReference>, ReferenceDataError> {
    read_table(reader)
}

pub fn nationalities<R: Read>(reader: R) -> Result<Vec<NationalityReference>, ReferenceDataError> {
    read_table(reader)
}

pub fn bail_statuses<R: Read>(reader: R) -> Result<Vec<BailStatusReference>, ReferenceDataError> {
    read_table(reader)
}

pub fn mode_of_trial_reasons<R: Read>(
    reader: R,
) -> Result<Vec<ModeOfTrialReason>, ReferenceDataError> {
    read_table(reader)
}

pub fn case_markers<R: Read>(reader: R) -> Result<Vec<CaseMarkerReference>, ReferenceDataError> {
    read_table(reader)
}

pub fn alcohol_level_methods<R: Read>(
    reader: R,
) -> Result<Vec<AlcoholLevelMethod>, ReferenceDataError> {
    read_table(reader)
}

pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
