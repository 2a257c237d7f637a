//! Prosecution case intake conversion.
//!
//! A submitted case, a reference-data snapshot and a few per-call parameters
//! go in; canonical court proceedings commands (or a [`ConversionError`]) come
//! out. Nothing here performs I/O beyond the injected
//! [`ReferenceDataAccessor`].

pub mod assembler;
pub mod canonical;
pub mod commands;
pub mod context;
pub mod domain;
pub mod error;
pub mod hearing;
pub mod offence;
pub mod party;
pub mod pipeline;
pub mod reference;
pub mod service;

#[cfg(test)]
mod tests;

pub use commands::{
    AddDefendantsToCourtProceedings, CreateSjpCase, InitiateCourtApplicationProceedings,
    InitiateCourtProceedings, InitiateCourtProceedingsForGroupCases, NotifyDefenceOfNewCase,
    ProceedingsCommand,
};
pub use context::{ConversionParameters, DerivationContext};
pub use domain::{InitiationCode, SubmissionChannel, SubmittedCase};
pub use error::ConversionError;
pub use reference::{
    InMemoryReferenceData, ReferenceDataAccessor, ReferenceDataBundle, ReferenceDataError,
    ReferenceTables,
};
pub use service::CaseConverter;

/// Trimmed copy of `value`, or `None` when blank.
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
