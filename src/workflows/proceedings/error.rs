use uuid::Uuid;

use super::reference::ReferenceDataError;

/// Fatal outcome of converting one submitted case. No partial command is
/// produced when one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("case {case_id}: missing required data: {cause}")]
    MissingData { case_id: Uuid, cause: String },
    #[error("case {case_id}: required reference data not found: {cause}")]
    MissingReferenceData { case_id: Uuid, cause: String },
    #[error("unsupported {field} value '{value}'")]
    Unsupported { field: &'static str, value: String },
    #[error("reference data misconfigured: {cause}")]
    ReferenceInvariant { cause: String },
    #[error("conversion misconfigured: {cause}")]
    Configuration { cause: String },
    #[error(transparent)]
    ReferenceData(#[from] ReferenceDataError),
}

impl ConversionError {
    pub(crate) fn missing_data(case_id: Uuid, cause: impl Into<String>) -> Self {
        Self::MissingData {
            case_id,
            cause: cause.into(),
        }
    }

    pub(crate) fn missing_reference(case_id: Uuid, cause: impl Into<String>) -> Self {
        Self::MissingReferenceData {
            case_id,
            cause: cause.into(),
        }
    }

    pub(crate) fn configuration(cause: impl Into<String>) -> Self {
        Self::Configuration {
            cause: cause.into(),
        }
    }

    pub(crate) fn unsupported(field: &'static str, value: impl Into<String>) -> Self {
        Self::Unsupported {
            field,
            value: value.into(),
        }
    }
}
