//! Person, organisation, prosecutor and respondent builders.

mod defendant;
pub mod person;
mod prosecutor;
mod respondent;

pub use defendant::{build_defendant, build_defendants};
pub use person::{is_youth, middle_name, resolve_ethnicity, resolve_nationality};
pub use prosecutor::{applicant_from_identifier, resolve_case_identifier};
pub use respondent::respondent_from_defendant;
