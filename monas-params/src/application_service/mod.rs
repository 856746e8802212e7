pub mod schema;
pub mod validator;

pub use schema::{FieldSpec, Schema};
pub use validator::{Validated, ValidatedParams, Validator};
