//! Creation-form types and their resolution rules.

mod args;
mod form;
mod search_params;

pub use args::CreateWorkspaceArgs;
pub use form::{FieldName, FormValues};
pub use search_params::CreateWorkspaceSearchParams;
