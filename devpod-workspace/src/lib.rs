//! devpod-workspace
//!
//! The workspace-creation model of the DevPod desktop client: the canonical
//! shape of user-entered creation input, its projection from deep-link
//! search parameters, and its resolution into the assembly-ready arguments
//! the command layer consumes.
//!
//! A creation attempt owns exactly one [`create::FormValues`] record. The
//! record is editable until [`create::FormValues::resolve`] consumes it;
//! a second attempt starts from a fresh record. Resolution is pure (no
//! I/O, no processes) and fails with a validation error naming the field
//! that is still missing or malformed.

pub mod create;
pub mod provider;

pub use create::{
    CreateWorkspaceArgs, CreateWorkspaceSearchParams, FieldName, FormValues,
};
pub use provider::{
    NamedProvider, RecommendedProviderSource, SelectProviderOptions,
    RECOMMENDED_PROVIDER_SOURCES,
};
