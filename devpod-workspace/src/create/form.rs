//! The creation form: a closed set of fields and their lifecycle.
//!
//! The field set is an enum so the closed-set contract is enforced at
//! compile time: there is no way to read or write a field outside the
//! five canonical ones, and adding a field is a single declaration change
//! the compiler propagates to every consumer.

use std::fmt;

use devpod_core::error::{DevpodError, Result};
use devpod_core::validation::validate_repository_reference;
use devpod_core::{ProviderId, WorkspaceId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::args::CreateWorkspaceArgs;
use super::search_params::CreateWorkspaceSearchParams;

/// Canonical field identifiers of the creation form. The wire names match
/// the desktop front end's field keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldName {
    #[serde(rename = "source")]
    Source,
    #[serde(rename = "id")]
    Id,
    #[serde(rename = "defaultIDE")]
    DefaultIde,
    #[serde(rename = "provider")]
    Provider,
    #[serde(rename = "prebuildRepository")]
    PrebuildRepository,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Source,
        FieldName::Id,
        FieldName::DefaultIde,
        FieldName::Provider,
        FieldName::PrebuildRepository,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            FieldName::Source => "source",
            FieldName::Id => "id",
            FieldName::DefaultIde => "defaultIDE",
            FieldName::Provider => "provider",
            FieldName::PrebuildRepository => "prebuildRepository",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-entered workspace-creation input, one slot per [`FieldName`].
///
/// A record is created empty when the creation flow starts, mutated
/// field-by-field while the form is edited, and consumed exactly once by
/// [`FormValues::resolve`]. Consumption takes the record by value, so a
/// resolved form cannot be edited or resolved again; a second creation
/// attempt starts from [`FormValues::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FormValues {
    pub source: String,
    pub id: String,
    #[serde(rename = "defaultIDE")]
    pub default_ide: String,
    pub provider: ProviderId,
    pub prebuild_repository: String,
}

impl FormValues {
    /// Fresh record for a new creation flow: every field present, strings
    /// empty, no provider selected.
    pub fn new() -> Self {
        FormValues::default()
    }

    /// Read a field by identifier.
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Source => &self.source,
            FieldName::Id => &self.id,
            FieldName::DefaultIde => &self.default_ide,
            FieldName::Provider => self.provider.as_str(),
            FieldName::PrebuildRepository => &self.prebuild_repository,
        }
    }

    /// Write a field by identifier.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldName::Source => self.source = value,
            FieldName::Id => self.id = value,
            FieldName::DefaultIde => self.default_ide = value,
            FieldName::Provider => self.provider = ProviderId::new(value),
            FieldName::PrebuildRepository => self.prebuild_repository = value,
        }
    }

    /// Merge in the fields a search-parameter projection carries. Fields
    /// the projection does not mention keep their current value, so
    /// hydrating is a partial merge and idempotent.
    pub fn hydrate(&mut self, params: &CreateWorkspaceSearchParams) {
        if let Some(source) = &params.workspace_source {
            self.source = source.clone();
        }
        if let Some(provider_id) = &params.provider_id {
            self.provider = provider_id.clone();
        }
        if let Some(workspace_id) = &params.workspace_id {
            self.id = workspace_id.clone();
        }
        debug!(?params, "hydrated creation form from search parameters");
    }

    /// Consume the form into assembly-ready creation arguments.
    ///
    /// The workspace identifier is never derived here: the CLI owns the
    /// derivation rules, and the caller resolves the identifier up front
    /// (via `helper get-workspace-name` when the form's `id` is blank).
    /// Both identifiers must be non-empty; the prebuild-repository field
    /// is split into individual references, with an empty field yielding
    /// an empty list.
    pub fn resolve(
        self,
        workspace_id: WorkspaceId,
        provider_id: ProviderId,
    ) -> Result<CreateWorkspaceArgs> {
        if workspace_id.is_empty() {
            return Err(DevpodError::validation(
                "workspaceID",
                "a resolved workspace identifier is required",
            ));
        }
        if provider_id.is_empty() {
            return Err(DevpodError::validation(
                "providerID",
                "a resolved provider identifier is required",
            ));
        }

        let prebuild_repositories = split_prebuild_repositories(&self.prebuild_repository)?;

        debug!(
            workspace_id = %workspace_id,
            provider_id = %provider_id,
            prebuilds = prebuild_repositories.len(),
            "resolved creation form"
        );
        Ok(CreateWorkspaceArgs::new(
            workspace_id,
            provider_id,
            prebuild_repositories,
            self.default_ide,
            self.source,
        ))
    }
}

/// Split the single prebuild-repository form field into individual
/// references. Entries are comma- or newline-separated; surrounding
/// whitespace is trimmed and blank entries (trailing separators) are
/// skipped. An empty field yields an empty list.
fn split_prebuild_repositories(raw: &str) -> Result<Vec<String>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut repositories = Vec::new();
    for entry in raw.split([',', '\n']) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        validate_repository_reference(FieldName::PrebuildRepository.as_str(), entry)?;
        repositories.push(entry.to_string());
    }

    if repositories.is_empty() {
        return Err(DevpodError::validation(
            FieldName::PrebuildRepository.as_str(),
            "contains no repository references",
        ));
    }
    Ok(repositories)
}
