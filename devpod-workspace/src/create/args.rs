//! Assembly-ready creation arguments.

use devpod_commands::config::CommandConfigOverrides;
use devpod_commands::workspace::{self, UpCommandParams};
use devpod_commands::DevpodCommand;
use devpod_core::{ProviderId, WorkspaceId};
use serde::Serialize;

/// The fully-resolved arguments of one creation attempt: the only shape
/// command assembly accepts. Produced by `FormValues::resolve`, owned by
/// the creation workflow for the duration of the attempt, and read-only,
/// so a long-running `up` built from it cannot be mutated out from under
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkspaceArgs {
    #[serde(rename = "workspaceID")]
    workspace_id: WorkspaceId,
    #[serde(rename = "providerID")]
    provider_id: ProviderId,
    prebuild_repositories: Vec<String>,
    #[serde(rename = "defaultIDE")]
    default_ide: String,
    workspace_source: String,
}

impl CreateWorkspaceArgs {
    pub(crate) fn new(
        workspace_id: WorkspaceId,
        provider_id: ProviderId,
        prebuild_repositories: Vec<String>,
        default_ide: String,
        workspace_source: String,
    ) -> Self {
        CreateWorkspaceArgs {
            workspace_id,
            provider_id,
            prebuild_repositories,
            default_ide,
            workspace_source,
        }
    }

    pub fn workspace_id(&self) -> &WorkspaceId {
        &self.workspace_id
    }

    pub fn provider_id(&self) -> &ProviderId {
        &self.provider_id
    }

    pub fn prebuild_repositories(&self) -> &[String] {
        &self.prebuild_repositories
    }

    pub fn default_ide(&self) -> &str {
        &self.default_ide
    }

    pub fn workspace_source(&self) -> &str {
        &self.workspace_source
    }

    /// The `up` invocation creating this workspace.
    pub fn up_command(&self, overrides: CommandConfigOverrides) -> DevpodCommand {
        workspace::up_workspace(self.up_params(), overrides)
    }

    /// The `up --recreate` invocation rebuilding this workspace from
    /// scratch.
    pub fn recreate_command(&self, overrides: CommandConfigOverrides) -> DevpodCommand {
        workspace::recreate_workspace(self.up_params(), overrides)
    }

    fn up_params(&self) -> UpCommandParams<'_> {
        UpCommandParams {
            workspace_id: &self.workspace_id,
            provider_id: &self.provider_id,
            prebuild_repositories: &self.prebuild_repositories,
            default_ide: &self.default_ide,
            workspace_source: &self.workspace_source,
        }
    }
}
