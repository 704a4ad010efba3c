//! Typed constructors for workspace lifecycle commands.
//!
//! Each constructor pins the flag-value pairings for one operation, so
//! vocabulary misuse (a value-taking flag without a value, a presence flag
//! with one) cannot be expressed by callers. Lifecycle operations stream
//! their output by default; read-only queries are buffered JSON.

use devpod_core::{ProviderId, WorkspaceId};

use crate::builder::{CommandBuilder, DevpodCommand};
use crate::config::CommandConfigOverrides;
use crate::constants::{FLAGS, SUBCOMMANDS};

/// Assembly-ready parameters for `up`. Produced from resolved creation
/// arguments; identifiers are expected to be non-empty by the time they
/// arrive here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpCommandParams<'a> {
    pub workspace_id: &'a WorkspaceId,
    pub provider_id: &'a ProviderId,
    pub prebuild_repositories: &'a [String],
    /// Omitted from the vector when empty (no IDE preference).
    pub default_ide: &'a str,
    /// Omitted from the vector when empty (the CLI falls back to the
    /// workspace's recorded source).
    pub workspace_source: &'a str,
}

/// `list --output=json`
pub fn list_workspaces() -> DevpodCommand {
    CommandBuilder::new(SUBCOMMANDS.list)
        .flag(FLAGS.json_output)
        .build()
}

/// `status <id> --output=json`
pub fn workspace_status(id: &WorkspaceId) -> DevpodCommand {
    CommandBuilder::new(SUBCOMMANDS.status)
        .arg(id.as_str())
        .flag(FLAGS.json_output)
        .build()
}

/// `up <source> --id <id> --provider <provider> [--ide <ide>]
/// [--prebuild-repository <repo>]... --log-output=json`
pub fn up_workspace(
    params: UpCommandParams<'_>,
    overrides: CommandConfigOverrides,
) -> DevpodCommand {
    up_builder(params)
        .flag(FLAGS.json_log_output)
        .overrides(overrides)
        .build()
}

/// Same vector as [`up_workspace`] plus `--recreate`: rebuild the
/// workspace from scratch.
pub fn recreate_workspace(
    params: UpCommandParams<'_>,
    overrides: CommandConfigOverrides,
) -> DevpodCommand {
    up_builder(params)
        .flag(FLAGS.recreate)
        .flag(FLAGS.json_log_output)
        .overrides(overrides)
        .build()
}

fn up_builder(params: UpCommandParams<'_>) -> CommandBuilder {
    let mut builder = CommandBuilder::new(SUBCOMMANDS.up);
    if !params.workspace_source.is_empty() {
        builder = builder.arg(params.workspace_source);
    }
    builder = builder
        .flag_value(FLAGS.id, params.workspace_id.as_str())
        .flag_value(FLAGS.provider, params.provider_id.as_str());
    if !params.default_ide.is_empty() {
        builder = builder.flag_value(FLAGS.ide, params.default_ide);
    }
    for repository in params.prebuild_repositories {
        builder = builder.flag_value(FLAGS.prebuild_repository, repository);
    }
    builder.stream_response(true)
}

/// `stop <id> --log-output=json`
pub fn stop_workspace(id: &WorkspaceId, overrides: CommandConfigOverrides) -> DevpodCommand {
    CommandBuilder::new(SUBCOMMANDS.stop)
        .arg(id.as_str())
        .flag(FLAGS.json_log_output)
        .stream_response(true)
        .overrides(overrides)
        .build()
}

/// `build <id> [--force-build] --log-output=json`
pub fn build_workspace(
    id: &WorkspaceId,
    force_build: bool,
    overrides: CommandConfigOverrides,
) -> DevpodCommand {
    CommandBuilder::new(SUBCOMMANDS.build)
        .arg(id.as_str())
        .flag_if(FLAGS.force_build, force_build)
        .flag(FLAGS.json_log_output)
        .stream_response(true)
        .overrides(overrides)
        .build()
}

/// `delete <id> [--force] --log-output=json`
pub fn delete_workspace(
    id: &WorkspaceId,
    force: bool,
    overrides: CommandConfigOverrides,
) -> DevpodCommand {
    CommandBuilder::new(SUBCOMMANDS.delete)
        .arg(id.as_str())
        .flag_if(FLAGS.force, force)
        .flag(FLAGS.json_log_output)
        .stream_response(true)
        .overrides(overrides)
        .build()
}
