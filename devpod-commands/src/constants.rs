//! Closed token registry for the DevPod CLI surface.
//!
//! Subcommand identifiers and flag tokens are grouped into registry
//! structs with one process-wide `const` instance each, so a rename of the
//! CLI surface is a single-point change. All values are literals; there
//! are no initialization-order dependencies and nothing here can fail.

/// Location of the DevPod CLI executable, relative to the application's
/// installation root.
pub const DEVPOD_BINARY: &str = "bin/devpod-cli";

/// Upstream project repository, linked from the about screen.
pub const DEVPOD_GIT_REPOSITORY: &str = "https://github.com/loft-sh/devpod";

/// Set by the desktop shell in the environment of every CLI invocation to
/// signal the tool is being driven by the UI rather than a terminal. The
/// core treats it as an opaque external signal.
pub const DEVPOD_UI_ENV_VAR: &str = "DEVPOD_UI";

/// Subcommand identifiers, passed as the literal tokens after the binary
/// path. `get_workspace_name` and `get_provider_name` are nested under
/// `helper`.
pub struct Subcommands {
    pub list: &'static str,
    pub status: &'static str,
    pub up: &'static str,
    pub stop: &'static str,
    pub build: &'static str,
    pub delete: &'static str,
    pub provider: &'static str,
    pub ide: &'static str,
    pub options: &'static str,
    pub set_options: &'static str,
    pub use_: &'static str,
    pub add: &'static str,
    pub helper: &'static str,
    pub get_workspace_name: &'static str,
    pub get_provider_name: &'static str,
}

pub const SUBCOMMANDS: Subcommands = Subcommands {
    list: "list",
    status: "status",
    up: "up",
    stop: "stop",
    build: "build",
    delete: "delete",
    provider: "provider",
    ide: "ide",
    options: "options",
    set_options: "set-options",
    use_: "use",
    add: "add",
    helper: "helper",
    get_workspace_name: "get-workspace-name",
    get_provider_name: "get-provider-name",
};

impl Subcommands {
    /// Every identifier in the registry, for exhaustive checks.
    pub const fn all(&self) -> [&'static str; 15] {
        [
            self.list,
            self.status,
            self.up,
            self.stop,
            self.build,
            self.delete,
            self.provider,
            self.ide,
            self.options,
            self.set_options,
            self.use_,
            self.add,
            self.helper,
            self.get_workspace_name,
            self.get_provider_name,
        ]
    }
}

/// Flag tokens, passed verbatim. `option`, `ide`, `provider`,
/// `prebuild_repository`, `id` and `name` take a trailing value; the rest
/// are presence-only.
pub struct Flags {
    pub json_log_output: &'static str,
    pub json_output: &'static str,
    pub option: &'static str,
    pub force: &'static str,
    pub force_build: &'static str,
    pub recreate: &'static str,
    pub ide: &'static str,
    pub provider: &'static str,
    pub prebuild_repository: &'static str,
    pub id: &'static str,
    pub debug: &'static str,
    pub use_: &'static str,
    pub name: &'static str,
    pub single_machine: &'static str,
}

pub const FLAGS: Flags = Flags {
    json_log_output: "--log-output=json",
    json_output: "--output=json",
    option: "--option",
    force: "--force",
    force_build: "--force-build",
    recreate: "--recreate",
    ide: "--ide",
    provider: "--provider",
    prebuild_repository: "--prebuild-repository",
    id: "--id",
    debug: "--debug",
    use_: "--use",
    name: "--name",
    single_machine: "--single-machine",
};

impl Flags {
    /// Every token in the registry, for exhaustive checks.
    pub const fn all(&self) -> [&'static str; 14] {
        [
            self.json_log_output,
            self.json_output,
            self.option,
            self.force,
            self.force_build,
            self.recreate,
            self.ide,
            self.provider,
            self.prebuild_repository,
            self.id,
            self.debug,
            self.use_,
            self.name,
            self.single_machine,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_flag_has_double_dash_prefix() {
        for flag in FLAGS.all() {
            assert!(
                flag.starts_with("--"),
                "flag '{}' is missing the -- prefix",
                flag
            );
        }
    }

    #[test]
    fn test_no_subcommand_has_flag_prefix() {
        for subcommand in SUBCOMMANDS.all() {
            assert!(
                !subcommand.starts_with("--"),
                "subcommand '{}' must not carry a flag prefix",
                subcommand
            );
        }
    }

    #[test]
    fn test_subcommand_identifiers_are_unique() {
        let all = SUBCOMMANDS.all();
        let unique: HashSet<&str> = all.iter().copied().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn test_flag_tokens_are_unique() {
        let all = FLAGS.all();
        let unique: HashSet<&str> = all.iter().copied().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn test_binary_path_is_relative() {
        assert!(!DEVPOD_BINARY.starts_with('/'));
        assert_eq!(DEVPOD_BINARY, "bin/devpod-cli");
    }
}
