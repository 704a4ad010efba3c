//! Argument-vector assembly with a fluent builder interface.
//!
//! The builder collects tokens in call order and produces the final
//! vector `[binary-path, subcommand, ...flags-and-values]`. Repeated
//! `--option key=value` pairs are kept in an ordered map so the assembled
//! vector is deterministic. Building is infallible: which flags pair with
//! which values is the typed constructors' contract, not a runtime check.

use indexmap::IndexMap;
use tracing::debug;

use crate::config::{CommandConfig, CommandConfigOverrides, DEFAULT_COMMAND_CONFIG};
use crate::constants::{DEVPOD_BINARY, FLAGS};

/// A fully assembled CLI invocation: the literal argument vector plus the
/// effective execution configuration. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevpodCommand {
    argv: Vec<String>,
    config: CommandConfig,
}

impl DevpodCommand {
    /// The complete argument vector, starting with the binary path.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// Relative path of the executable (the first vector element).
    pub fn binary(&self) -> &str {
        &self.argv[0]
    }

    /// Everything after the binary path, ready to hand to process spawn.
    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    pub fn config(&self) -> CommandConfig {
        self.config
    }
}

/// Fluent builder for [`DevpodCommand`].
#[derive(Debug, Clone, Default)]
pub struct CommandBuilder {
    tokens: Vec<String>,
    options: IndexMap<String, String>,
    overrides: CommandConfigOverrides,
}

impl CommandBuilder {
    pub fn new(subcommand: &'static str) -> Self {
        CommandBuilder {
            tokens: vec![subcommand.to_string()],
            options: IndexMap::new(),
            overrides: CommandConfigOverrides::default(),
        }
    }

    /// Append a nested subcommand token (e.g. `provider add`).
    pub fn subcommand(mut self, token: &'static str) -> Self {
        self.tokens.push(token.to_string());
        self
    }

    /// Append a positional argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.tokens.push(arg.into());
        self
    }

    /// Append a presence-only flag.
    pub fn flag(mut self, flag: &'static str) -> Self {
        self.tokens.push(flag.to_string());
        self
    }

    /// Append a presence-only flag, but only when `enabled`.
    pub fn flag_if(self, flag: &'static str, enabled: bool) -> Self {
        if enabled {
            self.flag(flag)
        } else {
            self
        }
    }

    /// Append a flag followed by its value.
    pub fn flag_value(mut self, flag: &'static str, value: impl Into<String>) -> Self {
        self.tokens.push(flag.to_string());
        self.tokens.push(value.into());
        self
    }

    /// Record one `key=value` pair, emitted as a repeated `--option` flag.
    /// Pairs keep insertion order; a repeated key overwrites in place.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Record every pair of an ordered map as `--option` flags.
    pub fn options<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.options.insert(key.into(), value.into());
        }
        self
    }

    /// Request streaming output delivery for this invocation.
    pub fn stream_response(mut self, stream: bool) -> Self {
        self.overrides.stream_response = Some(stream);
        self
    }

    /// Request debug diagnostics for this invocation.
    pub fn debug(mut self, debug: bool) -> Self {
        self.overrides.debug = Some(debug);
        self
    }

    /// Merge caller overrides; fields already set on the builder keep the
    /// later value.
    pub fn overrides(mut self, overrides: CommandConfigOverrides) -> Self {
        if let Some(stream) = overrides.stream_response {
            self.overrides.stream_response = Some(stream);
        }
        if let Some(debug) = overrides.debug {
            self.overrides.debug = Some(debug);
        }
        self
    }

    /// Assemble the final invocation. The debug flag is appended exactly
    /// when the effective configuration asks for diagnostics.
    pub fn build(self) -> DevpodCommand {
        let config = DEFAULT_COMMAND_CONFIG.with_overrides(self.overrides);

        let mut argv = Vec::with_capacity(1 + self.tokens.len() + self.options.len() * 2 + 1);
        argv.push(DEVPOD_BINARY.to_string());
        argv.extend(self.tokens);
        for (key, value) in self.options {
            argv.push(FLAGS.option.to_string());
            argv.push(format!("{key}={value}"));
        }
        if config.debug {
            argv.push(FLAGS.debug.to_string());
        }

        debug!(argv = ?argv, stream_response = config.stream_response, "assembled command");
        DevpodCommand { argv, config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SUBCOMMANDS;

    #[test]
    fn test_argv_starts_with_binary_and_subcommand() {
        let cmd = CommandBuilder::new(SUBCOMMANDS.list)
            .flag(FLAGS.json_output)
            .build();
        assert_eq!(cmd.argv(), ["bin/devpod-cli", "list", "--output=json"]);
        assert_eq!(cmd.binary(), "bin/devpod-cli");
        assert_eq!(cmd.args(), ["list", "--output=json"]);
    }

    #[test]
    fn test_flag_value_keeps_pairing_order() {
        let cmd = CommandBuilder::new(SUBCOMMANDS.up)
            .arg("my-workspace")
            .flag_value(FLAGS.provider, "docker")
            .build();
        assert_eq!(
            cmd.argv(),
            ["bin/devpod-cli", "up", "my-workspace", "--provider", "docker"]
        );
    }

    #[test]
    fn test_options_emit_one_flag_per_pair_in_insertion_order() {
        let cmd = CommandBuilder::new(SUBCOMMANDS.provider)
            .subcommand(SUBCOMMANDS.set_options)
            .arg("docker")
            .option("ZONE", "us-east-1")
            .option("DISK_SIZE", "40")
            .build();
        assert_eq!(
            cmd.argv(),
            [
                "bin/devpod-cli",
                "provider",
                "set-options",
                "docker",
                "--option",
                "ZONE=us-east-1",
                "--option",
                "DISK_SIZE=40",
            ]
        );
    }

    #[test]
    fn test_repeated_option_key_overwrites_in_place() {
        let cmd = CommandBuilder::new(SUBCOMMANDS.provider)
            .option("ZONE", "us-east-1")
            .option("DISK_SIZE", "40")
            .option("ZONE", "eu-west-1")
            .build();
        assert_eq!(
            cmd.args(),
            [
                "provider",
                "--option",
                "ZONE=eu-west-1",
                "--option",
                "DISK_SIZE=40",
            ]
        );
    }

    #[test]
    fn test_debug_flag_follows_effective_config() {
        let without = CommandBuilder::new(SUBCOMMANDS.stop).arg("dev").build();
        assert!(!without.argv().contains(&FLAGS.debug.to_string()));

        let with = CommandBuilder::new(SUBCOMMANDS.stop)
            .arg("dev")
            .debug(true)
            .build();
        assert_eq!(with.argv().last().unwrap(), FLAGS.debug);
        assert!(with.config().debug);
    }

    #[test]
    fn test_flag_if_only_appends_when_enabled() {
        let cmd = CommandBuilder::new(SUBCOMMANDS.delete)
            .arg("dev")
            .flag_if(FLAGS.force, false)
            .build();
        assert_eq!(cmd.args(), ["delete", "dev"]);

        let forced = CommandBuilder::new(SUBCOMMANDS.delete)
            .arg("dev")
            .flag_if(FLAGS.force, true)
            .build();
        assert_eq!(forced.args(), ["delete", "dev", "--force"]);
    }

    #[test]
    fn test_builder_overrides_merge_field_wise() {
        let cmd = CommandBuilder::new(SUBCOMMANDS.up)
            .stream_response(true)
            .overrides(CommandConfigOverrides::debug(true))
            .build();
        assert!(cmd.config().stream_response);
        assert!(cmd.config().debug);
    }

    #[test]
    fn test_default_config_is_attached_when_nothing_is_overridden() {
        let cmd = CommandBuilder::new(SUBCOMMANDS.status).build();
        assert_eq!(cmd.config(), DEFAULT_COMMAND_CONFIG);
    }
}
