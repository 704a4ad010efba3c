//! Execution configuration for a single CLI invocation.

use serde::{Deserialize, Serialize};

/// How one invocation's output is captured and whether diagnostics are
/// emitted. Constructed once per invocation from [`DEFAULT_COMMAND_CONFIG`]
/// plus caller overrides; immutable once attached to a built command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommandConfig {
    /// Deliver output incrementally as it is produced instead of only
    /// after process exit.
    pub stream_response: bool,
    /// Append the debug flag and emit internal diagnostic detail.
    pub debug: bool,
}

/// The shared default: buffered output, no diagnostics.
pub const DEFAULT_COMMAND_CONFIG: CommandConfig = CommandConfig {
    stream_response: false,
    debug: false,
};

impl Default for CommandConfig {
    fn default() -> Self {
        DEFAULT_COMMAND_CONFIG
    }
}

/// Caller-supplied partial overrides. Unset fields keep the default, so a
/// caller only names what it wants changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommandConfigOverrides {
    pub stream_response: Option<bool>,
    pub debug: Option<bool>,
}

impl CommandConfigOverrides {
    pub fn stream_response(stream: bool) -> Self {
        CommandConfigOverrides {
            stream_response: Some(stream),
            ..Default::default()
        }
    }

    pub fn debug(debug: bool) -> Self {
        CommandConfigOverrides {
            debug: Some(debug),
            ..Default::default()
        }
    }
}

impl CommandConfig {
    /// Effective configuration for one invocation. Pure: returns a new
    /// value and never touches the shared default.
    pub fn with_overrides(self, overrides: CommandConfigOverrides) -> CommandConfig {
        CommandConfig {
            stream_response: overrides.stream_response.unwrap_or(self.stream_response),
            debug: overrides.debug.unwrap_or(self.debug),
        }
    }
}
