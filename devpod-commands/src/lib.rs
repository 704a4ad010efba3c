//! devpod-commands
//!
//! The closed command vocabulary of the DevPod CLI plus the argument-vector
//! assembly the desktop client uses to drive it.
//!
//! The vocabulary in [`constants`] is a contract: every token is passed
//! verbatim to the external binary, which parses it literally. Renaming a
//! token here without a synchronized change in the CLI breaks every
//! invocation, so callers always go through the named constants and the
//! typed constructors, never through re-derived string literals.
//!
//! Process execution itself lives elsewhere; this crate stops at the
//! finished [`builder::DevpodCommand`].

pub mod builder;
pub mod config;
pub mod constants;
pub mod helper;
pub mod ide;
pub mod provider;
pub mod workspace;

pub use builder::{CommandBuilder, DevpodCommand};
pub use config::{CommandConfig, CommandConfigOverrides, DEFAULT_COMMAND_CONFIG};
