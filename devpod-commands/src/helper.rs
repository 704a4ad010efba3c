//! Typed constructors for the CLI's `helper` subcommands.
//!
//! The helpers are how the client resolves canonical names without
//! re-implementing the CLI's derivation rules. In particular, the
//! workspace name for a given source is always asked of the tool itself.

use crate::builder::{CommandBuilder, DevpodCommand};
use crate::constants::SUBCOMMANDS;

/// `helper get-workspace-name <source>`: the canonical workspace name the
/// CLI would assign to this source.
pub fn get_workspace_name(source: &str) -> DevpodCommand {
    CommandBuilder::new(SUBCOMMANDS.helper)
        .subcommand(SUBCOMMANDS.get_workspace_name)
        .arg(source)
        .build()
}

/// `helper get-provider-name <source>`: the canonical provider name for a
/// provider source reference.
pub fn get_provider_name(source: &str) -> DevpodCommand {
    CommandBuilder::new(SUBCOMMANDS.helper)
        .subcommand(SUBCOMMANDS.get_provider_name)
        .arg(source)
        .build()
}
