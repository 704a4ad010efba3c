//! Typed constructors for IDE configuration commands.

use crate::builder::{CommandBuilder, DevpodCommand};
use crate::constants::{FLAGS, SUBCOMMANDS};

/// `ide list --output=json`
pub fn list_ides() -> DevpodCommand {
    CommandBuilder::new(SUBCOMMANDS.ide)
        .subcommand(SUBCOMMANDS.list)
        .flag(FLAGS.json_output)
        .build()
}

/// `ide use <name>`
pub fn use_ide(name: &str) -> DevpodCommand {
    CommandBuilder::new(SUBCOMMANDS.ide)
        .subcommand(SUBCOMMANDS.use_)
        .arg(name)
        .build()
}
