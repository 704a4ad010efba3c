//! Typed constructors for provider management commands.

use devpod_core::ProviderId;
use indexmap::IndexMap;

use crate::builder::{CommandBuilder, DevpodCommand};
use crate::constants::{FLAGS, SUBCOMMANDS};

/// `provider list --output=json`
pub fn list_providers() -> DevpodCommand {
    CommandBuilder::new(SUBCOMMANDS.provider)
        .subcommand(SUBCOMMANDS.list)
        .flag(FLAGS.json_output)
        .build()
}

/// `provider add <source> [--name <name>] [--use]
/// [--option <key>=<value>]... --log-output=json`
///
/// `source` is either a built-in provider name (`docker`) or an
/// `org/repo` provider source. `use_after_add` switches the client to the
/// provider once it is installed.
pub fn add_provider(
    source: &str,
    name: Option<&str>,
    options: &IndexMap<String, String>,
    use_after_add: bool,
) -> DevpodCommand {
    let mut builder = CommandBuilder::new(SUBCOMMANDS.provider)
        .subcommand(SUBCOMMANDS.add)
        .arg(source);
    if let Some(name) = name {
        builder = builder.flag_value(FLAGS.name, name);
    }
    builder
        .flag_if(FLAGS.use_, use_after_add)
        .flag(FLAGS.json_log_output)
        .options(options.iter().map(|(k, v)| (k.clone(), v.clone())))
        .build()
}

/// `provider options <id> --output=json`
pub fn provider_options(id: &ProviderId) -> DevpodCommand {
    CommandBuilder::new(SUBCOMMANDS.provider)
        .subcommand(SUBCOMMANDS.options)
        .arg(id.as_str())
        .flag(FLAGS.json_output)
        .build()
}

/// `provider set-options <id> [--single-machine]
/// [--option <key>=<value>]... --log-output=json`
pub fn set_provider_options(
    id: &ProviderId,
    options: &IndexMap<String, String>,
    single_machine: bool,
) -> DevpodCommand {
    CommandBuilder::new(SUBCOMMANDS.provider)
        .subcommand(SUBCOMMANDS.set_options)
        .arg(id.as_str())
        .flag_if(FLAGS.single_machine, single_machine)
        .flag(FLAGS.json_log_output)
        .options(options.iter().map(|(k, v)| (k.clone(), v.clone())))
        .build()
}

/// `provider use <id> [--single-machine]`
pub fn use_provider(id: &ProviderId, single_machine: bool) -> DevpodCommand {
    CommandBuilder::new(SUBCOMMANDS.provider)
        .subcommand(SUBCOMMANDS.use_)
        .arg(id.as_str())
        .flag_if(FLAGS.single_machine, single_machine)
        .build()
}

/// `provider delete <id>`
pub fn delete_provider(id: &ProviderId) -> DevpodCommand {
    CommandBuilder::new(SUBCOMMANDS.provider)
        .subcommand(SUBCOMMANDS.delete)
        .arg(id.as_str())
        .build()
}
