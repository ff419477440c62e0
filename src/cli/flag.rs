//! trackui flag command implementation
//!
//! Raw get/set/clear on the preference store.

use crate::config::validate_key;
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput};

use super::{Context, FlagCommands};

#[derive(serde::Serialize)]
struct FlagReport {
    key: String,
    value: String,
    set: bool,
}

pub fn run(ctx: &Context, cmd: FlagCommands) -> Result<()> {
    let mut flags = ctx.open_flags()?;

    let (command, key) = match cmd {
        FlagCommands::Get { key } => ("flag get", key),
        FlagCommands::Set { key, value } => {
            check_key(&key)?;
            flags.set_flag(&key, &value);
            ("flag set", key)
        }
        FlagCommands::Clear { key } => {
            check_key(&key)?;
            flags.set_flag(&key, "");
            ("flag clear", key)
        }
    };

    let value = flags.get_flag(&key);
    let report = FlagReport {
        set: !value.is_empty(),
        key: key.clone(),
        value: value.clone(),
    };

    let mut human = HumanOutput::new(format!("trackui {command}: {key}"));
    human.push_summary("value", value);
    human.push_summary("set", report.set.to_string());

    emit_success(ctx.output, command, &report, Some(&human))
}

fn check_key(key: &str) -> Result<()> {
    validate_key(key, "key").map_err(|err| match err {
        Error::InvalidConfig(message) => Error::InvalidArgument(message),
        other => other,
    })
}
