//! trackui hints command implementation
//!
//! Shows or flips the hints preference and reports which indicator the
//! page should display.

use crate::error::Result;
use crate::output::{emit_success, HumanOutput};
use crate::prefs::IndicatorState;

use super::{Context, HintsCommands};

#[derive(serde::Serialize)]
struct HintsReport {
    key: String,
    enabled: bool,
    indicators: IndicatorState,
}

pub fn run(ctx: &Context, cmd: HintsCommands) -> Result<()> {
    let key = ctx.config.prefs.hints_key.as_str();
    let mut flags = ctx.open_flags()?;

    let (command, enabled) = match cmd {
        HintsCommands::Status => ("hints status", flags.is_flag_set(key)),
        HintsCommands::On => {
            flags.set_flag(key, "true");
            ("hints on", true)
        }
        HintsCommands::Off => {
            flags.set_flag(key, "");
            ("hints off", false)
        }
        HintsCommands::Toggle => ("hints toggle", flags.toggle_flag(key)),
    };

    let report = HintsReport {
        key: key.to_string(),
        enabled,
        indicators: IndicatorState::for_flag(enabled),
    };

    let state = if enabled { "on" } else { "off" };
    let mut human = HumanOutput::new(format!("trackui {command}: hints {state}"));
    human.push_summary("key", key);
    human.push_summary("enabled", enabled.to_string());
    if enabled {
        human.push_next_step("trackui hints off");
    } else {
        human.push_next_step("trackui hints on");
    }

    emit_success(ctx.output, command, &report, Some(&human))
}
