//! trackui init command implementation
//!
//! Creates the data directory and a default `.trackui.toml`.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput};

use super::Context;

#[derive(serde::Serialize)]
struct InitReport {
    data_dir: PathBuf,
    created: InitCreated,
}

#[derive(serde::Serialize)]
struct InitCreated {
    data_dir: bool,
    config: bool,
}

pub fn run(ctx: &Context) -> Result<()> {
    let data_dir = ctx.storage.data_dir().to_path_buf();
    let created_dir = !data_dir.exists();
    ctx.storage.init()?;

    let config_path = ctx.storage.config_file();
    let created_config = !config_path.exists();
    if created_config {
        Config::default().save(&config_path)?;
    }

    let mut created_items = Vec::new();
    if created_dir {
        created_items.push(data_dir.display().to_string());
    }
    if created_config {
        created_items.push(config_path.display().to_string());
    }

    let header = if created_items.is_empty() {
        "trackui init: already initialized".to_string()
    } else {
        "trackui init: initialized".to_string()
    };

    let mut human = HumanOutput::new(header);
    human.push_summary("data dir", data_dir.display().to_string());
    for item in &created_items {
        human.push_detail(format!("created {item}"));
    }
    human.push_next_step("trackui hints status");

    let report = InitReport {
        data_dir,
        created: InitCreated {
            data_dir: created_dir,
            config: created_config,
        },
    };

    emit_success(ctx.output, "init", &report, Some(&human))
}
