//! Resolve settings and run the selected command.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::debug;

use audit_landing::booking::CALENDAR_URL_ENV;

use super::command::{BuildArgs, Cli, ColorMode, Command, InspectArgs};
use crate::build::{build_site, BuildPlan};
use crate::config::SiteConfig;
use crate::data::load_landing_data;
use crate::inspect::render_summary;
use crate::progress;

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    apply_color_mode(cli.color);

    let config = match &cli.config {
        Some(path) => SiteConfig::load_from_path(path),
        None => SiteConfig::load(Path::new(".")),
    };
    debug!(?config, "resolved config");

    match cli.command {
        Command::Build(args) => run_build(&args, &config),
        Command::Inspect(args) => run_inspect(&args, &config),
    }
}

fn run_build(args: &BuildArgs, config: &SiteConfig) -> Result<()> {
    let env_url = std::env::var(CALENDAR_URL_ENV).ok();
    let plan = BuildPlan {
        out_dir: config.out_dir(args.out.as_deref()),
        data_file: config.data_file(args.data.as_deref()),
        calendar_url: config.calendar_url(args.calendar_url.as_deref(), env_url.as_deref()),
        wasm_glue: args.wasm_glue.clone(),
        year: args.year.unwrap_or_else(|| chrono::Local::now().year()),
    };
    debug!(?plan, "build plan");

    let written = build_site(&plan).context("build failed")?;
    progress::success(&format!("Landing page written to {}", written.display()));
    Ok(())
}

fn run_inspect(args: &InspectArgs, config: &SiteConfig) -> Result<()> {
    let data_file = config.data_file(args.data.as_deref());
    let data = load_landing_data(data_file.as_deref()).context("could not load page data")?;

    if args.json {
        let json = serde_json::to_string_pretty(&data).context("failed to serialize page data")?;
        println!("{}", json);
    } else {
        println!("{}", render_summary(&data));
    }
    Ok(())
}

fn apply_color_mode(mode: ColorMode) {
    match mode {
        ColorMode::Auto => {}
        ColorMode::Always => {
            console::set_colors_enabled(true);
            console::set_colors_enabled_stderr(true);
        }
        ColorMode::Never => {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }
    }
}
