//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "adsaudit")]
#[command(about = "Render the free Google Ads audit landing page to static HTML")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Terminal colors
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Config file (default: .adsaudit/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the page and write index.html
    Build(BuildArgs),
    /// Print the metrics and reviews the page will show
    Inspect(InspectArgs),
}

#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Output directory (default: dist)
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// JSON file with "results" and "reviews" (default: demo data)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Scheduling embed URL (overrides CALENDAR_URL)
    #[arg(long)]
    pub calendar_url: Option<String>,

    /// Load the scroll controls from this wasm-bindgen glue instead of the inline script
    #[arg(long)]
    pub wasm_glue: Option<String>,

    /// Footer year (default: current year)
    #[arg(long)]
    pub year: Option<i32>,
}

#[derive(Args, Debug, Default)]
pub struct InspectArgs {
    /// JSON file with "results" and "reviews" (default: demo data)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Print the resolved page data as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_build_flags() {
        let cli = Cli::try_parse_from([
            "adsaudit",
            "build",
            "--out",
            "public",
            "--calendar-url",
            "https://cal.example.com",
            "--year",
            "2030",
        ])
        .unwrap();

        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.out, Some(PathBuf::from("public")));
                assert_eq!(args.calendar_url.as_deref(), Some("https://cal.example.com"));
                assert_eq!(args.year, Some(2030));
                assert_eq!(args.data, None);
            }
            other => panic!("expected build, got {other:?}"),
        }
        assert_eq!(cli.log_level, "info");
        assert_eq!(cli.color, ColorMode::Auto);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "adsaudit",
            "inspect",
            "--json",
            "--color",
            "never",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::Inspect(InspectArgs { json: true, .. })));
        assert_eq!(cli.color, ColorMode::Never);
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["adsaudit"]).is_err());
    }
}
