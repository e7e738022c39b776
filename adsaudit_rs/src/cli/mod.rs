//! CLI module: `adsaudit <command> [options]`.
//!
//! ```text
//! argv ──► command::Cli (clap) ──► dispatch::run ──► build::build_site
//!                                                └──► inspect::render_summary
//! ```
//!
//! Settings resolve in one place ([`dispatch`]): command-line flag, then
//! the `CALENDAR_URL` environment variable (calendar URL only), then
//! `.adsaudit/config.toml`, then built-in defaults.

pub mod command;
pub mod dispatch;

pub use command::{Cli, ColorMode, Command};
pub use dispatch::run;
