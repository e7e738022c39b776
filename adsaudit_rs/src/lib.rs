//! # adsaudit
//!
//! Command-line builder for the free Google Ads audit landing page.
//!
//! - [`config`] - `.adsaudit/config.toml` and setting precedence
//! - [`data`] - page data from JSON or the built-in demo set
//! - [`build`] - render and write `index.html`
//! - [`inspect`] - terminal summary of what the page will show
//! - [`cli`] - argument parsing and dispatch

pub mod build;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod inspect;
pub mod progress;

pub use error::SiteError;
