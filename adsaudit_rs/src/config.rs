//! Configuration file support for adsaudit.
//!
//! Loads optional `.adsaudit/config.toml` from the working directory.
//! Every key is optional; command-line flags and the `CALENDAR_URL`
//! environment variable take precedence over the file.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use audit_landing::booking::resolve_calendar_url;

/// Directory holding the config file, relative to the project root.
pub const CONFIG_DIR: &str = ".adsaudit";

/// Output directory when neither flag nor config names one.
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Scheduling embed URL
    pub calendar_url: Option<String>,
    /// JSON file with `results` and `reviews`
    pub data_file: Option<PathBuf>,
    /// Where `build` writes `index.html`
    pub out_dir: Option<PathBuf>,
}

impl SiteConfig {
    /// Load config from `.adsaudit/config.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_DIR).join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Embed URL by precedence: flag, environment, this file, built-in
    /// default. Blank values count as unset.
    pub fn calendar_url(&self, flag: Option<&str>, env: Option<&str>) -> String {
        let configured = [flag, env, self.calendar_url.as_deref()]
            .into_iter()
            .flatten()
            .find(|url| !url.trim().is_empty());
        resolve_calendar_url(configured)
    }

    /// Output directory: flag, then this file, then `dist`.
    pub fn out_dir(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.out_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }

    /// Data file: flag, then this file. `None` means the demo dataset.
    pub fn data_file(&self, flag: Option<&Path>) -> Option<PathBuf> {
        flag.map(Path::to_path_buf).or_else(|| self.data_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use audit_landing::booking::DEFAULT_CALENDAR_URL;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn missing_config_is_default() {
        let dir = TempDir::new().unwrap();
        assert_eq!(SiteConfig::load(dir.path()), SiteConfig::default());
    }

    #[test]
    fn loads_config_file() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(CONFIG_DIR)).unwrap();
        let mut file =
            std::fs::File::create(dir.path().join(CONFIG_DIR).join("config.toml")).unwrap();
        writeln!(
            file,
            r#"
calendar_url = "https://cal.example.com/team"
data_file = "data/page.json"
out_dir = "public"
"#
        )
        .unwrap();

        let config = SiteConfig::load(dir.path());
        assert_eq!(config.calendar_url.as_deref(), Some("https://cal.example.com/team"));
        assert_eq!(config.data_file, Some(PathBuf::from("data/page.json")));
        assert_eq!(config.out_dir(None), PathBuf::from("public"));
    }

    #[test]
    fn invalid_config_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "calendar_url = [not toml").unwrap();
        assert_eq!(SiteConfig::load_from_path(&path), SiteConfig::default());
    }

    #[test]
    fn calendar_url_precedence() {
        let config = SiteConfig {
            calendar_url: Some("https://file.example.com".into()),
            ..Default::default()
        };

        assert_eq!(
            config.calendar_url(Some("https://flag.example.com"), Some("https://env.example.com")),
            "https://flag.example.com"
        );
        assert_eq!(
            config.calendar_url(None, Some("https://env.example.com")),
            "https://env.example.com"
        );
        assert_eq!(config.calendar_url(None, Some("")), "https://file.example.com");
        assert_eq!(
            SiteConfig::default().calendar_url(None, Some("  ")),
            DEFAULT_CALENDAR_URL
        );
    }

    #[test]
    fn out_dir_defaults_to_dist() {
        assert_eq!(SiteConfig::default().out_dir(None), PathBuf::from("dist"));
        assert_eq!(
            SiteConfig::default().out_dir(Some(Path::new("site"))),
            PathBuf::from("site")
        );
        assert_eq!(SiteConfig::default().data_file(None), None);
    }
}
