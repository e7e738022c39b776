//! `adsaudit build` - render the page and write `index.html`.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use audit_landing::booking::frame_origin;
use audit_landing::{render_landing, PageOptions, ScriptAssets};

use crate::data::load_landing_data;
use crate::error::{Result, SiteError};

/// File name of the rendered page inside the output directory.
pub const INDEX_FILE: &str = "index.html";

/// Fully resolved inputs of one build.
#[derive(Debug, Clone)]
pub struct BuildPlan {
    pub out_dir: PathBuf,
    pub data_file: Option<PathBuf>,
    pub calendar_url: String,
    pub wasm_glue: Option<String>,
    pub year: i32,
}

/// Render the landing page and write it to `<out_dir>/index.html`.
///
/// Returns the path of the written file.
pub fn build_site(plan: &BuildPlan) -> Result<PathBuf> {
    let data = load_landing_data(plan.data_file.as_deref())?;

    if frame_origin(&plan.calendar_url).is_none() {
        warn!(
            url = %plan.calendar_url,
            "calendar URL has no recognizable origin, the booking frame will stay blank"
        );
    }
    if !data.has_results() {
        info!("no metrics, results placeholder will render");
    }
    if !data.has_reviews() {
        info!("no reviews, reviews placeholder will render");
    }

    let options = PageOptions::new(plan.calendar_url.clone(), plan.year).with_scripts(ScriptAssets {
        wasm_glue_path: plan.wasm_glue.clone(),
    });
    let html = render_landing(&data, &options);

    let target = plan.out_dir.join(INDEX_FILE);
    write_page(&target, &html)?;
    info!(path = %target.display(), bytes = html.len(), "landing page written");
    Ok(target)
}

fn write_page(target: &Path, html: &str) -> Result<()> {
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent).map_err(|source| SiteError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(target, html).map_err(|source| SiteError::Write {
        path: target.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use audit_landing::booking::DEFAULT_CALENDAR_URL;
    use tempfile::TempDir;

    fn plan(out_dir: PathBuf) -> BuildPlan {
        BuildPlan {
            out_dir,
            data_file: None,
            calendar_url: DEFAULT_CALENDAR_URL.to_string(),
            wasm_glue: None,
            year: 2025,
        }
    }

    #[test]
    fn writes_index_into_nested_out_dir() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("site").join("public");

        let written = build_site(&plan(out.clone())).unwrap();
        assert_eq!(written, out.join(INDEX_FILE));

        let html = std::fs::read_to_string(written).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("© 2025"));
    }

    #[test]
    fn wasm_glue_is_referenced() {
        let dir = TempDir::new().unwrap();
        let mut plan = plan(dir.path().to_path_buf());
        plan.wasm_glue = Some("./pkg/audit_landing_wasm.js".into());

        let html = std::fs::read_to_string(build_site(&plan).unwrap()).unwrap();
        assert!(html.contains("./pkg/audit_landing_wasm.js"));
    }

    #[test]
    fn malformed_url_still_builds() {
        let dir = TempDir::new().unwrap();
        let mut plan = plan(dir.path().to_path_buf());
        plan.calendar_url = "not a url".into();

        let html = std::fs::read_to_string(build_site(&plan).unwrap()).unwrap();
        assert!(html.contains("src=\"not a url\""));
        assert!(html.contains("frame-src"));
        assert!(!html.contains("frame-src http"));
    }

    #[test]
    fn unreadable_data_file_fails() {
        let dir = TempDir::new().unwrap();
        let mut plan = plan(dir.path().join("out"));
        plan.data_file = Some(dir.path().join("missing.json"));

        assert!(matches!(build_site(&plan), Err(SiteError::ReadData { .. })));
        assert!(!dir.path().join("out").exists());
    }
}
