use std::path::PathBuf;

use crate::app::domain::GeneratedArtifacts;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::preview_files::{
    cleanup_preview_file, default_preview_dir, write_preview_file,
};

/// Capabilities a host frame should grant the composed page. Nothing else.
pub const SANDBOX_POLICY: &str = "allow-scripts allow-forms";

/// Embed the three artifacts into one standalone page. Nothing is escaped.
pub fn compose_document(artifacts: &GeneratedArtifacts) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<style>{}</style>\n</head>\n<body>\n{}\n<script>{}</script>\n</body>\n</html>\n",
        artifacts.stylesheet, artifacts.markup, artifacts.script
    )
}

pub struct PreviewController {
    pub enabled: bool,
    dir: PathBuf,
}

impl PreviewController {
    pub fn new(enabled: bool, dir: Option<PathBuf>) -> Self {
        Self {
            enabled,
            dir: dir.unwrap_or_else(default_preview_dir),
        }
    }

    /// Toggle preview state. Returns new enabled state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Rewrite the preview page. Returns its path, or None while disabled.
    pub fn refresh(&self, artifacts: &GeneratedArtifacts) -> Result<Option<PathBuf>> {
        if !self.enabled {
            return Ok(None);
        }
        let path = write_preview_file(&self.dir, &compose_document(artifacts))?;
        log::debug!("preview written to {}", path.display());
        Ok(Some(path))
    }

    pub fn cleanup(&self) {
        cleanup_preview_file(&self.dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::serializer::render;
    use crate::app::services::templates::contact_form;

    #[test]
    fn test_compose_places_artifacts() {
        let artifacts = GeneratedArtifacts {
            markup: "<p>hi</p>".to_string(),
            stylesheet: "p {\n  color: red;\n}".to_string(),
            script: "go();".to_string(),
        };
        let page = compose_document(&artifacts);
        assert!(page.starts_with("<!DOCTYPE html>"));

        let style = page.find("<style>p {").unwrap();
        let body = page.find("<body>").unwrap();
        let markup = page.find("<p>hi</p>").unwrap();
        let script = page.find("<script>go();</script>").unwrap();
        assert!(style < body && body < markup && markup < script);
    }

    #[test]
    fn test_sandbox_grants_only_scripts_and_forms() {
        let grants: Vec<&str> = SANDBOX_POLICY.split_whitespace().collect();
        assert_eq!(grants, vec!["allow-scripts", "allow-forms"]);
    }

    #[test]
    fn test_disabled_controller_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let preview = PreviewController::new(false, Some(dir.path().to_path_buf()));
        let written = preview.refresh(&GeneratedArtifacts::default()).unwrap();
        assert_eq!(written, None);
        assert!(!dir.path().join("preview.html").exists());
    }

    #[test]
    fn test_refresh_writes_contact_form_page() {
        let dir = tempfile::tempdir().unwrap();
        let mut preview = PreviewController::new(false, Some(dir.path().to_path_buf()));
        assert!(preview.toggle());

        let path = preview.refresh(&render(&contact_form())).unwrap().unwrap();
        let page = std::fs::read_to_string(&path).unwrap();
        assert!(page.contains("<form class=\"contact-form\""));
        assert!(page.contains("function handleSubmit(event)"));

        preview.cleanup();
        assert!(!path.exists());
    }
}
