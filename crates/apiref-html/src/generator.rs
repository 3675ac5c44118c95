use apiref_core::menu::MenuView;
use apiref_core::{GeneratedFile, MenuRenderer};
use thiserror::Error;

use crate::emitters;

#[derive(Debug, Error)]
pub enum HtmlError {
    #[error("template render failed: {0}")]
    Render(#[from] minijinja::Error),
}

/// Configuration for the HTML renderer.
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Emit a complete HTML page instead of a bare fragment.
    pub standalone: bool,
    /// Page title used by standalone output.
    pub title: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            standalone: false,
            title: "API Reference".to_string(),
        }
    }
}

/// HTML menu renderer. Produces `menu.html`, as a fragment or a full page.
pub struct HtmlGenerator;

impl MenuRenderer for HtmlGenerator {
    type Config = HtmlConfig;
    type Error = HtmlError;

    fn render(
        &self,
        view: &MenuView,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, HtmlError> {
        log::debug!("rendering menu with {} sections", view.sections.len());

        let fragment = emitters::menu::emit_menu(view)?;
        let content = if config.standalone {
            emitters::page::emit_page(&fragment, &config.title)?
        } else {
            fragment
        };

        Ok(vec![GeneratedFile {
            path: "menu.html".to_string(),
            content,
        }])
    }
}
