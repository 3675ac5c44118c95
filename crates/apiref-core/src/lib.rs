pub mod config;
pub mod derive;
pub mod error;
pub mod menu;
pub mod parse;

/// A rendered output file with path and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for renderers that produce files from a menu view.
pub trait MenuRenderer {
    type Config;
    type Error: std::error::Error;
    fn render(
        &self,
        view: &menu::MenuView,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}
