pub mod converter;
pub mod error;
pub mod extractor;
pub mod language;
pub mod settings;
pub mod utils;

pub use converter::*;
pub use error::*;
pub use extractor::*;
pub use language::{LoadedFrom, ResourceTable, StringKey};
pub use settings::*;
pub use utils::*;

use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

/// Front-end core: the string table plus the metadata and thumbnail fetchers,
/// all configured from one [`Settings`].
pub struct YtdlGui {
    settings: Settings,
    strings: ResourceTable,
    extractor: MetadataFetcher,
    thumbnails: ThumbnailFetcher,
}

impl YtdlGui {
    /// Create a new instance. The configured language file is loaded
    /// right away; a broken file leaves the built-in English in place.
    pub fn new(settings: Settings) -> Self {
        let mut app = Self::without_language(settings);
        if let Err(e) = app.load_configured_language() {
            warn!("{}", e);
        }
        app
    }

    /// Create an instance holding the built-in English strings, leaving the
    /// choice of language file to the caller.
    pub fn without_language(settings: Settings) -> Self {
        Self {
            extractor: MetadataFetcher::new(&settings),
            thumbnails: ThumbnailFetcher::new(&settings),
            strings: ResourceTable::english(),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn strings(&self) -> &ResourceTable {
        &self.strings
    }

    pub fn strings_mut(&mut self) -> &mut ResourceTable {
        &mut self.strings
    }

    /// Load the language file named in the settings, or English when none is.
    pub fn load_configured_language(&mut self) -> Result<LoadedFrom, LanguageError> {
        let file = self.settings.language.file.clone().unwrap_or_default();
        self.switch_language(&file)
    }

    /// Switch to another language file. A blank path selects English.
    pub fn switch_language(&mut self, path: &Path) -> Result<LoadedFrom, LanguageError> {
        let loaded = self.strings.load_from_file(path)?;
        info!("Language is now {}", self.strings.language_name());
        Ok(loaded)
    }

    /// Get video information without downloading
    pub async fn get_video_info(&self, url: &str) -> Result<VideoMetadata> {
        Ok(self.extractor.fetch(url).await?)
    }

    /// Download the thumbnail of a video
    pub async fn get_thumbnail(&self, metadata: &VideoMetadata) -> Result<Thumbnail> {
        Ok(self.thumbnails.fetch(metadata).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_configured_language_is_loaded() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("pirate.ini");
        std::fs::write(&file, "[Pirate]\ngenericok=Aye\n").unwrap();

        let mut settings = Settings::default();
        settings.language.file = Some(dir.path().join("pirate"));
        let app = YtdlGui::new(settings);

        assert_eq!(app.strings().get(StringKey::GenericOk), "Aye");
        assert_eq!(app.strings().language_name(), "Pirate");
        assert_eq!(app.strings().loaded_file(), Some(file.as_path()));
    }

    #[test]
    fn test_broken_language_keeps_english() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("broken.ini");
        std::fs::write(&file, "[Broken\n").unwrap();

        let mut settings = Settings::default();
        settings.language.file = Some(file);
        let app = YtdlGui::new(settings);

        assert!(app.strings().using_built_in_defaults());
        assert_eq!(app.strings().get(StringKey::GenericOk), "OK");
    }

    #[test]
    fn test_switch_back_to_english() {
        let mut app = YtdlGui::without_language(Settings::default());
        assert_eq!(app.switch_language(Path::new("")).unwrap(), LoadedFrom::BuiltIn);
        assert!(app.strings().using_built_in_defaults());
    }
}
