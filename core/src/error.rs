use std::path::PathBuf;
use thiserror::Error;

use crate::utils::Tool;

/// Failures while loading an external language file.
///
/// The table never stays half-loaded: whenever one of these is returned the
/// built-in English strings have already been put back.
#[derive(Error, Debug)]
pub enum LanguageError {
    #[error("failed to read language file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to read the language header on line {line}: \"{text}\"")]
    MalformedHeader { line: usize, text: String },
}

/// Failures of the metadata and thumbnail fetchers.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("no URL was given")]
    EmptyUrl,
    #[error("{0} could not be located")]
    ToolNotFound(Tool),
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: Tool,
        #[source]
        source: std::io::Error,
    },
    #[error("{tool} did not exit within {secs}s")]
    Timeout { tool: Tool, secs: u64 },
    #[error("the downloader printed nothing for {url}: {stderr}")]
    NoOutput { url: String, stderr: String },
    #[error("could not parse the downloader output: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("the selected downloader fork does not provide thumbnails")]
    UnsupportedDownloader,
    #[error("the video has no thumbnail")]
    NoThumbnail,
    #[error("thumbnail request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("ffmpeg did not produce {0:?}")]
    ConversionFailed(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Failures while assembling [`crate::Settings`].
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}
