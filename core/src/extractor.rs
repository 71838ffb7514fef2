use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{info, warn};

use crate::error::FetchError;
use crate::settings::{DownloadSettings, Settings};
use crate::utils::{format_duration, locate_tool};

/// Video information printed by the downloader in simulate mode
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoMetadata {
    /// The URL the metadata was fetched for.
    #[serde(skip_deserializing)]
    pub url: String,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub formats: Vec<Format>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    pub uploader: Option<String>,
    pub view_count: Option<u64>,
    pub duration: Option<f64>,
    pub duration_string: Option<String>,
}

/// Video/Audio format information
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Format {
    pub format_id: Option<String>,
    pub format_note: Option<String>,
    pub ext: Option<String>,
    pub acodec: Option<String>,
    pub vcodec: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fps: Option<f32>,
    pub asr: Option<u32>, // Audio sample rate
    pub filesize: Option<u64>,
    pub filesize_approx: Option<u64>,
    pub tbr: Option<f64>, // Total bitrate
    pub abr: Option<f64>, // Audio bitrate
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Format>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Format>>::deserialize(deserializer)?.unwrap_or_default())
}

impl VideoMetadata {
    /// Duration for display: computed from `duration` when present, else the
    /// downloader's own string, else `???`.
    pub fn display_duration(&self) -> String {
        match (self.duration, self.duration_string.as_deref()) {
            (Some(seconds), _) => format_duration(seconds),
            (None, Some(text)) if !text.trim().is_empty() => text.to_string(),
            _ => "???".to_string(),
        }
    }
}

impl Format {
    fn has_media_extension(&self) -> bool {
        !matches!(
            self.ext.as_deref().map(str::to_lowercase).as_deref(),
            Some("mhtml") | Some("none")
        )
    }

    pub fn is_valid_video_format(&self) -> bool {
        self.has_media_extension()
    }

    pub fn is_valid_audio_format(&self) -> bool {
        self.has_media_extension()
    }
}

/// Runs the downloader in simulate mode to read video metadata
pub struct MetadataFetcher {
    downloads: DownloadSettings,
    downloader_path: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl MetadataFetcher {
    pub fn new(settings: &Settings) -> Self {
        Self {
            downloads: settings.downloads.clone(),
            downloader_path: settings.tools.youtube_dl_path.clone(),
            timeout: settings.tools.timeout(),
        }
    }

    /// Arguments passed to the downloader for `url`.
    pub fn build_args(&self, url: &str) -> Vec<String> {
        let mut args: Vec<String> = ["--simulate", "--no-warnings", "--no-cache-dir", "--print-json"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        args.extend(self.downloads.connection_args());
        args.push(url.to_string());
        args
    }

    /// Fetch the metadata of a video.
    pub async fn fetch(&self, url: &str) -> Result<VideoMetadata, FetchError> {
        self.fetch_raw(url).await.map(|(metadata, _)| metadata)
    }

    /// Fetch the metadata together with the raw JSON text it was parsed from.
    pub async fn fetch_raw(&self, url: &str) -> Result<(VideoMetadata, String), FetchError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(FetchError::EmptyUrl);
        }
        info!("Gathering data for {:?}", url);

        let tool = self.downloads.downloader.tool();
        let binary = locate_tool(tool, self.downloader_path.as_deref())
            .await
            .ok_or(FetchError::ToolNotFound(tool))?;

        let mut command = Command::new(&binary);
        command
            .args(self.build_args(url))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let run = command.output();
        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, run)
                .await
                .map_err(|_| FetchError::Timeout { tool, secs: limit.as_secs() })?,
            None => run.await,
        }
        .map_err(|source| FetchError::Spawn { tool, source })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !stderr.is_empty() {
            warn!("Downloading info for {:?} output some errors", url);
            warn!("{}", stderr);
        }

        if stdout.trim().is_empty() {
            return Err(FetchError::NoOutput { url: url.to_string(), stderr });
        }

        info!("Finished downloading info for {:?}, deserializing the data", url);
        let mut metadata = parse_first_document(&stdout)?;
        metadata.url = url.to_string();
        Ok((metadata, stdout))
    }
}

/// Parses the first JSON document of the downloader output. Playlists print
/// one document per entry.
pub fn parse_first_document(output: &str) -> Result<VideoMetadata, FetchError> {
    let mut documents = serde_json::Deserializer::from_str(output).into_iter::<VideoMetadata>();
    match documents.next() {
        Some(parsed) => Ok(parsed?),
        None => Err(FetchError::NoOutput { url: String::new(), stderr: String::new() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let metadata = parse_first_document(r#"{"title":"T","formats":[{"format_id":"18","ext":"mp4"}]}"#).unwrap();
        assert_eq!(metadata.title.as_deref(), Some("T"));
        assert_eq!(metadata.formats.len(), 1);
        assert_eq!(metadata.formats[0].format_id.as_deref(), Some("18"));
        assert_eq!(metadata.formats[0].ext.as_deref(), Some("mp4"));
        assert_eq!(metadata.formats[0].width, None);
    }

    #[test]
    fn test_parse_tolerates_nulls_and_unknown_fields() {
        let metadata = parse_first_document(
            r#"{"title":null,"formats":null,"view_count":12,"duration":61.0,"is_live":false}"#,
        )
        .unwrap();
        assert_eq!(metadata.title, None);
        assert!(metadata.formats.is_empty());
        assert_eq!(metadata.view_count, Some(12));
    }

    #[test]
    fn test_parse_takes_first_of_several_documents() {
        let metadata = parse_first_document("{\"title\":\"one\"}\n{\"title\":\"two\"}\n").unwrap();
        assert_eq!(metadata.title.as_deref(), Some("one"));
    }

    #[test]
    fn test_display_duration() {
        let mut metadata = VideoMetadata { duration: Some(3725.0), ..Default::default() };
        assert_eq!(metadata.display_duration(), "1:02:05");

        metadata.duration = None;
        metadata.duration_string = Some("4:20".to_string());
        assert_eq!(metadata.display_duration(), "4:20");

        metadata.duration_string = None;
        assert_eq!(metadata.display_duration(), "???");
    }

    #[test]
    fn test_format_validity() {
        let format = |ext: &str| Format { ext: Some(ext.to_string()), ..Default::default() };
        assert!(format("mp4").is_valid_video_format());
        assert!(!format("MHTML").is_valid_video_format());
        assert!(!format("none").is_valid_audio_format());
    }

    #[test]
    fn test_build_args_order() {
        let mut settings = Settings::default();
        settings.downloads.retry_attempts = 2;
        settings.downloads.force_ipv6 = true;
        let fetcher = MetadataFetcher::new(&settings);

        assert_eq!(
            fetcher.build_args("https://example.com/v"),
            vec![
                "--simulate",
                "--no-warnings",
                "--no-cache-dir",
                "--print-json",
                "--retries",
                "2",
                "--force-ipv6",
                "https://example.com/v",
            ]
        );
    }

    #[tokio::test]
    async fn test_blank_url_is_rejected() {
        let fetcher = MetadataFetcher::new(&Settings::default());
        assert!(matches!(fetcher.fetch("  ").await, Err(FetchError::EmptyUrl)));
    }

    #[cfg(unix)]
    mod with_fake_downloader {
        use super::*;
        use std::os::unix::fs::PermissionsExt;
        use std::path::Path;
        use tempfile::TempDir;

        fn fake_downloader(dir: &Path, script: &str) -> PathBuf {
            let path = dir.join("yt-dlp");
            std::fs::write(&path, format!("#!/bin/sh\n{}\n", script)).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        fn settings_for(binary: PathBuf) -> Settings {
            let mut settings = Settings::default();
            settings.tools.youtube_dl_path = Some(binary);
            settings
        }

        #[tokio::test]
        async fn test_fetch_parses_downloader_output() {
            let dir = TempDir::new().unwrap();
            let args_log = dir.path().join("args.txt");
            let binary = fake_downloader(
                dir.path(),
                &format!(
                    "echo \"$@\" > '{}'\necho '{{\"title\":\"T\",\"formats\":[{{\"format_id\":\"18\",\"ext\":\"mp4\"}}]}}'",
                    args_log.display()
                ),
            );

            let fetcher = MetadataFetcher::new(&settings_for(binary));
            let (metadata, raw) = fetcher.fetch_raw("https://example.com/watch").await.unwrap();

            assert_eq!(metadata.url, "https://example.com/watch");
            assert_eq!(metadata.title.as_deref(), Some("T"));
            assert_eq!(metadata.formats.len(), 1);
            assert_eq!(metadata.formats[0].format_id.as_deref(), Some("18"));
            assert_eq!(metadata.formats[0].ext.as_deref(), Some("mp4"));
            assert!(raw.contains("\"title\""));

            let logged = std::fs::read_to_string(&args_log).unwrap();
            assert_eq!(
                logged.trim(),
                "--simulate --no-warnings --no-cache-dir --print-json https://example.com/watch"
            );
        }

        #[tokio::test]
        async fn test_stderr_alone_does_not_fail() {
            let dir = TempDir::new().unwrap();
            let binary = fake_downloader(dir.path(), "echo 'WARNING: slow' >&2\necho '{\"title\":\"T\"}'");

            let fetcher = MetadataFetcher::new(&settings_for(binary));
            let metadata = fetcher.fetch("https://example.com/watch").await.unwrap();
            assert_eq!(metadata.title.as_deref(), Some("T"));
        }

        #[tokio::test]
        async fn test_empty_output_is_no_data() {
            let dir = TempDir::new().unwrap();
            let binary = fake_downloader(dir.path(), "echo 'ERROR: unsupported URL' >&2\nexit 1");

            let fetcher = MetadataFetcher::new(&settings_for(binary));
            match fetcher.fetch("https://example.com/nothing").await {
                Err(FetchError::NoOutput { stderr, .. }) => assert!(stderr.contains("unsupported URL")),
                other => panic!("unexpected result: {:?}", other),
            }
        }

        #[tokio::test]
        async fn test_timeout_kills_hung_downloader() {
            let dir = TempDir::new().unwrap();
            let binary = fake_downloader(dir.path(), "sleep 30");

            let mut settings = settings_for(binary);
            settings.tools.timeout_secs = Some(1);
            let fetcher = MetadataFetcher::new(&settings);
            assert!(matches!(
                fetcher.fetch("https://example.com/slow").await,
                Err(FetchError::Timeout { secs: 1, .. })
            ));
        }
    }
}
