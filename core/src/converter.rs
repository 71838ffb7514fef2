use bytes::Bytes;
use chrono::Local;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::FetchError;
use crate::extractor::VideoMetadata;
use crate::settings::{DownloaderKind, Settings};
use crate::utils::{locate_tool, Tool};

/// Image container, sniffed from the leading bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImageKind {
    Jpeg,
    Png,
    Gif,
    Webp,
    Bmp,
    Unknown,
}

impl ImageKind {
    pub fn sniff(data: &[u8]) -> Self {
        match data {
            [0xFF, 0xD8, 0xFF, ..] => ImageKind::Jpeg,
            [0x89, b'P', b'N', b'G', ..] => ImageKind::Png,
            [b'G', b'I', b'F', b'8', ..] => ImageKind::Gif,
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => ImageKind::Webp,
            [b'B', b'M', ..] => ImageKind::Bmp,
            _ => ImageKind::Unknown,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ImageKind::Jpeg => "jpg",
            ImageKind::Png => "png",
            ImageKind::Gif => "gif",
            ImageKind::Webp => "webp",
            ImageKind::Bmp => "bmp",
            ImageKind::Unknown => "bin",
        }
    }
}

/// A downloaded thumbnail
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub data: Bytes,
    pub kind: ImageKind,
    /// Whether ffmpeg transcoded the image from webp.
    pub converted: bool,
}

/// True when the path of `link`, ignoring the query string, ends in `.webp`.
pub fn is_webp_link(link: &str) -> bool {
    match url::Url::parse(link) {
        Ok(parsed) => parsed.path().ends_with(".webp"),
        Err(_) => link.split('?').next().unwrap_or_default().ends_with(".webp"),
    }
}

/// Downloads thumbnails and converts webp ones to JPEG with ffmpeg
pub struct ThumbnailFetcher {
    client: reqwest::Client,
    downloader: DownloaderKind,
    ffmpeg_path: Option<PathBuf>,
    temp_dir: PathBuf,
}

impl ThumbnailFetcher {
    pub fn new(settings: &Settings) -> Self {
        Self {
            client: reqwest::Client::new(),
            downloader: settings.downloads.downloader,
            ffmpeg_path: settings.tools.ffmpeg_path.clone(),
            temp_dir: settings.tools.temp_dir.clone().unwrap_or_else(std::env::temp_dir),
        }
    }

    /// Download the thumbnail of `metadata`.
    pub async fn fetch(&self, metadata: &VideoMetadata) -> Result<Thumbnail, FetchError> {
        if !self.downloader.supports_thumbnails() {
            warn!(
                "Cannot download the thumbnail for {:?} because the selected youtube-dl fork is not supported",
                metadata.url
            );
            return Err(FetchError::UnsupportedDownloader);
        }

        let link = metadata
            .thumbnail
            .as_deref()
            .filter(|link| !link.trim().is_empty())
            .ok_or(FetchError::NoThumbnail)?;

        info!("Downloading the thumbnail for {:?}", metadata.url);
        let data = self.client.get(link).send().await?.error_for_status()?.bytes().await?;

        if !is_webp_link(link) {
            return Ok(Thumbnail { kind: ImageKind::sniff(&data), data, converted: false });
        }

        info!("The thumbnail is a .webp file and must be converted to be viewable");
        let data = self.convert_webp(&data).await?;
        Ok(Thumbnail { kind: ImageKind::sniff(&data), data, converted: true })
    }

    /// Transcode webp bytes to JPEG through temporary files, which are removed
    /// whether or not the conversion worked.
    pub async fn convert_webp(&self, webp: &[u8]) -> Result<Bytes, FetchError> {
        tokio::fs::create_dir_all(&self.temp_dir).await?;
        let stem = format!("{}-{}s", Local::now().format("%Y%m%d%H%M%S%f"), Uuid::new_v4().simple());
        let input = self.temp_dir.join(format!("{}.webp", stem));
        let output = self.temp_dir.join(format!("{}.jpg", stem));

        tokio::fs::write(&input, webp).await?;
        let result = self.run_ffmpeg(&input, &output).await;

        remove_quietly(&input).await;
        remove_quietly(&output).await;
        result
    }

    async fn run_ffmpeg(&self, input: &Path, output: &Path) -> Result<Bytes, FetchError> {
        let ffmpeg = locate_tool(Tool::Ffmpeg, self.ffmpeg_path.as_deref())
            .await
            .ok_or(FetchError::ToolNotFound(Tool::Ffmpeg))?;

        debug!("Converting {:?} to {:?}", input, output);
        let status = Command::new(&ffmpeg)
            .args(["-nostats", "-hide_banner", "-i"])
            .arg(input)
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|source| FetchError::Spawn { tool: Tool::Ffmpeg, source })?;

        if !tokio::fs::try_exists(output).await.unwrap_or(false) {
            warn!("ffmpeg exited with {} and wrote nothing", status);
            return Err(FetchError::ConversionFailed(output.to_path_buf()));
        }

        Ok(Bytes::from(tokio::fs::read(output).await?))
    }
}

async fn remove_quietly(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!("Could not remove temporary file {:?}: {}", path, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, b'j', b'p', b'g'];
    const WEBP: &[u8] = b"RIFF\x10\x00\x00\x00WEBPVP8 ";

    /// Serves `body` to a single request and returns the base URL.
    async fn serve_once(body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut request = [0u8; 2048];
                let _ = socket.read(&mut request).await;
                let head = format!(
                    "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nContent-Type: image/webp\r\nConnection: close\r\n\r\n",
                    body.len()
                );
                let _ = socket.write_all(head.as_bytes()).await;
                let _ = socket.write_all(body).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{}", addr)
    }

    fn metadata_with(link: &str) -> VideoMetadata {
        VideoMetadata {
            url: "https://example.com/watch".to_string(),
            thumbnail: Some(link.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_sniff() {
        assert_eq!(ImageKind::sniff(JPEG), ImageKind::Jpeg);
        assert_eq!(ImageKind::sniff(WEBP), ImageKind::Webp);
        assert_eq!(ImageKind::sniff(b"\x89PNG\r\n"), ImageKind::Png);
        assert_eq!(ImageKind::sniff(b""), ImageKind::Unknown);
    }

    #[test]
    fn test_webp_detection_ignores_query() {
        assert!(is_webp_link("https://i.ytimg.com/vi_webp/abc/maxresdefault.webp?v=1"));
        assert!(!is_webp_link("https://i.ytimg.com/vi/abc/hqdefault.jpg?sqp=webp"));
        assert!(is_webp_link("thumb.webp"));
        assert!(!is_webp_link("https://i.ytimg.com/vi/abc/THUMB.WEBP"));
    }

    #[tokio::test]
    async fn test_unsupported_fork_is_refused() {
        let mut settings = Settings::default();
        settings.downloads.downloader = DownloaderKind::YoutubeDl;
        let fetcher = ThumbnailFetcher::new(&settings);

        assert!(matches!(
            fetcher.fetch(&metadata_with("http://127.0.0.1:9/x.jpg")).await,
            Err(FetchError::UnsupportedDownloader)
        ));
    }

    #[tokio::test]
    async fn test_missing_link() {
        let fetcher = ThumbnailFetcher::new(&Settings::default());
        let metadata = VideoMetadata::default();
        assert!(matches!(fetcher.fetch(&metadata).await, Err(FetchError::NoThumbnail)));
    }

    #[cfg(unix)]
    mod with_fake_ffmpeg {
        use super::*;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        /// An ffmpeg stand-in that records its invocation and writes a JPEG
        /// header to its last argument.
        fn fake_ffmpeg(dir: &Path, marker: &Path) -> PathBuf {
            let path = dir.join("ffmpeg");
            let script = format!(
                "#!/bin/sh\necho \"$@\" > '{}'\nfor last; do :; done\nprintf '\\377\\330\\377\\340jpg' > \"$last\"\n",
                marker.display()
            );
            std::fs::write(&path, script).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        fn settings_for(tools: &TempDir, temp: &TempDir) -> (Settings, PathBuf) {
            let marker = tools.path().join("ffmpeg-ran.txt");
            let mut settings = Settings::default();
            settings.tools.ffmpeg_path = Some(fake_ffmpeg(tools.path(), &marker));
            settings.tools.temp_dir = Some(temp.path().to_path_buf());
            (settings, marker)
        }

        #[tokio::test]
        async fn test_webp_is_converted_and_temp_files_removed() {
            let tools = TempDir::new().unwrap();
            let temp = TempDir::new().unwrap();
            let (settings, marker) = settings_for(&tools, &temp);
            let base = serve_once(WEBP).await;

            let fetcher = ThumbnailFetcher::new(&settings);
            let thumbnail = fetcher
                .fetch(&metadata_with(&format!("{}/vi_webp/abc/maxres.webp?v=2", base)))
                .await
                .unwrap();

            assert!(thumbnail.converted);
            assert_eq!(thumbnail.kind, ImageKind::Jpeg);
            assert_eq!(&thumbnail.data[..], JPEG);

            let invocation = std::fs::read_to_string(&marker).unwrap();
            assert!(invocation.starts_with("-nostats -hide_banner -i "));
            assert!(invocation.contains(".webp"));
            assert!(invocation.trim_end().ends_with(".jpg"));

            assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
        }

        #[tokio::test]
        async fn test_other_formats_skip_the_converter() {
            let tools = TempDir::new().unwrap();
            let temp = TempDir::new().unwrap();
            let (settings, marker) = settings_for(&tools, &temp);
            let base = serve_once(JPEG).await;

            let fetcher = ThumbnailFetcher::new(&settings);
            let thumbnail = fetcher.fetch(&metadata_with(&format!("{}/hq.jpg", base))).await.unwrap();

            assert!(!thumbnail.converted);
            assert_eq!(thumbnail.kind, ImageKind::Jpeg);
            assert!(!marker.exists());
        }

        #[tokio::test]
        async fn test_failed_conversion_cleans_up() {
            let tools = TempDir::new().unwrap();
            let temp = TempDir::new().unwrap();
            let broken = tools.path().join("ffmpeg");
            std::fs::write(&broken, "#!/bin/sh\nexit 1\n").unwrap();
            std::fs::set_permissions(&broken, std::fs::Permissions::from_mode(0o755)).unwrap();

            let mut settings = Settings::default();
            settings.tools.ffmpeg_path = Some(broken);
            settings.tools.temp_dir = Some(temp.path().to_path_buf());

            let fetcher = ThumbnailFetcher::new(&settings);
            assert!(matches!(fetcher.convert_webp(WEBP).await, Err(FetchError::ConversionFailed(_))));
            assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
        }

        #[tokio::test]
        async fn test_missing_converter_still_cleans_up() {
            let temp = TempDir::new().unwrap();
            let mut settings = Settings::default();
            settings.tools.ffmpeg_path = Some(temp.path().join("no-such-ffmpeg"));
            settings.tools.temp_dir = Some(temp.path().join("work"));

            // a system ffmpeg may still be found on PATH; it cannot decode the stub
            let fetcher = ThumbnailFetcher::new(&settings);
            assert!(matches!(
                fetcher.convert_webp(WEBP).await,
                Err(FetchError::ToolNotFound(Tool::Ffmpeg)) | Err(FetchError::ConversionFailed(_))
            ));
            assert_eq!(std::fs::read_dir(temp.path().join("work")).unwrap().count(), 0);
        }
    }
}
