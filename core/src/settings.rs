use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::error::SettingsError;
use crate::utils::Tool;

/// Retry count the downloader uses when none is passed.
pub const DOWNLOADER_DEFAULT_RETRIES: u32 = 10;

/// Application settings, read from the settings file and the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub downloads: DownloadSettings,
    pub tools: ToolSettings,
    pub language: LanguageSettings,
}

/// Which youtube-dl fork is installed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DownloaderKind {
    #[default]
    YtDlp,
    YtDlpNightly,
    YoutubeDl,
}

impl DownloaderKind {
    pub fn tool(self) -> Tool {
        match self {
            DownloaderKind::YtDlp | DownloaderKind::YtDlpNightly => Tool::YtDlp,
            DownloaderKind::YoutubeDl => Tool::YoutubeDl,
        }
    }

    /// Only the yt-dlp forks hand out thumbnail links we can use.
    pub fn supports_thumbnails(self) -> bool {
        matches!(self, DownloaderKind::YtDlp | DownloaderKind::YtDlpNightly)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProxyType {
    Http,
    Https,
    Socks4,
    Socks5,
}

impl ProxyType {
    pub fn scheme(self) -> &'static str {
        match self {
            ProxyType::Http => "http://",
            ProxyType::Https => "https://",
            ProxyType::Socks4 => "socks4://",
            ProxyType::Socks5 => "socks5://",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DownloadSettings {
    pub downloader: DownloaderKind,
    pub retry_attempts: u32,
    pub force_ipv4: bool,
    pub force_ipv6: bool,
    pub use_proxy: bool,
    pub proxy_type: Option<ProxyType>,
    pub proxy_ip: String,
    pub proxy_port: String,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            downloader: DownloaderKind::default(),
            retry_attempts: DOWNLOADER_DEFAULT_RETRIES,
            force_ipv4: false,
            force_ipv6: false,
            use_proxy: false,
            proxy_type: None,
            proxy_ip: String::new(),
            proxy_port: String::new(),
        }
    }
}

impl DownloadSettings {
    /// Retry, IP version and proxy arguments for the downloader.
    pub fn connection_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if self.retry_attempts > 0 && self.retry_attempts != DOWNLOADER_DEFAULT_RETRIES {
            args.push("--retries".to_string());
            args.push(self.retry_attempts.to_string());
        }

        if self.force_ipv4 {
            args.push("--force-ipv4".to_string());
        } else if self.force_ipv6 {
            args.push("--force-ipv6".to_string());
        }

        if let Some(proxy) = self.proxy_url() {
            args.push("--proxy".to_string());
            args.push(proxy);
        }

        args
    }

    pub fn proxy_url(&self) -> Option<String> {
        let proxy_type = self.proxy_type.filter(|_| self.use_proxy)?;
        if self.proxy_ip.is_empty() || self.proxy_port.is_empty() {
            return None;
        }
        Some(format!("{}{}:{}/", proxy_type.scheme(), self.proxy_ip, self.proxy_port))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToolSettings {
    pub youtube_dl_path: Option<PathBuf>,
    pub ffmpeg_path: Option<PathBuf>,
    /// Kill the downloader after this many seconds. Unset waits forever.
    pub timeout_secs: Option<u64>,
    /// Where webp thumbnails are converted. Defaults to the system temp dir.
    pub temp_dir: Option<PathBuf>,
}

impl ToolSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LanguageSettings {
    /// Language file to load at start-up. Unset uses the built-in English.
    pub file: Option<PathBuf>,
    /// Directory scanned for language files.
    pub directory: Option<PathBuf>,
}

impl Settings {
    /// `<config dir>/ytdlgui/settings.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ytdlgui").join("settings.toml"))
    }

    /// Layers the default settings file, `explicit` and `YTDLGUI__*`
    /// environment variables, later sources winning.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();

        if let Some(path) = Self::default_path() {
            debug!("Reading settings from {:?} if present", path);
            builder = builder.add_source(File::from(path).required(false));
        }
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }

        let settings = builder
            .add_source(Environment::with_prefix("YTDLGUI").separator("__").try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_connection_args_are_empty() {
        assert!(DownloadSettings::default().connection_args().is_empty());
    }

    #[test]
    fn test_retries_only_when_not_default() {
        let mut settings = DownloadSettings { retry_attempts: 3, ..Default::default() };
        assert_eq!(settings.connection_args(), vec!["--retries", "3"]);

        settings.retry_attempts = 0;
        assert!(settings.connection_args().is_empty());
    }

    #[test]
    fn test_ipv4_wins_over_ipv6() {
        let settings = DownloadSettings { force_ipv4: true, force_ipv6: true, ..Default::default() };
        assert_eq!(settings.connection_args(), vec!["--force-ipv4"]);

        let settings = DownloadSettings { force_ipv6: true, ..Default::default() };
        assert_eq!(settings.connection_args(), vec!["--force-ipv6"]);
    }

    #[test]
    fn test_proxy_needs_every_part() {
        let mut settings = DownloadSettings {
            use_proxy: true,
            proxy_type: Some(ProxyType::Socks5),
            proxy_ip: "127.0.0.1".to_string(),
            proxy_port: "9050".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.connection_args(), vec!["--proxy", "socks5://127.0.0.1:9050/"]);

        settings.proxy_port.clear();
        assert!(settings.connection_args().is_empty());

        settings.proxy_port = "9050".to_string();
        settings.use_proxy = false;
        assert!(settings.connection_args().is_empty());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "[downloads]\ndownloader = \"youtube-dl\"\nretry_attempts = 4\n\n[tools]\ntimeout_secs = 30\n",
        )
        .unwrap();

        let settings = Settings::load(Some(path.as_path())).unwrap();
        assert_eq!(settings.downloads.downloader, DownloaderKind::YoutubeDl);
        assert_eq!(settings.downloads.retry_attempts, 4);
        assert!(!settings.downloads.force_ipv4);
        assert_eq!(settings.tools.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(settings.language.file, None);
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[downloads]\nforce_ipv6 = false\nproxy_ip = \"10.0.0.1\"\n").unwrap();

        // no other test reads these two keys
        std::env::set_var("YTDLGUI__DOWNLOADS__FORCE_IPV6", "true");
        let loaded = Settings::load(Some(path.as_path()));
        std::env::remove_var("YTDLGUI__DOWNLOADS__FORCE_IPV6");

        let settings = loaded.unwrap();
        assert!(settings.downloads.force_ipv6);
        assert_eq!(settings.downloads.proxy_ip, "10.0.0.1");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(Settings::load(Some(dir.path().join("absent.toml").as_path())).is_err());
    }
}
