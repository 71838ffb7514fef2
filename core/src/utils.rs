use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// External programs the front-end drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    YtDlp,
    YoutubeDl,
    Ffmpeg,
}

impl Tool {
    pub fn binary_name(self) -> String {
        let stem = match self {
            Tool::YtDlp => "yt-dlp",
            Tool::YoutubeDl => "youtube-dl",
            Tool::Ffmpeg => "ffmpeg",
        };
        if cfg!(windows) {
            format!("{}.exe", stem)
        } else {
            stem.to_string()
        }
    }

    fn version_flag(self) -> &'static str {
        match self {
            Tool::Ffmpeg => "-version",
            _ => "--version",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::YtDlp => f.write_str("yt-dlp"),
            Tool::YoutubeDl => f.write_str("youtube-dl"),
            Tool::Ffmpeg => f.write_str("ffmpeg"),
        }
    }
}

/// `<data dir>/ytdlgui/bin`
pub fn managed_bin_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("ytdlgui").join("bin"))
}

/// Where tools are searched for once a configured path does not pan out.
#[derive(Debug, Clone, Default)]
pub struct ToolLocator {
    /// Directory of our own executable.
    pub beside_exe: Option<PathBuf>,
    /// `PATH` handed to the probe. `None` inherits ours.
    pub search_path: Option<OsString>,
    /// Directory holding tools we manage ourselves.
    pub managed_dir: Option<PathBuf>,
}

impl ToolLocator {
    pub fn from_env() -> Self {
        Self {
            beside_exe: std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf)),
            search_path: None,
            managed_dir: managed_bin_dir(),
        }
    }

    /// Finds a tool: the configured path, then next to our own executable,
    /// then `PATH`, then the managed bin directory.
    pub async fn locate(&self, tool: Tool, configured: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = configured {
            if path.is_file() {
                return Some(path.to_path_buf());
            }
            debug!("Configured {} path {:?} does not exist", tool, path);
        }

        let beside_exe = self.beside_exe.as_ref().map(|dir| dir.join(tool.binary_name()));
        if let Some(path) = beside_exe.filter(|p| p.is_file()) {
            return Some(path);
        }

        if self.answers_on_path(tool).await {
            return Some(PathBuf::from(tool.binary_name()));
        }

        self.managed_dir
            .as_ref()
            .map(|dir| dir.join(tool.binary_name()))
            .filter(|p| p.is_file())
    }

    async fn answers_on_path(&self, tool: Tool) -> bool {
        let mut probe = Command::new(tool.binary_name());
        probe
            .arg(tool.version_flag())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        if let Some(path) = &self.search_path {
            probe.env("PATH", path);
        }
        probe.status().await.map(|status| status.success()).unwrap_or(false)
    }
}

/// [`ToolLocator::locate`] with the locations of this process.
pub async fn locate_tool(tool: Tool, configured: Option<&Path>) -> Option<PathBuf> {
    ToolLocator::from_env().locate(tool, configured).await
}

/// Formats a duration in seconds as `H:MM:SS`, or `M:SS` under an hour.
///
/// The total is rounded half to even to whole seconds before it is split.
pub fn format_duration(seconds: f64) -> String {
    let total = round_half_even(seconds.max(0.0));
    let hours = total / 3600;
    let minutes = (total / 60) % 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

fn round_half_even(value: f64) -> u64 {
    let floor = value.floor();
    let diff = value - floor;
    let rounded = if diff > 0.5 || (diff == 0.5 && floor % 2.0 != 0.0) {
        floor + 1.0
    } else {
        floor
    };
    rounded as u64
}

/// Format bytes as human-readable size
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", size as u64, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
