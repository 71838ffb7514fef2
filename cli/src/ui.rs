use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use ytdlgui_core::language::LanguageFileInfo;
use ytdlgui_core::{format_bytes, ResourceTable, StringKey, VideoMetadata};

pub fn create_spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Prints the metadata, labelled with the loaded string table.
pub fn display_video_info(info: &VideoMetadata, strings: &ResourceTable) {
    println!("📹 {}", info.title.as_deref().unwrap_or("???").green().bold());
    if let Some(uploader) = &info.uploader {
        println!("👤 {}", uploader);
    }
    println!("⏱️  {}", info.display_duration());
    if let Some(views) = info.view_count {
        println!("👁️  {}", views);
    }
    if let Some(link) = &info.thumbnail {
        println!("🖼️  {}", link);
    }

    let formats: Vec<_> = info.formats.iter().filter(|f| f.is_valid_video_format()).collect();
    if formats.is_empty() {
        return;
    }

    println!();
    println!(
        "{:<10} {:<10} {:<12} {:<12} {:<14} {:<12}",
        strings[StringKey::ChFormatId].bold(),
        strings[StringKey::ChContainer].bold(),
        strings[StringKey::ChVideoQuality].bold(),
        strings[StringKey::ChVideoCodec].bold(),
        strings[StringKey::ChAudioCodec].bold(),
        strings[StringKey::ChFileSize].bold(),
    );
    for format in formats {
        let size = format.filesize.or(format.filesize_approx).map(format_bytes).unwrap_or_default();
        println!(
            "{:<10} {:<10} {:<12} {:<12} {:<14} {:<12}",
            format.format_id.as_deref().unwrap_or("-"),
            format.ext.as_deref().unwrap_or("-"),
            format.format_note.as_deref().unwrap_or("-"),
            format.vcodec.as_deref().unwrap_or("-"),
            format.acodec.as_deref().unwrap_or("-"),
            size,
        );
    }
}

pub fn display_languages(languages: &[LanguageFileInfo]) {
    if languages.is_empty() {
        println!("No language files found");
        return;
    }
    for language in languages {
        let name = language.name.as_deref().unwrap_or("(no header)");
        let short = language.short_name.as_deref().unwrap_or("-");
        println!("{:<24} {:<8} {}", name.green(), short, language.path.display());
    }
}
