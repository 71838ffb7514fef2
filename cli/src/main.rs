mod args;
mod config;
mod ui;

use anyhow::Result;
use args::{Cli, Commands, LangAction};
use clap::Parser;
use colored::*;
use dialoguer::Confirm;
use std::path::{Path, PathBuf};
use tracing::{error, warn};
use ytdlgui_core::language::scan_language_files;
use ytdlgui_core::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    let settings = config::load_settings(cli.config.as_deref())?;

    if let Commands::Config = cli.command {
        return config::show_config(&settings, cli.config.as_deref());
    }

    let mut app = YtdlGui::without_language(settings);
    let language = cli
        .language
        .clone()
        .or_else(|| app.settings().language.file.clone())
        .unwrap_or_default();
    load_language(&mut app, &language);

    match cli.command {
        Commands::Lang(args) => handle_lang(&app, args.action)?,
        Commands::Info(args) => show_video_info(&app, args).await?,
        Commands::Thumbnail(args) => save_thumbnail(&app, args).await?,
        Commands::Config => {}
    }

    Ok(())
}

/// Loads the language file, asking whether to try again when it is broken.
/// English stays loaded if the user gives up.
fn load_language(app: &mut YtdlGui, path: &Path) {
    let result = app.strings_mut().load_with_retry(path, |e| {
        eprintln!("{} {}", "⚠️  Language file failed to load:".yellow(), e);
        Confirm::new()
            .with_prompt("Retry loading the language file? (No keeps English)")
            .default(false)
            .interact()
            .unwrap_or(false)
    });

    if let Err(e) = result {
        warn!("Using built-in English strings: {}", e);
    }
}

fn handle_lang(app: &YtdlGui, action: LangAction) -> Result<()> {
    let strings = app.strings();
    match action {
        LangAction::Show => {
            println!("{}", strings.language_name().green().bold());
            println!("Short name: {}", &strings[StringKey::CurrentLanguageShort]);
            println!("Version:    {}", &strings[StringKey::CurrentLanguageVersion]);
            match strings.loaded_file() {
                Some(path) => println!("Loaded from {}", path.display()),
                None => println!("Built-in English: {}", strings.using_built_in_defaults()),
            }
        }
        LangAction::Get { keys } => {
            for key in keys {
                match strings.lookup(&key) {
                    Some(text) => println!("{}={}", key, text),
                    None => {
                        error!("Unknown key: {}", key);
                        anyhow::bail!("Unknown key: {}", key);
                    }
                }
            }
        }
        LangAction::Dump { json } => {
            if json {
                let map: std::collections::BTreeMap<_, _> = strings.iter().map(|(k, v)| (k.name(), v)).collect();
                println!("{}", serde_json::to_string_pretty(&map)?);
            } else {
                for (key, text) in strings.iter() {
                    println!("{}={}", key, text.replace('\n', "\\n"));
                }
            }
        }
        LangAction::List { dir } => {
            let dir = dir
                .or_else(|| app.settings().language.directory.clone())
                .unwrap_or_else(|| PathBuf::from("lang"));
            let languages = scan_language_files(&dir)?;
            ui::display_languages(&languages);
        }
    }
    Ok(())
}

async fn show_video_info(app: &YtdlGui, args: args::InfoArgs) -> Result<()> {
    let spinner = ui::create_spinner(app.strings()[StringKey::FrmGenericDownloadProgress].to_string());
    let info = app.get_video_info(&args.url).await;
    spinner.finish_and_clear();

    let info = match info {
        Ok(info) => info,
        Err(e) => {
            error!("No data available for {}: {}", args.url, e);
            anyhow::bail!("No data available for {}", args.url);
        }
    };

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        _ => {
            ui::display_video_info(&info, app.strings());
        }
    }

    Ok(())
}

async fn save_thumbnail(app: &YtdlGui, args: args::ThumbnailArgs) -> Result<()> {
    let spinner = ui::create_spinner(app.strings()[StringKey::FrmGenericDownloadProgress].to_string());
    let result = async {
        let info = app.get_video_info(&args.url).await?;
        app.get_thumbnail(&info).await
    }
    .await;
    spinner.finish_and_clear();

    let thumbnail = match result {
        Ok(thumbnail) => thumbnail,
        Err(e) => {
            error!("Thumbnail unavailable for {}: {}", args.url, e);
            anyhow::bail!("Thumbnail unavailable for {}", args.url);
        }
    };

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("thumbnail.{}", thumbnail.kind.extension())));
    tokio::fs::write(&output, &thumbnail.data).await?;

    println!("✅ {}", format!("Saved to: {}", output.display()).green().bold());
    if thumbnail.converted {
        println!("   converted from webp with ffmpeg");
    }
    Ok(())
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english_app() -> YtdlGui {
        YtdlGui::without_language(Settings::default())
    }

    #[test]
    fn test_lang_show_and_dump() {
        let app = english_app();
        assert!(handle_lang(&app, LangAction::Show).is_ok());
        assert!(handle_lang(&app, LangAction::Dump { json: true }).is_ok());
    }

    #[test]
    fn test_lang_get_rejects_unknown_keys() {
        let app = english_app();
        assert!(handle_lang(&app, LangAction::Get { keys: vec!["GenericOk".to_string()] }).is_ok());
        assert!(handle_lang(&app, LangAction::Get { keys: vec!["noSuchKey".to_string()] }).is_err());
    }
}
