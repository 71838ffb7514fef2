use anyhow::Result;
use colored::*;
use std::path::Path;
use ytdlgui_core::{managed_bin_dir, Settings};

pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    Ok(Settings::load(explicit)?)
}

pub fn show_config(settings: &Settings, explicit: Option<&Path>) -> Result<()> {
    println!("{}", "⚙️  Configuration".cyan().bold());
    match Settings::default_path() {
        Some(path) => println!("Default file: {}", path.display()),
        None => println!("Default file: (no config directory)"),
    }
    if let Some(path) = explicit {
        println!("Extra file:   {}", path.display());
    }
    println!("Environment:  YTDLGUI__<SECTION>__<KEY>");
    if let Some(dir) = managed_bin_dir() {
        println!("Tool dir:     {}", dir.display());
    }
    println!();
    println!("{}", serde_json::to_string_pretty(settings)?);
    Ok(())
}
