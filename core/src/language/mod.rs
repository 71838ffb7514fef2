//! Translatable UI strings.
//!
//! A [`ResourceTable`] always holds a value for every [`StringKey`]. Values
//! come from the compiled-in English table or from an external language
//! file; anything a file does not mention shows the key's own name.

mod catalog;
mod keys;
mod parser;

pub use catalog::{scan_language_files, LanguageFileInfo};
pub use keys::StringKey;
pub use parser::{parse_line, Line};

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Index;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::LanguageError;

/// Conventional language file suffix, appended when missing.
pub const LANGUAGE_FILE_EXTENSION: &str = ".ini";

static FILE_KEYS: Lazy<HashMap<String, StringKey>> = Lazy::new(|| {
    StringKey::ALL
        .iter()
        .filter_map(|key| key.file_key().map(|name| (name, *key)))
        .collect()
});

/// Lowercase file key to [`StringKey`] dispatch table.
pub fn file_keys() -> &'static HashMap<String, StringKey> {
    &FILE_KEYS
}

/// Where the current strings came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedFrom {
    BuiltIn,
    File(PathBuf),
}

/// The in-memory string table.
#[derive(Debug, Clone)]
pub struct ResourceTable {
    values: Vec<String>,
    using_built_in_defaults: bool,
    loaded_file: Option<PathBuf>,
}

impl Default for ResourceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceTable {
    /// A table holding only placeholders.
    pub fn new() -> Self {
        Self {
            values: StringKey::ALL.iter().map(|k| k.name().to_string()).collect(),
            using_built_in_defaults: false,
            loaded_file: None,
        }
    }

    /// A table holding the built-in English strings.
    pub fn english() -> Self {
        let mut table = Self::new();
        table.load_built_in_defaults();
        table
    }

    /// Sets every key to its own name.
    pub fn reset(&mut self) {
        debug!("Resetting language values");
        for key in StringKey::ALL {
            self.values[key.index()] = key.name().to_string();
        }
        self.loaded_file = None;
    }

    /// Loads the compiled-in English strings.
    pub fn load_built_in_defaults(&mut self) {
        info!("Loading built-in English strings");
        for key in StringKey::ALL {
            self.values[key.index()] = key.english().to_string();
        }
        self.using_built_in_defaults = true;
        self.loaded_file = None;
    }

    /// Loads an external language file.
    ///
    /// A blank path or a file that does not exist loads the built-in strings
    /// and is not an error. When an error is returned the built-in strings
    /// have been loaded as a fallback.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<LoadedFrom, LanguageError> {
        let Some(resolved) = resolve_language_path(path.as_ref()) else {
            self.load_built_in_defaults();
            return Ok(LoadedFrom::BuiltIn);
        };

        if !resolved.is_file() {
            debug!("Language file {:?} does not exist", resolved);
            self.load_built_in_defaults();
            return Ok(LoadedFrom::BuiltIn);
        }

        self.reset();
        info!("Loading external language file {:?}", resolved.file_name().unwrap_or_default());

        match self.read_file(&resolved) {
            Ok(()) => {
                self.using_built_in_defaults = false;
                self.loaded_file = Some(resolved.clone());
                info!("Finished loading external language");
                Ok(LoadedFrom::File(resolved))
            }
            Err(e) => {
                warn!("Language file could not be loaded, falling back to English: {}", e);
                self.load_built_in_defaults();
                Err(e)
            }
        }
    }

    /// Runs [`load_from_file`](Self::load_from_file) again for as long as
    /// `should_retry` asks for it after a failure.
    pub fn load_with_retry<F>(&mut self, path: impl AsRef<Path>, mut should_retry: F) -> Result<LoadedFrom, LanguageError>
    where
        F: FnMut(&LanguageError) -> bool,
    {
        let path = path.as_ref();
        loop {
            match self.load_from_file(path) {
                Err(e) if should_retry(&e) => {
                    info!("Retrying language file {:?}", path);
                }
                result => return result,
            }
        }
    }

    fn read_file(&mut self, path: &Path) -> Result<(), LanguageError> {
        let io_error = |source| LanguageError::Io { path: path.to_path_buf(), source };
        let mut reader = BufReader::new(File::open(path).map_err(io_error)?);

        let mut buf = Vec::new();
        let mut number = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).map_err(io_error)? == 0 {
                break;
            }
            number += 1;

            let text = String::from_utf8_lossy(&buf);
            let mut line = text.trim_end_matches(['\n', '\r']);
            if number == 1 {
                line = line.trim_start_matches('\u{feff}');
            }

            match parse_line(line, number)? {
                Line::Skip => {}
                Line::Header(name) => self.set(StringKey::CurrentLanguageLong, name),
                Line::Assignment { key, value } => match FILE_KEYS.get(&key) {
                    Some(target) => self.set(*target, value),
                    None => debug!("Ignoring unknown language key {:?} on line {}", key, number),
                },
            }
        }
        Ok(())
    }

    fn set(&mut self, key: StringKey, value: &str) {
        self.values[key.index()] = value.to_string();
    }

    pub fn get(&self, key: StringKey) -> &str {
        &self.values[key.index()]
    }

    /// Looks a key up by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        StringKey::ALL
            .iter()
            .find(|key| key.name().eq_ignore_ascii_case(name))
            .map(|key| self.get(*key))
    }

    /// Fills .NET style `{0}`, `{1}` placeholders of a string.
    pub fn format(&self, key: StringKey, args: &[&str]) -> String {
        args.iter()
            .enumerate()
            .fold(self.get(key).to_string(), |text, (i, arg)| text.replace(&format!("{{{}}}", i), arg))
    }

    pub fn iter(&self) -> impl Iterator<Item = (StringKey, &str)> + '_ {
        StringKey::ALL.iter().map(move |key| (*key, self.get(*key)))
    }

    pub fn using_built_in_defaults(&self) -> bool {
        self.using_built_in_defaults
    }

    pub fn loaded_file(&self) -> Option<&Path> {
        self.loaded_file.as_deref()
    }

    /// Display name of the loaded language.
    pub fn language_name(&self) -> &str {
        self.get(StringKey::CurrentLanguageLong)
    }
}

impl Index<StringKey> for ResourceTable {
    type Output = str;

    fn index(&self, key: StringKey) -> &str {
        self.get(key)
    }
}

/// Appends the `.ini` suffix when missing. Blank paths resolve to nothing.
pub fn resolve_language_path(path: &Path) -> Option<PathBuf> {
    let raw = path.to_string_lossy();
    if raw.trim().is_empty() {
        return None;
    }
    if raw.ends_with(LANGUAGE_FILE_EXTENSION) {
        Some(path.to_path_buf())
    } else {
        Some(PathBuf::from(format!("{}{}", raw, LANGUAGE_FILE_EXTENSION)))
    }
}
