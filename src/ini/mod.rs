//! Key/value structured-text store.
//!
//! Both the map registry listing and raw map files are INI-style documents:
//!
//! ```text
//! [Maps\Multiplayer\island]
//! Description=Island Fortress
//! MaxPlayers=4
//! ; comments start with a semicolon
//! ```
//!
//! `IniFile` keeps sections and keys in declared order, which several
//! consumers depend on (the enemy-house scan, forced option lists, and the
//! spawn configuration writer). Section and key names are case-sensitive.

mod reader;
mod writer;

use std::path::{Path, PathBuf};

use crate::error::{MapError, Result};
use crate::parser::values::parse_bool;

pub use reader::parse_ini;
pub use writer::write_ini;

/// A named section with ordered keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniSection {
    name: String,
    entries: Vec<(String, String)>,
}

impl IniSection {
    /// Create an empty section.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Section name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a key's raw value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set a key, overwriting in place if it already exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Check if a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Keys in declared order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Key/value pairs in declared order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An in-memory INI document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniFile {
    sections: Vec<IniSection>,
}

impl IniFile {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from text.
    pub fn parse(source: &str) -> Self {
        parse_ini(source, None)
    }

    /// Load and parse a document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let source = read_source(path)?;
        Ok(parse_ini(&source, None))
    }

    /// Load a document from disk, keeping only the named sections.
    ///
    /// Everything outside `sections` is skipped while reading, so map files
    /// with large encoded payload sections stay cheap to inspect. The named
    /// sections exist in the result even if the file never declares them.
    pub fn load_sections(path: &Path, sections: &[&str]) -> Result<Self> {
        let source = read_source(path)?;
        Ok(Self::parse_sections(&source, sections))
    }

    /// Parse text, keeping only the named sections.
    pub fn parse_sections(source: &str, sections: &[&str]) -> Self {
        let mut ini = parse_ini(source, Some(sections));
        for name in sections {
            ini.add_section(*name);
        }
        ini
    }

    /// Get a section by name.
    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.iter().find(|s| s.name == name)
    }

    fn section_mut(&mut self, name: &str) -> &mut IniSection {
        let index = match self.sections.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.sections.push(IniSection::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }

    /// Check if a section exists.
    pub fn has_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    /// Add an empty section if it does not exist yet.
    pub fn add_section(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.has_section(&name) {
            self.sections.push(IniSection::new(name));
        }
    }

    /// All sections in declared order.
    pub fn sections(&self) -> &[IniSection] {
        &self.sections
    }

    /// Section names in declared order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    /// Raw value lookup.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// String value, or `default` when the key is missing.
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.get(section, key).unwrap_or(default).to_string()
    }

    /// Integer value, or `default` when the key is missing or not an integer.
    pub fn get_int(&self, section: &str, key: &str, default: i32) -> i32 {
        self.get(section, key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Boolean value using the permissive yes/no/true/false parser.
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        match self.get(section, key) {
            Some(value) => parse_bool(value, default),
            None => default,
        }
    }

    /// Keys of a section in declared order (empty if the section is missing).
    pub fn section_keys(&self, section: &str) -> Vec<&str> {
        self.section(section)
            .map(|s| s.keys().collect())
            .unwrap_or_default()
    }

    /// Set a string value, creating the section if needed.
    pub fn set_string(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.section_mut(section).set(key, value);
    }

    /// Set an integer value, creating the section if needed.
    pub fn set_int(&mut self, section: &str, key: &str, value: i32) {
        self.set_string(section, key, value.to_string());
    }

    /// Merge `source` underneath `destination`.
    ///
    /// Keys from `source` that `destination` lacks are appended; existing
    /// destination keys are never overwritten.
    pub fn combine_sections(&mut self, source: &str, destination: &str) -> Result<()> {
        let inherited: Vec<(String, String)> = self
            .section(source)
            .ok_or_else(|| MapError::Parse {
                message: format!("Base section '{}' does not exist", source),
                help: Some(format!(
                    "Declare [{}] or remove the BaseSection key from [{}]",
                    source, destination
                )),
            })?
            .entries()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let target = self.section_mut(destination);
        for (key, value) in inherited {
            if !target.contains_key(&key) {
                target.set(key, value);
            }
        }

        Ok(())
    }

    /// Serialize to INI text.
    pub fn to_ini_string(&self) -> String {
        write_ini(self)
    }

    /// Write to disk.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_ini_string()).map_err(|e| MapError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write INI file: {}", e),
        })
    }
}

fn read_source(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| MapError::Io {
        path: PathBuf::from(path),
        message: format!("Failed to read INI file: {}", e),
    })?;

    // Game data files are not guaranteed to be UTF-8.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
