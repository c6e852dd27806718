//! INI text reader.

use super::IniFile;

/// Parse INI text into a document.
///
/// When `keep` is given, sections not named in it are skipped entirely.
/// The reader is lenient: lines before the first section, lines without
/// `=`, and blank lines are ignored.
pub fn parse_ini(source: &str, keep: Option<&[&str]>) -> IniFile {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut ini = IniFile::new();
    let mut current: Option<String> = None;

    for line in source.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = match header.find(']') {
                Some(end) => &header[..end],
                None => header,
            };
            let name = name.trim();

            let wanted = keep.map_or(true, |names| names.contains(&name));
            current = if wanted {
                ini.add_section(name);
                Some(name.to_string())
            } else {
                None
            };
            continue;
        }

        let Some(section) = &current else {
            continue;
        };

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            ini.section_mut(section).set(key, value.trim());
        }
    }

    ini
}

fn strip_comment(line: &str) -> &str {
    match line.find(';') {
        Some(index) => &line[..index],
        None => line,
    }
}
