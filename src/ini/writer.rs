//! INI text writer.

use super::IniFile;

/// Serialize a document to INI text.
///
/// Sections are written in declared order and separated by a blank line.
pub fn write_ini(ini: &IniFile) -> String {
    let mut output = String::new();

    for (i, section) in ini.sections().iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("[{}]\n", section.name()));
        for (key, value) in section.entries() {
            output.push_str(&format!("{}={}\n", key, value));
        }
    }

    output
}
