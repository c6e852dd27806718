//! Forced option classification and spawn passthrough options.

use crate::ini::IniFile;
use crate::types::{ForcedOptions, ForcedValue};

use super::values::parse_bool;

/// Classify a raw `ForcedOptions` value.
///
/// Integers become drop-down indices; everything else is a checkbox state,
/// defaulting to unchecked when the text is not recognised.
pub fn classify_forced_option(value: &str) -> ForcedValue {
    match value.trim().parse::<i32>() {
        Ok(index) => ForcedValue::DropDown(index),
        Err(_) => ForcedValue::CheckBox(parse_bool(value, false)),
    }
}

/// Classify every key of `section`, in declared order.
pub fn parse_forced_options(ini: &IniFile, section: &str) -> ForcedOptions {
    let mut options = ForcedOptions::new();

    if let Some(section) = ini.section(section) {
        for (key, value) in section.entries() {
            options.push(key, classify_forced_option(value));
        }
    }

    options
}

/// Copy every key of `section` verbatim, in declared order.
pub fn parse_spawn_ini_options(ini: &IniFile, section: &str) -> Vec<(String, String)> {
    ini.section(section)
        .map(|section| {
            section
                .entries()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_integer() {
        assert_eq!(classify_forced_option("5"), ForcedValue::DropDown(5));
        assert_eq!(classify_forced_option("-2"), ForcedValue::DropDown(-2));
    }

    #[test]
    fn test_classify_boolean() {
        assert_eq!(classify_forced_option("yes"), ForcedValue::CheckBox(true));
        assert_eq!(classify_forced_option("false"), ForcedValue::CheckBox(false));
    }

    #[test]
    fn test_classify_unrecognised_is_unchecked() {
        assert_eq!(classify_forced_option("garbage"), ForcedValue::CheckBox(false));
        assert_eq!(classify_forced_option(""), ForcedValue::CheckBox(false));
    }

    #[test]
    fn test_classify_no_floats() {
        // Not integers, so read as checkboxes by their first character.
        assert_eq!(classify_forced_option("1.5"), ForcedValue::CheckBox(true));
        assert_eq!(classify_forced_option("2.5"), ForcedValue::CheckBox(false));
    }

    #[test]
    fn test_parse_forced_options_section() {
        let ini = IniFile::parse(
            "[IslandForced]\nchkBases=no\ncmbCredits=3\nchkShortGame=yes\ncmbGameSpeed=0\n",
        );

        let options = parse_forced_options(&ini, "IslandForced");

        assert_eq!(
            options.checkboxes,
            vec![("chkBases".to_string(), false), ("chkShortGame".to_string(), true)]
        );
        assert_eq!(
            options.dropdowns,
            vec![("cmbCredits".to_string(), 3), ("cmbGameSpeed".to_string(), 0)]
        );
    }

    #[test]
    fn test_parse_forced_options_missing_section() {
        let ini = IniFile::new();
        assert!(parse_forced_options(&ini, "Nope").is_empty());
    }

    #[test]
    fn test_parse_spawn_ini_options() {
        let ini = IniFile::parse("[IslandSpawn]\nMultiEngineer=yes\nSuperweapons=no\n");

        let options = parse_spawn_ini_options(&ini, "IslandSpawn");

        assert_eq!(
            options,
            vec![
                ("MultiEngineer".to_string(), "yes".to_string()),
                ("Superweapons".to_string(), "no".to_string()),
            ]
        );
    }
}
