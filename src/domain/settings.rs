use crate::domain::grouping::GroupKey;
use crate::domain::sorting::SortKey;
use serde::{Deserialize, Serialize};

/// User-chosen display preferences, the only state persisted across sessions
///
/// Serialized with the `groupBy`/`sortBy` field names the stored blob has
/// always used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    pub group_by: GroupKey,
    pub sort_by: SortKey,
}

impl DisplaySettings {
    pub fn new(group_by: GroupKey, sort_by: SortKey) -> Self {
        Self { group_by, sort_by }
    }

    /// Parses a persisted settings blob, substituting the default when the
    /// blob is not valid JSON or is missing a required field
    ///
    /// Unrecognized key values inside an otherwise well-formed blob are kept
    /// as `Unknown` rather than reset; the engine degrades on them per its
    /// own rules.
    pub fn from_json_or_default(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            group_by: GroupKey::Status,
            sort_by: SortKey::Priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = DisplaySettings::default();
        assert_eq!(settings.group_by, GroupKey::Status);
        assert_eq!(settings.sort_by, SortKey::Priority);
    }

    #[test]
    fn test_roundtrip_preserves_settings() {
        for group_by in [GroupKey::Status, GroupKey::User, GroupKey::Priority] {
            for sort_by in [SortKey::Priority, SortKey::Title] {
                let settings = DisplaySettings::new(group_by, sort_by);
                let json = serde_json::to_string(&settings).unwrap();
                assert_eq!(DisplaySettings::from_json_or_default(&json), settings);
            }
        }
    }

    #[test]
    fn test_serializes_with_camel_case_field_names() {
        let json = serde_json::to_string(&DisplaySettings::default()).unwrap();
        assert_eq!(json, r#"{"groupBy":"status","sortBy":"priority"}"#);
    }

    #[test]
    fn test_invalid_json_falls_back_to_default() {
        assert_eq!(
            DisplaySettings::from_json_or_default("not json at all"),
            DisplaySettings::default()
        );
    }

    #[test]
    fn test_missing_field_falls_back_to_default() {
        assert_eq!(
            DisplaySettings::from_json_or_default(r#"{"groupBy":"user"}"#),
            DisplaySettings::default()
        );
    }

    #[test]
    fn test_unrecognized_keys_parse_as_unknown() {
        let settings =
            DisplaySettings::from_json_or_default(r#"{"groupBy":"bogus","sortBy":"nope"}"#);
        assert_eq!(settings.group_by, GroupKey::Unknown);
        assert_eq!(settings.sort_by, SortKey::Unknown);
    }
}
