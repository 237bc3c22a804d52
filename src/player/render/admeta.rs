//! Ad metadata panel.
//!
//! Turns the ad SDK's metadata for the currently playing ad into display rows.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Metadata about the ad currently playing, as supplied by the ad SDK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdMetadata {
    pub sub_type: String,
    #[serde(default)]
    pub order: Option<u32>,
    #[serde(default)]
    pub total_count: Option<u32>,
    #[serde(default)]
    pub seconds_to_skippable: Option<u32>,
    pub seconds_to_end: u32,
    #[serde(default)]
    pub can_trigger_skip: bool,
    #[serde(default)]
    pub is_skippable: bool,
}

/// Display rows of the ad panel.
///
/// Every field is already formatted. An empty panel (no ad playing) has empty
/// strings everywhere and the skip control disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdMetadataPanel {
    pub sub_type: String,
    pub order: String,
    pub total_count: String,
    pub seconds_to_skippable: String,
    pub seconds_to_end: String,
    pub can_skip: String,
    pub is_skippable: String,
    pub skip_enabled: bool,
}

fn or_na(value: Option<u32>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

impl From<Option<&AdMetadata>> for AdMetadataPanel {
    fn from(meta: Option<&AdMetadata>) -> Self {
        let Some(meta) = meta else {
            return Self::default();
        };

        Self {
            sub_type: meta.sub_type.clone(),
            order: or_na(meta.order),
            total_count: or_na(meta.total_count),
            seconds_to_skippable: or_na(meta.seconds_to_skippable),
            seconds_to_end: meta.seconds_to_end.to_string(),
            can_skip: meta.can_trigger_skip.to_string(),
            is_skippable: meta.is_skippable.to_string(),
            skip_enabled: meta.can_trigger_skip,
        }
    }
}

impl AdMetadataPanel {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Label/value pairs in display order.
    pub fn rows(&self) -> [(&'static str, &str); 7] {
        [
            ("Sub type", self.sub_type.as_str()),
            ("Order", self.order.as_str()),
            ("Total count", self.total_count.as_str()),
            ("Seconds to skippable", self.seconds_to_skippable.as_str()),
            ("Seconds to end", self.seconds_to_end.as_str()),
            ("Can skip", self.can_skip.as_str()),
            ("Is skippable", self.is_skippable.as_str()),
        ]
    }
}

impl fmt::Display for AdMetadataPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.rows() {
            writeln!(f, "{:<21} {}", format!("{}:", label), value)?;
        }
        write!(
            f,
            "{:<21} {}",
            "Skip:",
            if self.skip_enabled { "enabled" } else { "disabled" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preroll() -> AdMetadata {
        AdMetadata {
            sub_type: "preroll".to_string(),
            order: Some(1),
            total_count: Some(3),
            seconds_to_skippable: None,
            seconds_to_end: 14,
            can_trigger_skip: false,
            is_skippable: true,
        }
    }

    #[test]
    fn missing_numbers_show_na() {
        let panel = AdMetadataPanel::from(Some(&preroll()));

        assert_eq!(panel.sub_type, "preroll");
        assert_eq!(panel.order, "1");
        assert_eq!(panel.total_count, "3");
        assert_eq!(panel.seconds_to_skippable, "N/A");
        assert_eq!(panel.seconds_to_end, "14");
        assert_eq!(panel.can_skip, "false");
        assert_eq!(panel.is_skippable, "true");
        assert!(!panel.skip_enabled);
    }

    #[test]
    fn skip_enabled_follows_can_trigger_skip() {
        let meta = AdMetadata {
            can_trigger_skip: true,
            ..preroll()
        };
        assert!(AdMetadataPanel::from(Some(&meta)).skip_enabled);
    }

    #[test]
    fn no_metadata_clears_panel() {
        let panel = AdMetadataPanel::from(None);
        assert!(panel.is_empty());
        assert!(!panel.skip_enabled);
    }

    #[test]
    fn deserializes_sdk_json() {
        let json = r#"{"subType":"midroll","order":2,"totalCount":2,
            "secondsToSkippable":5,"secondsToEnd":20,
            "canTriggerSkip":false,"isSkippable":true}"#;

        let meta: AdMetadata = serde_json::from_str(json).unwrap();

        assert_eq!(meta.sub_type, "midroll");
        assert_eq!(meta.seconds_to_skippable, Some(5));
    }

    #[test]
    fn display_lists_rows() {
        let text = AdMetadataPanel::from(Some(&preroll())).to_string();
        assert!(text.starts_with("Sub type:             preroll\n"));
        assert!(text.contains("Seconds to skippable: N/A\n"));
        assert!(text.ends_with("Skip:                 disabled"));
    }
}
