// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Event kind vocabulary

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed vocabulary of interaction kinds
///
/// Each kind serializes as the dotted wire name the downstream data pipeline
/// matches on. The vocabulary is closed: unmodeled vendor commands go through
/// the raw-instruction escape hatch instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Virtual pageview
    #[serde(rename = "interaction.component.virtualPageview")]
    PageView,
    /// Anchor link interaction
    #[serde(rename = "interaction.generic.component.anchorLink")]
    AnchorLink,
    /// Outbound link click (classifier-driven)
    #[serde(rename = "interaction.generic.component.linkClick")]
    LinkClick,
    /// File download
    #[serde(rename = "interaction.component.download")]
    Download,
    /// Site search
    #[serde(rename = "interaction.component.search")]
    Search,
    /// Click on a search result
    #[serde(rename = "interaction.component.searchResultClick")]
    SearchResultClick,
    /// Map interaction
    #[serde(rename = "interaction.component.mapInteraction")]
    MapInteraction,
    /// Visibility change
    #[serde(rename = "interaction.component.visibility")]
    Visibility,
}

impl EventKind {
    /// Get the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::PageView => "interaction.component.virtualPageview",
            EventKind::AnchorLink => "interaction.generic.component.anchorLink",
            EventKind::LinkClick => "interaction.generic.component.linkClick",
            EventKind::Download => "interaction.component.download",
            EventKind::Search => "interaction.component.search",
            EventKind::SearchResultClick => "interaction.component.searchResultClick",
            EventKind::MapInteraction => "interaction.component.mapInteraction",
            EventKind::Visibility => "interaction.component.visibility",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            EventKind::PageView.as_str(),
            "interaction.component.virtualPageview"
        );
        assert_eq!(
            EventKind::AnchorLink.as_str(),
            "interaction.generic.component.anchorLink"
        );
        assert_eq!(EventKind::Search.as_str(), "interaction.component.search");
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&EventKind::SearchResultClick).unwrap();
        assert_eq!(json, "\"interaction.component.searchResultClick\"");
    }

    #[test]
    fn test_display_matches_serde() {
        for kind in [
            EventKind::PageView,
            EventKind::LinkClick,
            EventKind::Download,
            EventKind::MapInteraction,
            EventKind::Visibility,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }
}
