// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Per-call tracking parameters

use crate::event::CustomDimension;

/// Parameters for [`Tracker::track_page_view`](super::Tracker::track_page_view)
#[derive(Debug, Clone, Default)]
pub struct TrackPageViewParams {
    /// The viewed URL; the query string is stripped before logging
    pub href: String,
    /// Dimensions merged into the record
    pub custom_dimensions: Vec<CustomDimension>,
}

impl TrackPageViewParams {
    /// Create params for an href
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            custom_dimensions: Vec::new(),
        }
    }

    /// Add a custom dimension
    pub fn dimension(mut self, dimension: CustomDimension) -> Self {
        self.custom_dimensions.push(dimension);
        self
    }
}

/// The classifier's verdict on an outbound link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkType {
    /// Outbound but within the configured internal base domain
    Internal,
    /// Outbound to another organization
    External,
}

impl LinkType {
    /// Wire value for the `link_type` meta key
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::Internal => "internal",
            LinkType::External => "external",
        }
    }
}

/// Parameters for anchor-link and link-click events
#[derive(Debug, Clone, Default)]
pub struct TrackLinkParams {
    /// Visible link text
    pub title: String,
    /// Link target
    pub href: String,
    /// Explicit label; defaults to the current document path
    pub label: Option<String>,
    /// Internal/external flag, supplied by the classifier
    pub link_type: Option<LinkType>,
    /// Dimensions merged into the record
    pub custom_dimensions: Vec<CustomDimension>,
}

impl TrackLinkParams {
    /// Create params for a titled link
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            ..Default::default()
        }
    }

    /// Set an explicit label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the internal/external flag
    pub fn link_type(mut self, link_type: LinkType) -> Self {
        self.link_type = Some(link_type);
        self
    }

    /// Add a custom dimension
    pub fn dimension(mut self, dimension: CustomDimension) -> Self {
        self.custom_dimensions.push(dimension);
        self
    }
}

/// Parameters for [`Tracker::track_download`](super::Tracker::track_download)
#[derive(Debug, Clone, Default)]
pub struct TrackDownloadParams {
    /// What is being downloaded
    pub description: String,
    /// File type of the download
    pub file_type: String,
    /// Location of the downloaded file
    pub download_url: String,
    /// Dimensions merged into the record
    pub custom_dimensions: Vec<CustomDimension>,
}

/// Parameters for map-interaction and visibility events
#[derive(Debug, Clone, Default)]
pub struct TrackInteractionParams {
    /// Action, recorded verbatim
    pub action: String,
    /// Optional element the user interacted with
    pub click_target: Option<String>,
    /// Dimensions merged into the record
    pub custom_dimensions: Vec<CustomDimension>,
}

impl TrackInteractionParams {
    /// Create params for an action
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Default::default()
        }
    }

    /// Set the click target
    pub fn click_target(mut self, target: impl Into<String>) -> Self {
        self.click_target = Some(target.into());
        self
    }
}

/// Parameters for [`Tracker::track_site_search`](super::Tracker::track_site_search)
#[derive(Debug, Clone, Default)]
pub struct TrackSiteSearchParams {
    /// Search keyword
    pub keyword: String,
    /// Number of results, recorded as 0 when absent
    pub count: Option<i64>,
    /// Kind of search performed
    pub search_type: String,
    /// Engine that served the search
    pub search_machine: String,
    /// Dimensions merged into the record
    pub custom_dimensions: Vec<CustomDimension>,
}

/// A clicked search result
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// Result title
    pub title: String,
    /// Result URL; the query string is stripped before logging
    pub url: String,
    /// Result type
    pub result_type: String,
    /// Position of the result in the listing
    pub position: i64,
}

/// Parameters for [`Tracker::track_site_search_result_click`](super::Tracker::track_site_search_result_click)
#[derive(Debug, Clone, Default)]
pub struct TrackSiteSearchResultClickParams {
    /// Search keyword the result was served for
    pub keyword: String,
    /// The clicked result
    pub search_result: SearchResult,
    /// Total number of results
    pub amount_of_results: i64,
    /// Number of results shown to the user
    pub amount_of_results_shown: i64,
    /// Kind of search performed
    pub search_type: String,
    /// Dimensions merged into the record
    pub custom_dimensions: Vec<CustomDimension>,
}
