// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Structured event records

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::EventKind;
use crate::queue::Scalar;

/// Meta key for the normalized pageview URL
pub const META_VPV_URL: &str = "vpv_url";
/// Meta key for the event category
pub const META_CATEGORY: &str = "category";
/// Meta key for the event action
pub const META_ACTION: &str = "action";
/// Meta key for the event label
pub const META_LABEL: &str = "label";
/// Meta key for the internal/external link flag
pub const META_LINK_TYPE: &str = "link_type";
/// Meta key for the search keyword
pub const META_SEARCH_TERM: &str = "search_term";
/// Meta key for the number of search results
pub const META_SEARCH_RESULT_AMOUNT: &str = "search_result_amount";
/// Meta key for the search type
pub const META_SEARCH_TYPE: &str = "search_type";
/// Meta key for the search engine used
pub const META_SEARCH_MACHINE: &str = "search_machine";
/// Meta key for the clicked result title
pub const META_SEARCH_RESULT_TITLE: &str = "search_result_title";
/// Meta key for the clicked result URL
pub const META_SEARCH_RESULT_URL: &str = "search_result_url";
/// Meta key for the clicked result type
pub const META_SEARCH_RESULT_TYPE: &str = "search_result_type";
/// Meta key for the clicked result position
pub const META_SEARCH_RESULT_SELECTED: &str = "search_result_selected";
/// Meta key for the number of results shown
pub const META_SEARCH_RESULT_SHOWN: &str = "search_result_shown";

/// A structured event record
///
/// Immutable once appended to the queue. Meta keys are either domain-fixed
/// (see the `META_*` constants) or caller-supplied custom-dimension ids; a
/// dimension sharing an id with a fixed key overwrites it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Event kind
    pub event: EventKind,
    /// Metadata map
    pub meta: HashMap<String, Scalar>,
}

impl EventRecord {
    /// Create a new record with an empty meta map
    pub fn new(event: EventKind) -> Self {
        Self {
            event,
            meta: HashMap::new(),
        }
    }

    /// Set a meta entry, chainable
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Set a meta entry in place
    pub fn set_meta(&mut self, key: impl Into<String>, value: impl Into<Scalar>) {
        self.meta.insert(key.into(), value.into());
    }

    /// Get a meta value as text, if present and textual
    pub fn meta_text(&self, key: &str) -> Option<&str> {
        match self.meta.get(key) {
            Some(Scalar::Text(s)) => Some(s),
            _ => None,
        }
    }
}
