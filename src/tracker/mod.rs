// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Tracker API
//!
//! Configuration, per-call parameters, the pageview deduper, and the core
//! record-building pipeline.

mod config;
mod dedupe;
mod params;
mod tracker;

pub use config::{ConfigValue, HeartBeat, TrackerConfig, TRACKER_URL_SUFFIX};
pub use params::{
    LinkType, SearchResult, TrackDownloadParams, TrackInteractionParams, TrackLinkParams,
    TrackPageViewParams, TrackSiteSearchParams, TrackSiteSearchResultClickParams,
};
pub use tracker::{Tracker, SEARCH_RESULT_CLICK_MIN_KEYWORD_CHARS, SITE_SEARCH_MIN_KEYWORD_CHARS};
