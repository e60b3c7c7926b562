// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Remora - Analytics Instrumentation Core
//!
//! A browser-side instrumentation core that turns user interactions into a
//! normalized, ordered log of analytics instructions for an external
//! collector. Framework bindings, script injection, and delivery are
//! collaborators; this crate ends at appending to the in-process queue.
//!
//! ## Features
//!
//! - Structured event records: fixed interaction vocabulary plus a metadata map
//! - Custom dimensions: per-call key/values merged last-write-wins
//! - Pageview dedup: consecutive identical virtual pageviews are suppressed
//! - Outbound link classification: ancestor walk, www-tolerant hostname
//!   comparison, base-domain internal/external split
//! - Raw instruction escape hatch for unmodeled vendor commands
//! - Headless-safe: without a window every mutating call is a silent no-op
//!
//! ## Example
//!
//! ```rust
//! use remora::{Tracker, TrackerConfig, TrackPageViewParams, Window};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let window = Window::parse("https://www.amsterdam.nl/")?;
//!     let tracker = Tracker::new(
//!         TrackerConfig::new("1").url_base("https://stats.example.com"),
//!         Some(window.clone()),
//!     )?;
//!
//!     tracker.track_page_view(TrackPageViewParams::new("/parkeren"))?;
//!
//!     for instruction in window.queue().snapshot() {
//!         println!("{}", serde_json::to_string(&instruction)?);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod dom;
pub mod env;
pub mod error;
pub mod event;
pub mod queue;
pub mod tracker;

// Re-exports for convenience

// Tracker
pub use tracker::{
    LinkType, SearchResult, TrackDownloadParams, TrackInteractionParams, TrackLinkParams,
    TrackPageViewParams, TrackSiteSearchParams, TrackSiteSearchResultClickParams, Tracker,
    TrackerConfig,
};
pub use tracker::{ConfigValue, HeartBeat};

// Environment
pub use env::Window;

// Queue
pub use queue::{Instruction, InstructionQueue, RawInstruction, Scalar};

// Events
pub use event::{CustomDimension, EventKind, EventRecord};

// Classifier
pub use classifier::{extract_base_domain, OutboundLinkClassifier};

// DOM
pub use dom::{ClickEvent, Document, Element, ListenerId, Node};

// Errors
pub use error::{Error, Result};

/// Remora version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
