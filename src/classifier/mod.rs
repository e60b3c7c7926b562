// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Outbound link classification
//!
//! A document-level click listener that resolves the clicked anchor,
//! decides whether the link leaves the current host, and forwards a
//! structured link-click event to the tracker.

mod domain;
mod outbound;

pub use domain::{extract_base_domain, hostnames_match};
pub use outbound::OutboundLinkClassifier;
