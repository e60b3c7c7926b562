// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Pageview deduplication
//!
//! Pure decision procedure over a queue snapshot. Only the nearest prior
//! pageview-kind entry participates: entries of other kinds (links,
//! downloads, searches) neither match nor reset the scan, so returning to a
//! URL after an intervening pageview to a different URL always registers.

use crate::event::{EventKind, META_VPV_URL};
use crate::queue::Instruction;

/// Decide whether a candidate normalized URL repeats the most recent pageview
///
/// Scans the snapshot from the tail backward for the nearest pageview-kind
/// record and compares its `vpv_url` to the candidate. No pageview yet, or a
/// differing nearest one, means the candidate is not a duplicate.
pub(crate) fn is_duplicate_page_view(entries: &[Instruction], candidate: &str) -> bool {
    entries
        .iter()
        .rev()
        .filter_map(Instruction::as_event)
        .find(|record| record.event == EventKind::PageView)
        .and_then(|record| record.meta_text(META_VPV_URL))
        .map(|url| url == candidate)
        .unwrap_or(false)
}
