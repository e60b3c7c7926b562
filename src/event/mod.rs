// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Event records and metadata
//!
//! Structured instructions built by the tracker: a fixed event vocabulary,
//! a metadata map, and the custom-dimension merge.

mod dimensions;
mod kind;
mod record;

pub use dimensions::{merge_custom_dimensions, CustomDimension};
pub use kind::EventKind;
pub use record::{
    EventRecord, META_ACTION, META_CATEGORY, META_LABEL, META_LINK_TYPE, META_SEARCH_MACHINE,
    META_SEARCH_RESULT_AMOUNT, META_SEARCH_RESULT_SELECTED, META_SEARCH_RESULT_SHOWN,
    META_SEARCH_RESULT_TITLE, META_SEARCH_RESULT_TYPE, META_SEARCH_RESULT_URL, META_SEARCH_TERM,
    META_SEARCH_TYPE, META_VPV_URL,
};
