// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Minimal DOM support
//!
//! Just enough of a node tree for click classification: elements with
//! attributes, text nodes, explicit parent links for ancestor walks, and a
//! document-level capture-phase click listener registry.

mod document;
mod element;
mod node;

pub use document::{ClickEvent, Document, ListenerId};
pub use element::Element;
pub use node::{Node, NodeId, NodeType};
