// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Element-specific DOM operations

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::node::{Node, NodeData, NodeId, NodeType};

/// Element node with extended operations
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Inner node reference
    pub node: Node,
}

impl Element {
    /// Create a new element from a node
    pub fn new(node: Node) -> Option<Self> {
        if node.node_type() == NodeType::Element {
            Some(Self { node })
        } else {
            None
        }
    }

    /// Create element from node ID
    pub(crate) fn from_id(
        id: NodeId,
        nodes: Arc<RwLock<HashMap<NodeId, NodeData>>>,
    ) -> Option<Self> {
        Self::new(Node::new(id, nodes))
    }

    /// Get local name (lowercase)
    pub fn local_name(&self) -> String {
        self.node.local_name().unwrap_or_default()
    }

    /// Check whether this is an anchor element
    pub fn is_anchor(&self) -> bool {
        self.local_name() == "a"
    }

    /// Get the href attribute, if present and non-empty
    pub fn href(&self) -> Option<String> {
        self.node.get_attribute("href").filter(|h| !h.is_empty())
    }

    /// Get an attribute
    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.node.get_attribute(name)
    }

    /// Set an attribute
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        self.node.set_attribute(name, value);
    }

    /// Get text content
    pub fn text_content(&self) -> String {
        self.node.text_content()
    }

    /// Get parent element
    pub fn parent_element(&self) -> Option<Element> {
        self.node.parent().and_then(Element::new)
    }

    /// Append a child element
    pub fn append_child(&self, child: &Element) {
        self.node.append_child(&child.node);
    }

    /// Append a child node
    pub fn append_node(&self, child: &Node) {
        self.node.append_child(child);
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::Document;

    #[test]
    fn test_anchor_detection() {
        let doc = Document::new();
        let a = doc.create_element("a");
        let div = doc.create_element("div");

        assert!(a.is_anchor());
        assert!(!div.is_anchor());
    }

    #[test]
    fn test_href_empty_is_none() {
        let doc = Document::new();
        let a = doc.create_element("a");
        assert_eq!(a.href(), None);

        a.set_attribute("href", "");
        assert_eq!(a.href(), None);

        a.set_attribute("href", "/pagina");
        assert_eq!(a.href(), Some("/pagina".to_string()));
    }

    #[test]
    fn test_parent_element() {
        let doc = Document::new();
        let a = doc.create_element("a");
        let span = doc.create_element("span");
        a.append_child(&span);

        assert_eq!(span.parent_element(), Some(a));
    }
}
