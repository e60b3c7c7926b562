// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! DOM node types

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

/// Unique node identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Create a new unique node ID
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Node type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Document node
    Document,
    /// Element node
    Element,
    /// Text node
    Text,
}

/// Internal node data
#[derive(Debug)]
pub struct NodeData {
    /// Node type
    pub node_type: NodeType,
    /// Tag name (for elements)
    pub tag_name: Option<String>,
    /// Text content (for text nodes)
    pub text_content: Option<String>,
    /// Attributes (for elements)
    pub attributes: HashMap<String, String>,
    /// Parent node ID
    pub parent: Option<NodeId>,
    /// Child node IDs
    pub children: Vec<NodeId>,
}

impl NodeData {
    /// Create element node data
    pub fn element(tag_name: impl Into<String>) -> Self {
        Self {
            node_type: NodeType::Element,
            tag_name: Some(tag_name.into().to_lowercase()),
            text_content: None,
            attributes: HashMap::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create text node data
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            node_type: NodeType::Text,
            tag_name: None,
            text_content: Some(content.into()),
            attributes: HashMap::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create document node data
    pub fn document() -> Self {
        Self {
            node_type: NodeType::Document,
            tag_name: None,
            text_content: None,
            attributes: HashMap::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

/// A reference to a node in the DOM tree
#[derive(Debug, Clone)]
pub struct Node {
    /// Node ID
    pub id: NodeId,
    /// Reference to the document's node storage
    nodes: Arc<RwLock<HashMap<NodeId, NodeData>>>,
}

impl Node {
    /// Create a new node reference
    pub(crate) fn new(id: NodeId, nodes: Arc<RwLock<HashMap<NodeId, NodeData>>>) -> Self {
        Self { id, nodes }
    }

    /// Get the node type
    pub fn node_type(&self) -> NodeType {
        self.nodes
            .read()
            .get(&self.id)
            .map(|n| n.node_type)
            .unwrap_or(NodeType::Element)
    }

    /// Get the tag name in lowercase
    pub fn local_name(&self) -> Option<String> {
        self.nodes
            .read()
            .get(&self.id)
            .and_then(|n| n.tag_name.clone())
    }

    /// Get text content, concatenated over the subtree
    pub fn text_content(&self) -> String {
        let nodes = self.nodes.read();
        collect_text(&nodes, self.id)
    }

    /// Get an attribute value
    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.nodes
            .read()
            .get(&self.id)
            .and_then(|n| n.attributes.get(&name.to_lowercase()).cloned())
    }

    /// Set an attribute value
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        if let Some(node) = self.nodes.write().get_mut(&self.id) {
            node.attributes
                .insert(name.into().to_lowercase(), value.into());
        }
    }

    /// Get the parent node, following the explicit parent link
    pub fn parent(&self) -> Option<Node> {
        self.nodes
            .read()
            .get(&self.id)
            .and_then(|n| n.parent)
            .map(|id| Node::new(id, self.nodes.clone()))
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type() == NodeType::Element
    }

    /// Append a child node
    pub fn append_child(&self, child: &Node) {
        let mut nodes = self.nodes.write();

        let old_parent = nodes.get(&child.id).and_then(|d| d.parent);
        if let Some(old_pid) = old_parent {
            if let Some(old_parent) = nodes.get_mut(&old_pid) {
                old_parent.children.retain(|&id| id != child.id);
            }
        }

        if let Some(child_data) = nodes.get_mut(&child.id) {
            child_data.parent = Some(self.id);
        }
        if let Some(parent_data) = nodes.get_mut(&self.id) {
            parent_data.children.push(child.id);
        }
    }
}

fn collect_text(nodes: &HashMap<NodeId, NodeData>, node_id: NodeId) -> String {
    match nodes.get(&node_id) {
        Some(node) => match node.node_type {
            NodeType::Text => node.text_content.clone().unwrap_or_default(),
            NodeType::Element | NodeType::Document => node
                .children
                .iter()
                .map(|&child_id| collect_text(nodes, child_id))
                .collect(),
        },
        None => String::new(),
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    #[test]
    fn test_node_id_uniqueness() {
        assert_ne!(NodeId::new(), NodeId::new());
    }

    #[test]
    fn test_parent_links() {
        let doc = Document::new();
        let div = doc.create_element("div");
        let a = doc.create_element("a");
        div.node.append_child(&a.node);

        assert_eq!(a.node.parent(), Some(div.node.clone()));
        assert!(div.node.parent().is_none());
    }

    #[test]
    fn test_text_content_over_subtree() {
        let doc = Document::new();
        let a = doc.create_element("a");
        let span = doc.create_element("span");
        let text = doc.create_text_node("Lees verder");
        span.node.append_child(&text);
        a.node.append_child(&span.node);

        assert_eq!(a.node.text_content(), "Lees verder");
    }

    #[test]
    fn test_attributes_case_insensitive() {
        let doc = Document::new();
        let a = doc.create_element("a");
        a.node.set_attribute("HREF", "https://example.com/");

        assert_eq!(
            a.node.get_attribute("href"),
            Some("https://example.com/".to_string())
        );
    }
}
