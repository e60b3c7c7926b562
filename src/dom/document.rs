// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Document representation
//!
//! Node factory plus the document-level click listener registry. Listeners
//! registered here run in the capturing phase: they observe every dispatched
//! click before any target-level handler could stop it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use super::element::Element;
use super::node::{Node, NodeData, NodeId};

/// Identifier for a registered click listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// A dispatched click
#[derive(Debug, Clone)]
pub struct ClickEvent {
    /// The original event target
    pub target: Node,
}

type ClickHandler = Arc<dyn Fn(&ClickEvent) + Send + Sync>;

/// HTML document representation
#[derive(Clone)]
pub struct Document {
    /// Node storage
    nodes: Arc<RwLock<HashMap<NodeId, NodeData>>>,
    /// Root node ID
    root_id: NodeId,
    /// Capture-phase click listeners, in registration order
    click_listeners: Arc<RwLock<Vec<(ListenerId, ClickHandler)>>>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        let root_id = NodeId::new();
        let mut nodes = HashMap::new();
        nodes.insert(root_id, NodeData::document());

        Self {
            nodes: Arc::new(RwLock::new(nodes)),
            root_id,
            click_listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get the root node
    pub fn root(&self) -> Node {
        Node::new(self.root_id, self.nodes.clone())
    }

    /// Create a new detached element
    pub fn create_element(&self, tag: &str) -> Element {
        let id = NodeId::new();
        self.nodes.write().insert(id, NodeData::element(tag));
        Element::from_id(id, self.nodes.clone()).expect("freshly created element")
    }

    /// Create a detached text node
    pub fn create_text_node(&self, content: &str) -> Node {
        let id = NodeId::new();
        self.nodes.write().insert(id, NodeData::text(content));
        Node::new(id, self.nodes.clone())
    }

    /// Register a capture-phase click listener
    pub fn add_click_listener<F>(&self, handler: F) -> ListenerId
    where
        F: Fn(&ClickEvent) + Send + Sync + 'static,
    {
        let id = ListenerId::next();
        self.click_listeners.write().push((id, Arc::new(handler)));
        id
    }

    /// Remove a previously registered listener
    ///
    /// Returns false when the id is unknown, so callers can assert their
    /// register/deregister pairs stay balanced.
    pub fn remove_click_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.click_listeners.write();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// Number of registered click listeners
    pub fn click_listener_count(&self) -> usize {
        self.click_listeners.read().len()
    }

    /// Dispatch a click on a target node
    ///
    /// Handlers are cloned out before invocation so a handler may register
    /// or remove listeners without deadlocking.
    pub fn dispatch_click(&self, target: &Node) {
        let event = ClickEvent {
            target: target.clone(),
        };
        let handlers: Vec<ClickHandler> = self
            .click_listeners
            .read()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(&event);
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.nodes.read().len())
            .field("click_listeners", &self.click_listener_count())
            .finish()
    }
}
