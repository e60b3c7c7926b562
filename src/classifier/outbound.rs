// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Outbound link click listener

use std::sync::Arc;

use url::Url;

use crate::dom::{ClickEvent, Document, Element, ListenerId, Node};
use crate::env::Window;
use crate::tracker::{LinkType, TrackLinkParams, Tracker};

use super::domain::{extract_base_domain, hostnames_match};

/// Upper bound on the ancestor walk from a click target to its anchor
const MAX_ANCESTOR_DEPTH: usize = 64;

/// Classifies clicked anchors and forwards outbound ones to the tracker
///
/// Attaches one capture-phase click listener on mount and detaches it on
/// unmount; each mount must be balanced by exactly one unmount or the
/// listener leaks and clicks dispatch twice. Same-hostname links
/// (tolerating a `www.` prefix and either scheme) are ignored entirely;
/// outbound links are classified internal when their base domain equals the
/// configured internal base domain, external otherwise.
pub struct OutboundLinkClassifier {
    /// Tracker receiving link-click events
    tracker: Arc<Tracker>,
    /// Base domain treated as same-organization
    internal_base_domain: Option<String>,
    /// Active listener registration
    listener: Option<ListenerId>,
}

impl OutboundLinkClassifier {
    /// Create a classifier for a tracker
    ///
    /// The internal base domain defaults from the tracker configuration.
    pub fn new(tracker: Arc<Tracker>) -> Self {
        let internal_base_domain = tracker.config().internal_base_domain.clone();
        Self {
            tracker,
            internal_base_domain,
            listener: None,
        }
    }

    /// Override the internal base domain
    pub fn internal_base_domain(mut self, domain: impl Into<String>) -> Self {
        self.internal_base_domain = Some(domain.into());
        self
    }

    /// Attach the capture-phase click listener
    ///
    /// No-op when already mounted or when the tracker has no window to read
    /// the current hostname from.
    pub fn mount(&mut self, document: &Document) {
        if self.listener.is_some() {
            tracing::debug!("classifier already mounted, ignoring");
            return;
        }
        let window = match self.tracker.window() {
            Some(window) => window.clone(),
            None => return,
        };

        let tracker = self.tracker.clone();
        let internal_base_domain = self.internal_base_domain.clone();
        self.listener = Some(document.add_click_listener(move |event| {
            handle_click(&tracker, &window, internal_base_domain.as_deref(), event);
        }));
    }

    /// Detach the click listener
    pub fn unmount(&mut self, document: &Document) {
        if let Some(id) = self.listener.take() {
            document.remove_click_listener(id);
        }
    }

    /// Whether the listener is currently attached
    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }
}

fn handle_click(
    tracker: &Tracker,
    window: &Window,
    internal_base_domain: Option<&str>,
    event: &ClickEvent,
) {
    let anchor = match find_anchor(&event.target) {
        Some(anchor) => anchor,
        None => return,
    };
    // Presence is guaranteed by find_anchor.
    let href = match anchor.href() {
        Some(href) => href,
        None => return,
    };

    let resolved = match resolve_href(&href, window) {
        Some(url) => url,
        None => return,
    };

    let link_type = match classify(&resolved, &window.hostname(), internal_base_domain) {
        Some(link_type) => link_type,
        None => return,
    };

    let title = anchor.text_content().trim().to_string();
    if let Err(err) = tracker.track_link_click(
        TrackLinkParams::new(title, resolved.to_string()).link_type(link_type),
    ) {
        tracing::warn!(error = %err, "failed to track outbound link click");
    }
}

/// Walk up from a click target to the nearest anchor with a non-empty href
///
/// Iterative with an explicit depth bound, so malformed (cyclic) trees
/// cannot hang the click path.
fn find_anchor(target: &Node) -> Option<Element> {
    let mut current = Some(target.clone());
    for _ in 0..MAX_ANCESTOR_DEPTH {
        let node = current?;
        if node.is_element() {
            if let Some(element) = Element::new(node.clone()) {
                if element.is_anchor() && element.href().is_some() {
                    return Some(element);
                }
            }
        }
        current = node.parent();
    }
    None
}

/// Resolve an anchor href against the current page location
fn resolve_href(href: &str, window: &Window) -> Option<Url> {
    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
        || href.starts_with('#')
    {
        return None;
    }

    let resolved = window.location().join(href).ok()?;
    match resolved.scheme() {
        "http" | "https" => Some(resolved),
        _ => None,
    }
}

/// Classify a resolved link against the current hostname
///
/// `None` means the link stays on the current host and is ignored.
fn classify(url: &Url, page_hostname: &str, internal_base_domain: Option<&str>) -> Option<LinkType> {
    let host = url.host_str()?;
    if hostnames_match(host, page_hostname) {
        return None;
    }

    let is_internal = match (extract_base_domain(host), internal_base_domain) {
        (Some(base), Some(internal)) => base.eq_ignore_ascii_case(internal),
        _ => false,
    };
    Some(if is_internal {
        LinkType::Internal
    } else {
        LinkType::External
    })
}
