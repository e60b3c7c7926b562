// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Hosting environment boundary
//!
//! A `Window` stands in for the browser global scope: the current page
//! location and the shared instruction queue live here. Components receive
//! a `Window` handle by reference instead of reaching into ambient state; a
//! tracker constructed without one (server-side rendering, headless tests)
//! silently no-ops every mutating operation.

use std::sync::Arc;

use parking_lot::RwLock;
use url::Url;

use crate::error::Result;
use crate::queue::InstructionQueue;

/// The hosting page environment
///
/// Location reads happen at call time, not at construction, so behavior
/// tracks client-side navigation. The queue's lifetime is the window's; it
/// is never explicitly torn down.
#[derive(Debug)]
pub struct Window {
    /// Current page URL
    location: RwLock<Url>,
    /// Shared instruction log
    queue: InstructionQueue,
}

impl Window {
    /// Create a window at the given location
    pub fn new(location: Url) -> Arc<Self> {
        Arc::new(Self {
            location: RwLock::new(location),
            queue: InstructionQueue::new(),
        })
    }

    /// Create a window from an href string
    pub fn parse(href: &str) -> Result<Arc<Self>> {
        Ok(Self::new(Url::parse(href)?))
    }

    /// Get the shared instruction queue
    pub fn queue(&self) -> &InstructionQueue {
        &self.queue
    }

    /// Current page URL
    pub fn location(&self) -> Url {
        self.location.read().clone()
    }

    /// Current hostname, empty when the location has no host
    pub fn hostname(&self) -> String {
        self.location
            .read()
            .host_str()
            .unwrap_or_default()
            .to_string()
    }

    /// Current document path
    pub fn pathname(&self) -> String {
        self.location.read().path().to_string()
    }

    /// Move the window to a new location (client-side navigation)
    pub fn navigate(&self, location: Url) {
        *self.location.write() = location;
    }
}
