// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Tracker configuration

use crate::error::{Error, Result};
use crate::queue::Scalar;

/// Path appended to `url_base` when no explicit tracker URL is given
pub const TRACKER_URL_SUFFIX: &str = "piwik.php";

/// Heartbeat timer configuration
///
/// The heartbeat is a logical instruction forwarded to the collector, not a
/// timer implemented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartBeat {
    /// Whether the heartbeat instruction is seeded at initialization
    pub active: bool,
    /// Heartbeat interval in seconds
    pub seconds: u32,
}

impl Default for HeartBeat {
    fn default() -> Self {
        Self {
            active: true,
            seconds: 15,
        }
    }
}

/// A raw-instruction seed value
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// Pushed as a single argument
    Single(Scalar),
    /// Expanded positionally into the command tuple
    List(Vec<Scalar>),
}

impl From<Scalar> for ConfigValue {
    fn from(v: Scalar) -> Self {
        ConfigValue::Single(v)
    }
}

impl From<Vec<Scalar>> for ConfigValue {
    fn from(v: Vec<Scalar>) -> Self {
        ConfigValue::List(v)
    }
}

/// Tracker configuration
///
/// Constructed once per session and immutable after validation. A missing
/// site id is a hard construction failure.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Site identifier (required)
    pub site_id: String,
    /// Base URL the tracker endpoint is derived from
    pub url_base: Option<String>,
    /// Explicit tracker endpoint, overrides `url_base`
    pub tracker_url: Option<String>,
    /// Collector script source, consumed by the injection collaborator
    pub src_url: Option<String>,
    /// User identifier seeded at initialization
    pub user_id: Option<String>,
    /// Suppress all initialization
    pub disabled: bool,
    /// Heartbeat timer settings
    pub heart_beat: HeartBeat,
    /// Seed an enable-link-tracking instruction
    pub link_tracking: bool,
    /// Raw-instruction seeding, applied in insertion order
    pub configurations: Vec<(String, ConfigValue)>,
    /// Nonce forwarded to the injected script tag, if any
    pub nonce: Option<String>,
    /// Base domain treated as same-organization by the link classifier
    pub internal_base_domain: Option<String>,
}

impl TrackerConfig {
    /// Create a config for a site
    pub fn new(site_id: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            url_base: None,
            tracker_url: None,
            src_url: None,
            user_id: None,
            disabled: false,
            heart_beat: HeartBeat::default(),
            link_tracking: true,
            configurations: Vec::new(),
            nonce: None,
            internal_base_domain: None,
        }
    }

    /// Set the base URL
    pub fn url_base(mut self, url_base: impl Into<String>) -> Self {
        self.url_base = Some(url_base.into());
        self
    }

    /// Set an explicit tracker endpoint
    pub fn tracker_url(mut self, tracker_url: impl Into<String>) -> Self {
        self.tracker_url = Some(tracker_url.into());
        self
    }

    /// Set the collector script source
    pub fn src_url(mut self, src_url: impl Into<String>) -> Self {
        self.src_url = Some(src_url.into());
        self
    }

    /// Set the user id
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Suppress initialization
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Configure the heartbeat timer
    pub fn heart_beat(mut self, active: bool, seconds: u32) -> Self {
        self.heart_beat = HeartBeat { active, seconds };
        self
    }

    /// Enable or disable the link-tracking seed instruction
    pub fn link_tracking(mut self, enabled: bool) -> Self {
        self.link_tracking = enabled;
        self
    }

    /// Add a raw-instruction seed entry
    pub fn configuration(mut self, name: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.configurations.push((name.into(), value.into()));
        self
    }

    /// Set the script-tag nonce
    pub fn nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Set the base domain the classifier treats as internal
    pub fn internal_base_domain(mut self, domain: impl Into<String>) -> Self {
        self.internal_base_domain = Some(domain.into());
        self
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.site_id.trim().is_empty() {
            return Err(Error::config("site_id is required"));
        }
        Ok(())
    }

    /// Resolve the tracker endpoint to seed, if any
    pub(crate) fn resolved_tracker_url(&self) -> Option<String> {
        if let Some(ref explicit) = self.tracker_url {
            return Some(explicit.clone());
        }
        self.url_base.as_ref().map(|base| {
            if base.ends_with('/') {
                format!("{}{}", base, TRACKER_URL_SUFFIX)
            } else {
                format!("{}/{}", base, TRACKER_URL_SUFFIX)
            }
        })
    }
}
