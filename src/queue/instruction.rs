// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Instruction shapes
//!
//! Two mutually exclusive entry shapes exist on the wire: raw command tuples
//! `["name", arg, ...]` executed by the vendor collector, and structured
//! event records `{"event": ..., "meta": ...}` consumed by the data
//! pipeline. A single tracker never mixes the two shapes for its
//! record-producing methods; raw tuples appear only from initialization
//! seeding and the low-level escape hatch.

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

use crate::event::EventRecord;

/// A scalar instruction argument or meta value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Text value
    Text(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

/// A raw vendor command
///
/// Known commands are modeled as typed variants; anything else goes through
/// `Custom`. Serializes as the positional tuple the collector executes.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInstruction {
    /// Point the collector at a tracker endpoint
    SetTrackerUrl(String),
    /// Select the site being tracked
    SetSiteId(String),
    /// Associate a user id with the session
    SetUserId(String),
    /// Measure time spent on the last pageview of a visit
    EnableHeartBeatTimer(u32),
    /// Toggle automatic link tracking in the collector
    EnableLinkTracking(bool),
    /// Any vendor command not otherwise modeled
    Custom {
        /// Command name
        name: String,
        /// Positional arguments
        args: Vec<Scalar>,
    },
}

impl RawInstruction {
    /// Create a custom instruction
    pub fn custom(name: impl Into<String>, args: Vec<Scalar>) -> Self {
        RawInstruction::Custom {
            name: name.into(),
            args,
        }
    }

    /// Get the command name
    pub fn name(&self) -> &str {
        match self {
            RawInstruction::SetTrackerUrl(_) => "setTrackerUrl",
            RawInstruction::SetSiteId(_) => "setSiteId",
            RawInstruction::SetUserId(_) => "setUserId",
            RawInstruction::EnableHeartBeatTimer(_) => "enableHeartBeatTimer",
            RawInstruction::EnableLinkTracking(_) => "enableLinkTracking",
            RawInstruction::Custom { name, .. } => name,
        }
    }

    /// Get the positional arguments
    pub fn args(&self) -> Vec<Scalar> {
        match self {
            RawInstruction::SetTrackerUrl(url) => vec![Scalar::Text(url.clone())],
            RawInstruction::SetSiteId(id) => vec![Scalar::Text(id.clone())],
            RawInstruction::SetUserId(id) => vec![Scalar::Text(id.clone())],
            RawInstruction::EnableHeartBeatTimer(seconds) => vec![Scalar::Int(*seconds as i64)],
            RawInstruction::EnableLinkTracking(enabled) => vec![Scalar::Bool(*enabled)],
            RawInstruction::Custom { args, .. } => args.clone(),
        }
    }
}

impl Serialize for RawInstruction {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let args = self.args();
        let mut seq = serializer.serialize_seq(Some(args.len() + 1))?;
        seq.serialize_element(self.name())?;
        for arg in &args {
            seq.serialize_element(arg)?;
        }
        seq.end()
    }
}

/// A single unit appended to the shared log
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Instruction {
    /// Raw command tuple
    Raw(RawInstruction),
    /// Structured event record
    Event(EventRecord),
}

impl Instruction {
    /// Get the event record, if this is a structured entry
    pub fn as_event(&self) -> Option<&EventRecord> {
        match self {
            Instruction::Event(record) => Some(record),
            Instruction::Raw(_) => None,
        }
    }

    /// Get the raw instruction, if this is a command tuple
    pub fn as_raw(&self) -> Option<&RawInstruction> {
        match self {
            Instruction::Raw(raw) => Some(raw),
            Instruction::Event(_) => None,
        }
    }
}

impl From<RawInstruction> for Instruction {
    fn from(raw: RawInstruction) -> Self {
        Instruction::Raw(raw)
    }
}

impl From<EventRecord> for Instruction {
    fn from(record: EventRecord) -> Self {
        Instruction::Event(record)
    }
}
