// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Shared instruction log
//!
//! The append-only ordered log consumed by the external collector, and the
//! instruction shapes that go into it.

mod instruction;
mod log;

pub use instruction::{Instruction, RawInstruction, Scalar};
pub use log::InstructionQueue;
