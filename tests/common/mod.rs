//! Common test utilities for hubload CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project and home directories plus a CLI runner
//! - Fixtures: Reusable plugin trees

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
