//! Consolidated test utilities for replay-navigator
//!
//! This module provides unified testing utilities for integration tests,
//! focused on realistic replay directory scenarios with fully isolated
//! config and cache environments.

pub mod assertions;
pub mod fixtures;
pub mod workspace;
