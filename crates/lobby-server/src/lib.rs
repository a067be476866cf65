//! # Lobby Server Library
//!
//! Dependency injection wiring, logging setup and startup utilities for the
//! `lobby-server` binary.

pub mod di;
pub mod logging;
pub mod startup;
