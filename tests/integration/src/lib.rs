//! Integration test utilities for the alerts crates
//!
//! Helpers that stand in for the host application: a per-user session and
//! the cookie a browser sends back on the next request.

pub mod flash_helpers;
