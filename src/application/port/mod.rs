// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! They stand in for the browser facilities the portal relies on.
//!
//! # Available Ports
//!
//! - [`icons`]: Icon placeholder rendering, with a deferred retry budget
//! - [`storage`]: Synchronous key-value persistence
//!
//! # Design Notes
//!
//! - No `async fn`: every handler runs to completion on one thread
//! - Persistence failures are reported, and callers treat them as best-effort

pub mod icons;
pub mod storage;

// Re-export main types for convenience
pub use icons::{IconError, IconPass, IconRenderer, IconRetry, RetryPolicy};
pub use storage::Storage;
