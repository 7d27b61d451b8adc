// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`icons`]: Inline SVG rendering of `data-lucide` placeholders (implements [`IconRenderer`])
//! - [`storage`]: In-memory and CBOR file key-value stores (implement [`Storage`])
//!
//! [`IconRenderer`]: crate::application::port::IconRenderer
//! [`Storage`]: crate::application::port::Storage

pub mod icons;
pub mod storage;

// Re-export main types for convenience
pub use icons::LucideIcons;
pub use storage::{FileStorage, MemoryStorage};
