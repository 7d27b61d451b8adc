// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports the page controller depends on.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The page controller in [`crate::app`] only sees the traits

pub mod port;
