// SPDX-License-Identifier: MPL-2.0
//! Page building blocks.
//!
//! Each module owns one piece of page structure and the small state changes
//! that go with it (show/hide, toggle). None of them looks up translations
//! except where the content is data-driven; fixed strings go through
//! [`crate::render`].
//!
//! - [`pages`] - Skeletons for the landing, registration and dashboard pages
//! - [`language_selector`] - Header dropdown and current-language indicator
//! - [`modal`] - Login modal
//! - [`dashboard`] - Patient table rows and status badges
//! - [`registration`] - Registration payload and reply handling
//! - [`theming`] - Light/Dark theme mode
//! - [`design_tokens`] - Utility-class constants shared by the skeletons

pub mod dashboard;
pub mod design_tokens;
pub mod language_selector;
pub mod modal;
pub mod pages;
pub mod registration;
pub mod theming;
