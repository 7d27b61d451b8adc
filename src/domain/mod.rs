// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core portal types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) to keep it trivially
//! testable.
//!
//! # Modules
//!
//! - [`page`]: Static pages ([`Page`](page::Page))
//! - [`newtypes`]: Bounded indices ([`ItemIndex`](newtypes::ItemIndex),
//!   [`FeatureIndex`](newtypes::FeatureIndex))
//! - [`patient`]: Dashboard records ([`PatientRecord`](patient::PatientRecord))
//! - [`role`]: User categories ([`Role`](role::Role))

pub mod newtypes;
pub mod page;
pub mod patient;
pub mod role;

pub use newtypes::{FeatureIndex, ItemIndex};
pub use page::Page;
pub use patient::{PatientRecord, PatientStatus, StatusColor};
pub use role::Role;
