// SPDX-License-Identifier: MPL-2.0
//! [`Storage`](crate::application::port::Storage) adapters.
//!
//! - [`MemoryStorage`]: lives as long as the page; stands in for
//!   `sessionStorage` and serves as the test double
//! - [`FileStorage`]: CBOR file in the data directory; stands in for
//!   `localStorage`

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;
