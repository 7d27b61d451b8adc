// SPDX-License-Identifier: MPL-2.0
//! `health_portal` is the multilingual presentation layer of a community
//! health-monitoring portal.
//!
//! It keeps one Fluent dictionary per supported language, renders them into
//! the portal's pages through a fixed table of targets, and switches
//! language, theme and login state in response to user interactions.

pub mod app;
pub mod application;
pub mod config;
pub mod dom;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod render;
pub mod session;
pub mod ui;
