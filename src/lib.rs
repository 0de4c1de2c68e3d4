//! navspy: scroll-spy navigation for landing pages.
//!
//! A page's navigable sections get a generated menu, clicks on the menu smooth-scroll to the
//! section they name, and every scroll notification re-decides which sections are active.
//! The decision logic lives in [`tracker`] and reaches the page only through the [`page::Page`]
//! trait; [`window`] implements that trait for the bundled terminal browser.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod click;
pub mod config;
pub mod dom;
pub mod error;
pub mod formats;
pub mod input;
pub mod layout;
pub mod logging;
pub mod menu;
pub mod page;
pub mod report;
pub mod tracker;
pub mod ui;
pub mod window;

pub use error::{Error, Result};

#[cfg(test)]
#[path = "tests/fixtures.rs"]
mod fixtures;
