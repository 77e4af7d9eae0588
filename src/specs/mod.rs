// src/specs/mod.rs
//! # Page specs
//!
//! Knows how to read the reservation site's pages. Everything here is pure:
//! markup in, records out. Fetching, looping over dates, and export live
//! elsewhere (`scrape`, `file`).
//!
//! ## Typical call chain
//! ```text
//! scrape::collect → scrape::day::scrape_day → scrape::fetch (HTML)
//!                                           ↘ specs::calendar::extract_page
//!                                               ↘ specs::hours::parse_range
//! ```
//!
//! ## Conventions
//! - Selectors and marker classes are confined to `layout`.
//! - A slot whose label cannot be read is still emitted, with no times.
//! - Availability is fail-safe: no explicit "available" marker means reserved.
//! - Specs are tested offline against inline HTML snippets.
pub mod calendar;
pub mod hours;
pub mod layout;

pub use calendar::{extract_page, extract_section};
pub use hours::parse_range;
pub use layout::{CssLayout, PageLayout, SlotStatus};
