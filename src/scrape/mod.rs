// src/scrape/mod.rs
pub mod day;
pub mod fetch;
mod scrape;

pub use day::scrape_day;
pub use fetch::PageFetcher;
pub use scrape::Scraper;
