// src/scrape/day.rs

use chrono::NaiveDate;

use super::fetch::PageFetcher;
use crate::config::options::ReserveDuration;
use crate::core::net::Transport;
use crate::data::Section;
use crate::error::Result;
use crate::specs::{calendar, PageLayout};

/// Fetch and extract one date. Auth and extraction errors pass through untouched.
pub fn scrape_day<T, L>(
    session: &mut T,
    fetcher: &PageFetcher,
    layout: &L,
    date: NaiveDate,
    duration: ReserveDuration,
) -> Result<Vec<Section>>
where
    T: Transport + ?Sized,
    L: PageLayout + ?Sized,
{
    let html = fetcher.fetch(session, date, duration)?;
    let sections = calendar::extract_page(layout, &html, date)?;
    tracing::info!(%date, sections = sections.len(), "Data scraped successfully");
    Ok(sections)
}
