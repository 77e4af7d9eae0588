// src/scrape/scrape.rs
use chrono::{Local, NaiveDate};

use super::{day, fetch::PageFetcher};
use crate::{
    config::options::{Credentials, ReserveDuration, ScrapeOptions},
    core::net::{Connector, HttpConnector},
    data::{Dataset, Section},
    error::{Result, ScrapeError},
    progress::Progress,
    specs::{CssLayout, PageLayout},
};

/// Drives a run: one fresh session per date, dates strictly in order.
pub struct Scraper<C = HttpConnector, L = CssLayout> {
    connector: C,
    fetcher: PageFetcher,
    layout: L,
}

impl Scraper {
    /// Live site, CasaPadel layout.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Ok(Self::with_parts(HttpConnector, PageFetcher::new(credentials), CssLayout::casa_padel()?))
    }
}

impl<C: Connector, L: PageLayout> Scraper<C, L> {
    pub fn with_parts(connector: C, fetcher: PageFetcher, layout: L) -> Self {
        Self { connector, fetcher, layout }
    }

    /// One date, on its own session. The session is dropped on return, error or not.
    pub fn scrape_day(&self, date: NaiveDate, duration: ReserveDuration) -> Result<Vec<Section>> {
        let mut session = self.connector.open()?;
        day::scrape_day(&mut session, &self.fetcher, &self.layout, date, duration)
    }

    /// Scrape the configured window starting from the local date.
    pub fn collect(
        &self,
        opts: &ScrapeOptions,
        progress: Option<&mut dyn Progress>,
    ) -> Result<Dataset> {
        let today = Local::now().date_naive();
        let dates = opts.window.dates_from(today);
        self.collect_dates(&dates, today, opts.duration, progress)
    }

    /// Scrape `dates` in the given order and concatenate. The first failing
    /// date aborts the whole run; nothing partial is returned.
    pub fn collect_dates(
        &self,
        dates: &[NaiveDate],
        today: NaiveDate,
        duration: ReserveDuration,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<Dataset> {
        // The site only serves tomorrow onwards.
        if let Some(bad) = dates.iter().find(|d| **d <= today) {
            return Err(ScrapeError::InvalidParameter(format!(
                "date {bad} is not after {today}; only tomorrow or later can be scraped"
            )));
        }

        if let Some(p) = progress.as_deref_mut() {
            p.begin(dates.len());
        }

        let mut dataset = Dataset::new();
        for &date in dates {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Scraping data for {date}..."));
            }
            let sections = match self.scrape_day(date, duration) {
                Ok(sections) => sections,
                Err(e) => {
                    tracing::error!(%date, error = %e, "aborting run");
                    if let Some(p) = progress.as_deref_mut() {
                        p.finish();
                    }
                    return Err(e);
                }
            };
            let found = sections.len();
            dataset.extend(sections);

            if let Some(p) = progress.as_deref_mut() {
                p.item_done(date, found);
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        tracing::info!(
            dates = dates.len(),
            sections = dataset.sections.len(),
            slots = dataset.slot_count(),
            "All data collected"
        );
        Ok(dataset)
    }
}
