// src/cli.rs
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::config::options::AppOptions;
use crate::error::{Result, ScrapeError};
use crate::progress::Progress;
use crate::scrape::Scraper;

/// Prints one line per date, like a terminal log.
#[derive(Default)]
pub struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, date: NaiveDate, sections: usize) {
        self.done += 1;
        println!("[{}/{}] {date}: {sections} sections", self.done, self.total);
    }

    fn finish(&mut self) {
        if self.done == self.total {
            println!("All data collected.");
        }
    }
}

/// Load `.env` from the working directory if present.
fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded .env");
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(ScrapeError::Configuration(format!("could not read .env: {e}"))),
    }
}

/// Whole run: config → scrape window → CSV. Any error aborts before the
/// export, so a failed run never leaves a partial file behind.
pub fn run() -> Result<PathBuf> {
    crate::log::init();
    load_dotenv()?;

    let opts = AppOptions::from_env()?;
    tracing::info!(
        login = opts.credentials.login(),
        duration = %opts.scrape.duration,
        days = opts.scrape.window.days,
        "starting scrape"
    );

    let scraper = Scraper::new(opts.credentials.clone())?;
    let mut progress = CliProgress::default();
    let dataset = scraper.collect(&opts.scrape, Some(&mut progress))?;

    println!("Saving data to CSV...");
    let path = crate::file::write_export(&opts.export, &dataset)?;
    println!("Data saved to {}", path.display());
    Ok(path)
}
