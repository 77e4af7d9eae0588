// src/progress.rs
use chrono::NaiveDate;

/// Progress reporting for a scrape run. The CLI implements this to print
/// status lines.
pub trait Progress {
    /// Called at the start with the number of dates in the window.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One date finished; `sections` is how many courts it produced.
    fn item_done(&mut self, _date: NaiveDate, _sections: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
