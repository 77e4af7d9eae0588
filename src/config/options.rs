// src/config/options.rs
use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;

use super::consts::*;
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub credentials: Credentials,
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Read everything from the process environment (after `.env` was loaded).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with the variable source injected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = Credentials::new(
            lookup(ENV_LOGIN).unwrap_or_default(),
            lookup(ENV_PASSWORD).unwrap_or_default(),
        )?;

        let mut scrape = ScrapeOptions::default();
        if let Some(raw) = lookup(ENV_DURATION).filter(|v| !v.trim().is_empty()) {
            let minutes: u32 = raw.trim().parse().map_err(|_| {
                ScrapeError::InvalidParameter(format!("{ENV_DURATION} must be a number, got {raw:?}"))
            })?;
            scrape.duration = ReserveDuration::try_from(minutes)?;
        }

        let mut export = ExportOptions::default();
        if let Some(dir) = lookup(ENV_OUTPUT_DIR).filter(|v| !v.trim().is_empty()) {
            export.out_dir = PathBuf::from(dir.trim());
        }

        Ok(Self { credentials, scrape, export })
    }
}

/* ---------------- Credentials ---------------- */

/// Login identifier + password. Validated once here, never reread.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    login: String,
    password: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let login = login.into();
        let password = password.into();
        if login.trim().is_empty() || password.is_empty() {
            return Err(ScrapeError::Configuration(format!(
                "{ENV_LOGIN} and {ENV_PASSWORD} must both be set"
            )));
        }
        Ok(Self { login, password })
    }

    pub fn login(&self) -> &str { &self.login }
    pub fn password(&self) -> &str { &self.password }
}

// Keep the secret out of logs and error reports.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"***")
            .finish()
    }
}

/* ---------------- Scrape ---------------- */

/// Booking granularity; selects which calendar view the site renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReserveDuration {
    #[default]
    Hour,
    TwoHours,
}

impl ReserveDuration {
    pub fn minutes(self) -> u32 {
        match self {
            ReserveDuration::Hour => 60,
            ReserveDuration::TwoHours => 120,
        }
    }
}

impl TryFrom<u32> for ReserveDuration {
    type Error = ScrapeError;

    fn try_from(minutes: u32) -> Result<Self> {
        match minutes {
            60 => Ok(ReserveDuration::Hour),
            120 => Ok(ReserveDuration::TwoHours),
            other => Err(ScrapeError::InvalidParameter(format!(
                "reserve duration must be 60 or 120 minutes, got {other}"
            ))),
        }
    }
}

impl fmt::Display for ReserveDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.minutes())
    }
}

/// Which dates to scrape, relative to the run date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrapeWindow {
    pub first_offset: i64,
    pub days: usize,
}

impl Default for ScrapeWindow {
    fn default() -> Self {
        Self { first_offset: WINDOW_FIRST_OFFSET, days: WINDOW_DAYS }
    }
}

impl ScrapeWindow {
    /// Concrete dates for a run on `today`, ascending.
    pub fn dates_from(&self, today: NaiveDate) -> Vec<NaiveDate> {
        (0..self.days as i64)
            .filter_map(|i| today.checked_add_signed(chrono::Duration::days(self.first_offset + i)))
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub duration: ReserveDuration,
    pub window: ScrapeWindow,
}

/* ---------------- Export ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub file_prefix: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_prefix: s!(DEFAULT_FILE_PREFIX),
        }
    }
}

impl ExportOptions {
    /// `<out_dir>/<prefix>_<timestamp>.csv`
    pub fn out_path(&self, timestamp: &str) -> PathBuf {
        self.out_dir.join(format!("{}_{}.csv", self.file_prefix, timestamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn missing_credentials_is_configuration_error() {
        let err = AppOptions::from_lookup(env(&[(ENV_LOGIN, "me")])).unwrap_err();
        assert!(matches!(err, ScrapeError::Configuration(_)));

        let err = AppOptions::from_lookup(env(&[(ENV_LOGIN, " "), (ENV_PASSWORD, "pw")])).unwrap_err();
        assert!(matches!(err, ScrapeError::Configuration(_)));
    }

    #[test]
    fn defaults_apply_when_optional_vars_absent() {
        let opts = AppOptions::from_lookup(env(&[(ENV_LOGIN, "me"), (ENV_PASSWORD, "pw")])).unwrap();
        assert_eq!(opts.scrape.duration, ReserveDuration::Hour);
        assert_eq!(opts.scrape.window, ScrapeWindow { first_offset: 1, days: 16 });
        assert_eq!(opts.export.out_dir, PathBuf::from("output"));
    }

    #[test]
    fn duration_override_is_validated() {
        let ok = AppOptions::from_lookup(env(&[
            (ENV_LOGIN, "me"), (ENV_PASSWORD, "pw"), (ENV_DURATION, "120"),
        ])).unwrap();
        assert_eq!(ok.scrape.duration, ReserveDuration::TwoHours);

        let err = AppOptions::from_lookup(env(&[
            (ENV_LOGIN, "me"), (ENV_PASSWORD, "pw"), (ENV_DURATION, "90"),
        ])).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidParameter(_)));
    }

    #[test]
    fn window_starts_tomorrow_and_spans_sixteen_days() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
        let dates = ScrapeWindow::default().dates_from(today);
        assert_eq!(dates.len(), 16);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 12, 21).unwrap());
        assert_eq!(dates[15], NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
    }

    #[test]
    fn debug_hides_password() {
        let c = Credentials::new("me", "hunter2").unwrap();
        assert!(!format!("{c:?}").contains("hunter2"));
    }
}
