// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://reservadeportes.com";
pub const LOGIN_PATH: &str = "/index.php?client=scdescription&scid=CasaPadel";
pub const CALENDAR_PREFIX: &str = "/calendario/CasaPadel";
pub const FACILITY_ID: u32 = 9;
pub const USER_AGENT: &str = concat!("padel_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Login form markers (fixed by the site)
pub const LOGIN_CLIENT: &str = "scdescription";
pub const LOGIN_TASK: &str = "dologin";
pub const LOGIN_RETURN_URL: &str = "CasaPadel.html?iframe=iframe";
pub const LOGIN_SCID: &str = "CasaPadel";

// Scrape window: tomorrow plus the next 15 days
pub const WINDOW_FIRST_OFFSET: i64 = 1;
pub const WINDOW_DAYS: usize = 16;

// Environment
pub const ENV_LOGIN: &str = "PADEL_LOGIN";
pub const ENV_PASSWORD: &str = "PADEL_PASSWORD";
pub const ENV_DURATION: &str = "PADEL_DURATION";
pub const ENV_OUTPUT_DIR: &str = "PADEL_OUTPUT_DIR";
pub const ENV_LOG: &str = "PADEL_LOG";

// Export
pub const DEFAULT_OUT_DIR: &str = "output";
pub const DEFAULT_FILE_PREFIX: &str = "scraped_data";
pub const TIMESTAMP_FMT: &str = "%Y%m%d_%H%M%S";
pub const CSV_HEADERS: [&str; 5] = ["section_name", "date_scraped", "start_hour", "end_hour", "reserved"];
