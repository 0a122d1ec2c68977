pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const CONFIG_FILE: &str = ".octofit-config.json";

pub const API_URL_ENV: &str = "OCTOFIT_API_URL";
pub const LOG_FILTER_ENV: &str = "OCTOFIT_LOG";

// Teams whose name contains this get the highlighted badge
pub const TEAM_MARKER: &str = "marvel";
pub const PLACEHOLDER_GLYPH: &str = "—";

// Dashboard event polling interval
pub const TICK_RATE_MS: u64 = 100;
