/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Id of the element the application is mounted into
    pub const MOUNT_POINT_ID: &'static str = "root";

    /// How long fetched query data stays fresh, in milliseconds (1 minute = 60,000ms)
    pub const QUERY_STALE_TIME_MS: i64 = 60_000;

    /// Maximum fetch attempts per query before giving up
    pub const QUERY_RETRY_ATTEMPTS: u32 = 3;

    /// Base URL of the Roombook API
    pub const API_BASE_URL: &'static str = "http://localhost:8000";

    /// Log component lifecycle diagnostics (debug builds only)
    pub const STRICT_DIAGNOSTICS: bool = cfg!(debug_assertions);
}
