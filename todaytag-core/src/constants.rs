/// WordPress category id of "HEUTE" on the production site.
pub const DEFAULT_TODAY_CATEGORY_ID: u64 = 12;

/// How far around today the clear pass looks for tagged events.
/// Long-running events can start well before today, so the band is generous.
pub const STALE_TAG_WINDOW_MONTHS: u32 = 12;

/// Environment variable holding the raw `user:application-password` pair.
pub const DEFAULT_CREDENTIAL_ENV: &str = "WP_CREDENTIALS";

/// Process exit codes.
pub mod exit_code {
    pub const OK: u8 = 0;
    pub const MISSING_CREDENTIAL: u8 = 1;
    pub const CLEAR_QUERY_FAILED: u8 = 2;
    pub const APPLY_QUERY_FAILED: u8 = 3;
    pub const INVALID_CONFIG: u8 = 4;
}
