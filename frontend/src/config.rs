// Site-wide tunables. Everything here is compile-time; there is no runtime
// configuration source in the browser build.

/// localStorage key holding the JSON-encoded dark-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Offset (px) past which the navbar switches to its "scrolled" styling.
pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;
/// Offset (px) past which scrolling down hides the navbar.
pub const NAV_HIDE_THRESHOLD_PX: f64 = 100.0;

pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const SECTION_THRESHOLD: f64 = 0.1;

pub const LOADING_TICK_MS: u32 = 100;
pub const LOADING_GRACE_MS: u32 = 500;
/// Upper bound (exclusive) of a single simulated progress increment.
pub const LOADING_MAX_INCREMENT: f64 = 15.0;

pub const CONTACT_RESET_MS: u32 = 3_000;

pub fn get_asset_base() -> &'static str {
    option_env!("HIPURITY_ASSET_BASE").unwrap_or("")
}

pub fn asset_url(path: &str) -> String {
    format!("{}{}", get_asset_base().trim_end_matches('/'), path)
}

pub fn logo_url() -> String {
    asset_url("/assets/biospn-logo.svg")
}
