//! Application constants and configuration

pub const APP_NAME: &str = "VolunteerHub Deck";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory name under the platform local data dir
pub const DATA_DIR_NAME: &str = "VolunteerHub Deck";
pub const SETTINGS_FILE: &str = "settings.json";
/// Optional catalog override, same schema as the built-in deck
pub const DECK_FILE: &str = "deck.json";
pub const LOG_FILE: &str = "volunteerhub-deck.log";

/// Asset directory searched next to the executable and in the working directory
pub const ASSET_DIR_NAME: &str = "assets";

/// Windows narrower than this get the header + collapsible menu layout
pub const DESKTOP_BREAKPOINT: f32 = 1024.0;

// Animation timings (seconds)
pub const COUNTER_DURATION_SECS: f32 = 2.0;
pub const COUNTER_TICK_MS: u64 = 16;
pub const TRANSITION_SECS: f32 = 0.35;
pub const TRANSITION_EXIT_SECS: f32 = 0.2;
/// How long a fullscreen request may go unconfirmed by the window
pub const FULLSCREEN_CONFIRM_SECS: f64 = 1.0;
pub const TRANSITION_DISTANCE: f32 = 50.0;
pub const REVEAL_SECS: f32 = 0.3;
pub const REVEAL_DISTANCE: f32 = 20.0;
