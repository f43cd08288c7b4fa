//! Application-wide constants and configuration values.
//!
//! This module defines all static configuration values used throughout vpnpick,
//! including layout thresholds, file naming conventions, and UI messages.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Configuration Defaults ===
// AppConfig::default() references these so there is exactly one source of truth.

/// Profiles directory under the user's home when none is configured.
pub const DEFAULT_PROFILES_DIR_NAME: &str = "VPN";
/// Default profile file extension (without the dot).
pub const DEFAULT_PROFILE_EXTENSION: &str = "ovpn";
/// Default VPN client binary.
pub const DEFAULT_OPENVPN_BINARY: &str = "openvpn";
/// Default minimum log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Default number of log entries kept in memory.
pub const DEFAULT_MAX_LOG_ENTRIES: usize = 1000;

// === Path Configuration ===

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Name of the logs subdirectory.
pub const LOGS_DIR_NAME: &str = "logs";
/// Name of the log file inside the logs directory.
pub const LOG_FILE_NAME: &str = "vpnpick.log";
/// Subdirectory for transient runtime files (credentials).
pub const RUN_DIR_NAME: &str = "run";

// === Profile Naming ===

/// Marker placed immediately before the extension on TCP profiles.
pub const TCP_MARKER: &str = "-TCP";
/// Separator between the country and city segments.
pub const SEGMENT_SEPARATOR: char = '-';

// === Menu Layout ===

/// Below this height the menu shows only the "too small" notice.
pub const MIN_TERMINAL_HEIGHT: u16 = 10;
/// Below this width the menu shows only the "too small" notice.
pub const MIN_TERMINAL_WIDTH: u16 = 30;
/// Rows reserved above the option area (blank, title, search line, up-indicator).
pub const HEADER_LINES: u16 = 4;
/// Rows reserved below the option area (down-indicator/counter, instructions, blank).
pub const FOOTER_LINES: u16 = 3;
/// Marks text shortened to fit.
pub const ELLIPSIS: &str = "...";
/// Number of rows moved by PageUp/PageDown.
pub const PAGE_STEP: usize = 10;
/// Terminal width at which the full instruction text is shown.
pub const FOOTER_FULL_WIDTH: u16 = 80;
/// Terminal width at which the medium instruction text is shown.
pub const FOOTER_MEDIUM_WIDTH: u16 = 60;
/// Widest instruction text; fits in 78 columns.
pub const FOOTER_FULL: &str =
    "J/K move, PGUP/PGDN/HOME/END jump, ENTER select, / search, ESC back, Q quit";
/// Fits in 58 columns.
pub const FOOTER_MEDIUM: &str = "J/K move, ENTER select, / search, ESC back, Q quit";
/// Fits in the minimum terminal width.
pub const FOOTER_COMPACT: &str = "J/K ENTER / ESC Q";

/// Row of the menu title.
pub const TITLE_ROW: u16 = 1;
/// Row of the search hint, query, or input strip.
pub const SEARCH_ROW: u16 = 2;
/// Row of the "more above" indicator.
pub const UP_INDICATOR_ROW: u16 = 3;
/// Placed on both sides of the title.
pub const TITLE_DECORATION: &str = "=====";
pub const INDICATOR_UP: &str = "^ more ^";
pub const INDICATOR_DOWN: &str = "v more v";

// === Search ===

/// Column of the search label.
pub const SEARCH_PROMPT_X: u16 = 2;
/// Column where the typed query starts (label column plus label width).
pub const SEARCH_STRIP_X: u16 = 10;
/// Columns kept free to the right of the input strip.
pub const SEARCH_STRIP_MARGIN: u16 = 2;
/// Narrowest input strip worth opening the modal for.
pub const MIN_SEARCH_STRIP_WIDTH: u16 = 8;
pub const LABEL_SEARCH: &str = "Search: ";
pub const HINT_SEARCH: &str = "Press '/' to search";

// === Titles ===

pub const TITLE_SELECT_COUNTRY: &str = "Select a Country";
pub const TITLE_SELECT_CITY_PREFIX: &str = "Select a City in ";
pub const TITLE_SELECT_PROTOCOL_PREFIX: &str = "Select Protocol for ";

// === Notices ===

pub const MSG_NO_MATCHES: &str = "No matches found";
pub const MSG_TOO_SMALL: &str = "Terminal too small";
pub const MSG_TOO_SMALL_HINT: &str = "Resize or press q";
pub const MSG_NO_PROFILES: &str = "No profiles found in ";
pub const MSG_LIST_FAILED: &str = "Cannot read profiles directory ";
pub const MSG_PRESS_ANY_KEY: &str = "Press any key to exit";
pub const MSG_INTERRUPTED: &str = "\nExiting VPN selector...";

// === Messages: Launch ===

pub const CLI_MSG_CONNECTING: &str = "Connecting to VPN using ";
pub const CLI_MSG_EXECUTING: &str = "Executing: ";
pub const CLI_MSG_CLIENT_FAILED: &str = "VPN client exited with ";
pub const CLI_MSG_LAUNCH_FAILED: &str = "Failed to start VPN client: ";

/// Client argument that names the profile file.
pub const OVPN_ARG_CONFIG: &str = "--config";
/// Client argument that names the credentials file.
pub const OVPN_ARG_AUTH_USER_PASS: &str = "--auth-user-pass";
/// Privilege escalation wrapper.
pub const SUDO_BINARY: &str = "sudo";
