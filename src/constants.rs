//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "RadarPlot";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "radarplot";

/// Environment variable overriding the config/store directory (used by tests).
pub const CONFIG_DIR_ENV: &str = "RADARPLOT_CONFIG_DIR";

/// File name of the saved-configuration store inside the config directory.
pub const STORE_FILE_NAME: &str = "saved_configurations.json";

/// Default base URL used when generating shareable links.
pub const DEFAULT_SHARE_BASE_URL: &str = "https://radar.example.com/";
