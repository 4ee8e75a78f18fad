/// Constants shared by the library and the launchdex binary

/// Locations searched for the settings file, in order
pub const DEFAULT_CONFIG_PATHS: &[&str] = &[
    "config/settings.toml",
    "./config/settings.toml",
    "~/.config/launchdex/settings.toml",
];

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "RUST_LOG";

/// Log filter used when the environment does not provide one
pub const DEFAULT_LOG_FILTER: &str = "info";
