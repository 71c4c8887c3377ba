use log::Level;
use web_sys::window;

/// localStorage key overriding the log level
pub const LOG_LEVEL_STORAGE_KEY: &str = "budg_log_level";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from the window location and localStorage
    pub fn from_environment() -> Self {
        let Some(window) = window() else {
            return Self::default();
        };

        let hostname = window.location().hostname().ok();
        let stored_level = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(LOG_LEVEL_STORAGE_KEY).ok().flatten());

        Self::resolve(hostname.as_deref(), stored_level.as_deref())
    }

    /// Development hosts log at debug level; a stored level wins over both.
    pub fn resolve(hostname: Option<&str>, stored_level: Option<&str>) -> Self {
        let mut settings = Self::default();

        if let Some(hostname) = hostname {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Some(level) = stored_level.and_then(parse_log_level) {
            settings.log_level = level;
        }

        settings
    }
}

pub fn parse_log_level(value: &str) -> Option<Level> {
    match value.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
