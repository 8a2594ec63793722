//! Build-time settings of the console.
//!
//! Values are baked in with `option_env!` when the WASM bundle is built:
//! - `ADMIN_CONSOLE_API_BASE`: origin of the backend API, empty for same origin.
//! - `ADMIN_CONSOLE_LOG`: browser console log level (`error` .. `trace`, `off`).

use log::LevelFilter;

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: LevelFilter::Info,
        }
    }
}

impl ConsoleConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("ADMIN_CONSOLE_API_BASE"),
            option_env!("ADMIN_CONSOLE_LOG"),
        )
    }

    pub fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_base
                .map(|base| base.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            log_level: log_level
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_values_use_defaults() {
        assert_eq!(ConsoleConfig::from_values(None, None), ConsoleConfig::default());
    }

    #[test]
    fn parses_base_and_level() {
        let config = ConsoleConfig::from_values(Some("http://localhost:8000/"), Some("debug"));
        assert_eq!(config.api_base, "http://localhost:8000");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn invalid_level_falls_back_to_info() {
        let config = ConsoleConfig::from_values(None, Some("loud"));
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
