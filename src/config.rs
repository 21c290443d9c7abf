//! Site configuration.
//!
//! Brand name, inbox and embed posts are supplied next to the project data
//! rather than baked into the script.
//! Every field has a default, so a partial or missing config still works.

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// Log level setting for the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    #[default]
    Warn,
    /// Show errors, warnings, and info messages
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's Level.
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(self) -> log::LevelFilter {
        self.to_level().to_level_filter()
    }
}

/// Current configuration format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Site configuration supplied alongside the project data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Version of the configuration format
    pub version: u32,

    /// Brand name used in the inquiry subject
    pub brand: String,

    /// Recipient of contact form inquiries
    pub contact_email: String,

    /// Site name in the inquiry signature line
    pub signature: String,

    /// Social post permalinks rendered as embeds (first six are used)
    pub embed_posts: Vec<String>,

    /// Log verbosity
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            brand: "Zeta Design".to_string(),
            contact_email: "emilyzavalaf@gmail.com".to_string(),
            signature: "zetadesign".to_string(),
            embed_posts: vec![
                "https://www.instagram.com/p/DLSx3U9v0Uw/".to_string(),
                "https://www.instagram.com/p/DLBMEAOPLay/".to_string(),
                "https://www.instagram.com/p/DN4IhQYEYb-/?img_index=1".to_string(),
            ],
            log_level: LogLevel::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON config, rejecting files from another format version.
    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        if config.version != CONFIG_VERSION {
            return Err(SiteError::VersionMismatch {
                expected: CONFIG_VERSION,
                found: config.version,
            });
        }
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, SiteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = SiteConfig::from_json(r#"{ "brand": "Studio K" }"#).unwrap();
        assert_eq!(config.brand, "Studio K");
        assert_eq!(config.contact_email, "emilyzavalaf@gmail.com");
        assert_eq!(config.embed_posts.len(), 3);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_version_mismatch() {
        let err = SiteConfig::from_json(r#"{ "version": 7 }"#).unwrap_err();
        assert!(matches!(
            err,
            SiteError::VersionMismatch {
                expected: 1,
                found: 7
            }
        ));
    }

    #[test]
    fn test_config_json_roundtrip() {
        let mut config = SiteConfig::default();
        config.embed_posts.clear();
        config.log_level = LogLevel::Debug;
        let json = config.to_json().unwrap();
        assert!(json.contains("\"log_level\": \"debug\""));
        assert_eq!(SiteConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
        assert_eq!(LogLevel::Error.to_level(), log::Level::Error);
    }
}
