//! # Store Configuration
//!
//! Settings loaded once at startup and read-only afterwards.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Environment Variables (highest priority)                           │
//! │     BAZAAR_STORE_NAME="متجر محمد الصالحي"                                │
//! │     BAZAAR_LOCALE=ar                                                   │
//! │     BAZAAR_CHECKOUT_DELAY_MS=1000                                      │
//! │                                                                         │
//! │  2. TOML Config File (path in BAZAAR_CONFIG)                           │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! store_name = "متجر محمد الصالحي"
//! locale = "ar"
//! direction = "rtl"
//! currency_label = "ريال"
//! checkout_delay_ms = 1000
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use bazaar_core::Money;

use crate::error::{StartupError, StartupResult};

/// Longest simulated checkout we accept.
pub const MAX_CHECKOUT_DELAY_MS: u64 = 60_000;

/// Text direction of the document surface.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Right-to-left (Arabic)
    #[default]
    Rtl,
    /// Left-to-right
    Ltr,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    pub fn as_attr(&self) -> &'static str {
        match self {
            TextDirection::Rtl => "rtl",
            TextDirection::Ltr => "ltr",
        }
    }
}

/// Storefront configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    /// Header title
    pub store_name: String,

    /// Language tag for the document (`lang` attribute)
    pub locale: String,

    /// Text direction (`dir` attribute)
    pub direction: TextDirection,

    /// Word shown after every price
    pub currency_label: String,

    /// Simulated checkout latency
    pub checkout_delay_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            store_name: "متجر محمد الصالحي".to_string(),
            locale: "ar".to_string(),
            direction: TextDirection::Rtl,
            currency_label: "ريال".to_string(),
            checkout_delay_ms: 1000,
        }
    }
}

impl StoreConfig {
    /// Defaults, then the file named by `BAZAAR_CONFIG` (if set), then
    /// environment overrides. The result is validated.
    pub fn load() -> StartupResult<Self> {
        let config = match std::env::var("BAZAAR_CONFIG") {
            Ok(path) => StoreConfig::from_file(Path::new(&path))?,
            Err(_) => StoreConfig::default(),
        };

        let config = config.with_env_overrides();
        config.validate()?;
        debug!(?config, "Store configuration loaded");
        Ok(config)
    }

    /// Reads a TOML file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> StartupResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| StartupError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        StoreConfig::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> StartupResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Applies `BAZAAR_*` environment variables on top of `self`.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(name) = std::env::var("BAZAAR_STORE_NAME") {
            self.store_name = name;
        }

        if let Ok(locale) = std::env::var("BAZAAR_LOCALE") {
            self.locale = locale;
        }

        if let Ok(delay) = std::env::var("BAZAAR_CHECKOUT_DELAY_MS") {
            match delay.parse::<u64>() {
                Ok(ms) => self.checkout_delay_ms = ms,
                Err(e) => warn!(value = %delay, error = %e, "Ignoring BAZAAR_CHECKOUT_DELAY_MS"),
            }
        }

        self
    }

    pub fn validate(&self) -> StartupResult<()> {
        if self.store_name.trim().is_empty() {
            return Err(StartupError::InvalidConfig("store_name is required".into()));
        }

        if self.locale.trim().is_empty() {
            return Err(StartupError::InvalidConfig("locale is required".into()));
        }

        if self.checkout_delay_ms > MAX_CHECKOUT_DELAY_MS {
            return Err(StartupError::InvalidConfig(format!(
                "checkout_delay_ms must be at most {}",
                MAX_CHECKOUT_DELAY_MS
            )));
        }

        Ok(())
    }

    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }

    /// Formats a price the way the storefront displays it: `"150 ريال"`.
    pub fn format_price(&self, amount: Money) -> String {
        format!("{} {}", amount, self.currency_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.direction.as_attr(), "rtl");
        assert_eq!(config.locale, "ar");
        assert_eq!(config.checkout_delay(), Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_price() {
        let config = StoreConfig::default();
        assert_eq!(config.format_price(Money::from_major(150)), "150 ريال");
        assert_eq!(config.format_price(Money::from_minor(15050)), "150.50 ريال");
        assert_eq!(config.format_price(Money::zero()), "0 ريال");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = StoreConfig::from_toml_str("checkout_delay_ms = 250\ndirection = \"ltr\"").unwrap();
        assert_eq!(config.checkout_delay_ms, 250);
        assert_eq!(config.direction, TextDirection::Ltr);
        assert_eq!(config.store_name, StoreConfig::default().store_name);
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            StoreConfig::from_toml_str("checkout_delay_ms = \"soon\""),
            Err(StartupError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            StoreConfig::from_file(Path::new("/definitely/not/here.toml")),
            Err(StartupError::ConfigRead { .. })
        ));
    }

    // The only test that touches BAZAAR_* variables; nothing else calls load().
    #[test]
    fn test_config_from_env() {
        let path = std::env::temp_dir().join(format!("bazaar-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            "store_name = \"File Store\"\nlocale = \"en\"\ncheckout_delay_ms = 250\n",
        )
        .unwrap();

        std::env::set_var("BAZAAR_CONFIG", &path);
        std::env::set_var("BAZAAR_STORE_NAME", "Env Store");
        std::env::set_var("BAZAAR_CHECKOUT_DELAY_MS", "abc");
        std::env::remove_var("BAZAAR_LOCALE");

        let loaded = StoreConfig::load();

        std::env::remove_var("BAZAAR_CONFIG");
        std::env::remove_var("BAZAAR_STORE_NAME");
        std::env::remove_var("BAZAAR_CHECKOUT_DELAY_MS");
        std::fs::remove_file(&path).unwrap();

        let config = loaded.unwrap();
        assert_eq!(config.store_name, "Env Store");
        assert_eq!(config.locale, "en");
        assert_eq!(config.checkout_delay_ms, 250);
        assert_eq!(config.currency_label, "ريال");
        assert_eq!(config.direction, TextDirection::Rtl);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = StoreConfig {
            store_name: "  ".into(),
            ..StoreConfig::default()
        };
        assert!(config.validate().is_err());

        let config = StoreConfig {
            checkout_delay_ms: MAX_CHECKOUT_DELAY_MS + 1,
            ..StoreConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
