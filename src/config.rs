//! Configuration for the genesis-rider crate
#![warn(missing_docs)]
#![warn(unsafe_code)]

use log::warn;

use crate::error;
use crate::rom_format::header::SignatureCheck;

/// Configuration key turning on extra diagnostic logging
pub const DEBUG_KEY: &str = "debug";

/// Configuration key selecting the corrected license signature check.
/// Keys use underscores so `GENESIS_RIDER_STRICT_HEADER` reaches them.
pub const STRICT_HEADER_KEY: &str = "strict_header";

/// Configuration key selecting the header report format
pub const REPORT_FORMAT_KEY: &str = "report_format";

/// How a header report is rendered
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReportFormat {
    /// Aligned `label: value` lines
    Text,
    /// A TOML table
    Toml,
}

/// Configuration format
pub struct Config {
    /// Version of the configuration root
    pub version: String,

    /// The general settings
    pub settings: config::Config,
}

/// Trait that defines a set of methods that allow loading and
/// unloading configuration data
pub trait Configuration {
    /// Load the configuration data from a set of merged settings
    fn load(settings: config::Config) -> std::result::Result<Config, error::Error>;
}

impl Configuration for Config {
    fn load(settings: config::Config) -> std::result::Result<Config, error::Error> {
        let config = Config {
            version: String::from("0.1.0"),
            settings,
        };

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            version: String::from("0.1.0"),
            settings: config::Config::default(),
        }
    }
}

impl Config {
    /// The license signature check to apply when validating headers.
    /// Defaults to the strict check.
    pub fn signature_check(&self) -> SignatureCheck {
        if self.settings.get_bool(STRICT_HEADER_KEY).unwrap_or(true) {
            SignatureCheck::Strict
        } else {
            SignatureCheck::Lenient
        }
    }

    /// The format header reports should be printed in.
    /// Unknown values fall back to text.
    pub fn report_format(&self) -> ReportFormat {
        match self.settings.get_string(REPORT_FORMAT_KEY) {
            Ok(s) => match s.to_lowercase().as_str() {
                "toml" => ReportFormat::Toml,
                "text" => ReportFormat::Text,
                other => {
                    warn!("Unknown report format {}, using text", other);
                    ReportFormat::Text
                }
            },
            Err(_) => ReportFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, Configuration, ReportFormat, REPORT_FORMAT_KEY, STRICT_HEADER_KEY};
    use crate::rom_format::header::SignatureCheck;

    #[test]
    fn defaults_are_strict_text() {
        let config = Config::load(config::Config::default()).expect("Error loading config");

        assert_eq!(config.signature_check(), SignatureCheck::Strict);
        assert_eq!(config.report_format(), ReportFormat::Text);
    }

    #[test]
    fn settings_override_defaults() {
        let settings = config::Config::builder()
            .set_override(STRICT_HEADER_KEY, false)
            .and_then(|b| b.set_override(REPORT_FORMAT_KEY, "TOML"))
            .and_then(|b| b.build())
            .expect("Error building settings");
        let config = Config::load(settings).expect("Error loading config");

        assert_eq!(config.signature_check(), SignatureCheck::Lenient);
        assert_eq!(config.report_format(), ReportFormat::Toml);
    }

    #[test]
    fn environment_overrides_defaults() {
        let variables: config::Map<String, String> = [
            ("GENESIS_RIDER_STRICT_HEADER", "false"),
            ("GENESIS_RIDER_REPORT_FORMAT", "toml"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("GENESIS_RIDER").source(Some(variables)))
            .build()
            .expect("Error building settings");
        let config = Config::load(settings).expect("Error loading config");

        assert_eq!(config.signature_check(), SignatureCheck::Lenient);
        assert_eq!(config.report_format(), ReportFormat::Toml);
    }

    #[test]
    fn config_file_keys_are_read() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                "strict_header = false\nreport_format = \"toml\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .expect("Error building settings");
        let config = Config::load(settings).expect("Error loading config");

        assert_eq!(config.signature_check(), SignatureCheck::Lenient);
        assert_eq!(config.report_format(), ReportFormat::Toml);
    }
}
