//! Settings read from the environment

use std::env;
use tracing::Level;
use convertor_units::DEFAULT_DECIMALS;

const MAX_DECIMALS: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Most verbose level written to stderr
    pub log_level: Level,
    /// Decimal places in rendered results
    pub decimals: usize,
    /// Problems found while reading settings, logged once logging is up
    pub warnings: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_level: Level::INFO,
            decimals: DEFAULT_DECIMALS,
            warnings: Vec::new(),
        }
    }
}

impl Settings {
    /// Read `CONVERTOR_LOG` (falling back to `RUST_LOG`) and `CONVERTOR_DECIMALS`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Settings::default();

        if let Some(level) = lookup("CONVERTOR_LOG").or_else(|| lookup("RUST_LOG")) {
            match level.trim().parse::<Level>() {
                Ok(l) => settings.log_level = l,
                Err(_) => settings.warnings.push(format!(
                    "ignoring log level '{}', using {}", level, settings.log_level
                )),
            }
        }

        if let Some(decimals) = lookup("CONVERTOR_DECIMALS") {
            match decimals.trim().parse::<usize>() {
                Ok(d) if d <= MAX_DECIMALS => settings.decimals = d,
                Ok(d) => {
                    settings.decimals = MAX_DECIMALS;
                    settings.warnings.push(format!(
                        "CONVERTOR_DECIMALS={} is above {}, clamped", d, MAX_DECIMALS
                    ));
                }
                Err(_) => settings.warnings.push(format!(
                    "ignoring CONVERTOR_DECIMALS='{}', using {}", decimals, DEFAULT_DECIMALS
                )),
            }
        }

        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = pairs.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from(&[]);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.decimals, 4);
        assert_eq!(settings.log_level, Level::INFO);
    }

    #[test]
    fn test_log_level() {
        assert_eq!(settings_from(&[("CONVERTOR_LOG", "debug")]).log_level, Level::DEBUG);
        assert_eq!(settings_from(&[("RUST_LOG", "warn")]).log_level, Level::WARN);
        // Own variable wins over RUST_LOG
        let settings = settings_from(&[("CONVERTOR_LOG", "trace"), ("RUST_LOG", "error")]);
        assert_eq!(settings.log_level, Level::TRACE);
    }

    #[test]
    fn test_bad_log_level_keeps_default() {
        let settings = settings_from(&[("CONVERTOR_LOG", "loud")]);
        assert_eq!(settings.log_level, Level::INFO);
        assert_eq!(settings.warnings.len(), 1);
    }

    #[test]
    fn test_decimals() {
        assert_eq!(settings_from(&[("CONVERTOR_DECIMALS", "2")]).decimals, 2);

        let settings = settings_from(&[("CONVERTOR_DECIMALS", "40")]);
        assert_eq!(settings.decimals, 12);
        assert_eq!(settings.warnings.len(), 1);

        let settings = settings_from(&[("CONVERTOR_DECIMALS", "many")]);
        assert_eq!(settings.decimals, 4);
        assert_eq!(settings.warnings.len(), 1);
    }
}
