use std::{fmt, path::PathBuf, str::FromStr};

use dioxus_logger::tracing::Level;

use crate::{app::error::config::ConfigError, model::RoutePreference};

/// Screen layout the GUI is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Desktop,
    Mobile,
}

impl Layout {
    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            other => Err(format!("unknown layout '{}', expected desktop or mobile", other)),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Desktop => write!(f, "desktop"),
            Self::Mobile => write!(f, "mobile"),
        }
    }
}

pub struct Config {
    /// JSON snapshot to load into the in-memory store. An empty store is used when unset.
    pub snapshot_path: Option<PathBuf>,
    pub log_level: Level,
    pub layout: Layout,
    pub route_preference: RoutePreference,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from a variable lookup function.
    ///
    /// Unset and empty variables fall back to their defaults.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of an environment variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All set variables hold valid values
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable could not be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        Ok(Self {
            snapshot_path: get("EVEBUDDY_SNAPSHOT_PATH").map(PathBuf::from),
            log_level: parse_or_default(
                get("EVEBUDDY_LOG_LEVEL"),
                "EVEBUDDY_LOG_LEVEL",
                Level::INFO,
            )?,
            layout: parse_or_default(get("EVEBUDDY_LAYOUT"), "EVEBUDDY_LAYOUT", Layout::Desktop)?,
            route_preference: parse_or_default(
                get("EVEBUDDY_ROUTE_PREFERENCE"),
                "EVEBUDDY_ROUTE_PREFERENCE",
                RoutePreference::Shortest,
            )?,
        })
    }
}

fn parse_or_default<T>(value: Option<String>, var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|err: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: err.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    mod from_lookup {
        use super::*;

        /// Expect defaults when no variables are set
        #[test]
        fn uses_defaults() {
            let config = Config::from_lookup(lookup(&[])).unwrap();

            assert_eq!(config.snapshot_path, None);
            assert_eq!(config.log_level, Level::INFO);
            assert_eq!(config.layout, Layout::Desktop);
            assert_eq!(config.route_preference, RoutePreference::Shortest);
        }

        /// Expect all set variables to be parsed
        #[test]
        fn parses_values() {
            let config = Config::from_lookup(lookup(&[
                ("EVEBUDDY_SNAPSHOT_PATH", "/tmp/evebuddy.json"),
                ("EVEBUDDY_LOG_LEVEL", "debug"),
                ("EVEBUDDY_LAYOUT", "Mobile"),
                ("EVEBUDDY_ROUTE_PREFERENCE", "secure"),
            ]))
            .unwrap();

            assert_eq!(config.snapshot_path, Some(PathBuf::from("/tmp/evebuddy.json")));
            assert_eq!(config.log_level, Level::DEBUG);
            assert!(config.layout.is_mobile());
            assert_eq!(config.route_preference, RoutePreference::Secure);
        }

        /// Expect empty variables to be treated as unset
        #[test]
        fn ignores_empty_values() {
            let config = Config::from_lookup(lookup(&[("EVEBUDDY_LAYOUT", "  ")])).unwrap();

            assert_eq!(config.layout, Layout::Desktop);
        }

        /// Expect an invalid value to be reported with the variable name
        #[test]
        fn rejects_invalid_layout() {
            let result = Config::from_lookup(lookup(&[("EVEBUDDY_LAYOUT", "tablet")]));

            match result {
                Err(ConfigError::InvalidEnvValue { var, .. }) => {
                    assert_eq!(var, "EVEBUDDY_LAYOUT")
                }
                _ => panic!("expected InvalidEnvValue"),
            }
        }
    }
}
