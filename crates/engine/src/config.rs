//! Environment-driven configuration for the demonstration.
//!
//! Every setting has a default, so an empty environment yields a complete
//! config. Values that fail to parse are logged and replaced by the default.

use std::str::FromStr;

use menagerie_domain::Capability;

pub const DEFAULT_LOG_PREFIX: &str = "[Animal Activity]";
pub const DEFAULT_QUIET_VOLUME: i64 = 1;
pub const DEFAULT_LOUD_VOLUME: i64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// `MENAGERIE_LOG_PREFIX`
    pub log_prefix: String,
    /// `MENAGERIE_QUIET_VOLUME` - zero or negative means silence
    pub quiet_volume: i64,
    /// `MENAGERIE_LOUD_VOLUME`
    pub loud_volume: i64,
    /// `MENAGERIE_ECHO_LOGS` - echo shared log entries to stdout as they happen
    pub echo_logs: bool,
    /// `MENAGERIE_SUMMARY_JSON` - finish with a JSON roster summary
    pub summary_json: bool,
    /// `MENAGERIE_CAPABILITIES` - comma-separated capabilities to probe
    pub probed_capabilities: Vec<Capability>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_prefix: DEFAULT_LOG_PREFIX.to_string(),
            quiet_volume: DEFAULT_QUIET_VOLUME,
            loud_volume: DEFAULT_LOUD_VOLUME,
            echo_logs: true,
            summary_json: false,
            probed_capabilities: Capability::all().to_vec(),
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the process environment in
    /// production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_prefix = lookup("MENAGERIE_LOG_PREFIX").unwrap_or(defaults.log_prefix);
        let quiet_volume =
            parse_or_default(&lookup, "MENAGERIE_QUIET_VOLUME", defaults.quiet_volume);
        let loud_volume = parse_or_default(&lookup, "MENAGERIE_LOUD_VOLUME", defaults.loud_volume);
        let echo_logs = parse_or_default(&lookup, "MENAGERIE_ECHO_LOGS", defaults.echo_logs);
        let summary_json =
            parse_or_default(&lookup, "MENAGERIE_SUMMARY_JSON", defaults.summary_json);
        let probed_capabilities = lookup("MENAGERIE_CAPABILITIES")
            .map(|raw| parse_capabilities(&raw))
            .unwrap_or(defaults.probed_capabilities);

        Self {
            log_prefix,
            quiet_volume,
            loud_volume,
            echo_logs,
            summary_json,
            probed_capabilities,
        }
    }
}

fn parse_or_default<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
{
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(key, value = %raw, ?default, "Invalid config value, using default");
            default
        }
    }
}

fn parse_capabilities(raw: &str) -> Vec<Capability> {
    let mut capabilities = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match name.parse::<Capability>() {
            Ok(capability) if !capabilities.contains(&capability) => capabilities.push(capability),
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unknown capability in MENAGERIE_CAPABILITIES")
            }
        }
    }
    capabilities
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> DemoConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DemoConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_yields_defaults() {
        assert_eq!(config_from(&[]), DemoConfig::default());
    }

    #[test]
    fn reads_every_setting() {
        let config = config_from(&[
            ("MENAGERIE_LOG_PREFIX", "[Zoo]"),
            ("MENAGERIE_QUIET_VOLUME", "0"),
            ("MENAGERIE_LOUD_VOLUME", " 3 "),
            ("MENAGERIE_ECHO_LOGS", "false"),
            ("MENAGERIE_SUMMARY_JSON", "true"),
            ("MENAGERIE_CAPABILITIES", "feedable"),
        ]);

        assert_eq!(config.log_prefix, "[Zoo]");
        assert_eq!(config.quiet_volume, 0);
        assert_eq!(config.loud_volume, 3);
        assert!(!config.echo_logs);
        assert!(config.summary_json);
        assert_eq!(config.probed_capabilities, vec![Capability::Feedable]);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("MENAGERIE_QUIET_VOLUME", "1.5"),
            ("MENAGERIE_LOUD_VOLUME", "loud"),
            ("MENAGERIE_ECHO_LOGS", "yes please"),
        ]);

        assert_eq!(config.quiet_volume, DEFAULT_QUIET_VOLUME);
        assert_eq!(config.loud_volume, DEFAULT_LOUD_VOLUME);
        assert!(config.echo_logs);
    }

    #[test]
    fn negative_volume_is_kept() {
        let config = config_from(&[("MENAGERIE_QUIET_VOLUME", "-1")]);
        assert_eq!(config.quiet_volume, -1);
    }

    #[test]
    fn capability_list_skips_unknown_and_duplicates() {
        let config = config_from(&[(
            "MENAGERIE_CAPABILITIES",
            "Feedable, flying, movable,feedable,",
        )]);
        assert_eq!(
            config.probed_capabilities,
            vec![Capability::Feedable, Capability::Movable]
        );
    }
}
