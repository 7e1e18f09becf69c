use std::env;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::scheduler::DEFAULT_STEP_DELAY;

/// What happens when an algorithm is picked while another is still animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPolicy {
    /// Cancel the active run, let it fast-forward, then start the new one.
    #[default]
    CancelPrevious,
    /// Ignore the selection until the active run is done.
    IgnoreWhileBusy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub step_delay: Duration,
    pub skip_noop_steps: bool,
    pub run_policy: RunPolicy,
    pub render: RenderMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_delay: DEFAULT_STEP_DELAY,
            skip_noop_steps: false,
            run_policy: RunPolicy::default(),
            render: RenderMode::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key/value source; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup("SORT_STEP_DELAY_MS") {
            let millis = value
                .trim()
                .parse::<u64>()
                .map_err(|_| invalid("SORT_STEP_DELAY_MS", value.clone()))?;
            config.step_delay = Duration::from_millis(millis);
        }

        if let Some(value) = lookup("SORT_SKIP_NOOP_STEPS") {
            config.skip_noop_steps = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => return Err(invalid("SORT_SKIP_NOOP_STEPS", value)),
            };
        }

        if let Some(value) = lookup("SORT_RUN_POLICY") {
            config.run_policy = match value.trim().to_ascii_lowercase().as_str() {
                "cancel" => RunPolicy::CancelPrevious,
                "ignore" => RunPolicy::IgnoreWhileBusy,
                _ => return Err(invalid("SORT_RUN_POLICY", value)),
            };
        }

        if let Some(value) = lookup("SORT_RENDER") {
            config.render = match value.trim().to_ascii_lowercase().as_str() {
                "text" => RenderMode::Text,
                "json" => RenderMode::Json,
                _ => return Err(invalid("SORT_RENDER", value)),
            };
        }

        Ok(config)
    }
}

fn invalid(key: &'static str, value: String) -> Error {
    Error::InvalidConfig { key, value }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.step_delay, Duration::from_millis(100));
        assert!(!config.skip_noop_steps);
        assert_eq!(config.run_policy, RunPolicy::CancelPrevious);
        assert_eq!(config.render, RenderMode::Text);
    }

    #[test]
    fn reads_every_key() {
        let config = Config::from_lookup(lookup(&[
            ("SORT_STEP_DELAY_MS", "25"),
            ("SORT_SKIP_NOOP_STEPS", "Yes"),
            ("SORT_RUN_POLICY", "ignore"),
            ("SORT_RENDER", "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.step_delay, Duration::from_millis(25));
        assert!(config.skip_noop_steps);
        assert_eq!(config.run_policy, RunPolicy::IgnoreWhileBusy);
        assert_eq!(config.render, RenderMode::Json);
    }

    #[test]
    fn rejects_bad_values() {
        let err = Config::from_lookup(lookup(&[("SORT_STEP_DELAY_MS", "-1")])).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { key: "SORT_STEP_DELAY_MS", .. }));

        let err = Config::from_lookup(lookup(&[("SORT_RUN_POLICY", "queue")])).unwrap_err();
        assert_eq!(err.to_string(), r#"invalid value "queue" for SORT_RUN_POLICY"#);
    }
}
