// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of orbit-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Router configuration.
//!
//! Values come from defaults, optionally a JSON document, then environment
//! overrides (`ORBIT_ROUTE_CLEARANCE`, `ORBIT_ROUTE_BEND_PENALTY`,
//! `ORBIT_ROUTE_MAX_SEARCH_STEPS`).

use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CLEARANCE: f64 = 10.0;
pub const DEFAULT_BEND_PENALTY: f64 = 20.0;
pub const DEFAULT_MAX_SEARCH_STEPS: usize = 200_000;

const ENV_CLEARANCE: &str = "ORBIT_ROUTE_CLEARANCE";
const ENV_BEND_PENALTY: &str = "ORBIT_ROUTE_BEND_PENALTY";
const ENV_MAX_SEARCH_STEPS: &str = "ORBIT_ROUTE_MAX_SEARCH_STEPS";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterConfig {
    /// Padding kept between a route and every node outline ("orbit distance").
    pub clearance: f64,
    /// Extra cost per corner, in diagram units.
    pub bend_penalty: f64,
    /// Upper bound on search expansions per route.
    pub max_search_steps: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            clearance: DEFAULT_CLEARANCE,
            bend_penalty: DEFAULT_BEND_PENALTY,
            max_search_steps: DEFAULT_MAX_SEARCH_STEPS,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value {value:?} for {name}")]
    InvalidEnv { name: &'static str, value: String },
    #[error("{field} must be finite and non-negative, got {value}")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("max_search_steps must be positive")]
    ZeroSearchBudget,
}

impl RouterConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.display().to_string(), source })?;
        Self::from_json_str(&raw)
    }

    /// Applies environment overrides on top of `self`.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    pub(crate) fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(raw) = lookup(ENV_CLEARANCE) {
            self.clearance = parse_env(ENV_CLEARANCE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_BEND_PENALTY) {
            self.bend_penalty = parse_env(ENV_BEND_PENALTY, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MAX_SEARCH_STEPS) {
            self.max_search_steps = parse_env(ENV_MAX_SEARCH_STEPS, &raw)?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("clearance", self.clearance), ("bend_penalty", self.bend_penalty)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        if self.max_search_steps == 0 {
            return Err(ConfigError::ZeroSearchBudget);
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse::<T>().map_err(|_| ConfigError::InvalidEnv { name, value: raw.to_owned() })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{ConfigError, RouterConfig};

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect::<BTreeMap<_, _>>();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn json_fields_default_individually() {
        let config = RouterConfig::from_json_str(r#"{ "clearance": 4.5 }"#).expect("config");
        assert_eq!(
            config,
            RouterConfig { clearance: 4.5, ..RouterConfig::default() }
        );
    }

    #[test]
    fn unknown_json_fields_are_rejected() {
        assert!(matches!(
            RouterConfig::from_json_str(r#"{ "orbit": 4.5 }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn env_overrides_apply_on_top() {
        let config = RouterConfig::default()
            .with_overrides(env(&[
                ("ORBIT_ROUTE_CLEARANCE", " 12 "),
                ("ORBIT_ROUTE_MAX_SEARCH_STEPS", "500"),
            ]))
            .expect("config");
        assert_eq!(config.clearance, 12.0);
        assert_eq!(config.max_search_steps, 500);
        assert_eq!(config.bend_penalty, RouterConfig::default().bend_penalty);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            RouterConfig::default().with_overrides(env(&[("ORBIT_ROUTE_BEND_PENALTY", "lots")])),
            Err(ConfigError::InvalidEnv { name: "ORBIT_ROUTE_BEND_PENALTY", .. })
        ));
        assert!(matches!(
            RouterConfig::from_json_str(r#"{ "clearance": -1 }"#),
            Err(ConfigError::OutOfRange { field: "clearance", .. })
        ));
        assert!(matches!(
            RouterConfig::from_json_str(r#"{ "max_search_steps": 0 }"#),
            Err(ConfigError::ZeroSearchBudget)
        ));
    }
}
