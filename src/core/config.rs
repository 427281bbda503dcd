use super::constants::{FIREFLIES_COUNT, FIREFLIES_MAX_COUNT};

/// Runtime scene options. Defaults come from the constants; the page query
/// string can override them (`?seed=7&fireflies=120&debug=0`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneConfig {
    pub fireflies_count: usize,
    /// Fixed RNG seed for a reproducible fireflies field; entropy when `None`.
    pub seed: Option<u64>,
    pub show_debug_panel: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fireflies_count: FIREFLIES_COUNT,
            seed: None,
            show_debug_panel: true,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("fireflies count {0} exceeds the maximum of {max}", max = FIREFLIES_MAX_COUNT)]
    TooManyFireflies(usize),
}

impl SceneConfig {
    /// Build a config from a `location.search` string.
    ///
    /// Bad values are logged and leave the default in place; unknown keys are
    /// ignored so the page can carry its own parameters.
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if let Err(e) = config.apply(key, value) {
                log::warn!("[config] {}", e);
            }
        }
        config
    }

    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "seed" => {
                self.seed = Some(value.parse().map_err(|_| invalid())?);
            }
            "fireflies" => {
                let count: usize = value.parse().map_err(|_| invalid())?;
                if count > FIREFLIES_MAX_COUNT {
                    return Err(ConfigError::TooManyFireflies(count));
                }
                self.fireflies_count = count;
            }
            "debug" => {
                self.show_debug_panel = match value {
                    "" | "1" | "true" | "on" => true,
                    "0" | "false" | "off" => false,
                    _ => return Err(invalid()),
                };
            }
            _ => log::debug!("[config] ignoring unknown key `{}`", key),
        }
        Ok(())
    }
}
