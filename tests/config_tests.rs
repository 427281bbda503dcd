// Host-side tests for query-string scene configuration.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
}

use crate::core::config::*;

#[test]
fn empty_query_gives_defaults() {
    assert_eq!(SceneConfig::from_query(""), SceneConfig::default());
    assert_eq!(SceneConfig::from_query("?"), SceneConfig::default());
    let config = SceneConfig::default();
    assert_eq!(config.fireflies_count, 40);
    assert_eq!(config.seed, None);
    assert!(config.show_debug_panel);
}

#[test]
fn query_overrides_every_key() {
    let config = SceneConfig::from_query("?seed=7&fireflies=120&debug=0");
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.fireflies_count, 120);
    assert!(!config.show_debug_panel);
}

#[test]
fn bare_debug_flag_enables_the_panel() {
    let config = SceneConfig::from_query("?debug=off&debug");
    assert!(config.show_debug_panel);
}

#[test]
fn bad_values_keep_the_defaults() {
    let config = SceneConfig::from_query("?fireflies=lots&seed=-1&debug=maybe");
    assert_eq!(config, SceneConfig::default());
}

#[test]
fn unknown_keys_are_ignored() {
    let config = SceneConfig::from_query("?utm_source=mail&fireflies=3");
    assert_eq!(config.fireflies_count, 3);
}

#[test]
fn fireflies_count_is_capped() {
    let mut config = SceneConfig::default();
    let err = config.apply("fireflies", "20000").unwrap_err();
    assert_eq!(err, ConfigError::TooManyFireflies(20000));
    assert_eq!(
        err.to_string(),
        "fireflies count 20000 exceeds the maximum of 10000"
    );
    assert_eq!(config.fireflies_count, 40);
    assert!(config.apply("fireflies", "10000").is_ok());
    assert_eq!(config.fireflies_count, 10000);
}

#[test]
fn invalid_value_names_key_and_value() {
    let mut config = SceneConfig::default();
    let err = config.apply("seed", "abc").unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidValue {
            key: "seed".to_string(),
            value: "abc".to_string(),
        }
    );
    assert_eq!(err.to_string(), "invalid value `abc` for `seed`");
}
