//! Integration tests for service configuration loading.
//!
//! These tests verify the precedence chain: builder overrides > env vars > defaults.
//! Environment mutations are serialized with `serial_test`.

use secrecy::{ExposeSecret, SecretString};
use serial_test::serial;
use std::time::Duration;
use typist_config::constants::{DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES};
use typist_config::{
    ConfigError, ConfigLoader, ENV_API_TOKEN, ENV_BASE_URL, ENV_MAX_RETRIES, ENV_TIMEOUT_SECS,
    env_var_or_none,
};

#[test]
#[serial]
fn test_env_values_are_applied() {
    temp_env::with_vars(
        [
            (ENV_BASE_URL, Some("https://api.typist.test/")),
            (ENV_API_TOKEN, Some("env-token")),
            (ENV_TIMEOUT_SECS, Some("12")),
            (ENV_MAX_RETRIES, Some("5")),
        ],
        || {
            let config = ConfigLoader::new()
                .from_env()
                .expect("env should parse")
                .build()
                .expect("config should build");

            assert_eq!(config.base_url, "https://api.typist.test");
            assert_eq!(
                config.api_token.as_ref().map(|t| t.expose_secret().to_string()),
                Some("env-token".to_string())
            );
            assert_eq!(config.timeout, Duration::from_secs(12));
            assert_eq!(config.max_retries, 5);
        },
    );
}

#[test]
#[serial]
fn test_builder_overrides_take_precedence_over_env() {
    temp_env::with_vars(
        [
            (ENV_BASE_URL, Some("https://env.typist.test")),
            (ENV_API_TOKEN, Some("env-token")),
        ],
        || {
            let config = ConfigLoader::new()
                .with_base_url("https://cli.typist.test")
                .with_api_token(SecretString::new("cli-token".to_string().into()))
                .from_env()
                .unwrap()
                .build()
                .unwrap();

            assert_eq!(config.base_url, "https://cli.typist.test");
            assert_eq!(
                config.api_token.as_ref().map(|t| t.expose_secret().to_string()),
                Some("cli-token".to_string())
            );
        },
    );
}

#[test]
#[serial]
fn test_blank_env_values_are_ignored() {
    temp_env::with_vars(
        [(ENV_BASE_URL, Some("   ")), (ENV_MAX_RETRIES, Some(""))],
        || {
            assert!(env_var_or_none(ENV_BASE_URL).is_none());
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.base_url, DEFAULT_BASE_URL);
            assert_eq!(config.max_retries, DEFAULT_MAX_RETRIES);
        },
    );
}

#[test]
#[serial]
fn test_invalid_timeout_env_reports_variable() {
    temp_env::with_var(ENV_TIMEOUT_SECS, Some("soon"), || {
        let err = ConfigLoader::new().from_env().err().expect("should fail");
        match err {
            ConfigError::InvalidValue { var, .. } => assert_eq!(var, ENV_TIMEOUT_SECS),
            other => panic!("unexpected error: {other}"),
        }
    });
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_loading() {
    temp_env::with_var("DOTENV_DISABLED", Some("1"), || {
        assert!(ConfigLoader::new().load_dotenv().is_ok());
    });
}
