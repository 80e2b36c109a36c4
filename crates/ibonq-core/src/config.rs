use crate::app_config::{AppConfig, Environment, UpstreamConfig};
use crate::ConfigError;

const DEFAULT_UPSTREAM_URL: &str = "http://www.ibon.com.tw/retail_inquiry_ajax.aspx";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a pure
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        match lookup(var) {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            _ => Ok(None),
        }
    };

    let non_empty = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(trimmed.to_string())
    };

    let env = parse_environment(&or_default("IBONQ_ENV", "development"));
    let bind_addr = parse_addr("IBONQ_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("IBONQ_LOG_LEVEL", "info");

    let upstream = UpstreamConfig {
        url: non_empty("IBONQ_UPSTREAM_URL", DEFAULT_UPSTREAM_URL)?,
        target_field_name: non_empty("IBONQ_TARGET_FIELD_NAME", "strTargetField")?,
        keyword_field_name: non_empty("IBONQ_KEYWORD_FIELD_NAME", "strKeyWords")?,
        city_target: non_empty("IBONQ_CITY_TARGET", "COUNTY")?,
        store_target: non_empty("IBONQ_STORE_TARGET", "COUNTY")?,
        city_select_id: non_empty("IBONQ_CITY_SELECT_ID", "Class1")?,
    };

    let user_agent = or_default("IBONQ_USER_AGENT", "ibonq/0.1 (retail-inquiry)");
    let request_timeout_secs = parse_optional_u64("IBONQ_REQUEST_TIMEOUT_SECS")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        upstream,
        user_agent,
        request_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn log_ansi_is_off_only_in_production() {
        assert!(Environment::Development.log_ansi());
        assert!(Environment::Test.log_ansi());
        assert!(!Environment::Production.log_ansi());
    }

    #[test]
    fn build_app_config_uses_defaults_when_env_is_empty() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should load");

        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.upstream.url, DEFAULT_UPSTREAM_URL);
        assert_eq!(cfg.upstream.target_field_name, "strTargetField");
        assert_eq!(cfg.upstream.keyword_field_name, "strKeyWords");
        assert_eq!(cfg.upstream.city_target, "COUNTY");
        assert_eq!(cfg.upstream.store_target, "COUNTY");
        assert_eq!(cfg.upstream.city_select_id, "Class1");
        assert_eq!(cfg.request_timeout_secs, None);
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map = HashMap::new();
        map.insert("IBONQ_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "IBONQ_BIND_ADDR"),
            "expected InvalidEnvVar(IBONQ_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_timeout() {
        let mut map = HashMap::new();
        map.insert("IBONQ_REQUEST_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "IBONQ_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(IBONQ_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_blank_field_name() {
        let mut map = HashMap::new();
        map.insert("IBONQ_KEYWORD_FIELD_NAME", "   ");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "IBONQ_KEYWORD_FIELD_NAME"),
            "expected InvalidEnvVar(IBONQ_KEYWORD_FIELD_NAME), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_reads_overrides() {
        let mut map = HashMap::new();
        map.insert("IBONQ_ENV", "production");
        map.insert("IBONQ_STORE_TARGET", "ZIPCODE");
        map.insert("IBONQ_REQUEST_TIMEOUT_SECS", "15");
        map.insert("IBONQ_UPSTREAM_URL", "https://example.test/inquiry");
        let cfg = build_app_config(lookup_from_map(&map)).expect("overrides should load");

        assert_eq!(cfg.env, Environment::Production);
        assert_eq!(cfg.upstream.store_target, "ZIPCODE");
        assert_eq!(cfg.upstream.url, "https://example.test/inquiry");
        assert_eq!(cfg.request_timeout_secs, Some(15));
    }

    #[test]
    fn build_app_config_treats_blank_timeout_as_unset() {
        let mut map = HashMap::new();
        map.insert("IBONQ_REQUEST_TIMEOUT_SECS", "");
        let cfg = build_app_config(lookup_from_map(&map)).expect("blank timeout is allowed");
        assert_eq!(cfg.request_timeout_secs, None);
    }
}
