use std::path::PathBuf;

use crate::application::parser_registry::ParserKind;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("Invalid log format: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub app_version: String,
    pub app_description: String,
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub log_format: LogFormat,
    /// Empty string disables the OpenAPI document route
    pub openapi_url: String,
    // Rate limiting
    pub rate_limit_enabled: bool,
    pub rate_limit_requests: usize,
    pub rate_limit_period_secs: u64,
    // CORS
    pub cors_enabled: bool,
    pub cors_origins: Vec<String>,
    // Parser selection
    pub parser_kind: String,
    pub alternate_parser_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or unparsable values use defaults
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str, default: bool| {
            lookup(key)
                .and_then(|s| parse_bool(&s))
                .unwrap_or(default)
        };

        Self {
            app_name: lookup("APP_NAME").unwrap_or_else(|| "Aelus".to_string()),
            app_version: lookup("APP_VERSION")
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            app_description: lookup("APP_DESCRIPTION")
                .unwrap_or_else(|| "Web-based dashboard for Ableton Live projects".to_string()),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_var(&lookup, "PORT").unwrap_or(8000),
            debug: flag("DEBUG", false),
            log_format: parse_var(&lookup, "LOG_FORMAT").unwrap_or_default(),
            openapi_url: lookup("OPENAPI_URL").unwrap_or_else(|| "/openapi.json".to_string()),
            rate_limit_enabled: flag("RATE_LIMIT_ENABLED", true),
            rate_limit_requests: parse_var(&lookup, "RATE_LIMIT_REQUESTS").unwrap_or(100),
            rate_limit_period_secs: parse_var(&lookup, "RATE_LIMIT_PERIOD").unwrap_or(60),
            cors_enabled: flag("CORS_ENABLED", true),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|origin| origin.trim().to_string())
                        .filter(|origin| !origin.is_empty())
                        .collect()
                })
                .unwrap_or_else(|| vec!["*".to_string()]),
            parser_kind: lookup("PARSER_KIND").unwrap_or_else(|| "auto".to_string()),
            alternate_parser_path: lookup("ALTERNATE_PARSER_PATH")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Address the HTTP server binds to
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("HOST cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("PORT must be between 1 and 65535".to_string());
        }

        if self.rate_limit_enabled {
            if self.rate_limit_requests == 0 {
                return Err("RATE_LIMIT_REQUESTS must be at least 1".to_string());
            }
            if self.rate_limit_period_secs == 0 {
                return Err("RATE_LIMIT_PERIOD must be at least 1 second".to_string());
            }
        }

        if !self.openapi_url.is_empty() && !self.openapi_url.starts_with('/') {
            return Err("OPENAPI_URL must start with '/'".to_string());
        }

        self.parser_kind()?;

        Ok(())
    }

    /// Parsed `PARSER_KIND`
    pub fn parser_kind(&self) -> Result<ParserKind, String> {
        self.parser_kind
            .parse::<ParserKind>()
            .map_err(|e| format!("PARSER_KIND: {}", e))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_source(|_| None)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|s| s.trim().parse().ok())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.app_name, "Aelus");
        assert_eq!(config.app_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.listen_addr(), "0.0.0.0:8000");
        assert!(!config.debug);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.openapi_url, "/openapi.json");
        assert!(config.rate_limit_enabled);
        assert_eq!(config.rate_limit_requests, 100);
        assert_eq!(config.rate_limit_period_secs, 60);
        assert!(config.cors_enabled);
        assert_eq!(config.cors_origins, vec!["*"]);
        assert_eq!(config.parser_kind().unwrap(), ParserKind::Automatic);
        assert!(config.alternate_parser_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = config_with(&[
            ("PORT", "9000"),
            ("DEBUG", "true"),
            ("LOG_FORMAT", "json"),
            ("CORS_ORIGINS", "http://localhost:3000, https://aelus.dev"),
            ("PARSER_KIND", "custom"),
            ("ALTERNATE_PARSER_PATH", "/opt/libals.so"),
        ]);

        assert_eq!(config.port, 9000);
        assert!(config.debug);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "https://aelus.dev"]
        );
        assert_eq!(config.parser_kind().unwrap(), ParserKind::BuiltIn);
        assert_eq!(
            config.alternate_parser_path,
            Some(PathBuf::from("/opt/libals.so"))
        );
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let config = config_with(&[("PORT", "eighty"), ("DEBUG", "maybe")]);
        assert_eq!(config.port, 8000);
        assert!(!config.debug);
    }

    #[test]
    fn test_validation_failures() {
        assert!(config_with(&[("PORT", "0")]).validate().is_err());
        assert!(config_with(&[("HOST", " ")]).validate().is_err());
        assert!(config_with(&[("RATE_LIMIT_REQUESTS", "0")])
            .validate()
            .is_err());
        assert!(config_with(&[("OPENAPI_URL", "openapi.json")])
            .validate()
            .is_err());
        assert!(config_with(&[("PARSER_KIND", "fastest")])
            .validate()
            .is_err());
    }

    #[test]
    fn test_disabled_limiter_skips_limit_checks() {
        let config = config_with(&[("RATE_LIMIT_ENABLED", "false"), ("RATE_LIMIT_REQUESTS", "0")]);
        assert!(config.validate().is_ok());
    }
}
