use std::{net::IpAddr, str::FromStr};

use anyhow::Context;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Debug, Clone, PartialEq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<HeaderValue>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub allowed_origins: AllowedOrigins,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8000,
            database_url: "sqlite://intern_dashboard.db".to_owned(),
            database_max_connections: 16,
            allowed_origins: AllowedOrigins::Any,
        }
    }
}

impl Config {
    /// Reads the process environment, with `.env` filling in anything unset.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host.parse::<IpAddr>().with_context(|| format!("HOST={host} is not an ip address"))?;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port.parse::<u16>().with_context(|| format!("PORT={port} is not a port"))?;
        }
        if let Some(database_url) = lookup("DATABASE_URL") {
            config.database_url = database_url;
        }
        if let Some(max) = lookup("DATABASE_MAX_CONNECTIONS") {
            config.database_max_connections = max
                .parse::<u32>()
                .ok()
                .filter(|&n| n > 0)
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS={max} is not a positive number"))?;
        }
        if let Some(origins) = lookup("CORS_ORIGIN") {
            config.allowed_origins = AllowedOrigins::from_str(&origins)?;
        }

        Ok(config)
    }

    pub fn cors_layer(&self) -> CorsLayer {
        let allow_origin = match &self.allowed_origins {
            AllowedOrigins::Any => AllowOrigin::from(Any),
            AllowedOrigins::List(origins) => AllowOrigin::list(origins.iter().cloned()),
        };

        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    }
}

impl FromStr for AllowedOrigins {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        if s.split(',').any(|origin| origin.trim() == "*") {
            return Ok(AllowedOrigins::Any);
        }

        let origins = s
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).with_context(|| format!("CORS_ORIGIN entry {origin:?} is invalid"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        if origins.is_empty() {
            anyhow::bail!("CORS_ORIGIN is empty");
        }
        Ok(AllowedOrigins::List(origins))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(config(&[]).unwrap(), Config::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = config(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "1"),
            ("CORS_ORIGIN", "http://localhost:3000, https://portal.example"),
        ])
        .unwrap();

        assert_eq!(config.host, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(config.port, 9000);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.database_max_connections, 1);
        assert_eq!(
            config.allowed_origins,
            AllowedOrigins::List(vec![
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("https://portal.example"),
            ])
        );
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config(&[("PORT", "eighty")]).is_err());
        assert!(config(&[("HOST", "localhost")]).is_err());
        assert!(config(&[("DATABASE_MAX_CONNECTIONS", "0")]).is_err());
        assert!(config(&[("CORS_ORIGIN", " , ")]).is_err());
    }

    #[test]
    fn star_means_any_origin() {
        assert_eq!(config(&[("CORS_ORIGIN", "*")]).unwrap().allowed_origins, AllowedOrigins::Any);
    }
}
