//! Server configuration from the environment

use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 9000;

/// Which origins may call the API from a browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `*`
    Any,
    /// An explicit allow-list
    List(Vec<String>),
    /// Local development servers only
    LocalDev,
}

impl CorsOrigins {
    /// Parse `BOOKSHELF_CORS_ORIGINS`: `*` or a comma-separated list
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(origins) if origins.trim() == "*" => Self::Any,
            Some(origins) => Self::List(
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect(),
            ),
            None => Self::LocalDev,
        }
    }
}

/// Bind address and CORS settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub cors_origins: CorsOrigins,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            cors_origins: CorsOrigins::LocalDev,
        }
    }
}

impl ServerConfig {
    /// Read `BOOKSHELF_HOST`, `BOOKSHELF_PORT` and `BOOKSHELF_CORS_ORIGINS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("BOOKSHELF_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host
            .parse()
            .with_context(|| format!("invalid BOOKSHELF_HOST: {host}"))?;

        let port = match lookup("BOOKSHELF_PORT") {
            Some(port) => port
                .parse::<u16>()
                .with_context(|| format!("invalid BOOKSHELF_PORT: {port}"))?,
            None => DEFAULT_PORT,
        };

        let cors_origins = CorsOrigins::parse(lookup("BOOKSHELF_CORS_ORIGINS").as_deref());

        Ok(Self {
            host,
            port,
            cors_origins,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr(), "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.cors_origins, CorsOrigins::LocalDev);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BOOKSHELF_HOST", "0.0.0.0"),
            ("BOOKSHELF_PORT", "5000"),
            ("BOOKSHELF_CORS_ORIGINS", "https://a.example, https://b.example,"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), "0.0.0.0:5000".parse().unwrap());
        assert_eq!(
            config.cors_origins,
            CorsOrigins::List(vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ])
        );
    }

    #[test]
    fn test_wildcard_origins() {
        assert_eq!(CorsOrigins::parse(Some("*")), CorsOrigins::Any);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        let err = ServerConfig::from_lookup(lookup(&[("BOOKSHELF_PORT", "ninety")])).unwrap_err();
        assert!(err.to_string().contains("BOOKSHELF_PORT"));

        let err = ServerConfig::from_lookup(lookup(&[("BOOKSHELF_HOST", "localhost")])).unwrap_err();
        assert!(err.to_string().contains("BOOKSHELF_HOST"));
    }
}
