use std::fmt::Debug;
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Postgres connection string. May embed credentials, so it is never logged.
    pub database_url: SecretString,
    pub database_max_connections: u32,
    /// Upper bound for each persistence call and for acquiring a pooled connection.
    pub db_timeout: Duration,
    pub run_migrations: bool,
    /// When false, signups are accepted without an MX lookup.
    pub enable_dns_check: bool,
    /// Optional DNS server address for MX lookups (e.g., "127.0.0.1:5353" for local CoreDNS).
    pub dns_server: Option<SocketAddr>,
    pub dns_timeout: Duration,
    /// Allowed CORS origin. Any origin is allowed when unset.
    pub cors_origin: Option<HeaderValue>,
    pub service_name: String,
    /// JSON log file. Console logging only when unset.
    pub log_file: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url: SecretString =
            SecretString::new(get_env::<String>("DATABASE_URL").into());

        // BIND_ADDR wins; otherwise listen on all interfaces at PORT.
        let port: u16 = get_env_default("PORT", 3001);
        let bind_addr: SocketAddr = get_env_default(
            "BIND_ADDR",
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
        );

        let database_max_connections: u32 = get_env_default("DATABASE_MAX_CONNECTIONS", 5);
        let db_timeout_ms: u64 = get_env_default("DB_TIMEOUT_MS", 5_000);
        let run_migrations: bool = get_env_default("RUN_MIGRATIONS", true);
        let enable_dns_check: bool = get_env_default("ENABLE_DNS_CHECK", true);
        let dns_server: Option<SocketAddr> =
            parse_optional("DNS_SERVER", std::env::var("DNS_SERVER").ok());
        let dns_timeout_ms: u64 = get_env_default("DNS_TIMEOUT_MS", 5_000);
        let cors_origin: Option<HeaderValue> =
            parse_optional("CORS_ORIGIN", std::env::var("CORS_ORIGIN").ok());
        let service_name: String =
            get_env_default("SERVICE_NAME", String::from("Waitlist API"));
        let log_file: Option<String> = std::env::var("LOG_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Self {
            bind_addr,
            database_url,
            database_max_connections,
            db_timeout: Duration::from_millis(db_timeout_ms),
            run_migrations,
            enable_dns_check,
            dns_server,
            dns_timeout: Duration::from_millis(dns_timeout_ms),
            cors_origin,
            service_name,
            log_file,
        }
    }
}

/// Unset or blank means `None`. A value that is set but does not parse stops
/// startup instead of falling back to the default.
fn parse_optional<T>(key: &str, raw: Option<String>) -> Option<T>
where
    T: FromStr,
    T::Err: Debug,
{
    let raw = raw.filter(|s| !s.trim().is_empty())?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => panic!("{key} must be valid when set (got {raw:?}): {e:?}"),
    }
}
