use std::net::SocketAddr;

use async_trait::async_trait;
use hickory_resolver::config::{NameServerConfig, ResolverConfig};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::xfer::Protocol;
use hickory_resolver::{ResolveError, TokioResolver};
use tracing::debug;

use crate::app_error::{AppError, AppResult};
use crate::use_cases::waitlist::MxResolver;

pub struct HickoryMxResolver {
    resolver: TokioResolver,
}

impl HickoryMxResolver {
    /// Create resolver using system DNS configuration.
    pub fn new() -> Result<Self, ResolveError> {
        let resolver = TokioResolver::builder_tokio()?.build();
        Ok(Self { resolver })
    }

    /// Create resolver pointing to a specific DNS server (for local dev with CoreDNS).
    pub fn with_nameserver(addr: SocketAddr) -> Self {
        let mut config = ResolverConfig::new();
        config.add_name_server(NameServerConfig::new(addr, Protocol::Udp));

        let resolver =
            TokioResolver::builder_with_config(config, TokioConnectionProvider::default()).build();
        Self { resolver }
    }
}

#[async_trait]
impl MxResolver for HickoryMxResolver {
    async fn count_mx_records(&self, domain: &str) -> AppResult<usize> {
        // Append trailing dot to make it an FQDN and prevent search domain appending
        let fqdn = if domain.ends_with('.') {
            domain.to_string()
        } else {
            format!("{}.", domain)
        };

        let lookup = self
            .resolver
            .mx_lookup(fqdn.as_str())
            .await
            .map_err(|e| AppError::Internal(format!("MX lookup for {domain} failed: {e}")))?;

        let count = lookup.iter().count();
        debug!(domain = %domain, mx_records = count, "MX lookup complete");
        Ok(count)
    }
}
