use crate::{
    adapters::{dns::HickoryMxResolver, http::app_state::AppState},
    infra::{InfraError, config::AppConfig, postgres_persistence},
    use_cases::waitlist::{MxResolver, WaitlistRepo, WaitlistUseCases},
};
use std::fs::File;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state(config: AppConfig) -> Result<AppState, InfraError> {
    let postgres_arc = Arc::new(postgres_persistence(&config).await?);

    let mx_resolver: Option<Arc<dyn MxResolver>> = if config.enable_dns_check {
        let resolver = match config.dns_server {
            Some(addr) => HickoryMxResolver::with_nameserver(addr),
            None => HickoryMxResolver::new().map_err(InfraError::DnsResolver)?,
        };
        Some(Arc::new(resolver) as Arc<dyn MxResolver>)
    } else {
        None
    };

    info!(
        dns_check = config.enable_dns_check,
        dns_server = ?config.dns_server,
        "Waitlist signup configured"
    );

    let waitlist_use_cases = WaitlistUseCases::new(
        postgres_arc as Arc<dyn WaitlistRepo>,
        mx_resolver,
        config.dns_timeout,
        config.db_timeout,
    );

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

pub fn init_tracing(log_file: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don’t show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs)
    let mut file_error = None;
    let json_layer = log_file.and_then(|path| match File::create(path) {
        Ok(file) => Some(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(true)
                .with_span_list(true),
        ),
        Err(e) => {
            file_error = Some((path.to_string(), e));
            None
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    if let Some((path, e)) = file_error {
        warn!(path = %path, error = %e, "Cannot create log file, logging to console only");
    }
}
