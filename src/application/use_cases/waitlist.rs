use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{instrument, warn};

use crate::app_error::{AppError, AppResult};
use crate::application::validators::{email_domain, is_valid_email};
use crate::domain::entities::waitlist_entry::WaitlistEntry;

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>>;
    /// Inserts a pending entry. Fails with `AppError::AlreadyOnWaitlist` when
    /// the store's unique constraint on `email` rejects the row.
    async fn insert(&self, email: &str) -> AppResult<WaitlistEntry>;
}

#[async_trait]
pub trait MxResolver: Send + Sync {
    /// Number of MX records published for `domain`. Any lookup failure is an error.
    async fn count_mx_records(&self, domain: &str) -> AppResult<usize>;
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    mx_resolver: Option<Arc<dyn MxResolver>>,
    dns_timeout: Duration,
    db_timeout: Duration,
}

impl WaitlistUseCases {
    /// Passing no resolver disables the MX check.
    pub fn new(
        repo: Arc<dyn WaitlistRepo>,
        mx_resolver: Option<Arc<dyn MxResolver>>,
        dns_timeout: Duration,
        db_timeout: Duration,
    ) -> Self {
        Self {
            repo,
            mx_resolver,
            dns_timeout,
            db_timeout,
        }
    }

    pub fn dns_check_enabled(&self) -> bool {
        self.mx_resolver.is_some()
    }

    #[instrument(skip(self))]
    pub async fn join(&self, email: Option<&str>) -> AppResult<WaitlistEntry> {
        let email = match email {
            Some(email) if !email.is_empty() => email,
            _ => return Err(AppError::EmailRequired),
        };

        if !is_valid_email(email) {
            return Err(AppError::InvalidEmailFormat);
        }

        if let Some(resolver) = &self.mx_resolver {
            let domain = email_domain(email).ok_or(AppError::InvalidEmailFormat)?;
            self.check_domain(resolver.as_ref(), domain).await?;
        }

        let existing = self
            .bounded("waitlist lookup", self.repo.find_by_email(email))
            .await?;
        if existing.is_some() {
            return Err(AppError::AlreadyOnWaitlist);
        }

        // A concurrent request may insert between the lookup and here; the
        // unique constraint turns that into AlreadyOnWaitlist.
        self.bounded("waitlist insert", self.repo.insert(email))
            .await
    }

    async fn check_domain(&self, resolver: &dyn MxResolver, domain: &str) -> AppResult<()> {
        let lookup = tokio::time::timeout(self.dns_timeout, resolver.count_mx_records(domain));
        match lookup.await {
            Ok(Ok(0)) => Err(AppError::DomainCannotReceiveMail),
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => {
                warn!(domain = %domain, error = %e, "DNS check failed");
                Err(AppError::DomainUnreachable)
            }
            Err(_) => {
                warn!(domain = %domain, timeout = ?self.dns_timeout, "DNS check timed out");
                Err(AppError::DomainUnreachable)
            }
        }
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        fut: impl Future<Output = AppResult<T>>,
    ) -> AppResult<T> {
        tokio::time::timeout(self.db_timeout, fut)
            .await
            .map_err(|_| AppError::Timeout(operation))?
    }
}
