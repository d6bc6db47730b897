//! In-memory mock implementations for the waitlist repository and MX resolver traits.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::{MxResolver, WaitlistRepo},
    domain::entities::waitlist_entry::{WaitlistEntry, WaitlistStatus},
};

/// In-memory implementation of WaitlistRepo for testing.
///
/// `insert` enforces the same unique-email rule as the Postgres table.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistEntry>>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial entries for testing.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    /// Get all entries (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn count_by_email(&self, email: &str) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.email == email)
            .count()
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.email == email)
            .cloned())
    }

    async fn insert(&self, email: &str) -> AppResult<WaitlistEntry> {
        let mut entries = self.entries.lock().unwrap();

        if entries.iter().any(|e| e.email == email) {
            return Err(AppError::AlreadyOnWaitlist);
        }

        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let entry = WaitlistEntry {
            id: next_id,
            email: email.to_string(),
            status: WaitlistStatus::Pending,
            created_at: chrono::Utc::now().naive_utc(),
        };

        entries.push(entry.clone());
        Ok(entry)
    }
}

/// Repo whose lookups always miss, so every request reaches `insert`.
/// Models two requests that both pass the existence check before either inserts.
#[derive(Default)]
pub struct StaleReadWaitlistRepo {
    inner: InMemoryWaitlistRepo,
}

impl StaleReadWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inner(&self) -> &InMemoryWaitlistRepo {
        &self.inner
    }
}

#[async_trait]
impl WaitlistRepo for StaleReadWaitlistRepo {
    async fn find_by_email(&self, _email: &str) -> AppResult<Option<WaitlistEntry>> {
        tokio::task::yield_now().await;
        Ok(None)
    }

    async fn insert(&self, email: &str) -> AppResult<WaitlistEntry> {
        self.inner.insert(email).await
    }
}

/// Repo that fails every call as if the database were down.
pub struct FailingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn find_by_email(&self, _email: &str) -> AppResult<Option<WaitlistEntry>> {
        Err(AppError::Database("connection refused".into()))
    }

    async fn insert(&self, _email: &str) -> AppResult<WaitlistEntry> {
        Err(AppError::Database("connection refused".into()))
    }
}

/// Repo that stalls every call for `delay`.
pub struct SlowWaitlistRepo {
    delay: Duration,
}

impl SlowWaitlistRepo {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl WaitlistRepo for SlowWaitlistRepo {
    async fn find_by_email(&self, _email: &str) -> AppResult<Option<WaitlistEntry>> {
        tokio::time::sleep(self.delay).await;
        Ok(None)
    }

    async fn insert(&self, _email: &str) -> AppResult<WaitlistEntry> {
        tokio::time::sleep(self.delay).await;
        Err(AppError::Internal("slow repo never inserts".into()))
    }
}

/// Stub resolver answering from a fixed table. Unknown domains fail the lookup.
#[derive(Default)]
pub struct StubMxResolver {
    records: HashMap<String, usize>,
    lookups: AtomicUsize,
}

impl StubMxResolver {
    pub fn with_records(domain: &str, count: usize) -> Self {
        Self::default().and_records(domain, count)
    }

    pub fn and_records(mut self, domain: &str, count: usize) -> Self {
        self.records.insert(domain.to_string(), count);
        self
    }

    /// Number of lookups performed (for test assertions).
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MxResolver for StubMxResolver {
    async fn count_mx_records(&self, domain: &str) -> AppResult<usize> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.records
            .get(domain)
            .copied()
            .ok_or_else(|| AppError::Internal(format!("no such domain: {domain}")))
    }
}

/// Resolver that stalls every lookup for `delay`.
pub struct SlowMxResolver {
    delay: Duration,
}

impl SlowMxResolver {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl MxResolver for SlowMxResolver {
    async fn count_mx_records(&self, _domain: &str) -> AppResult<usize> {
        tokio::time::sleep(self.delay).await;
        Ok(1)
    }
}
