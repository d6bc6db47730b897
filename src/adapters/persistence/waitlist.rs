use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::{
    adapters::persistence::{PostgresPersistence, is_unique_violation},
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::{WaitlistEntry, WaitlistStatus},
    use_cases::waitlist::WaitlistRepo,
};

// Waitlist row as stored in the db.
#[derive(sqlx::FromRow, Debug)]
pub struct WaitlistEntryDb {
    pub id: i32,
    pub email: String,
    pub status: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<WaitlistEntryDb> for WaitlistEntry {
    fn from(row: WaitlistEntryDb) -> Self {
        WaitlistEntry {
            id: row.id,
            email: row.email,
            status: WaitlistStatus::from_db(row.status.as_deref()),
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        let rec = sqlx::query_as::<_, WaitlistEntryDb>(
            "SELECT id, email, status, created_at FROM waitlist WHERE email = $1 LIMIT 1",
        )
        .bind(email)
        .fetch_optional(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(rec.map(WaitlistEntry::from))
    }

    async fn insert(&self, email: &str) -> AppResult<WaitlistEntry> {
        let rec = sqlx::query_as::<_, WaitlistEntryDb>(
            r#"
                INSERT INTO waitlist (email)
                VALUES ($1)
                RETURNING id, email, status, created_at
            "#,
        )
        .bind(email)
        .fetch_one(self.pool())
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::AlreadyOnWaitlist
            } else {
                AppError::from(e)
            }
        })?;
        Ok(rec.into())
    }
}
