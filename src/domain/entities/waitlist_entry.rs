use chrono::NaiveDateTime;
use serde::Serialize;

/// Lifecycle label of a waitlist entry.
///
/// The set is open: labels written by admin tooling that this service does not
/// know about are kept verbatim in `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum WaitlistStatus {
    #[default]
    Pending,
    Approved,
    Notified,
    Other(String),
}

impl WaitlistStatus {
    pub fn as_str(&self) -> &str {
        match self {
            WaitlistStatus::Pending => "pending",
            WaitlistStatus::Approved => "approved",
            WaitlistStatus::Notified => "notified",
            WaitlistStatus::Other(label) => label,
        }
    }

    pub fn from_label(s: &str) -> Self {
        match s {
            "pending" => WaitlistStatus::Pending,
            "approved" => WaitlistStatus::Approved,
            "notified" => WaitlistStatus::Notified,
            other => WaitlistStatus::Other(other.to_string()),
        }
    }

    /// The `status` column is nullable; a missing label reads back as pending.
    pub fn from_db(s: Option<&str>) -> Self {
        s.map(Self::from_label).unwrap_or_default()
    }
}

impl From<WaitlistStatus> for String {
    fn from(status: WaitlistStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistEntry {
    pub id: i32,
    pub email: String,
    pub status: WaitlistStatus,
    pub created_at: NaiveDateTime,
}
