//! Database row types. These map directly to SQLite rows and are converted
//! into `parley_types` models before leaving the crate.

use chrono::{DateTime, NaiveDateTime, Utc};
use parley_types::{Account, Comment, DirectoryEntry, Message};
use tracing::warn;

pub struct AccountRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct MessageRow {
    pub id: i64,
    pub sender: String,
    pub receiver: String,
    pub message: String,
    pub created_at: Option<String>,
}

pub struct CommentRow {
    pub id: i64,
    pub user: String,
    pub comment: String,
    pub created_at: Option<String>,
}

pub struct DirectoryRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: row.id,
            name: row.name,
            email: row.email,
            password: row.password,
        }
    }
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        let created_at = parse_timestamp(row.created_at.as_deref(), "messages", row.id);
        Message {
            id: row.id,
            sender: row.sender,
            receiver: row.receiver,
            body: row.message,
            created_at,
        }
    }
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        let created_at = parse_timestamp(row.created_at.as_deref(), "comments", row.id);
        Comment {
            id: row.id,
            author: row.user,
            body: row.comment,
            created_at,
        }
    }
}

impl From<DirectoryRow> for DirectoryEntry {
    fn from(row: DirectoryRow) -> Self {
        DirectoryEntry {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
        }
    }
}

/// SQLite's CURRENT_TIMESTAMP is "YYYY-MM-DD HH:MM:SS" in UTC with no zone
/// suffix. Unparseable or missing values fall back to the Unix epoch.
pub(crate) fn parse_timestamp(raw: Option<&str>, table: &str, id: i64) -> DateTime<Utc> {
    let Some(raw) = raw else {
        warn!("Missing created_at on {} row {}", table, id);
        return DateTime::default();
    };

    raw.parse::<DateTime<Utc>>()
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc()))
        .unwrap_or_else(|e| {
            warn!("Corrupt created_at '{}' on {} row {}: {}", raw, table, id, e);
            DateTime::default()
        })
}
