use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type AccountId = i64;
pub type MessageId = i64;
pub type CommentId = i64;
pub type DirectoryEntryId = i64;

/// A registered user. The password is the plaintext the user typed at
/// registration; it is never serialized out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

/// One direction of a two-party conversation. Both parties are referenced by
/// account name, not id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender: String,
    pub receiver: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Address-book entry. Unrelated to `Account`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub id: DirectoryEntryId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentOrder {
    NewestFirst,
    #[default]
    OldestFirst,
}

impl FromStr for CommentOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "newest" | "newest_first" | "desc" => Ok(Self::NewestFirst),
            "oldest" | "oldest_first" | "asc" => Ok(Self::OldestFirst),
            other => Err(format!("unknown comment order '{}'", other)),
        }
    }
}

impl fmt::Display for CommentOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewestFirst => f.write_str("newest_first"),
            Self::OldestFirst => f.write_str("oldest_first"),
        }
    }
}

/// The account currently logged in. Held by the caller and passed into every
/// operation that acts on behalf of a user; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub account: Account,
}

impl Session {
    pub fn new(account: Account) -> Self {
        Self { account }
    }

    pub fn account_id(&self) -> AccountId {
        self.account.id
    }

    pub fn name(&self) -> &str {
        &self.account.name
    }
}
