use parley_types::{
    Account, AccountId, Comment, CommentId, CommentOrder, DirectoryEntry, DirectoryEntryId,
    Message, MessageId,
};
use rusqlite::{OptionalExtension, Row, params};
use tracing::{debug, info};

use crate::models::{AccountRow, CommentRow, DirectoryRow, MessageRow};
use crate::{Database, Result, StoreError};

impl Database {
    // -- Accounts --

    /// Fails with `DuplicateKey` when the email is already registered; the
    /// table is left unchanged in that case.
    pub fn create_account(&self, name: &str, email: &str, password: &str) -> Result<AccountId> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO auth_users (name, email, password) VALUES (?1, ?2, ?3)",
                (name, email, password),
            )?;
            let id = conn.last_insert_rowid();
            info!("Account {} created for {}", id, email);
            Ok(id)
        })
    }

    /// Exact, plaintext match on both fields.
    pub fn find_account_by_credentials(&self, email: &str, password: &str) -> Result<Option<Account>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, name, email, password FROM auth_users WHERE email = ?1 AND password = ?2",
                    (email, password),
                    account_row,
                )
                .optional()?;
            Ok(row.map(Account::from))
        })
    }

    pub fn get_account(&self, id: AccountId) -> Result<Option<Account>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, name, email, password FROM auth_users WHERE id = ?1",
                    [id],
                    account_row,
                )
                .optional()?;
            Ok(row.map(Account::from))
        })
    }

    /// All accounts in insertion order, optionally leaving one out.
    pub fn list_accounts(&self, exclude_id: Option<AccountId>) -> Result<Vec<Account>> {
        self.with_conn(|conn| {
            let rows = match exclude_id {
                Some(id) => {
                    let mut stmt = conn.prepare(
                        "SELECT id, name, email, password FROM auth_users WHERE id != ?1 ORDER BY id ASC",
                    )?;
                    let rows = stmt
                        .query_map([id], account_row)?
                        .collect::<std::result::Result<Vec<_>, _>>()?;
                    rows
                }
                None => {
                    let mut stmt =
                        conn.prepare("SELECT id, name, email, password FROM auth_users ORDER BY id ASC")?;
                    let rows = stmt
                        .query_map([], account_row)?
                        .collect::<std::result::Result<Vec<_>, _>>()?;
                    rows
                }
            };
            debug!("Listed {} accounts (excluding {:?})", rows.len(), exclude_id);
            Ok(rows.into_iter().map(Account::from).collect())
        })
    }

    pub fn count_accounts(&self) -> Result<u64> {
        self.with_conn(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM auth_users", [], |r| r.get(0))?;
            Ok(count as u64)
        })
    }

    // -- Messages --

    pub fn send_message(&self, sender: &str, receiver: &str, body: &str) -> Result<MessageId> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO messages (sender, receiver, message) VALUES (?1, ?2, ?3)",
                (sender, receiver, body),
            )?;
            let id = conn.last_insert_rowid();
            debug!("Message {} stored: {} -> {}", id, sender, receiver);
            Ok(id)
        })
    }

    /// Every message exchanged between the two names, in either direction,
    /// oldest first. No pagination: the whole conversation is returned.
    pub fn list_conversation(&self, user_a: &str, user_b: &str) -> Result<Vec<Message>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, sender, receiver, message, created_at
                 FROM messages
                 WHERE (sender = ?1 AND receiver = ?2)
                    OR (sender = ?2 AND receiver = ?1)
                 ORDER BY created_at ASC, id ASC",
            )?;

            let rows = stmt
                .query_map((user_a, user_b), |row| {
                    Ok(MessageRow {
                        id: row.get(0)?,
                        sender: row.get(1)?,
                        receiver: row.get(2)?,
                        message: row.get(3)?,
                        created_at: row.get(4)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows.into_iter().map(Message::from).collect())
        })
    }

    // -- Comments --

    pub fn add_comment(&self, author: &str, body: &str) -> Result<CommentId> {
        self.with_conn(|conn| {
            conn.execute("INSERT INTO comments (user, comment) VALUES (?1, ?2)", (author, body))?;
            let id = conn.last_insert_rowid();
            debug!("Comment {} posted by {}", id, author);
            Ok(id)
        })
    }

    pub fn get_comment(&self, id: CommentId) -> Result<Option<Comment>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, user, comment, created_at FROM comments WHERE id = ?1",
                    [id],
                    comment_row,
                )
                .optional()?;
            Ok(row.map(Comment::from))
        })
    }

    /// Delete a comment on behalf of `requested_by`. Only the stored author
    /// may delete; anyone else gets `NotOwner` and the row stays.
    pub fn delete_comment(&self, id: CommentId, requested_by: &str) -> Result<()> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            let author: Option<String> = tx
                .query_row("SELECT user FROM comments WHERE id = ?1", [id], |row| row.get(0))
                .optional()?;

            match author {
                None => return Err(StoreError::NotFound),
                Some(author) if author != requested_by => return Err(StoreError::NotOwner),
                Some(_) => {}
            }

            tx.execute("DELETE FROM comments WHERE id = ?1", [id])?;
            tx.commit()?;

            info!("Comment {} deleted by {}", id, requested_by);
            Ok(())
        })
    }

    pub fn list_comments(&self, order: CommentOrder) -> Result<Vec<Comment>> {
        let sql = match order {
            CommentOrder::OldestFirst => {
                "SELECT id, user, comment, created_at FROM comments ORDER BY created_at ASC, id ASC"
            }
            CommentOrder::NewestFirst => {
                "SELECT id, user, comment, created_at FROM comments ORDER BY created_at DESC, id DESC"
            }
        };

        self.with_conn(|conn| {
            let mut stmt = conn.prepare(sql)?;
            let rows = stmt
                .query_map([], comment_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows.into_iter().map(Comment::from).collect())
        })
    }

    // -- Directory --

    pub fn add_directory_entry(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: &str,
    ) -> Result<DirectoryEntryId> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (firstName, lastName, email, phone) VALUES (?1, ?2, ?3, ?4)",
                params![first_name, last_name, email, phone],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn list_directory(&self) -> Result<Vec<DirectoryEntry>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT id, firstName, lastName, email, phone FROM users ORDER BY id ASC")?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(DirectoryRow {
                        id: row.get(0)?,
                        first_name: row.get(1)?,
                        last_name: row.get(2)?,
                        email: row.get(3)?,
                        phone: row.get(4)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows.into_iter().map(DirectoryEntry::from).collect())
        })
    }
}

fn account_row(row: &Row<'_>) -> rusqlite::Result<AccountRow> {
    Ok(AccountRow {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        password: row.get(3)?,
    })
}

fn comment_row(row: &Row<'_>) -> rusqlite::Result<CommentRow> {
    Ok(CommentRow {
        id: row.get(0)?,
        user: row.get(1)?,
        comment: row.get(2)?,
        created_at: row.get(3)?,
    })
}
