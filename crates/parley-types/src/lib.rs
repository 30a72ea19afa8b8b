pub mod forms;
pub mod models;

pub use models::{Account, AccountId, Comment, CommentId, CommentOrder, DirectoryEntry, DirectoryEntryId, Message, MessageId, Session};
