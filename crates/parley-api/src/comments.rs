use parley_types::{Comment, CommentId, CommentOrder, Session};
use tracing::warn;

use crate::{ApiError, AppState, Result, is_blank, run_blocking};

pub async fn post(state: &AppState, session: &Session, body: &str) -> Result<CommentId> {
    if is_blank(body) {
        return Err(ApiError::Validation("Comment cannot be empty.".into()));
    }

    let author = session.name().to_string();
    let body = body.to_string();
    run_blocking(state, move |db| db.add_comment(&author, &body)).await
}

pub async fn list(state: &AppState, order: CommentOrder) -> Result<Vec<Comment>> {
    run_blocking(state, move |db| db.list_comments(order)).await
}

/// Delete a comment as the session's account. The store refuses with
/// `NotOwner` when someone else wrote it.
pub async fn delete(state: &AppState, session: &Session, id: CommentId) -> Result<()> {
    let requested_by = session.name().to_string();
    run_blocking(state, move |db| db.delete_comment(id, &requested_by))
        .await
        .inspect_err(|e| {
            if matches!(e, ApiError::NotOwner) {
                warn!("Refused delete of comment {}: not the author", id);
            }
        })
}

/// Whether the delete action should be offered for this comment at all.
pub fn can_delete(session: &Session, comment: &Comment) -> bool {
    comment.author == session.name()
}
