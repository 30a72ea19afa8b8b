use parley_types::{Account, Message, MessageId, Session};

use crate::{ApiError, AppState, Result, is_blank, run_blocking};

/// Send `body` from the session's account to `to`. The body is stored trimmed.
pub async fn send(state: &AppState, session: &Session, to: &Account, body: &str) -> Result<MessageId> {
    if is_blank(body) {
        return Err(ApiError::Validation("Message cannot be empty.".into()));
    }

    let sender = session.name().to_string();
    let receiver = to.name.clone();
    let body = body.trim().to_string();
    run_blocking(state, move |db| db.send_message(&sender, &receiver, &body)).await
}

/// The full conversation between the session's account and `with`, oldest first.
pub async fn conversation(state: &AppState, session: &Session, with: &Account) -> Result<Vec<Message>> {
    let me = session.name().to_string();
    let them = with.name.clone();
    run_blocking(state, move |db| db.list_conversation(&me, &them)).await
}
