use parley_types::{Account, AccountId, Session};

use crate::{ApiError, AppState, Result, run_blocking};

/// Everyone except the logged-in account; the contact list.
pub async fn list_others(state: &AppState, session: &Session) -> Result<Vec<Account>> {
    let me = session.account_id();
    run_blocking(state, move |db| db.list_accounts(Some(me))).await
}

pub async fn list_all(state: &AppState) -> Result<Vec<Account>> {
    run_blocking(state, |db| db.list_accounts(None)).await
}

pub async fn find(state: &AppState, id: AccountId) -> Result<Account> {
    run_blocking(state, move |db| db.get_account(id))
        .await?
        .ok_or(ApiError::NotFound)
}
