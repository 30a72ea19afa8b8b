use parley_types::AccountId;
use parley_types::Session;
use parley_types::forms::{LoginForm, RegisterForm};
use tracing::{info, warn};

use crate::{ApiError, AppState, Result, is_blank, run_blocking};

pub async fn register(state: &AppState, form: RegisterForm) -> Result<AccountId> {
    if [&form.name, &form.email, &form.password, &form.confirm_password]
        .iter()
        .any(|field| is_blank(field))
    {
        return Err(ApiError::Validation("All fields are required.".into()));
    }
    if form.password != form.confirm_password {
        return Err(ApiError::Validation("Passwords do not match.".into()));
    }

    let RegisterForm {
        name,
        email,
        password,
        ..
    } = form;

    let id = run_blocking(state, move |db| db.create_account(&name, &email, &password))
        .await
        .inspect_err(|e| {
            if matches!(e, ApiError::DuplicateKey) {
                warn!("Registration refused: email already registered");
            }
        })?;

    Ok(id)
}

/// Plaintext credential check. On success the caller owns the returned
/// session and passes it to later operations.
pub async fn login(state: &AppState, form: LoginForm) -> Result<Session> {
    if is_blank(&form.email) || is_blank(&form.password) {
        return Err(ApiError::Validation("Enter email & password".into()));
    }

    let LoginForm { email, password } = form;
    let account = run_blocking(state, move |db| db.find_account_by_credentials(&email, &password))
        .await?
        .ok_or(ApiError::InvalidCredentials)
        .inspect_err(|_| warn!("Login failed"))?;

    info!("Account {} logged in", account.id);
    Ok(Session::new(account))
}
