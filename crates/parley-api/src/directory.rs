use parley_types::forms::DirectoryForm;
use parley_types::{DirectoryEntry, DirectoryEntryId};
use tracing::info;

use crate::{ApiError, AppState, Result, is_blank, run_blocking};

pub async fn add(state: &AppState, form: DirectoryForm) -> Result<DirectoryEntryId> {
    if [&form.first_name, &form.last_name, &form.email, &form.phone]
        .iter()
        .any(|field| is_blank(field))
    {
        return Err(ApiError::Validation("All fields are required.".into()));
    }

    let DirectoryForm {
        first_name,
        last_name,
        email,
        phone,
    } = form;
    let id = run_blocking(state, move |db| {
        db.add_directory_entry(&first_name, &last_name, &email, &phone)
    })
    .await?;

    info!("Directory entry {} added", id);
    Ok(id)
}

pub async fn list(state: &AppState) -> Result<Vec<DirectoryEntry>> {
    run_blocking(state, |db| db.list_directory()).await
}
