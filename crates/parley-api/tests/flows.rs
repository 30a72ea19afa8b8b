/// Screen flows against an in-memory store: registration and login,
/// contacts, chat, comments, and the address book.

use parley_api::{ApiError, AppState, app_state, auth, comments, contacts, directory, messages};
use parley_db::Database;
use parley_types::forms::{DirectoryForm, LoginForm, RegisterForm};
use parley_types::{CommentOrder, Session};

fn state() -> AppState {
    app_state(Database::open_in_memory().unwrap())
}

fn register_form(name: &str, email: &str, password: &str) -> RegisterForm {
    RegisterForm {
        name: name.into(),
        email: email.into(),
        password: password.into(),
        confirm_password: password.into(),
    }
}

async fn register_and_login(state: &AppState, name: &str, email: &str, password: &str) -> Session {
    auth::register(state, register_form(name, email, password)).await.unwrap();
    auth::login(
        state,
        LoginForm {
            email: email.into(),
            password: password.into(),
        },
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn register_then_login_end_to_end() {
    let state = state();
    let id = auth::register(&state, register_form("Ara", "ara@x.com", "pw1")).await.unwrap();

    let session = auth::login(
        &state,
        LoginForm {
            email: "ara@x.com".into(),
            password: "pw1".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(session.account_id(), id);
    assert_eq!(session.name(), "Ara");
    assert_eq!(session.account.email, "ara@x.com");

    let err = auth::login(
        &state,
        LoginForm {
            email: "ara@x.com".into(),
            password: "wrong".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidCredentials), "got {:?}", err);
}

#[tokio::test]
async fn unknown_email_and_wrong_password_look_the_same() {
    let state = state();
    auth::register(&state, register_form("Ara", "ara@x.com", "pw1")).await.unwrap();

    let wrong_password = auth::login(
        &state,
        LoginForm {
            email: "ara@x.com".into(),
            password: "nope".into(),
        },
    )
    .await
    .unwrap_err();
    let unknown_email = auth::login(
        &state,
        LoginForm {
            email: "who@x.com".into(),
            password: "pw1".into(),
        },
    )
    .await
    .unwrap_err();

    assert_eq!(wrong_password.user_message(), unknown_email.user_message());
}

#[tokio::test]
async fn duplicate_registration_reports_duplicate_key() {
    let state = state();
    auth::register(&state, register_form("Ara", "ara@x.com", "pw1")).await.unwrap();

    let err = auth::register(&state, register_form("Ara Two", "ara@x.com", "pw2"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::DuplicateKey));
    assert_eq!(err.user_message(), "Email already registered.");
    assert_eq!(contacts::list_all(&state).await.unwrap().len(), 1);
}

#[tokio::test]
async fn registration_validates_before_touching_the_store() {
    let state = state();

    let err = auth::register(&state, register_form("Ara", "  ", "pw1")).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    let mut mismatched = register_form("Ara", "ara@x.com", "pw1");
    mismatched.confirm_password = "pw2".into();
    let err = auth::register(&state, mismatched).await.unwrap_err();
    assert_eq!(err.user_message(), "Passwords do not match.");

    assert!(contacts::list_all(&state).await.unwrap().is_empty());
}

#[tokio::test]
async fn login_requires_both_fields() {
    let state = state();
    let err = auth::login(
        &state,
        LoginForm {
            email: "ara@x.com".into(),
            password: String::new(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn contact_list_leaves_out_the_session_account() {
    let state = state();
    let ara = register_and_login(&state, "Ara", "ara@x.com", "pw1").await;
    register_and_login(&state, "Bo", "bo@x.com", "pw2").await;
    register_and_login(&state, "Cy", "cy@x.com", "pw3").await;

    let names: Vec<String> = contacts::list_others(&state, &ara)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, vec!["Bo", "Cy"]);
}

#[tokio::test]
async fn finding_unknown_contact_is_not_found() {
    let state = state();
    assert!(matches!(contacts::find(&state, 404).await, Err(ApiError::NotFound)));
}

#[tokio::test]
async fn chat_round_trip_between_two_sessions() {
    let state = state();
    let ara = register_and_login(&state, "Ara", "ara@x.com", "pw1").await;
    let bo = register_and_login(&state, "Bo", "bo@x.com", "pw2").await;

    messages::send(&state, &ara, &bo.account, "  hi  ").await.unwrap();
    messages::send(&state, &bo, &ara.account, "hello").await.unwrap();

    let from_ara = messages::conversation(&state, &ara, &bo.account).await.unwrap();
    let from_bo = messages::conversation(&state, &bo, &ara.account).await.unwrap();
    assert_eq!(from_ara, from_bo);
    assert_eq!(from_ara.len(), 2);
    assert_eq!(from_ara[0].body, "hi");
    assert_eq!(from_ara[0].sender, "Ara");
    assert_eq!(from_ara[1].sender, "Bo");
}

#[tokio::test]
async fn blank_message_is_rejected() {
    let state = state();
    let ara = register_and_login(&state, "Ara", "ara@x.com", "pw1").await;
    let bo = register_and_login(&state, "Bo", "bo@x.com", "pw2").await;

    let err = messages::send(&state, &ara, &bo.account, " \n\t ").await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
    assert!(messages::conversation(&state, &ara, &bo.account).await.unwrap().is_empty());
}

#[tokio::test]
async fn only_the_author_may_delete_a_comment() {
    let state = state();
    let ara = register_and_login(&state, "Ara", "ara@x.com", "pw1").await;
    let bo = register_and_login(&state, "Bo", "bo@x.com", "pw2").await;

    let id = comments::post(&state, &ara, "first!").await.unwrap();
    let listed = comments::list(&state, CommentOrder::OldestFirst).await.unwrap();
    assert!(comments::can_delete(&ara, &listed[0]));
    assert!(!comments::can_delete(&bo, &listed[0]));

    let err = comments::delete(&state, &bo, id).await.unwrap_err();
    assert!(matches!(err, ApiError::NotOwner));
    assert_eq!(comments::list(&state, CommentOrder::OldestFirst).await.unwrap().len(), 1);

    comments::delete(&state, &ara, id).await.unwrap();
    assert!(comments::list(&state, CommentOrder::OldestFirst).await.unwrap().is_empty());

    let err = comments::delete(&state, &ara, id).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}

#[tokio::test]
async fn comment_board_orders_both_ways() {
    let state = state();
    let ara = register_and_login(&state, "Ara", "ara@x.com", "pw1").await;

    for body in ["one", "two", "three"] {
        comments::post(&state, &ara, body).await.unwrap();
    }
    assert!(matches!(
        comments::post(&state, &ara, "   ").await,
        Err(ApiError::Validation(_))
    ));

    let oldest: Vec<String> = comments::list(&state, CommentOrder::OldestFirst)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.body)
        .collect();
    assert_eq!(oldest, vec!["one", "two", "three"]);

    let newest: Vec<String> = comments::list(&state, CommentOrder::NewestFirst)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.body)
        .collect();
    assert_eq!(newest, vec!["three", "two", "one"]);
}

#[tokio::test]
async fn directory_requires_every_field() {
    let state = state();
    let err = directory::add(
        &state,
        DirectoryForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@x.com".into(),
            phone: "".into(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.user_message(), "All fields are required.");

    directory::add(
        &state,
        DirectoryForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@x.com".into(),
            phone: "555-0100".into(),
        },
    )
    .await
    .unwrap();

    let entries = directory::list(&state).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].last_name, "Lovelace");
}
