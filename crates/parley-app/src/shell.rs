use std::fmt;

use parley_api::{ApiError, AppState, auth, comments, contacts, directory, messages};
use parley_types::forms::{DirectoryForm, LoginForm, RegisterForm};
use parley_types::{Account, Comment, CommentOrder, Message, Session};
use tracing::debug;

use crate::commands::{Command, HELP};

/// Which screen the shell is on. Mirrors the navigator of the mobile app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Register,
    Login,
    Users,
    Messenger { with: Account },
    Comments,
    Directory,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register => f.write_str("register"),
            Self::Login => f.write_str("login"),
            Self::Users => f.write_str("users"),
            Self::Messenger { with } => write!(f, "chat:{}", with.name),
            Self::Comments => f.write_str("comments"),
            Self::Directory => f.write_str("directory"),
        }
    }
}

pub struct Reply {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Reply {
    fn output(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }
}

/// Navigation state plus the current session. The session lives here, in the
/// caller, and is handed to each service call explicitly.
pub struct Shell {
    state: AppState,
    session: Option<Session>,
    screen: Screen,
    comment_order: CommentOrder,
}

impl Shell {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            session: None,
            screen: Screen::Register,
            comment_order: CommentOrder::default(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn prompt(&self) -> String {
        match &self.session {
            Some(session) => format!("{}@{}> ", session.name(), self.screen),
            None => format!("{}> ", self.screen),
        }
    }

    /// Run one command. Failures become a printed message, never an exit.
    pub async fn execute(&mut self, cmd: Command) -> Reply {
        debug!("Command received on screen {}", self.screen);
        match cmd {
            Command::Quit => Reply {
                lines: vec!["Bye.".into()],
                quit: true,
            },
            cmd => match self.dispatch(cmd).await {
                Ok(lines) => Reply::output(lines),
                Err(e) => Reply::output(vec![format!("Error: {}", e.user_message())]),
            },
        }
    }

    async fn dispatch(&mut self, cmd: Command) -> Result<Vec<String>, ApiError> {
        match cmd {
            Command::Empty | Command::Quit => Ok(vec![]),
            Command::Help => Ok(HELP.lines().map(String::from).collect()),

            Command::Register {
                email,
                password,
                confirm_password,
                name,
            } => {
                let form = RegisterForm {
                    name,
                    email,
                    password,
                    confirm_password,
                };
                auth::register(&self.state, form).await?;
                self.screen = Screen::Login;
                Ok(vec!["Registration complete! You can now log in.".into()])
            }

            Command::Login { email, password } => {
                let session = auth::login(&self.state, LoginForm { email, password }).await?;
                let mut lines = vec![format!("Welcome back, {}!", session.name())];
                let others = contacts::list_others(&self.state, &session).await?;
                lines.extend(render_accounts(&others));
                self.session = Some(session);
                self.screen = Screen::Users;
                Ok(lines)
            }

            Command::Logout => {
                self.session = None;
                self.screen = Screen::Login;
                Ok(vec!["Logged out.".into()])
            }

            Command::Users => {
                let session = self.require_session()?;
                let others = contacts::list_others(&self.state, session).await?;
                self.screen = Screen::Users;
                Ok(render_accounts(&others))
            }

            Command::Chat(id) => {
                let session = self.require_session()?;
                if id == session.account_id() {
                    return Err(ApiError::Validation("Pick someone other than yourself.".into()));
                }
                let with = contacts::find(&self.state, id).await?;
                let convo = messages::conversation(&self.state, session, &with).await?;
                let mut lines = vec![format!("Chat with {}", with.name)];
                lines.extend(render_messages(&convo));
                self.screen = Screen::Messenger { with };
                Ok(lines)
            }

            Command::Send(body) => {
                let session = self.require_session()?;
                let Screen::Messenger { with } = &self.screen else {
                    return Err(ApiError::Validation("Open a chat first with 'chat <account-id>'.".into()));
                };
                messages::send(&self.state, session, with, &body).await?;
                let convo = messages::conversation(&self.state, session, with).await?;
                Ok(render_messages(&convo))
            }

            Command::Comments(order) => {
                self.require_session()?;
                if let Some(order) = order {
                    self.comment_order = order;
                }
                self.screen = Screen::Comments;
                self.comment_board().await
            }

            Command::Comment(body) => {
                let session = self.require_session()?;
                comments::post(&self.state, session, &body).await?;
                self.screen = Screen::Comments;
                self.comment_board().await
            }

            Command::Delete(id) => {
                let session = self.require_session()?;
                comments::delete(&self.state, session, id).await?;
                let mut lines = vec![format!("Deleted comment #{}.", id)];
                lines.extend(self.comment_board().await?);
                Ok(lines)
            }

            Command::Directory => {
                let entries = directory::list(&self.state).await?;
                self.screen = Screen::Directory;
                if entries.is_empty() {
                    return Ok(vec!["No users found.".into()]);
                }
                Ok(entries
                    .iter()
                    .map(|e| format!("{} {} <{}> {}", e.first_name, e.last_name, e.email, e.phone))
                    .collect())
            }

            Command::DirectoryAdd {
                first_name,
                last_name,
                email,
                phone,
            } => {
                let form = DirectoryForm {
                    first_name,
                    last_name,
                    email,
                    phone,
                };
                directory::add(&self.state, form).await?;
                self.screen = Screen::Directory;
                Ok(vec!["User added successfully!".into()])
            }
        }
    }

    fn require_session(&self) -> Result<&Session, ApiError> {
        self.session
            .as_ref()
            .ok_or_else(|| ApiError::Validation("Please log in first.".into()))
    }

    async fn comment_board(&self) -> Result<Vec<String>, ApiError> {
        let board = comments::list(&self.state, self.comment_order).await?;
        if board.is_empty() {
            return Ok(vec!["No comments yet.".into()]);
        }
        Ok(board
            .iter()
            .map(|c| render_comment(c, self.session.as_ref()))
            .collect())
    }
}

fn render_accounts(accounts: &[Account]) -> Vec<String> {
    if accounts.is_empty() {
        return vec!["No users found.".into()];
    }
    accounts
        .iter()
        .map(|a| format!("{:>4}  {} <{}>", a.id, a.name, a.email))
        .collect()
}

fn render_messages(convo: &[Message]) -> Vec<String> {
    convo
        .iter()
        .map(|m| format!("[{}] {}: {}", m.created_at.format("%Y-%m-%d %H:%M"), m.sender, m.body))
        .collect()
}

fn render_comment(comment: &Comment, session: Option<&Session>) -> String {
    // Only the author is offered the delete action
    let own = session.is_some_and(|s| comments::can_delete(s, comment));
    format!(
        "#{} {}: {}{}",
        comment.id,
        comment.author,
        comment.body,
        if own { "  [delete]" } else { "" }
    )
}
