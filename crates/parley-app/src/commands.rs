use parley_types::{AccountId, CommentId, CommentOrder};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  register <email> <password> <confirm> <name...>
  login <email> <password>
  logout
  users                       list everyone you can chat with
  chat <account-id>           open a conversation
  send <message...>           send to the open conversation
  comments [newest|oldest]    show the comment board
  comment <text...>           post a comment
  delete <comment-id>         delete one of your comments
  directory                   show the address book
  directory-add <first> <last> <email> <phone>
  help
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register {
        email: String,
        password: String,
        confirm_password: String,
        name: String,
    },
    Login {
        email: String,
        password: String,
    },
    Logout,
    Users,
    Chat(AccountId),
    Send(String),
    Comments(Option<CommentOrder>),
    Comment(String),
    Delete(CommentId),
    Directory,
    DirectoryAdd {
        first_name: String,
        last_name: String,
        email: String,
        phone: String,
    },
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command '{0}'. Type 'help' for a list.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        let (head, rest) = line
            .split_once(char::is_whitespace)
            .map(|(h, r)| (h, r.trim_start()))
            .unwrap_or((line, ""));
        let args: Vec<&str> = rest.split_whitespace().collect();

        match head.to_ascii_lowercase().as_str() {
            "" => Ok(Self::Empty),
            "register" => {
                if args.len() < 4 {
                    return Err(ParseError::Usage("register <email> <password> <confirm> <name...>"));
                }
                Ok(Self::Register {
                    email: args[0].into(),
                    password: args[1].into(),
                    confirm_password: args[2].into(),
                    name: args[3..].join(" "),
                })
            }
            "login" => match args.as_slice() {
                [email, password] => Ok(Self::Login {
                    email: (*email).into(),
                    password: (*password).into(),
                }),
                _ => Err(ParseError::Usage("login <email> <password>")),
            },
            "logout" => Ok(Self::Logout),
            "users" => Ok(Self::Users),
            "chat" => match args.as_slice() {
                [id] => id
                    .parse()
                    .map(Self::Chat)
                    .map_err(|_| ParseError::Usage("chat <account-id>")),
                _ => Err(ParseError::Usage("chat <account-id>")),
            },
            // Empty text is passed through; the service rejects it with a prompt
            "send" => Ok(Self::Send(rest.into())),
            "comments" => match args.as_slice() {
                [] => Ok(Self::Comments(None)),
                [order] => order
                    .parse()
                    .map(|o| Self::Comments(Some(o)))
                    .map_err(|_| ParseError::Usage("comments [newest|oldest]")),
                _ => Err(ParseError::Usage("comments [newest|oldest]")),
            },
            "comment" => Ok(Self::Comment(rest.into())),
            "delete" => match args.as_slice() {
                [id] => id
                    .parse()
                    .map(Self::Delete)
                    .map_err(|_| ParseError::Usage("delete <comment-id>")),
                _ => Err(ParseError::Usage("delete <comment-id>")),
            },
            "directory" => Ok(Self::Directory),
            "directory-add" => match args.as_slice() {
                [first, last, email, phone] => Ok(Self::DirectoryAdd {
                    first_name: (*first).into(),
                    last_name: (*last).into(),
                    email: (*email).into(),
                    phone: (*phone).into(),
                }),
                _ => Err(ParseError::Usage("directory-add <first> <last> <email> <phone>")),
            },
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(ParseError::Unknown(other.into())),
        }
    }
}
