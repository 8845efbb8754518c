use crate::command::ParseError;

#[derive(Debug)]
pub enum Error {
    Config(String),
    Client(campus_client::Error),
    Board(board::Error),
    Io(std::io::Error),
}

impl Error {
    pub fn config(name: &str, err: ParseError) -> Error {
        Error::Config(format!("{name}: {err}"))
    }
}

impl From<campus_client::Error> for Error {
    fn from(err: campus_client::Error) -> Self {
        Self::Client(err)
    }
}

impl From<board::Error> for Error {
    fn from(err: board::Error) -> Self {
        Self::Board(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Config(message) => write!(f, "config error: {}", message),
            Error::Client(err) => write!(f, "client error: {}", err),
            Error::Board(err) => write!(f, "board error: {}", err),
            Error::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl std::error::Error for Error {}
