#[derive(Debug)]
pub enum Error {
    Client(campus_client::Error),
    Json(serde_json::Error),
    InvalidArgs(String),
}

impl From<campus_client::Error> for Error {
    fn from(err: campus_client::Error) -> Self {
        Self::Client(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Client(err) => write!(f, "client error: {}", err),
            Error::Json(err) => write!(f, "json error: {}", err),
            Error::InvalidArgs(message) => write!(f, "invalid arguments: {}", message),
        }
    }
}

impl std::error::Error for Error {}
