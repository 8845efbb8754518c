#[derive(Debug)]
pub enum Error {
    Client(campus_client::Error),
}

impl From<campus_client::Error> for Error {
    fn from(err: campus_client::Error) -> Self {
        Self::Client(err)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Client(err) => write!(f, "client error: {}", err),
        }
    }
}

impl std::error::Error for Error {}
