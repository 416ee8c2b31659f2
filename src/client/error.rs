use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq)]
pub enum ClientError {
    /// The server rejected the token; the session has been dropped.
    #[display("Unauthorized: {_0}")]
    Unauthorized(String),

    /// A protected call was attempted without a session.
    #[display("Not logged in")]
    NotLoggedIn,

    #[display("Request failed ({status}): {msg}")]
    Api { status: u16, msg: String },

    #[display("Transport error: {_0}")]
    Transport(String),

    #[display("Invalid URL: {_0}")]
    InvalidUrl(String),
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}
