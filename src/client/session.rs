/// Client authentication state. Any 401 from the server moves it back to
/// `LoggedOut`; there is no proactive expiry check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn { token: String },
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        match self {
            Session::LoggedIn { token } => Some(token.as_str()),
            Session::LoggedOut => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn { .. })
    }
}
