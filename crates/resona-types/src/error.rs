/// Protocol-independent authentication error.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    InvalidInput(String),
    Unauthorized(String),
    SignatureInvalid,
    NonceStale,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Unauthorized(msg) => write!(f, "unauthorized: {msg}"),
            Self::SignatureInvalid => write!(f, "invalid ed25519 signature"),
            Self::NonceStale => write!(f, "nonce does not follow the recorded value"),
        }
    }
}

impl std::error::Error for AuthError {}
