use std::fmt;

/// A repository node as returned by the API. Only the name is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
}

/// One entry of the `user.repositories` connection, in server order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryEdge {
    pub node: Repository,
}

/// Why a fetch failed. All variants are handled the same way at the screen
/// boundary: logged and swallowed, leaving display state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a usable response (network, timeout, 5xx).
    Transport(String),
    /// The credential was rejected or lacks the required scopes.
    Auth(String),
    /// The response arrived but is missing an expected field.
    Shape(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "transport error: {msg}"),
            FetchError::Auth(msg) => write!(f, "authentication error: {msg}"),
            FetchError::Shape(msg) => write!(f, "unexpected response shape: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct GraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct GraphqlError {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
}
