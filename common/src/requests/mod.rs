use serde::{Deserialize, Serialize};

/// Body of every non-success API response: `{"message": "..."}`.
///
/// `message` is optional on the way in because the client has to cope with
/// servers that answer errors with some other JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}
