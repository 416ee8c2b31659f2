use serde::{Deserialize, Serialize};

/// `{msg}` acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        MessageResponse { msg: msg.into() }
    }
}
