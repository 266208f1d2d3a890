//! Chat wire format and endpoint URL construction.
//!
//! Frames are plain JSON text in both directions. The server routes rooms at
//! `/ws/chat/{chat_type}/{room}/` and the trailing slash is required.

use serde::{Deserialize, Serialize};

/// Outbound chat frame: `{"message": ..., "username": ...}`.
#[derive(Debug, Serialize)]
pub struct Outbound<'a> {
    pub message: &'a str,
    pub username: &'a str,
}

/// Inbound chat frame. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Inbound {
    pub username: String,
    pub message: String,
}

/// Build the room endpoint URL from the page/host origin parts.
///
/// A secure origin maps to `wss`, anything else to `ws`.
pub fn chat_url(secure: bool, host: &str, chat_type: &str, room: &str) -> String {
    let scheme = if secure { "wss" } else { "ws" };
    format!("{scheme}://{host}/ws/chat/{chat_type}/{room}/")
}

/// Serialize an outbound frame to JSON text.
pub fn encode(frame: &Outbound<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string(frame)
}

/// Parse an inbound frame from JSON text.
pub fn decode(text: &str) -> Result<Inbound, serde_json::Error> {
    serde_json::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_insecure() {
        assert_eq!(
            chat_url(false, "example.com:8000", "group", "lobby"),
            "ws://example.com:8000/ws/chat/group/lobby/"
        );
    }

    #[test]
    fn url_secure() {
        assert_eq!(
            chat_url(true, "chat.example.com", "private", "42"),
            "wss://chat.example.com/ws/chat/private/42/"
        );
    }

    #[test]
    fn encode_outbound() {
        let text = encode(&Outbound {
            message: "hi there",
            username: "alice",
        })
        .unwrap();
        assert_eq!(text, r#"{"message":"hi there","username":"alice"}"#);
    }

    #[test]
    fn decode_inbound() {
        let frame = decode(r#"{"username":"bob","message":"hello"}"#).unwrap();
        assert_eq!(frame.username, "bob");
        assert_eq!(frame.message, "hello");
    }

    #[test]
    fn decode_ignores_extra_fields() {
        let frame = decode(r#"{"username":"bob","message":"hello","seq":7}"#).unwrap();
        assert_eq!(frame.message, "hello");
    }

    #[test]
    fn decode_malformed_is_err() {
        assert!(decode("not json").is_err());
        assert!(decode(r#"{"username":"bob"}"#).is_err());
    }
}
