//! Connection status shown in the header.
//!
//! A tagged value drives both the label and the styling; styling never
//! depends on the text of the error detail.

use std::borrow::Cow;

/// Session connection state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// No connection has been opened yet.
    #[default]
    Idle,
    Connecting,
    Connected,
    Disconnected,
    Error(String),
}

impl ConnectionStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }

    /// Status text for the header.
    pub fn label(&self) -> Cow<'static, str> {
        match self {
            ConnectionStatus::Idle => Cow::Borrowed(""),
            ConnectionStatus::Connecting => Cow::Borrowed("CONNECTING"),
            ConnectionStatus::Connected => Cow::Borrowed("CONNECTED"),
            ConnectionStatus::Disconnected => Cow::Borrowed("DISCONNECTED"),
            ConnectionStatus::Error(detail) => Cow::Owned(format!("ERROR: {detail}")),
        }
    }
}
