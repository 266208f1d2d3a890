//! Chat session controller.
//!
//! Owns at most one live transport at a time and mediates open/send/close
//! against it. The connection backend is injected at `open` time, so the GUI
//! hands in a browser WebSocket, the CLI a tungstenite client, and tests a
//! scripted fake.

use tracing::{error, info, warn};

use crate::status::ConnectionStatus;
use crate::time::now_seconds;
use crate::transcript::Transcript;
use crate::transport::{Transport, TransportError, TransportEvent};
use crate::wire;

/// Everything `open` needs to build the room URL and announce the user.
#[derive(Debug, Clone)]
pub struct OpenParams {
    /// Secure origin maps to the `wss` scheme.
    pub secure: bool,
    pub host: String,
    pub chat_type: String,
    pub room: String,
    pub username: String,
}

/// Result of a send attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Frame handed to the transport; callers clear the input.
    Sent,
    /// No open connection; callers alert and keep the input.
    NotConnected,
    /// Transport rejected the frame; detail lands in the status.
    Failed,
}

/// One chat session: a single optional connection handle, its status, and
/// the transcript it feeds.
#[derive(Default)]
pub struct ChatSession {
    transport: Option<Box<dyn Transport>>,
    status: ConnectionStatus,
    username: String,
    transcript: Transcript,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &ConnectionStatus {
        &self.status
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// A handle exists (connecting or open). Drives the Open affordance.
    pub fn is_active(&self) -> bool {
        self.transport.is_some()
    }

    /// Open a connection to the room. A no-op while a handle already exists;
    /// a closed or failed connection clears the handle first, so presence
    /// means connecting or open. Returns whether a new connection was made.
    pub fn open(
        &mut self,
        params: OpenParams,
        connect: impl FnOnce(&str) -> Result<Box<dyn Transport>, TransportError>,
    ) -> bool {
        if self.transport.is_some() {
            info!("open ignored, a connection is already active");
            return false;
        }

        let url = wire::chat_url(params.secure, &params.host, &params.chat_type, &params.room);
        info!(url = %url, "opening chat connection");

        match connect(&url) {
            Ok(transport) => {
                self.transport = Some(transport);
                self.username = params.username;
                self.status = ConnectionStatus::Connecting;
                true
            }
            Err(e) => {
                error!(error = %e, "failed to open chat connection");
                self.status = ConnectionStatus::Error(e.to_string());
                false
            }
        }
    }

    /// Drain buffered transport events. Called once per UI frame (or pump
    /// tick on the CLI).
    pub fn pump(&mut self) {
        let Some(transport) = self.transport.as_mut() else {
            return;
        };

        let mut events = Vec::new();
        while let Some(event) = transport.poll() {
            events.push(event);
        }

        for event in events {
            match event {
                TransportEvent::Opened => {
                    info!("chat connection established");
                    self.status = ConnectionStatus::Connected;
                    self.transcript.push_system(
                        format!("{} has joined the chat.", self.username),
                        now_seconds(),
                    );
                }
                TransportEvent::Message(text) => match wire::decode(&text) {
                    Ok(frame) => {
                        self.transcript
                            .push(frame.username, frame.message, now_seconds());
                    }
                    Err(e) => {
                        // Malformed frames are dropped; the peer gets no
                        // recovery signal, matching the transport contract.
                        warn!(error = %e, "failed to parse inbound chat frame");
                    }
                },
                TransportEvent::Closed => {
                    warn!("chat connection closed");
                    self.status = ConnectionStatus::Disconnected;
                    self.transport = None;
                }
                TransportEvent::Error(detail) => {
                    error!(error = %detail, "chat connection error");
                    self.status = ConnectionStatus::Error(detail);
                }
            }
        }
    }

    /// Send one chat message attributed to the session user.
    pub fn send(&mut self, message: &str) -> SendOutcome {
        if !self.status.is_connected() {
            return SendOutcome::NotConnected;
        }
        let Some(transport) = self.transport.as_mut() else {
            return SendOutcome::NotConnected;
        };

        let frame = wire::Outbound {
            message,
            username: &self.username,
        };
        let text = match wire::encode(&frame) {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "failed to encode chat frame");
                self.status = ConnectionStatus::Error(e.to_string());
                return SendOutcome::Failed;
            }
        };

        match transport.send_text(&text) {
            Ok(()) => SendOutcome::Sent,
            Err(e) => {
                error!(error = %e, "failed to send chat frame");
                self.status = ConnectionStatus::Error(e.to_string());
                SendOutcome::Failed
            }
        }
    }

    /// Request close and drop the handle immediately, without waiting for
    /// the transport's confirmation. A no-op without a handle.
    pub fn close(&mut self) {
        if let Some(mut transport) = self.transport.take() {
            info!("closing chat connection");
            transport.close();
            self.status = ConnectionStatus::Disconnected;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::fake::FakeTransport;

    fn params() -> OpenParams {
        OpenParams {
            secure: false,
            host: "localhost:8000".into(),
            chat_type: "group".into(),
            room: "lobby".into(),
            username: "alice".into(),
        }
    }

    fn open_session() -> (ChatSession, std::rc::Rc<std::cell::RefCell<crate::transport::fake::FakeState>>)
    {
        let mut session = ChatSession::new();
        let (fake, state) = FakeTransport::new();
        let mut fake = Some(fake);
        assert!(session.open(params(), |_| Ok(Box::new(fake.take().unwrap()))));
        (session, state)
    }

    #[test]
    fn open_builds_room_url_and_connects_once() {
        let mut session = ChatSession::new();
        let mut urls = Vec::new();
        let created = session.open(params(), |url| {
            urls.push(url.to_string());
            let (fake, _) = FakeTransport::new();
            Ok(Box::new(fake))
        });
        assert!(created);
        assert_eq!(urls, vec!["ws://localhost:8000/ws/chat/group/lobby/"]);
        assert!(session.is_active());
        assert_eq!(*session.status(), ConnectionStatus::Connecting);
    }

    #[test]
    fn second_open_is_a_noop() {
        let (mut session, _state) = open_session();
        let mut connector_calls = 0;
        let created = session.open(params(), |_| {
            connector_calls += 1;
            let (fake, _) = FakeTransport::new();
            Ok(Box::new(fake))
        });
        assert!(!created);
        assert_eq!(connector_calls, 0);
        assert!(session.is_active());
    }

    #[test]
    fn failed_connect_sets_error_and_leaves_slot_empty() {
        let mut session = ChatSession::new();
        let created = session.open(params(), |_| {
            Err(TransportError::Connect("refused".into()))
        });
        assert!(!created);
        assert!(!session.is_active());
        assert_eq!(
            *session.status(),
            ConnectionStatus::Error("connect failed: refused".into())
        );
    }

    #[test]
    fn opened_event_announces_the_user() {
        let (mut session, state) = open_session();
        state
            .borrow_mut()
            .events
            .push_back(TransportEvent::Opened);
        session.pump();
        assert_eq!(*session.status(), ConnectionStatus::Connected);
        let lines = session.transcript().lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].system);
        assert_eq!(lines[0].message, "alice has joined the chat.");
    }

    #[test]
    fn inbound_frames_append_attributed_lines() {
        let (mut session, state) = open_session();
        {
            let mut state = state.borrow_mut();
            state.events.push_back(TransportEvent::Opened);
            state.events.push_back(TransportEvent::Message(
                r#"{"username":"bob","message":"hello"}"#.into(),
            ));
        }
        session.pump();
        let lines = session.transcript().lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].username, "bob");
        assert_eq!(lines[1].message, "hello");
        assert!(!lines[1].system);
    }

    #[test]
    fn malformed_frames_are_dropped() {
        let (mut session, state) = open_session();
        {
            let mut state = state.borrow_mut();
            state.events.push_back(TransportEvent::Opened);
            state
                .events
                .push_back(TransportEvent::Message("not json".into()));
        }
        session.pump();
        // Only the join announcement; the bad frame left no trace.
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(*session.status(), ConnectionStatus::Connected);
    }

    #[test]
    fn peer_close_clears_the_slot() {
        let (mut session, state) = open_session();
        {
            let mut state = state.borrow_mut();
            state.events.push_back(TransportEvent::Opened);
            state.events.push_back(TransportEvent::Closed);
        }
        session.pump();
        assert_eq!(*session.status(), ConnectionStatus::Disconnected);
        assert!(!session.is_active());
    }

    #[test]
    fn reopen_after_close_creates_a_new_connection() {
        let (mut session, state) = open_session();
        state.borrow_mut().events.push_back(TransportEvent::Closed);
        session.pump();

        let (fake, _state2) = FakeTransport::new();
        let mut fake = Some(fake);
        assert!(session.open(params(), |_| Ok(Box::new(fake.take().unwrap()))));
        assert!(session.is_active());
    }

    #[test]
    fn transport_error_keeps_the_handle() {
        let (mut session, state) = open_session();
        {
            let mut state = state.borrow_mut();
            state.events.push_back(TransportEvent::Opened);
            state
                .events
                .push_back(TransportEvent::Error("WebSocket failed".into()));
        }
        session.pump();
        assert_eq!(
            *session.status(),
            ConnectionStatus::Error("WebSocket failed".into())
        );
        // Connection is left to close naturally or by user action.
        assert!(session.is_active());
    }

    #[test]
    fn send_requires_an_open_connection() {
        let mut session = ChatSession::new();
        assert_eq!(session.send("hi"), SendOutcome::NotConnected);

        // Connecting but not yet open: still refused.
        let (mut session, state) = open_session();
        assert_eq!(session.send("hi"), SendOutcome::NotConnected);
        assert!(state.borrow().sent.is_empty());
    }

    #[test]
    fn send_serializes_message_and_username() {
        let (mut session, state) = open_session();
        state.borrow_mut().events.push_back(TransportEvent::Opened);
        session.pump();

        assert_eq!(session.send("hello there"), SendOutcome::Sent);
        assert_eq!(
            state.borrow().sent,
            vec![r#"{"message":"hello there","username":"alice"}"#.to_string()]
        );
    }

    #[test]
    fn send_failure_lands_in_status() {
        let (mut session, state) = open_session();
        {
            let mut state = state.borrow_mut();
            state.events.push_back(TransportEvent::Opened);
            state.fail_sends = true;
        }
        session.pump();

        assert_eq!(session.send("hello"), SendOutcome::Failed);
        assert!(matches!(session.status(), ConnectionStatus::Error(_)));
    }

    #[test]
    fn close_requests_close_and_clears_immediately() {
        let (mut session, state) = open_session();
        state.borrow_mut().events.push_back(TransportEvent::Opened);
        session.pump();

        session.close();
        assert!(state.borrow().closed);
        assert!(!session.is_active());
        assert_eq!(*session.status(), ConnectionStatus::Disconnected);
    }

    #[test]
    fn close_without_a_handle_is_a_noop() {
        let mut session = ChatSession::new();
        session.close();
        assert_eq!(*session.status(), ConnectionStatus::Idle);
    }
}
