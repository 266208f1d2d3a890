//! Transport seam between the session controller and a WebSocket backend.
//!
//! Backends buffer their events; the session drains them once per UI frame
//! with [`Transport::poll`]. This keeps every handler off the hot path and
//! lets tests drive the session with a scripted fake.

use thiserror::Error;

/// Asynchronous notifications from a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// Connection established.
    Opened,
    /// One inbound text frame.
    Message(String),
    /// Connection closed, locally or by the peer.
    Closed,
    /// Transport-level failure; detail is backend-specific.
    Error(String),
}

/// Transport failures surfaced to the session.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connect failed: {0}")]
    Connect(String),
    #[error("send failed: {0}")]
    Send(String),
}

/// A full-duplex text connection.
pub trait Transport {
    /// Queue one outbound text frame.
    fn send_text(&mut self, text: &str) -> Result<(), TransportError>;

    /// Request connection close. Idempotent.
    fn close(&mut self);

    /// Take the next buffered event, if any.
    fn poll(&mut self) -> Option<TransportEvent>;
}

#[cfg(test)]
pub mod fake {
    //! Scripted transport for session tests. The returned handle stays with
    //! the test while the transport itself moves into the session.

    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    #[derive(Default)]
    pub struct FakeState {
        pub events: VecDeque<TransportEvent>,
        pub sent: Vec<String>,
        pub closed: bool,
        pub fail_sends: bool,
    }

    pub struct FakeTransport {
        state: Rc<RefCell<FakeState>>,
    }

    impl FakeTransport {
        pub fn new() -> (Self, Rc<RefCell<FakeState>>) {
            let state = Rc::new(RefCell::new(FakeState::default()));
            (
                Self {
                    state: state.clone(),
                },
                state,
            )
        }
    }

    impl Transport for FakeTransport {
        fn send_text(&mut self, text: &str) -> Result<(), TransportError> {
            let mut state = self.state.borrow_mut();
            if state.fail_sends {
                return Err(TransportError::Send("scripted failure".into()));
            }
            state.sent.push(text.to_string());
            Ok(())
        }

        fn close(&mut self) {
            self.state.borrow_mut().closed = true;
        }

        fn poll(&mut self) -> Option<TransportEvent> {
            self.state.borrow_mut().events.pop_front()
        }
    }
}
