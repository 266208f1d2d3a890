//! Browser WebSocket transport.
//!
//! Event callbacks push into a shared queue; the session drains it once per
//! frame via [`Transport::poll`].

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tracing::{error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, ErrorEvent, MessageEvent, WebSocket};

use crate::transport::{Transport, TransportError, TransportEvent};

type EventQueue = Rc<RefCell<VecDeque<TransportEvent>>>;

/// WebSocket-backed transport for the wasm build.
pub struct WsTransport {
    ws: WebSocket,
    queue: EventQueue,
}

impl WsTransport {
    /// Open a connection. Establishment is asynchronous; an `Opened` or
    /// `Error` event follows on the queue.
    pub fn connect(url: &str) -> Result<Self, TransportError> {
        info!(url, "connecting WebSocket");

        let ws = WebSocket::new(url)
            .map_err(|e| TransportError::Connect(js_error_text(&e)))?;

        let queue: EventQueue = Rc::new(RefCell::new(VecDeque::new()));

        let q = queue.clone();
        let on_open = Closure::wrap(Box::new(move |_| {
            info!("WebSocket connected");
            q.borrow_mut().push_back(TransportEvent::Opened);
        }) as Box<dyn Fn(JsValue)>);
        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        on_open.forget();

        let q = queue.clone();
        let on_msg = Closure::wrap(Box::new(move |e: MessageEvent| {
            if let Ok(txt) = e.data().dyn_into::<js_sys::JsString>() {
                q.borrow_mut()
                    .push_back(TransportEvent::Message(txt.into()));
            }
        }) as Box<dyn Fn(MessageEvent)>);
        ws.set_onmessage(Some(on_msg.as_ref().unchecked_ref()));
        on_msg.forget();

        let q = queue.clone();
        let on_err = Closure::wrap(Box::new(move |e: ErrorEvent| {
            let msg = e.message();
            error!(error = %msg, "WebSocket error");
            q.borrow_mut().push_back(TransportEvent::Error(msg));
        }) as Box<dyn Fn(ErrorEvent)>);
        ws.set_onerror(Some(on_err.as_ref().unchecked_ref()));
        on_err.forget();

        let q = queue.clone();
        let on_close = Closure::wrap(Box::new(move |e: CloseEvent| {
            warn!(code = e.code(), reason = %e.reason(), "WebSocket closed");
            q.borrow_mut().push_back(TransportEvent::Closed);
        }) as Box<dyn Fn(CloseEvent)>);
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));
        on_close.forget();

        Ok(Self { ws, queue })
    }
}

impl Transport for WsTransport {
    fn send_text(&mut self, text: &str) -> Result<(), TransportError> {
        self.ws
            .send_with_str(text)
            .map_err(|e| TransportError::Send(js_error_text(&e)))
    }

    fn close(&mut self) {
        if let Err(e) = self.ws.close() {
            warn!(error = %js_error_text(&e), "WebSocket close failed");
        }
    }

    fn poll(&mut self) -> Option<TransportEvent> {
        self.queue.borrow_mut().pop_front()
    }
}

fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
