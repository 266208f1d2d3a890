//! Native WebSocket transport.
//!
//! Runs tokio-tungstenite in a background thread with its own runtime.
//! Events flow out over a channel; outbound frames and the close request
//! flow in over a command channel.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{error, info, warn};

use crate::transport::{Transport, TransportError, TransportEvent};

enum WsCommand {
    Text(String),
    Close,
}

/// tungstenite-backed transport for the native build.
pub struct NativeWsTransport {
    events: Receiver<TransportEvent>,
    commands: UnboundedSender<WsCommand>,
}

impl NativeWsTransport {
    /// Spawn the connection task. Establishment is asynchronous; an `Opened`
    /// or `Error` event follows on the channel.
    pub fn connect(url: &str) -> Self {
        let (event_tx, event_rx) = std::sync::mpsc::channel();
        let (command_tx, command_rx) = unbounded_channel();

        let url = url.to_string();
        std::thread::spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    error!(error = %e, "failed to create tokio runtime");
                    let _ = event_tx.send(TransportEvent::Error(e.to_string()));
                    return;
                }
            };
            rt.block_on(run_websocket(&url, event_tx, command_rx));
        });

        Self {
            events: event_rx,
            commands: command_tx,
        }
    }
}

impl Transport for NativeWsTransport {
    fn send_text(&mut self, text: &str) -> Result<(), TransportError> {
        self.commands
            .send(WsCommand::Text(text.to_string()))
            .map_err(|_| TransportError::Send("connection task has exited".into()))
    }

    fn close(&mut self) {
        let _ = self.commands.send(WsCommand::Close);
    }

    fn poll(&mut self) -> Option<TransportEvent> {
        match self.events.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

async fn run_websocket(
    url: &str,
    events: Sender<TransportEvent>,
    mut commands: UnboundedReceiver<WsCommand>,
) {
    use futures_util::{SinkExt, StreamExt};
    use tokio_tungstenite::{connect_async, tungstenite::Message as WsMessage};

    info!(url, "connecting WebSocket");

    let ws_stream = match connect_async(url).await {
        Ok((stream, _)) => {
            info!("WebSocket connected");
            let _ = events.send(TransportEvent::Opened);
            stream
        }
        Err(e) => {
            error!(error = %e, "failed to connect");
            // Error then close, in browser WebSocket order, so the session
            // frees its handle.
            let _ = events.send(TransportEvent::Error(e.to_string()));
            let _ = events.send(TransportEvent::Closed);
            return;
        }
    };

    let (mut write, mut read) = ws_stream.split();

    loop {
        tokio::select! {
            msg = read.next() => {
                match msg {
                    Some(Ok(WsMessage::Text(text))) => {
                        if events.send(TransportEvent::Message(text.to_string())).is_err() {
                            // Receiver dropped, exit
                            break;
                        }
                    }
                    Some(Ok(WsMessage::Close(_))) | None => {
                        warn!("WebSocket closed by server");
                        let _ = events.send(TransportEvent::Closed);
                        break;
                    }
                    Some(Err(e)) => {
                        error!(error = %e, "WebSocket error");
                        let _ = events.send(TransportEvent::Error(e.to_string()));
                        let _ = events.send(TransportEvent::Closed);
                        break;
                    }
                    _ => {}
                }
            }
            cmd = commands.recv() => {
                match cmd {
                    Some(WsCommand::Text(text)) => {
                        if let Err(e) = write.send(WsMessage::Text(text.into())).await {
                            error!(error = %e, "failed to send frame");
                            let _ = events.send(TransportEvent::Error(e.to_string()));
                            let _ = events.send(TransportEvent::Closed);
                            break;
                        }
                    }
                    // Local close request, or the transport handle dropped.
                    Some(WsCommand::Close) | None => {
                        let _ = write.send(WsMessage::Close(None)).await;
                        let _ = events.send(TransportEvent::Closed);
                        break;
                    }
                }
            }
        }
    }
}
