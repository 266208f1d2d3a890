//! Terminal chat client
//!
//! Run with: cargo run --bin messenger-cli --features cli -- [type] [room] [name]
//!
//! Host comes from CHAT_HOST (default 127.0.0.1:8000), CHAT_SECURE=1 selects
//! wss. Stdin lines go to the room; `/save <path>` writes the transcript as
//! HTML, `/close` and `/quit` end the session.

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use tokio::io::{AsyncBufReadExt, BufReader};
    use tracing::{error, info, warn};
    use tracing_subscriber::{fmt, EnvFilter};

    use ws_messenger::markup;
    use ws_messenger::session::{ChatSession, OpenParams, SendOutcome};
    use ws_messenger::status::ConnectionStatus;
    use ws_messenger::transport::Transport;
    use ws_messenger::websocket_native::NativeWsTransport;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ws_messenger=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let mut args = std::env::args().skip(1);
    let chat_type = args.next().unwrap_or_else(|| "group".to_string());
    let room = args.next().unwrap_or_else(|| "lobby".to_string());
    let username = args.next().unwrap_or_else(|| "anonymous".to_string());

    let host = std::env::var("CHAT_HOST").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
    let secure = std::env::var("CHAT_SECURE")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    info!(host = %host, chat_type = %chat_type, room = %room, "joining room");

    let mut session = ChatSession::new();
    session.open(
        OpenParams {
            secure,
            host,
            chat_type,
            room,
            username,
        },
        |url| Ok(Box::new(NativeWsTransport::connect(url)) as Box<dyn Transport>),
    );

    println!("Commands: /save <path>, /close, /quit. Anything else goes to the room.");

    let mut printed = 0usize;
    let mut last_status = session.status().clone();
    let mut lines_in = BufReader::new(tokio::io::stdin()).lines();
    let mut pump = tokio::time::interval(std::time::Duration::from_millis(100));

    loop {
        tokio::select! {
            _ = pump.tick() => {
                session.pump();

                for line in &session.transcript().lines()[printed..] {
                    println!("[{:>7.1}s] {}: {}", line.at, line.username, line.message);
                }
                printed = session.transcript().len();

                if *session.status() != last_status {
                    last_status = session.status().clone();
                    let label = last_status.label();
                    if !label.is_empty() {
                        println!("* {label}");
                    }
                    if last_status == ConnectionStatus::Disconnected && !session.is_active() {
                        break;
                    }
                }
            }
            line = lines_in.next_line() => {
                let Some(input) = line? else {
                    // stdin EOF
                    session.close();
                    break;
                };
                let input = input.trim();

                if input.is_empty() {
                    continue;
                }
                if input == "/quit" || input == "/close" {
                    session.close();
                    break;
                }
                if let Some(path) = input.strip_prefix("/save ") {
                    let path = path.trim();
                    match std::fs::write(path, markup::transcript_html(session.transcript())) {
                        Ok(()) => info!(path, "transcript saved"),
                        Err(e) => error!(error = %e, path, "failed to save transcript"),
                    }
                    continue;
                }

                match session.send(input) {
                    SendOutcome::Sent => {}
                    SendOutcome::NotConnected => {
                        warn!("cannot send message, connection is not open");
                    }
                    // Failure detail already landed in the status.
                    SendOutcome::Failed => {}
                }
            }
        }
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
