//! Chat room app.
//!
//! One `ChatSession` drives all panels: connection controls and status in
//! the header, transcript in the center, composer at the bottom, and the
//! participant picker on the right.

mod compose;
mod header;
mod log_view;
mod picker;

use eframe::egui;
use tracing::warn;

use crate::participants::{decode_roster, Participant};
use crate::session::{ChatSession, OpenParams};
use crate::theme::{colors, minimal_visuals};
use crate::transport::Transport;
use crate::websocket_wasm::WsTransport;

pub struct ChatApp {
    pub(crate) session: ChatSession,

    /// Connection form fields
    pub(crate) chat_type: String,
    pub(crate) room: String,
    pub(crate) username: String,

    /// Message composer input
    pub(crate) draft: String,

    /// Participant picker: roster plus current selection (None = placeholder)
    pub(crate) roster: Vec<Participant>,
    pub(crate) selected_participant: Option<usize>,

    /// Modal alert raised by the composer
    pub(crate) alert: Option<String>,

    /// Whether the log is pinned to its bottom edge
    pub(crate) log_pinned: bool,
}

impl ChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(minimal_visuals());

        Self {
            session: ChatSession::new(),
            chat_type: "group".into(),
            room: "lobby".into(),
            username: String::new(),
            draft: String::new(),
            roster: page_roster(),
            selected_participant: None,
            alert: None,
            log_pinned: true,
        }
    }

    /// Open a connection to the room named in the form, deriving scheme and
    /// host from the page location (https maps to wss).
    pub(crate) fn open_connection(&mut self) {
        let Some((secure, host)) = page_origin() else {
            warn!("page location unavailable, cannot open connection");
            return;
        };

        let params = OpenParams {
            secure,
            host,
            chat_type: self.chat_type.clone(),
            room: self.room.clone(),
            username: self.username.clone(),
        };
        self.session.open(params, |url| {
            WsTransport::connect(url).map(|t| Box::new(t) as Box<dyn Transport>)
        });
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // WebSocket events arrive outside egui's knowledge, so keep painting.
        ctx.request_repaint();

        self.session.pump();

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY).inner_margin(6.0))
            .show(ctx, |ui| {
                self.render_header(ui);
            });

        egui::TopBottomPanel::bottom("composer")
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY).inner_margin(6.0))
            .show(ctx, |ui| {
                self.render_composer(ui);
            });

        self.render_picker(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY).inner_margin(6.0))
            .show(ctx, |ui| {
                self.render_log(ui);
            });

        self.render_alert(ctx);
    }
}

/// Scheme and host of the hosting page.
fn page_origin() -> Option<(bool, String)> {
    let location = web_sys::window()?.location();
    let protocol = location.protocol().ok()?;
    let host = location.host().ok()?;
    Some((protocol == "https:", host))
}

/// Roster injected by the host page as JSON in `window.__chat_roster`.
fn page_roster() -> Vec<Participant> {
    let Some(json) = js_sys::eval("window.__chat_roster")
        .ok()
        .and_then(|v| v.as_string())
    else {
        return Vec::new();
    };
    match decode_roster(&json) {
        Ok(roster) => roster,
        Err(e) => {
            warn!(error = %e, "ignoring malformed roster");
            Vec::new()
        }
    }
}
