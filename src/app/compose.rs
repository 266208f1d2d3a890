//! Message composer: input field, Send, and the not-connected alert.

use eframe::egui;

use crate::session::SendOutcome;
use super::ChatApp;

impl ChatApp {
    pub(crate) fn render_composer(&mut self, ui: &mut egui::Ui) {
        let mut submit = false;

        ui.horizontal(|ui| {
            let input_width = ui.available_width() - 70.0;
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.draft)
                    .desired_width(input_width)
                    .hint_text("Message"),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
                response.request_focus();
            }
            if ui.button("Send").clicked() {
                submit = true;
            }
        });

        if submit {
            self.submit_message();
        }
    }

    /// Send the draft. The input clears only on a successful hand-off; a
    /// closed connection raises the alert and keeps the text.
    fn submit_message(&mut self) {
        match self.session.send(&self.draft) {
            SendOutcome::Sent => self.draft.clear(),
            SendOutcome::NotConnected => {
                self.alert = Some("Cannot send message, connection is not open.".into());
            }
            // Transport failure already landed in the status label.
            SendOutcome::Failed => {}
        }
    }

    pub(crate) fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.alert.clone() else {
            return;
        };
        egui::Window::new("Alert")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(4.0);
                if ui.button("OK").clicked() {
                    self.alert = None;
                }
            });
    }
}
