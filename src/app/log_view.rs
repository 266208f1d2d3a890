//! Transcript panel.
//!
//! Pinning follows the log's own position: at the exact bottom edge before
//! an append means re-pin to the new bottom, anywhere else means leave the
//! scroll position alone.

use eframe::egui;

use crate::theme::colors;
use crate::transcript::at_bottom;
use super::ChatApp;

impl ChatApp {
    pub(crate) fn render_log(&mut self, ui: &mut egui::Ui) {
        let output = egui::ScrollArea::vertical()
            .id_salt("chat_log")
            .auto_shrink([false, false])
            .stick_to_bottom(self.log_pinned)
            .show(ui, |ui| {
                for line in self.session.transcript().lines() {
                    let name_color = if line.system {
                        colors::TEXT_MUTED
                    } else {
                        colors::TEXT_SECONDARY
                    };
                    ui.horizontal_wrapped(|ui| {
                        ui.label(
                            egui::RichText::new(format!("{:>7.1}s", line.at))
                                .color(colors::TEXT_MUTED)
                                .monospace()
                                .size(11.0),
                        );
                        ui.label(
                            egui::RichText::new(format!("{}:", line.username))
                                .color(name_color)
                                .strong(),
                        );
                        ui.label(
                            egui::RichText::new(&line.message).color(colors::TEXT_PRIMARY),
                        );
                    });
                }
            });

        self.log_pinned = at_bottom(
            output.state.offset.y,
            output.inner_rect.height(),
            output.content_size.y,
        );
    }
}
