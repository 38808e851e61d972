//! Capture screen: pick a frame from disk, run it through upload + analysis.

use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, student_id: i64, student_name: &str) {
    state.capture.enter(student_id, student_name);

    egui::Frame::default()
        .fill(colors::CARD_BG)
        .inner_margin(egui::Margin::same(22))
        .corner_radius(12)
        .show(ui, |ui| {
            ui.colored_label(
                colors::ACCENT,
                egui::RichText::new(format!("Fotografiază · {}", student_name))
                    .size(22.0)
                    .strong(),
            );
            ui.add_space(12.0);

            super::error_label(ui, &state.capture.error);

            ui.colored_label(colors::TEXT_PRIMARY, "Calea fișierului imagine");
            ui.add_sized(
                [420.0, 28.0],
                egui::TextEdit::singleline(&mut state.capture.path_input)
                    .hint_text("/path/to/frame.jpg")
                    .text_color(colors::TEXT_PRIMARY),
            );
            ui.add_space(16.0);

            if state.capture.phase.is_busy() {
                super::busy_row(ui, state.capture.phase.label());
                return;
            }

            let capture = egui::Button::new(
                egui::RichText::new("📷 Capturează și Analizează").color(colors::TEXT_LIGHT),
            )
            .fill(colors::CAPTURE);
            if ui.add_sized([420.0, 40.0], capture).clicked() {
                state.start_capture();
            }
        });
}
