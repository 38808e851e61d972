//! Add/Edit student form.

use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;

fn labeled_input(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.colored_label(colors::TEXT_PRIMARY, label);
    ui.add_sized(
        [320.0, 28.0],
        egui::TextEdit::singleline(value).text_color(colors::TEXT_PRIMARY),
    );
    ui.add_space(8.0);
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let editing = state.student_form.editing.is_some();

    egui::Frame::default()
        .fill(colors::CARD_BG)
        .inner_margin(egui::Margin::same(22))
        .corner_radius(12)
        .show(ui, |ui| {
            ui.colored_label(
                colors::ACCENT,
                egui::RichText::new(if editing { "Editează Elev" } else { "Adaugă Elev" })
                    .size(22.0)
                    .strong(),
            );
            ui.add_space(12.0);

            super::error_label(ui, &state.student_form.error);

            labeled_input(ui, "Nume*", &mut state.student_form.name);
            labeled_input(ui, "Vârstă*", &mut state.student_form.age);
            labeled_input(ui, "Diagnostic", &mut state.student_form.condition);

            ui.colored_label(colors::TEXT_PRIMARY, "Note");
            ui.add_sized(
                [320.0, 70.0],
                egui::TextEdit::multiline(&mut state.student_form.notes)
                    .text_color(colors::TEXT_PRIMARY),
            );
            ui.add_space(16.0);

            if state.student_form.saving {
                super::busy_row(ui, "Saving...");
                return;
            }

            let save = egui::Button::new(
                egui::RichText::new(if editing {
                    "Salvează Modificările"
                } else {
                    "Salvează Elev"
                })
                .color(colors::TEXT_LIGHT),
            )
            .fill(colors::ACCENT);
            if ui.add_sized([320.0, 36.0], save).clicked() {
                state.submit_student_form();
            }
        });
}
