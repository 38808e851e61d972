//! Add/Edit therapy session form.
//!
//! The date field is typed as DD-MM-YYYY and validated on submit; the
//! session type is one of three fixed categories.

use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::shared::model::SessionType;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let editing = state.session_form.editing.is_some();

    egui::Frame::default()
        .fill(colors::CARD_BG)
        .inner_margin(egui::Margin::same(22))
        .corner_radius(12)
        .show(ui, |ui| {
            ui.colored_label(
                colors::ACCENT,
                egui::RichText::new(if editing {
                    "Editează Sesiune"
                } else {
                    "Adaugă Sesiune"
                })
                .size(22.0)
                .strong(),
            );
            ui.add_space(12.0);

            super::error_label(ui, &state.session_form.error);

            ui.colored_label(colors::TEXT_PRIMARY, "Data (ZZ-LL-AAAA)*");
            ui.add_sized(
                [320.0, 28.0],
                egui::TextEdit::singleline(&mut state.session_form.date_input)
                    .text_color(colors::TEXT_PRIMARY),
            );
            ui.add_space(8.0);

            ui.colored_label(colors::TEXT_PRIMARY, "Tip sesiune*");
            ui.horizontal(|ui| {
                for kind in SessionType::ALL {
                    let selected = state.session_form.session_type == kind;
                    if ui.selectable_label(selected, kind.label()).clicked() {
                        state.session_form.session_type = kind;
                    }
                }
            });
            ui.add_space(8.0);

            ui.colored_label(colors::TEXT_PRIMARY, "Note");
            ui.add_sized(
                [320.0, 70.0],
                egui::TextEdit::multiline(&mut state.session_form.notes)
                    .text_color(colors::TEXT_PRIMARY),
            );
            ui.add_space(16.0);

            if state.session_form.saving {
                super::busy_row(ui, "Saving...");
                return;
            }

            let save = egui::Button::new(
                egui::RichText::new("Salvează Sesiune").color(colors::TEXT_LIGHT),
            )
            .fill(colors::ACCENT);
            if ui.add_sized([320.0, 36.0], save).clicked() {
                state.submit_session_form();
            }
        });
}
