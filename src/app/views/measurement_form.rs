//! Add/Edit measurement form.
//!
//! Height and weight are required; the circumferences and the disability
//! note are optional and left blank when unknown.

use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;

fn numeric_input(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.colored_label(colors::TEXT_PRIMARY, label);
    ui.add_sized(
        [320.0, 28.0],
        egui::TextEdit::singleline(value).text_color(colors::TEXT_PRIMARY),
    );
    ui.add_space(8.0);
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let editing = state.measurement_form.editing.is_some();

    egui::Frame::default()
        .fill(colors::CARD_BG)
        .inner_margin(egui::Margin::same(22))
        .corner_radius(12)
        .show(ui, |ui| {
            ui.colored_label(
                colors::ACCENT,
                egui::RichText::new(if editing {
                    "Editează Măsurătoare"
                } else {
                    "Adaugă Măsurătoare"
                })
                .size(22.0)
                .strong(),
            );
            ui.add_space(12.0);

            super::error_label(ui, &state.measurement_form.error);

            egui::ScrollArea::vertical().show(ui, |ui| {
                numeric_input(ui, "Înălțime (cm)*", &mut state.measurement_form.height);
                numeric_input(ui, "Greutate (kg)*", &mut state.measurement_form.weight);
                numeric_input(
                    ui,
                    "Circumferință cap (cm)",
                    &mut state.measurement_form.head_circumference,
                );
                numeric_input(
                    ui,
                    "Circumferință torace (cm)",
                    &mut state.measurement_form.chest_circumference,
                );
                numeric_input(
                    ui,
                    "Circumferință abdomen (cm)",
                    &mut state.measurement_form.abdominal_circumference,
                );

                ui.colored_label(colors::TEXT_PRIMARY, "Dizabilitate fizică");
                ui.add_sized(
                    [320.0, 70.0],
                    egui::TextEdit::multiline(&mut state.measurement_form.physical_disability)
                        .text_color(colors::TEXT_PRIMARY),
                );
                ui.add_space(16.0);

                if state.measurement_form.saving {
                    super::busy_row(ui, "Saving...");
                    return;
                }

                let save = egui::Button::new(
                    egui::RichText::new("Salvează Măsurătoare").color(colors::TEXT_LIGHT),
                )
                .fill(colors::ACCENT);
                if ui.add_sized([320.0, 36.0], save).clicked() {
                    state.submit_measurement_form();
                }
            });
        });
}
