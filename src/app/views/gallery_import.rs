//! Gallery batch import: paste one file path per line and run the whole
//! selection through upload + analysis, sequentially.

use eframe::egui;

use crate::app::capture::ImportOutcome;
use crate::app::state::AppState;
use crate::app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, student_id: i64, student_name: &str) {
    state.import.enter(student_id, student_name);

    egui::Frame::default()
        .fill(colors::CARD_BG)
        .inner_margin(egui::Margin::same(22))
        .corner_radius(12)
        .show(ui, |ui| {
            ui.colored_label(
                colors::ACCENT,
                egui::RichText::new(format!("Import galerie · {}", student_name))
                    .size(22.0)
                    .strong(),
            );
            ui.add_space(12.0);

            super::error_label(ui, &state.import.error);

            ui.colored_label(colors::TEXT_PRIMARY, "Fișiere (câte o cale pe linie)");
            ui.add_sized(
                [460.0, 110.0],
                egui::TextEdit::multiline(&mut state.import.paths_input)
                    .hint_text("/photos/front.jpg\n/photos/side.jpg")
                    .text_color(colors::TEXT_PRIMARY),
            );
            ui.add_space(12.0);

            if state.import.running {
                super::busy_row(
                    ui,
                    &format!("Importing... {} done", state.import.outcomes.len()),
                );
            } else {
                let start = egui::Button::new(
                    egui::RichText::new("Importă și Analizează").color(colors::TEXT_LIGHT),
                )
                .fill(colors::CAPTURE);
                if ui.add_sized([460.0, 36.0], start).clicked() {
                    state.start_import();
                }
            }
            ui.add_space(12.0);

            if !state.import.outcomes.is_empty() {
                ui.colored_label(
                    colors::TEXT_PRIMARY,
                    format!(
                        "{} reușite · {} eșuate",
                        state.import.successes(),
                        state.import.failures()
                    ),
                );
                ui.add_space(6.0);

                egui::ScrollArea::vertical().show(ui, |ui| {
                    for outcome in &state.import.outcomes {
                        outcome_row(ui, outcome);
                    }
                });
            }
        });
}

fn outcome_row(ui: &mut egui::Ui, outcome: &ImportOutcome) {
    match outcome {
        ImportOutcome::Analyzed {
            index,
            file_name,
            review,
        } => {
            ui.horizontal(|ui| {
                ui.colored_label(colors::SUCCESS, "✔");
                ui.colored_label(
                    colors::TEXT_PRIMARY,
                    format!("{}. {}", index + 1, file_name),
                );
                for (label, value) in [
                    ("umeri", review.angles.shoulder_tilt),
                    ("șolduri", review.angles.hip_tilt),
                    ("coloană", review.angles.spine_tilt),
                ] {
                    let color = if crate::shared::model::TiltAngles::exceeds(value) {
                        colors::ANGLE_ALERT
                    } else {
                        colors::ANGLE_OK
                    };
                    ui.colored_label(color, format!("{} {:.1}°", label, value));
                }
            });
        }
        ImportOutcome::Failed {
            index,
            file_name,
            message,
        } => {
            ui.horizontal(|ui| {
                ui.colored_label(colors::ERROR, "✘");
                ui.colored_label(
                    colors::TEXT_PRIMARY,
                    format!("{}. {}", index + 1, file_name),
                );
                ui.colored_label(colors::ERROR, message);
            });
        }
    }
}
