//! Review screen for a freshly analyzed capture.
//!
//! Shows the original frame next to the overlay (when one resolved), the
//! three tilt angles with high-deviation highlighting, and the Save / Retake
//! choice. Textures are created lazily on first paint and cached on the
//! capture state.

use eframe::egui;

use crate::app::images;
use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::shared::model::TiltAngles;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(review) = state.capture.review.clone() else {
        ui.colored_label(colors::TEXT_SECONDARY, "Nothing to review.");
        return;
    };

    if state.capture.original_tex.is_none() {
        if let Ok(img) = images::decode_image(&review.original) {
            state.capture.original_tex =
                Some(ui.ctx().load_texture("review_original", img, Default::default()));
        }
    }
    if state.capture.overlay_tex.is_none() {
        if let Some(ref overlay) = review.overlay {
            if let Ok(img) = images::decode_image(overlay) {
                state.capture.overlay_tex =
                    Some(ui.ctx().load_texture("review_overlay", img, Default::default()));
            }
        }
    }

    egui::Frame::default()
        .fill(colors::CARD_BG)
        .inner_margin(egui::Margin::same(22))
        .corner_radius(12)
        .show(ui, |ui| {
            ui.colored_label(
                colors::ACCENT,
                egui::RichText::new(format!("Rezultat · {}", review.student_name))
                    .size(22.0)
                    .strong(),
            );
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if let Some(ref tex) = state.capture.original_tex {
                    ui.add(
                        egui::Image::from_texture(tex)
                            .max_size(egui::vec2(260.0, 340.0)),
                    );
                }
                if let Some(ref tex) = state.capture.overlay_tex {
                    ui.add(
                        egui::Image::from_texture(tex)
                            .max_size(egui::vec2(260.0, 340.0)),
                    );
                }
            });
            ui.add_space(12.0);

            for (label, value) in [
                ("Umeri", review.angles.shoulder_tilt),
                ("Șolduri", review.angles.hip_tilt),
                ("Coloană", review.angles.spine_tilt),
            ] {
                angle_line(ui, label, value);
            }
            if review.angles.any_high() {
                ui.add_space(4.0);
                ui.colored_label(
                    colors::ANGLE_ALERT,
                    "Deviație peste 15° detectată. Verificați postura.",
                );
            }
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                let save = egui::Button::new(
                    egui::RichText::new("✔ Salvează").color(colors::TEXT_LIGHT),
                )
                .fill(colors::SUCCESS);
                if ui.add_sized([200.0, 36.0], save).clicked() {
                    state.review_accept();
                }

                let retake = egui::Button::new(
                    egui::RichText::new("↺ Refă").color(colors::TEXT_LIGHT),
                )
                .fill(colors::DANGER);
                if ui.add_sized([200.0, 36.0], retake).clicked() {
                    state.review_retake();
                }
            });
        });
}

fn angle_line(ui: &mut egui::Ui, label: &str, value: f32) {
    let high = TiltAngles::exceeds(value);
    let color = if high {
        colors::ANGLE_ALERT
    } else {
        colors::ANGLE_OK
    };
    ui.horizontal(|ui| {
        ui.colored_label(colors::TEXT_PRIMARY, format!("{}:", label));
        ui.colored_label(color, format!("{:.1}°", value));
        if high {
            ui.colored_label(colors::ANGLE_ALERT, "⚠");
        }
    });
}
