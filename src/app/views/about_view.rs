//! Static "about the analysis" screen.

use eframe::egui;

use crate::app::theme::colors;
use crate::shared::model::HIGH_DEVIATION_DEG;

pub fn render(ui: &mut egui::Ui) {
    egui::Frame::default()
        .fill(colors::CARD_BG)
        .inner_margin(egui::Margin::same(22))
        .corner_radius(12)
        .show(ui, |ui| {
            ui.colored_label(
                colors::ACCENT,
                egui::RichText::new("Despre analiza posturii").size(22.0).strong(),
            );
            ui.add_space(12.0);

            ui.colored_label(
                colors::TEXT_PRIMARY,
                "Fiecare fotografie este analizată pe server, care estimează trei \
                 unghiuri de înclinare: umeri, șolduri și coloană. Unghiurile sunt \
                 exprimate în grade față de orizontală, respectiv verticală.",
            );
            ui.add_space(8.0);
            ui.colored_label(
                colors::TEXT_PRIMARY,
                format!(
                    "O deviație mai mare de {:.0}° este evidențiată cu roșu. Este un \
                     avertisment orientativ, nu un diagnostic: rezultatele se \
                     interpretează împreună cu kinetoterapeutul.",
                    HIGH_DEVIATION_DEG
                ),
            );
            ui.add_space(8.0);
            ui.colored_label(
                colors::TEXT_SECONDARY,
                "Serverul păstrează un istoric al analizelor pentru fiecare \
                 fotografie, vizibil din fișa elevului.",
            );
        });
}
