//! Root screen: the list of students.
//!
//! First mount shows a full spinner; coming back after a mutation refetches
//! silently behind the existing rows.

use eframe::egui;

use crate::app::state::{AppState, DeleteTarget};
use crate::app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    // Refetch on focus when the list is stale
    if (state.students.dirty || !state.students.loaded_once) && !state.students.is_fetching() {
        let silent = state.students.loaded_once;
        state.refresh_students(silent);
    }

    ui.horizontal(|ui| {
        let add = egui::Button::new(
            egui::RichText::new("+ Adaugă Elev").color(colors::TEXT_LIGHT),
        )
        .fill(colors::ACCENT);
        if ui.add(add).clicked() {
            state.open_add_student();
        }
        if ui.button("⟳ Refresh").clicked() {
            state.refresh_students(true);
        }
    });
    ui.add_space(8.0);

    super::error_label(ui, &state.students.error);

    if state.students.loading {
        ui.centered_and_justified(|ui| ui.spinner());
        return;
    }

    if state.students.items.is_empty() {
        ui.colored_label(colors::TEXT_SECONDARY, "No students yet.");
        return;
    }

    let students = state.students.items.clone();
    egui::ScrollArea::vertical().show(ui, |ui| {
        for student in &students {
            egui::Frame::default()
                .fill(colors::ROW_BG)
                .inner_margin(egui::Margin::same(10))
                .corner_radius(6)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.colored_label(
                                colors::TEXT_PRIMARY,
                                egui::RichText::new(&student.name).strong(),
                            );
                            ui.colored_label(
                                colors::TEXT_SECONDARY,
                                format!("{} ani · {}", student.age, student.condition),
                            );
                        });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.button("Delete").clicked() {
                                    state.request_delete(DeleteTarget::Student {
                                        id: student.id,
                                        name: student.name.clone(),
                                    });
                                }
                                if ui.button("Edit").clicked() {
                                    state.open_edit_student(student);
                                }
                                if ui.button("Open").clicked() {
                                    state.open_student_detail(student.id, &student.name);
                                }
                            },
                        );
                    });
                });
            ui.add_space(4.0);
        }
    });
}
