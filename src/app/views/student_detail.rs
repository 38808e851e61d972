//! Student detail: measurements, therapy sessions, and posture photos for
//! one student, with per-row edit/delete and photo analysis history.

use eframe::egui;

use crate::app::nav::Route;
use crate::app::state::{AppState, DeleteTarget};
use crate::app::theme::colors;
use crate::shared::model::{PostureAnalysis, TiltAngles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState, student_id: i64, student_name: &str) {
    state.detail.enter(student_id, student_name);
    if (state.detail.dirty || !state.detail.fetched_once) && !state.detail.is_fetching() {
        let silent = state.detail.fetched_once;
        state.load_detail(silent);
    }

    ui.horizontal(|ui| {
        ui.colored_label(
            colors::TEXT_PRIMARY,
            egui::RichText::new(student_name).size(20.0).strong(),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("⟳ Refresh").clicked() {
                state.load_detail(true);
            }
        });
    });
    ui.add_space(8.0);

    super::error_label(ui, &state.detail.error);

    if state.detail.loading {
        ui.centered_and_justified(|ui| ui.spinner());
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        measurements_section(ui, state, student_id);
        ui.add_space(14.0);
        sessions_section(ui, state, student_id);
        ui.add_space(14.0);
        photos_section(ui, state, student_id, student_name);
    });
}

fn section_header(ui: &mut egui::Ui, title: &str, button: &str, color: egui::Color32) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.colored_label(
            colors::TEXT_PRIMARY,
            egui::RichText::new(title).size(16.0).strong(),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let add = egui::Button::new(egui::RichText::new(button).color(colors::TEXT_LIGHT))
                .fill(color);
            clicked = ui.add(add).clicked();
        });
    });
    ui.add_space(4.0);
    clicked
}

fn measurements_section(ui: &mut egui::Ui, state: &mut AppState, student_id: i64) {
    if section_header(ui, "Măsurători", "+ Adaugă Măsurătoare", colors::ACCENT) {
        state.measurement_form.load_new(student_id);
        state.nav.push(Route::AddMeasurement { student_id });
    }

    if state.detail.measurements.is_empty() {
        ui.colored_label(colors::TEXT_SECONDARY, "No measurements recorded.");
        return;
    }

    let measurements = state.detail.measurements.clone();
    for m in &measurements {
        egui::Frame::default()
            .fill(colors::ROW_BG)
            .inner_margin(egui::Margin::same(10))
            .corner_radius(6)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.colored_label(
                            colors::TEXT_PRIMARY,
                            format!("{:.1} cm · {:.1} kg", m.height, m.weight),
                        );
                        let mut extras = Vec::new();
                        if let Some(v) = m.head_circumference {
                            extras.push(format!("cap {:.1}", v));
                        }
                        if let Some(v) = m.chest_circumference {
                            extras.push(format!("torace {:.1}", v));
                        }
                        if let Some(v) = m.abdominal_circumference {
                            extras.push(format!("abdomen {:.1}", v));
                        }
                        if let Some(ref d) = m.physical_disability {
                            extras.push(d.clone());
                        }
                        if !extras.is_empty() {
                            ui.colored_label(colors::TEXT_SECONDARY, extras.join(" · "));
                        }
                        ui.colored_label(
                            colors::TEXT_SECONDARY,
                            m.created_at.format("%d-%m-%Y").to_string(),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Delete").clicked() {
                            state.request_delete(DeleteTarget::Measurement { id: m.id });
                        }
                        if ui.button("Edit").clicked() {
                            state.measurement_form.load_edit(m);
                            state.nav.push(Route::EditMeasurement {
                                measurement: m.clone(),
                            });
                        }
                    });
                });
            });
        ui.add_space(4.0);
    }
}

fn sessions_section(ui: &mut egui::Ui, state: &mut AppState, student_id: i64) {
    if section_header(ui, "Sesiuni", "+ Adaugă Sesiune", colors::ACCENT) {
        state.session_form.load_new(student_id);
        state.nav.push(Route::AddSession { student_id });
    }

    if state.detail.sessions.is_empty() {
        ui.colored_label(colors::TEXT_SECONDARY, "No sessions recorded.");
        return;
    }

    let sessions = state.detail.sessions.clone();
    for s in &sessions {
        egui::Frame::default()
            .fill(colors::ROW_BG)
            .inner_margin(egui::Margin::same(10))
            .corner_radius(6)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.colored_label(
                            colors::TEXT_PRIMARY,
                            format!(
                                "{} · {}",
                                s.session_date.format("%d-%m-%Y"),
                                s.session_type.label()
                            ),
                        );
                        if !s.notes.is_empty() {
                            ui.colored_label(colors::TEXT_SECONDARY, &s.notes);
                        }
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Delete").clicked() {
                            state.request_delete(DeleteTarget::Session { id: s.id });
                        }
                        if ui.button("Edit").clicked() {
                            state.session_form.load_edit(s);
                            state.nav.push(Route::EditSession { session: s.clone() });
                        }
                    });
                });
            });
        ui.add_space(4.0);
    }
}

fn photos_section(ui: &mut egui::Ui, state: &mut AppState, student_id: i64, student_name: &str) {
    ui.horizontal(|ui| {
        ui.colored_label(
            colors::TEXT_PRIMARY,
            egui::RichText::new("Fotografii").size(16.0).strong(),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let camera = egui::Button::new(
                egui::RichText::new("📷 Cameră").color(colors::TEXT_LIGHT),
            )
            .fill(colors::CAPTURE);
            if ui.add(camera).clicked() {
                state.capture.enter(student_id, student_name);
                state.nav.push(Route::Capture {
                    student_id,
                    student_name: student_name.to_string(),
                });
            }
            if ui.button("Import galerie").clicked() {
                state.import.enter(student_id, student_name);
                state.nav.push(Route::GalleryImport {
                    student_id,
                    student_name: student_name.to_string(),
                });
            }
        });
    });
    ui.add_space(4.0);

    if state.detail.photos.is_empty() {
        ui.colored_label(colors::TEXT_SECONDARY, "No posture photos yet.");
        return;
    }

    let photos = state.detail.photos.clone();
    for photo in &photos {
        egui::Frame::default()
            .fill(colors::ROW_BG)
            .inner_margin(egui::Margin::same(10))
            .corner_radius(6)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.colored_label(
                            colors::TEXT_PRIMARY,
                            photo.created_at.format("%d-%m-%Y %H:%M").to_string(),
                        );
                        match &photo.latest_analysis {
                            Some(analysis) => angle_summary(ui, &analysis.angles()),
                            None => {
                                ui.colored_label(colors::TEXT_SECONDARY, "Not analyzed");
                            }
                        }
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Delete").clicked() {
                            state.request_delete(DeleteTarget::Photo { id: photo.id });
                        }
                        let expanded = state
                            .detail
                            .history
                            .as_ref()
                            .is_some_and(|(id, _)| *id == photo.id);
                        let label = if expanded { "Hide history" } else { "History" };
                        if ui.button(label).clicked() {
                            state.toggle_history(photo.id);
                        }
                    });
                });

                if let Some((id, records)) = &state.detail.history {
                    if *id == photo.id {
                        ui.add_space(6.0);
                        history_rows(ui, records);
                    }
                }
            });
        ui.add_space(4.0);
    }
}

fn angle_summary(ui: &mut egui::Ui, angles: &TiltAngles) {
    ui.horizontal(|ui| {
        for (label, value) in [
            ("umeri", angles.shoulder_tilt),
            ("șolduri", angles.hip_tilt),
            ("coloană", angles.spine_tilt),
        ] {
            let color = if TiltAngles::exceeds(value) {
                colors::ANGLE_ALERT
            } else {
                colors::ANGLE_OK
            };
            ui.colored_label(color, format!("{} {:.1}°", label, value));
        }
    });
}

fn history_rows(ui: &mut egui::Ui, records: &[PostureAnalysis]) {
    if records.is_empty() {
        ui.colored_label(colors::TEXT_SECONDARY, "No analysis history.");
        return;
    }
    for record in records {
        ui.horizontal(|ui| {
            ui.colored_label(
                colors::TEXT_SECONDARY,
                record.created_at.format("%d-%m-%Y %H:%M").to_string(),
            );
            angle_summary(ui, &record.angles());
        });
    }
}
