use eframe::egui;

use crate::app::nav::Route;
use crate::app::state::AppState;
use crate::app::theme::colors;

pub mod about_view;
pub mod capture_view;
pub mod gallery_import;
pub mod measurement_form;
pub mod review_view;
pub mod session_form;
pub mod student_detail;
pub mod student_form;
pub mod student_list;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if state.nav.can_go_back() {
                    if ui
                        .button(egui::RichText::new("← Back").color(colors::TEXT_LIGHT))
                        .clicked()
                    {
                        state.nav.pop();
                    }
                }
                let title = state.nav.current().title();
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new(title).size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);
                    if !matches!(state.nav.current(), Route::About) {
                        if ui
                            .button(egui::RichText::new("Despre AI").color(colors::TEXT_LIGHT))
                            .clicked()
                        {
                            state.nav.push(Route::About);
                        }
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_LIGHT)
        .inner_margin(egui::Margin::same(16));

    // Clone the route so the views can borrow the state mutably
    let route = state.nav.current().clone();

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match route {
            Route::StudentList => student_list::render(ui, state),
            Route::AddStudent | Route::EditStudent { .. } => student_form::render(ui, state),
            Route::StudentDetail {
                student_id,
                student_name,
            } => student_detail::render(ui, state, student_id, &student_name),
            Route::AddMeasurement { .. } | Route::EditMeasurement { .. } => {
                measurement_form::render(ui, state)
            }
            Route::AddSession { .. } | Route::EditSession { .. } => session_form::render(ui, state),
            Route::Capture {
                student_id,
                student_name,
            } => capture_view::render(ui, state, student_id, &student_name),
            Route::PhotoReview { .. } => review_view::render(ui, state),
            Route::GalleryImport {
                student_id,
                student_name,
            } => gallery_import::render(ui, state, student_id, &student_name),
            Route::About => about_view::render(ui),
        });

    render_delete_dialog(ctx, state);
}

/// Confirm-then-delete dialog, shared by the list and detail screens
fn render_delete_dialog(ctx: &egui::Context, state: &mut AppState) {
    let Some(target) = state.pending_delete.clone() else {
        return;
    };
    egui::Window::new("Confirm delete")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(target.describe());
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    state.cancel_delete();
                }
                let delete = egui::Button::new(
                    egui::RichText::new("Delete").color(colors::TEXT_LIGHT),
                )
                .fill(colors::DANGER);
                if ui.add(delete).clicked() {
                    state.confirm_delete();
                }
            });
        });
}

/// Inline error label used by every form
pub(crate) fn error_label(ui: &mut egui::Ui, error: &Option<String>) {
    if let Some(message) = error {
        ui.colored_label(colors::ERROR, message);
        ui.add_space(8.0);
    }
}

/// Busy row: spinner plus a label
pub(crate) fn busy_row(ui: &mut egui::Ui, label: &str) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.colored_label(colors::TEXT_SECONDARY, label);
    });
}
