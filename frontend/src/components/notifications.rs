use crate::board::TaskBoard;
use egui::Color32;

const ERROR_COLOR: Color32 = Color32::from_rgb(224, 49, 49);
const SUCCESS_COLOR: Color32 = Color32::from_rgb(47, 158, 68);

/// Dismissible error and success banners.
pub fn notifications(ui: &mut egui::Ui, board: &mut TaskBoard) {
    if let Some(message) = board.error_message().map(str::to_owned) {
        if banner(ui, &message, ERROR_COLOR) {
            board.dismiss_error();
        }
    }

    if let Some(message) = board.success_message().map(str::to_owned) {
        if banner(ui, &message, SUCCESS_COLOR) {
            board.dismiss_success();
        }
    }
}

/// Returns `true` when the close button was clicked.
fn banner(ui: &mut egui::Ui, message: &str, accent: Color32) -> bool {
    let mut dismissed = false;
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, accent))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.colored_label(accent, message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✖").clicked() {
                        dismissed = true;
                    }
                });
            });
        });
    ui.add_space(4.0);
    dismissed
}
