use chrono::{Duration, Local, NaiveDateTime, NaiveTime, Timelike};
use egui_extras::DatePickerButton;
use task_api::TaskStatus;

use crate::board::TaskBoard;
use crate::form::FormField;

/// Create-task form. Returns `true` when the submit button was clicked.
pub fn task_form(ui: &mut egui::Ui, board: &mut TaskBoard) -> bool {
    required_label(ui, "Title");
    let title = egui::TextEdit::singleline(&mut board.form.title)
        .hint_text("Enter task title")
        .desired_width(f32::INFINITY);
    if ui.add(title).changed() {
        board.field_edited(FormField::Title);
    }
    field_error(ui, board, FormField::Title);

    ui.label("Description");
    let description = egui::TextEdit::multiline(&mut board.form.description)
        .hint_text("Optional description")
        .desired_rows(3)
        .desired_width(f32::INFINITY);
    if ui.add(description).changed() {
        board.field_edited(FormField::Description);
    }

    required_label(ui, "Status");
    let mut status = board.form.status;
    egui::ComboBox::from_id_salt("task_status")
        .selected_text(status.map_or("Select status", TaskStatus::label))
        .show_ui(ui, |ui| {
            for option in TaskStatus::ALL {
                ui.selectable_value(&mut status, Some(option), option.label());
            }
        });
    if status != board.form.status {
        board.form.status = status;
        board.field_edited(FormField::Status);
    }
    field_error(ui, board, FormField::Status);

    required_label(ui, "Due date & time");
    let mut due = board.form.due_date_time;
    due_picker(ui, &mut due);
    if due != board.form.due_date_time {
        board.form.due_date_time = due;
        board.field_edited(FormField::DueDateTime);
    }
    field_error(ui, board, FormField::DueDateTime);

    ui.add_space(8.0);
    let submitting = board.is_submitting();
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        let clicked = ui
            .add_enabled(!submitting, egui::Button::new("Create Task"))
            .clicked();
        if submitting {
            ui.spinner();
        }
        clicked
    })
    .inner
}

fn due_picker(ui: &mut egui::Ui, due: &mut Option<NaiveDateTime>) {
    ui.horizontal(|ui| {
        let Some(current) = *due else {
            if ui.button("Pick date and time").clicked() {
                *due = Some(next_full_hour(Local::now().naive_local()));
            }
            return;
        };

        let mut date = current.date();
        let mut hour = current.hour();
        let mut minute = current.minute();

        ui.add(DatePickerButton::new(&mut date).id_salt("task_due_date"));
        ui.add(egui::DragValue::new(&mut hour).range(0..=23));
        ui.label(":");
        ui.add(egui::DragValue::new(&mut minute).range(0..=59));

        *due = NaiveTime::from_hms_opt(hour, minute, 0).map(|time| date.and_time(time));
        if ui.small_button("Clear").clicked() {
            *due = None;
        }
    });
}

/// First full hour strictly after `now`.
fn next_full_hour(now: NaiveDateTime) -> NaiveDateTime {
    let truncated = now
        .date()
        .and_hms_opt(now.hour(), 0, 0)
        .unwrap_or(now);
    truncated + Duration::hours(1)
}

fn required_label(ui: &mut egui::Ui, text: &str) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        ui.label(text);
        ui.colored_label(ui.visuals().error_fg_color, "*");
    });
}

fn field_error(ui: &mut egui::Ui, board: &TaskBoard, field: FormField) {
    if let Some(message) = board.field_error(field) {
        ui.colored_label(ui.visuals().error_fg_color, message);
    }
    ui.add_space(6.0);
}
