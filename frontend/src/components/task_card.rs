use task_api::Task;

/// Summary of the task returned by the last successful submit.
pub fn created_task_card(ui: &mut egui::Ui, task: &Task) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.strong("Last created task:");
        ui.add_space(4.0);

        field(ui, "Title:", &task.title);
        if let Some(description) = task.description() {
            field(ui, "Description:", description);
        }
        field(ui, "Status:", task.status.as_str());
        field(ui, "Due:", &task.format_due());

        ui.add_space(4.0);
        ui.small(format!("ID: {}", task.id));
    });
}

fn field(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.strong(label);
        ui.label(value);
    });
}
