use egui_extras::{Column, TableBuilder};
use task_api::Task;

use crate::board::{EMPTY_LIST_MESSAGE, ListView, TaskBoard, TaskRow};

const HEADERS: [&str; 4] = ["Title", "Status", "Due", "Description"];

pub fn task_list(ui: &mut egui::Ui, board: &TaskBoard) {
    match board.list_view() {
        ListView::Loading => {
            ui.vertical_centered(|ui| {
                ui.spinner();
            });
        }
        ListView::Empty => {
            ui.weak(EMPTY_LIST_MESSAGE);
        }
        ListView::Rows(tasks) => task_table(ui, tasks),
    }
}

fn task_table(ui: &mut egui::Ui, tasks: &[Task]) {
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for task in tasks {
                let row = TaskRow::new(task);
                body.row(20.0, |mut cells| {
                    cells.col(|ui| {
                        ui.label(row.title);
                    });
                    cells.col(|ui| {
                        ui.label(row.status.as_str());
                    });
                    cells.col(|ui| {
                        ui.label(row.due.as_str());
                    });
                    cells.col(|ui| {
                        ui.label(row.description);
                    });
                });
            }
        });
}
