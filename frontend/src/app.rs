//! egui application: wires the view model to the tasks API.

use std::future::Future;
use std::sync::mpsc::{Receiver, Sender, channel};
use task_api::{ApiError, FrontendConfig, Task, TaskClient};

use crate::board::TaskBoard;
use crate::components::{created_task_card, notifications, task_form, task_list};

/// Completed request, delivered back to the UI thread.
enum ApiResponse {
    Created(Result<Task, ApiError>),
    Loaded(Result<Vec<Task>, ApiError>),
}

pub struct TaskApp {
    board: TaskBoard,
    client: TaskClient,
    ctx: egui::Context,
    response_rx: Receiver<ApiResponse>,
    response_tx: Sender<ApiResponse>,
}

impl TaskApp {
    /// Create the app and start loading the task list.
    pub fn new(cc: &eframe::CreationContext<'_>, config: FrontendConfig) -> Self {
        let (tx, rx) = channel();
        let mut app = Self {
            board: TaskBoard::new(),
            client: config.client(),
            ctx: cc.egui_ctx.clone(),
            response_rx: rx,
            response_tx: tx,
        };
        app.load_tasks();
        app
    }

    fn submit(&mut self) {
        let Some(payload) = self.board.begin_submit() else {
            return;
        };
        let client = self.client.clone();
        self.spawn(async move { ApiResponse::Created(client.create_task(&payload).await) });
    }

    fn load_tasks(&mut self) {
        if self.board.begin_load() {
            self.fetch_tasks();
        }
    }

    fn fetch_tasks(&self) {
        let client = self.client.clone();
        self.spawn(async move { ApiResponse::Loaded(client.get_tasks().await) });
    }

    /// Run `request` on the browser event loop and repaint once it completes.
    fn spawn(&self, request: impl Future<Output = ApiResponse> + 'static) {
        let tx = self.response_tx.clone();
        let ctx = self.ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = tx.send(request.await);
            ctx.request_repaint();
        });
    }

    fn process_responses(&mut self) {
        while let Ok(response) = self.response_rx.try_recv() {
            match response {
                ApiResponse::Created(result) => {
                    if self.board.finish_submit(result) {
                        self.load_tasks();
                    }
                }
                ApiResponse::Loaded(result) => {
                    if self.board.finish_load(result) {
                        self.fetch_tasks();
                    }
                }
            }
        }
    }
}

impl eframe::App for TaskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_responses();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                egui::widgets::global_theme_preference_buttons(ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_max_width(800.0);

                ui.heading("Create a New Task");
                ui.add_space(8.0);

                notifications(ui, &mut self.board);
                if task_form(ui, &mut self.board) {
                    self.submit();
                }

                if let Some(task) = self.board.created_task() {
                    ui.add_space(16.0);
                    created_task_card(ui, task);
                }

                ui.add_space(16.0);
                ui.heading("All Tasks");
                ui.add_space(8.0);
                task_list(ui, &self.board);
            });
        });
    }
}
