//! Data model and HTTP client for the tasks REST API.
//!
//! This crate compiles for both the browser and native targets:
//! - Browser (`wasm32`): requests go through `fetch` via `gloo-net`
//! - Native: requests go through `reqwest`
//!
//! Both transports share the same status and body interpretation, so a
//! failing response surfaces the same [`ApiError`] message everywhere.
//!
//! # Example
//!
//! ```ignore
//! use task_api::{CreateTaskPayload, TaskClient, TaskStatus};
//!
//! let client = TaskClient::new("https://localhost:7204");
//! let payload = CreateTaskPayload::new("Write report", "", TaskStatus::Todo, Some(due));
//! let task = client.create_task(&payload).await?;
//! let all = client.get_tasks().await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::{TASKS_PATH, TaskClient};
pub use config::{DEFAULT_API_BASE_URL, FrontendConfig};
pub use error::ApiError;
pub use model::{CreateTaskPayload, Task, TaskStatus};
