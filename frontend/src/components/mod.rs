mod form;
mod notifications;
mod task_card;
mod task_table;

pub use form::task_form;
pub use notifications::notifications;
pub use task_card::created_task_card;
pub use task_table::task_list;
