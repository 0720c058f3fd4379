//! Task CRUD route handlers

pub mod create;
pub mod delete;
pub mod list;
pub mod update;

pub use create::create_task;
pub use delete::delete_task;
pub use list::list_tasks;
pub use update::update_task;
