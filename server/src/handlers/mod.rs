pub mod auth_handlers;
pub mod task_handlers;
pub mod user_handlers;
