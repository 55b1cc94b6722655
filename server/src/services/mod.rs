pub mod task_service;
pub mod user_service;
