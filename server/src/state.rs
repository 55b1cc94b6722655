use std::sync::Arc;

use crate::services::task_service::TaskService;
use crate::services::user_service::UserService;
use crate::store::CollectionStore;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub tasks: Arc<TaskService>,
}

impl AppState {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        AppState {
            users: Arc::new(UserService::new(store.clone())),
            tasks: Arc::new(TaskService::new(store)),
        }
    }
}
