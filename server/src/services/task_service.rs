use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::TaskError;
use crate::store::{merge, str_field, CollectionStore, Record};

const TASKS: &str = "tasks";

/// CRUD over the `tasks` collection. Tasks have no schema beyond the
/// assigned id; callers store whatever fields they send.
pub struct TaskService {
    store: Arc<dyn CollectionStore>,
    write_lock: Mutex<()>,
}

impl TaskService {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        TaskService {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn list(&self) -> Result<Vec<Record>, TaskError> {
        Ok(self.store.load(TASKS).await?)
    }

    /// Assigns a fresh id, then merges the caller's fields over it; a
    /// caller-supplied id therefore wins over the generated one.
    pub async fn create(&self, fields: Record) -> Result<Record, TaskError> {
        let _guard = self.write_lock.lock().await;
        let mut tasks = self.store.load(TASKS).await?;

        let mut task = Record::new();
        task.insert("id".into(), Value::String(Uuid::new_v4().to_string()));
        merge(&mut task, fields);

        tasks.push(task.clone());
        self.store.save(TASKS, &tasks).await?;
        Ok(task)
    }

    pub async fn update(&self, id: &str, fields: Record) -> Result<Record, TaskError> {
        let _guard = self.write_lock.lock().await;
        let mut tasks = self.store.load(TASKS).await?;

        let pos = tasks
            .iter()
            .position(|task| str_field(task, "id") == Some(id))
            .ok_or(TaskError::NotFound)?;
        merge(&mut tasks[pos], fields);
        let updated = tasks[pos].clone();
        self.store.save(TASKS, &tasks).await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<(), TaskError> {
        let _guard = self.write_lock.lock().await;
        let mut tasks = self.store.load(TASKS).await?;

        let before = tasks.len();
        tasks.retain(|task| str_field(task, "id") != Some(id));
        if tasks.len() == before {
            return Err(TaskError::NotFound);
        }
        self.store.save(TASKS, &tasks).await?;
        Ok(())
    }
}
