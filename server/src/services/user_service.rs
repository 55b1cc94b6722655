use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::UserError;
use crate::models::user::User;
use crate::store::{merge, str_field, CollectionStore, Record};

const USERS: &str = "users";

/// CRUD over the `users` collection. Every operation loads the whole
/// collection, scans it linearly, and on mutation writes it back in
/// full; the write lock keeps concurrent read-modify-write cycles from
/// overwriting each other.
pub struct UserService {
    store: Arc<dyn CollectionStore>,
    write_lock: Mutex<()>,
}

impl UserService {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        UserService {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Exact (email, password) match against the stored cleartext
    /// values. Returns the full stored record, password included.
    pub async fn login(&self, email: &str, password: &str) -> Result<Record, UserError> {
        let users = self.store.load(USERS).await?;
        users
            .into_iter()
            .find(|user| {
                str_field(user, "email") == Some(email)
                    && str_field(user, "password") == Some(password)
            })
            .ok_or(UserError::InvalidCredentials)
    }

    /// Email uniqueness is checked only here, against the collection as
    /// stored at registration time.
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: String,
        role: String,
    ) -> Result<Record, UserError> {
        let _guard = self.write_lock.lock().await;
        let mut users = self.store.load(USERS).await?;

        if users.iter().any(|user| str_field(user, "email") == Some(email.as_str())) {
            return Err(UserError::AlreadyExists);
        }

        let record = User::new(name, email, password, role).into_record();
        users.push(record.clone());
        self.store.save(USERS, &users).await?;
        Ok(record)
    }

    /// Shallow-merges `fields` over the record with the given id.
    pub async fn update_profile(&self, id: &str, fields: Record) -> Result<Record, UserError> {
        let _guard = self.write_lock.lock().await;
        let mut users = self.store.load(USERS).await?;

        let pos = users
            .iter()
            .position(|user| str_field(user, "id") == Some(id))
            .ok_or(UserError::NotFound)?;
        merge(&mut users[pos], fields);
        let updated = users[pos].clone();
        self.store.save(USERS, &users).await?;
        Ok(updated)
    }

    /// The full collection with the password field stripped from every
    /// record.
    pub async fn list_sanitized(&self) -> Result<Vec<Record>, UserError> {
        let mut users = self.store.load(USERS).await?;
        for user in &mut users {
            user.remove("password");
        }
        Ok(users)
    }
}
