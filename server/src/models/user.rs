use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::store::Record;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub avatar: String,
    pub color: String,
}

impl User {
    /// Builds a user for registration: fresh uuid id, random avatar
    /// color, placeholder avatar URL templated with color and initials.
    pub fn new(name: String, email: String, password: String, role: String) -> Self {
        let color = random_color();
        let initials = initials(&name);
        User {
            id: Uuid::new_v4().to_string(),
            avatar: format!("https://placehold.co/150x150/{color}/ffffff?text={initials}"),
            color: format!("#{color}"),
            name,
            email,
            password,
            role,
        }
    }

    pub fn into_record(self) -> Record {
        let mut record = Record::new();
        record.insert("id".into(), Value::String(self.id));
        record.insert("name".into(), Value::String(self.name));
        record.insert("email".into(), Value::String(self.email));
        record.insert("password".into(), Value::String(self.password));
        record.insert("role".into(), Value::String(self.role));
        record.insert("avatar".into(), Value::String(self.avatar));
        record.insert("color".into(), Value::String(self.color));
        record
    }
}

const HEX: &[u8; 16] = b"0123456789ABCDEF";

fn random_color() -> String {
    let mut rng = rand::thread_rng();
    (0..6).map(|_| HEX[rng.gen_range(0..16)] as char).collect()
}

/// First letter of the first two whitespace-separated name tokens,
/// uppercased. An empty name yields "??".
fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect();
    if letters.is_empty() {
        "??".to_string()
    } else {
        letters.to_uppercase()
    }
}
