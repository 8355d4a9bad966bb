use super::*;
pub use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: Uuid,

    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    pub fn new(name: String, phone_number: String, email: String, address: String) -> Self {
        let now = Utc::now();
        Contact {
            id: Uuid::new_v4(),
            name,
            phone_number,
            email,
            address,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces all four text fields. Identity and `created_at` are kept.
    pub fn update(&mut self, name: String, phone_number: String, email: String, address: String) {
        self.name = name;
        self.phone_number = phone_number;
        self.email = email;
        self.address = address;
        self.updated_at = Utc::now();
    }

    /// `needle` must already be lowercased.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}
