pub mod contact;
pub mod manager;

use crate::errors::AppError;
pub use uuid::Uuid;

pub use contact::Contact;
pub use manager::{ContactStore, Snapshot};
