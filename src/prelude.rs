pub use crate::cli::{
    Session,
    command::{self, Cli, Intent},
    form::{ContactForm, FormField, Submitted},
    locale::{Labels, Locale},
    run_app, screen,
};
pub use crate::domain::{
    Uuid,
    contact::{self, Contact},
    manager::{self, ContactStore, Snapshot},
};
pub use crate::errors::AppError;
