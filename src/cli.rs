pub mod command;
pub mod form;
pub mod locale;
pub mod run;
pub mod screen;

pub use run::{Session, run_app};

use crate::domain::Contact;
use crate::errors::AppError;
use locale::Labels;
use std::io::{BufRead, Write};

// OUTPUT FUNCTIONS
pub fn display_contact(contact: &Contact, labels: &Labels) -> String {
    format!(
        "{}: {}\n\
        {}: {}\n\
        {}: {}\n\
        {}: {}\n\
        {}: {}\n\
        {}: {}",
        labels.name,
        contact.name,
        labels.phone_number,
        contact.phone_number,
        labels.email,
        contact.email,
        labels.address,
        contact.address,
        labels.created,
        contact.created_at.date_naive(),
        labels.updated,
        contact.updated_at.date_naive(),
    )
}

pub fn show_prompt<W: Write>(out: &mut W, prompt: &str) -> Result<(), AppError> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    Ok(())
}

// INPUT FUNCTIONS

/// Next line without its line ending, or `None` once the input is exhausted.
/// Other whitespace is kept as typed.
pub fn get_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
