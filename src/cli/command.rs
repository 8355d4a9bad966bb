use clap::Parser;

use super::locale::Locale;
use crate::errors::AppError;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Language of the screen labels (en, uk)
    #[arg(long, env = "CONTACTS_LANG", value_enum, default_value_t = Locale::En)]
    pub lang: Locale,

    /// Log filter directive, e.g. "debug" or "contact_book=trace"
    #[arg(long, env = "CONTACTS_LOG", default_value_t = String::from("warn"))]
    pub log: String,

    /// Search query the session starts with
    #[arg(long, env = "CONTACTS_QUERY", default_value_t = String::new())]
    pub query: String,
}

/// One user intent read from a session input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Intent {
    Add,
    Edit(usize),
    Delete(usize),
    Search(String),
    Clear,
    Show(usize),
    List,
    Help,
    Quit,
}

impl Intent {
    pub fn parse(line: &str) -> Result<Self, AppError> {
        let line = line.trim_start();
        // Only the single separator is dropped; the search text keeps its spaces
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line.trim_end(), ""));

        match word.to_lowercase().as_str() {
            "add" | "a" => Ok(Intent::Add),
            "edit" | "e" => Ok(Intent::Edit(parse_row(rest)?)),
            "delete" | "d" | "rm" => Ok(Intent::Delete(parse_row(rest)?)),
            "search" | "/" => Ok(Intent::Search(rest.to_string())),
            "clear" => Ok(Intent::Clear),
            "show" | "s" => Ok(Intent::Show(parse_row(rest)?)),
            "list" | "ls" => Ok(Intent::List),
            "help" | "?" => Ok(Intent::Help),
            "quit" | "exit" | "q" => Ok(Intent::Quit),
            _ => Err(AppError::ParseCommand(line.trim_end().to_string())),
        }
    }
}

fn parse_row(arg: &str) -> Result<usize, AppError> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Err(AppError::Validation("Row number required".to_string()));
    }

    let row = arg.parse::<usize>()?;
    if row == 0 {
        return Err(AppError::Validation("Row numbers start at 1".to_string()));
    }
    Ok(row)
}

pub const HELP: &str = "\
add            open the form for a new contact
edit <row>     edit the contact on that row
delete <row>   delete the contact on that row
show <row>     show every field of the contact on that row
search <text>  filter by name (alias: / <text>), spaces around <text> count
clear          clear the search
list           redraw the screen
help           this text
quit           leave (contacts are not kept)

In the add/edit form:
*              go back without saving (a field cannot hold a lone *)
<empty>        keep the current value when editing
-              clear the field when editing";
