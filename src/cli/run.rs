use super::{
    command::{Cli, HELP, Intent},
    display_contact,
    form::{ContactForm, FormField, Submitted},
    get_input,
    locale::{Labels, Locale},
    screen, show_prompt,
};
use crate::{
    domain::{Contact, ContactStore},
    errors::AppError,
};
use clap::Parser;
use dotenv::dotenv;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Form answer that empties a field.
const CLEAR_FIELD: &str = "-";

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log)?;

    let mut store = ContactStore::new();
    store.set_query(cli.query);

    info!(lang = ?cli.lang, "contact book session started");

    let mut session = Session::new(
        store,
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr(),
        cli.lang,
    );
    session.run()?;

    info!(contacts = session.store().len(), "contact book session ended");
    Ok(())
}

fn init_tracing(directive: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(directive)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .try_init()?;
    Ok(())
}

/// The interactive contacts screen.
///
/// Reads one intent per line from `input`, applies it to the store and redraws
/// the screen on `out` only when the store revision moved (or on `list`).
/// Rejected intents are reported on `err` and the session carries on.
pub struct Session<R, W, E> {
    store: ContactStore,
    input: R,
    out: W,
    err: E,
    labels: &'static Labels,
    rendered: Option<u64>,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    pub fn new(store: ContactStore, input: R, out: W, err: E, locale: Locale) -> Self {
        Self {
            store,
            input,
            out,
            err,
            labels: locale.labels(),
            rendered: None,
        }
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn into_parts(self) -> (ContactStore, W, E) {
        (self.store, self.out, self.err)
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        self.render()?;

        loop {
            show_prompt(&mut self.out, "> ")?;

            let Some(line) = get_input(&mut self.input)? else {
                break; // end of input
            };
            if line.trim().is_empty() {
                continue;
            }

            let result = Intent::parse(&line).and_then(|intent| match intent {
                Intent::Quit => Ok(false),
                intent => self.dispatch(intent).map(|_| true),
            });

            match result {
                Ok(false) => break,
                Ok(true) => {}
                Err(AppError::Io(e)) => return Err(AppError::Io(e)),
                Err(e) => {
                    warn!(%line, error = %e, "intent rejected");
                    writeln!(self.err, "{}", e)?;
                }
            }

            if self.rendered != Some(self.store.revision()) {
                self.render()?;
            }
        }

        writeln!(self.out, "\n{}", self.labels.bye)?;
        self.out.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, intent: Intent) -> Result<(), AppError> {
        match intent {
            Intent::Add => self.open_form(ContactForm::blank()),
            Intent::Edit(row) => {
                let form = ContactForm::for_contact(self.contact_at(row)?);
                self.open_form(form)
            }
            Intent::Delete(row) => {
                let id = self.contact_at(row)?.id;
                self.store.delete_contact(&id)?;
                writeln!(self.out, "{}", self.labels.deleted)?;
                Ok(())
            }
            Intent::Search(query) => {
                self.store.set_query(query);
                Ok(())
            }
            Intent::Clear => {
                self.store.clear_query();
                Ok(())
            }
            Intent::Show(row) => {
                let details = display_contact(self.contact_at(row)?, self.labels);
                writeln!(self.out, "\n{}", details)?;
                Ok(())
            }
            Intent::List => self.render(),
            Intent::Help => {
                writeln!(self.out, "\n{}", HELP)?;
                Ok(())
            }
            Intent::Quit => Ok(()),
        }
    }

    /// Rows are 1-based positions in the currently visible list.
    fn contact_at(&self, row: usize) -> Result<&Contact, AppError> {
        let visible = self.store.visible();
        row.checked_sub(1)
            .and_then(|idx| visible.get(idx).copied())
            .ok_or_else(|| AppError::NotFound(format!("Row {}", row)))
    }

    fn open_form(&mut self, form: ContactForm) -> Result<(), AppError> {
        let Some(form) = self.fill_form(form)? else {
            writeln!(self.out, "{}", self.labels.cancelled)?;
            return Ok(());
        };

        match form.submit(&mut self.store)? {
            Submitted::Added(contact) => {
                info!(id = %contact.id, "contact created from form");
                writeln!(self.out, "{}", self.labels.added)?;
            }
            Submitted::Updated(id) => {
                info!(%id, "contact updated from form");
                writeln!(self.out, "{}", self.labels.updated_ok)?;
            }
        }
        Ok(())
    }

    /// Prompts for the four fields. `None` when the user backs out with `*`
    /// or the input ends mid-form. `-` empties a field.
    fn fill_form(&mut self, mut form: ContactForm) -> Result<Option<ContactForm>, AppError> {
        let labels = self.labels;

        writeln!(
            self.out,
            "\n{} ({})",
            form.submit_label(labels),
            labels.cancel_hint
        )?;
        if form.is_editing() {
            writeln!(self.out, "({})", labels.keep_hint)?;
        }

        for field in FormField::ALL {
            let prompt = if form.is_editing() {
                format!("{} [{}]: ", field.label(labels), form.field(field))
            } else {
                format!("{}: ", field.label(labels))
            };
            show_prompt(&mut self.out, &prompt)?;

            let Some(value) = get_input(&mut self.input)? else {
                return Ok(None);
            };
            if value == "*" {
                return Ok(None);
            }
            // Editing keeps the current value on an empty answer
            if value.is_empty() && form.is_editing() {
                continue;
            }
            if value == CLEAR_FIELD {
                form.field_mut(field).clear();
                continue;
            }
            *form.field_mut(field) = value;
        }

        Ok(Some(form))
    }

    fn render(&mut self) -> Result<(), AppError> {
        let snapshot = self.store.snapshot();
        write!(self.out, "{}", screen::render(&snapshot, self.labels))?;
        self.rendered = Some(snapshot.revision);
        Ok(())
    }
}
