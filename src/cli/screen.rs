use super::locale::Labels;
use crate::domain::{Contact, Snapshot};

/// Draws the single contacts screen for one snapshot.
pub fn render(snapshot: &Snapshot<'_>, labels: &Labels) -> String {
    let mut screen = format!("\n--- {} ---\n", labels.title);
    screen.push_str(&format!("{}: {}\n\n", labels.search, snapshot.query));

    if snapshot.contacts.is_empty() {
        if snapshot.query.is_empty() {
            screen.push_str(labels.no_contacts);
        } else {
            screen.push_str(&format!("{} '{}'", labels.no_matches, snapshot.query));
        }
        screen.push('\n');
    }

    for (i, contact) in snapshot.contacts.iter().enumerate() {
        screen.push_str(&listing_row(i + 1, contact));
        screen.push('\n');
    }

    screen.push_str(&format!(
        "\n[add] {}   [{} <row>]   [{} <row>]   [help]\n",
        labels.add_new, labels.edit, labels.delete
    ));
    screen
}

pub fn listing_row(row: usize, c: &Contact) -> String {
    format!(
        "{row:>3}. {:<20} {:15} {:^30} {:<15}",
        c.name, c.phone_number, c.email, c.address
    )
}
