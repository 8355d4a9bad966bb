use super::*;

use tracing::debug;

/// Ordered, in-memory owner of every contact plus the current search query.
///
/// Every state change bumps [`ContactStore::revision`], which is the only
/// change signal the store gives out. Callers compare revisions to decide
/// whether a fresh [`Snapshot`] needs rendering.
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    query: String,
    revision: u64,
}

/// Borrowed view of the store at one revision.
#[derive(Debug)]
pub struct Snapshot<'a> {
    pub revision: u64,
    pub query: &'a str,
    pub contacts: Vec<&'a Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn contact_list(&self) -> Vec<&Contact> {
        self.contacts.iter().collect()
    }

    pub fn get(&self, id: &Uuid) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == *id)
    }

    pub fn add_contact(
        &mut self,
        name: String,
        phone_number: String,
        email: String,
        address: String,
    ) -> Contact {
        let contact = Contact::new(name, phone_number, email, address);
        debug!(id = %contact.id, "contact added");

        self.contacts.push(contact.clone());
        self.bump();
        contact
    }

    pub fn edit_contact(
        &mut self,
        id: &Uuid,
        new_name: String,
        new_phone_number: String,
        new_email: String,
        new_address: String,
    ) -> Result<(), AppError> {
        match self.contacts.iter_mut().find(|c| c.id == *id) {
            Some(contact) => {
                contact.update(new_name, new_phone_number, new_email, new_address);
                debug!(%id, "contact edited");
                self.bump();
                Ok(())
            }
            None => Err(AppError::NotFound("Contact".to_string())),
        }
    }

    pub fn delete_contact(&mut self, id: &Uuid) -> Result<(), AppError> {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != *id);

        if self.contacts.len() == before {
            return Err(AppError::NotFound("Contact".to_string()));
        }

        debug!(%id, "contact deleted");
        self.bump();
        Ok(())
    }

    /// Contacts whose name contains `query`, ignoring case, in stored order.
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        if query.is_empty() {
            return self.contact_list();
        }

        let needle = query.to_lowercase();
        self.contacts
            .iter()
            .filter(|c| c.name_contains(&needle))
            .collect()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: String) {
        if self.query == query {
            return;
        }
        debug!(%query, "search query changed");
        self.query = query;
        self.bump();
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Result of [`ContactStore::search`] for the current query.
    pub fn visible(&self) -> Vec<&Contact> {
        self.search(&self.query)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            revision: self.revision,
            query: &self.query,
            contacts: self.visible(),
        }
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
