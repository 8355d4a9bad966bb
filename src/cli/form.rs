use super::locale::Labels;
use crate::domain::{Contact, ContactStore, Uuid};
use crate::errors::AppError;

/// Transient add/edit form state. Owned by the session, never by the store.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactForm {
    editing: Option<Uuid>,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    PhoneNumber,
    Email,
    Address,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Submitted {
    Added(Contact),
    Updated(Uuid),
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::PhoneNumber,
        FormField::Email,
        FormField::Address,
    ];

    pub fn label(self, labels: &Labels) -> &'static str {
        match self {
            FormField::Name => labels.name,
            FormField::PhoneNumber => labels.phone_number,
            FormField::Email => labels.email,
            FormField::Address => labels.address,
        }
    }
}

impl ContactForm {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn for_contact(contact: &Contact) -> Self {
        Self {
            editing: Some(contact.id),
            name: contact.name.clone(),
            phone_number: contact.phone_number.clone(),
            email: contact.email.clone(),
            address: contact.address.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }

    pub fn submit_label(&self, labels: &Labels) -> &'static str {
        if self.is_editing() {
            labels.update_contact
        } else {
            labels.add_contact
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::PhoneNumber => &self.phone_number,
            FormField::Email => &self.email,
            FormField::Address => &self.address,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::PhoneNumber => &mut self.phone_number,
            FormField::Email => &mut self.email,
            FormField::Address => &mut self.address,
        }
    }

    /// Adds a new contact, or updates the one being edited.
    pub fn submit(self, store: &mut ContactStore) -> Result<Submitted, AppError> {
        match self.editing {
            Some(id) => {
                store.edit_contact(&id, self.name, self.phone_number, self.email, self.address)?;
                Ok(Submitted::Updated(id))
            }
            None => Ok(Submitted::Added(store.add_contact(
                self.name,
                self.phone_number,
                self.email,
                self.address,
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::locale::Locale;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::blank();
        *form.field_mut(FormField::Name) = "Ann".to_string();
        *form.field_mut(FormField::PhoneNumber) = "1".to_string();
        *form.field_mut(FormField::Email) = "a@x.com".to_string();
        *form.field_mut(FormField::Address) = "Addr1".to_string();
        form
    }

    #[test]
    fn blank_form_adds() -> Result<(), AppError> {
        let mut store = ContactStore::new();
        let form = filled_form();
        assert!(!form.is_editing());
        assert_eq!(form.submit_label(Locale::En.labels()), "Add contact");

        let Submitted::Added(contact) = form.submit(&mut store)? else {
            panic!("blank form must add");
        };

        assert_eq!(store.len(), 1);
        assert_eq!(contact.name, "Ann");
        assert_eq!(contact.address, "Addr1");
        Ok(())
    }

    #[test]
    fn edit_form_is_prefilled_and_updates() -> Result<(), AppError> {
        let mut store = ContactStore::new();
        let ann = store.add_contact(
            "Ann".to_string(),
            "1".to_string(),
            "a@x.com".to_string(),
            "Addr1".to_string(),
        );

        let mut form = ContactForm::for_contact(&ann);
        assert_eq!(form.editing(), Some(ann.id));
        assert_eq!(form.field(FormField::Email), "a@x.com");
        assert_eq!(form.submit_label(Locale::Uk.labels()), "Оновити контакт");

        *form.field_mut(FormField::Email) = "ann@x.com".to_string();
        assert_eq!(form.submit(&mut store)?, Submitted::Updated(ann.id));

        let stored = store.get(&ann.id).expect("contact still present");
        assert_eq!(stored.email, "ann@x.com");
        assert_eq!(stored.name, "Ann");
        assert_eq!(store.len(), 1);
        Ok(())
    }

    #[test]
    fn edit_form_for_deleted_contact_reports_not_found() -> Result<(), AppError> {
        let mut store = ContactStore::new();
        let ann = store.add_contact(
            "Ann".to_string(),
            String::new(),
            String::new(),
            String::new(),
        );
        let form = ContactForm::for_contact(&ann);
        store.delete_contact(&ann.id)?;

        assert!(matches!(
            form.submit(&mut store),
            Err(AppError::NotFound(_))
        ));
        assert!(store.is_empty());
        Ok(())
    }
}
