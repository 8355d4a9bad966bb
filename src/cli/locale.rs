use clap::ValueEnum;

/// Language of the screen's display strings. Error messages stay in English.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Uk,
}

pub struct Labels {
    pub title: &'static str,
    pub search: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub add_new: &'static str,
    pub name: &'static str,
    pub phone_number: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub add_contact: &'static str,
    pub update_contact: &'static str,
    pub cancel_hint: &'static str,
    pub keep_hint: &'static str,
    pub no_contacts: &'static str,
    pub no_matches: &'static str,
    pub added: &'static str,
    pub updated_ok: &'static str,
    pub deleted: &'static str,
    pub cancelled: &'static str,
    pub bye: &'static str,
}

const EN: Labels = Labels {
    title: "Contacts",
    search: "Search",
    edit: "edit",
    delete: "delete",
    add_new: "Add new contact",
    name: "Name",
    phone_number: "Phone number",
    email: "Email",
    address: "Address",
    created: "Created on",
    updated: "Updated on",
    add_contact: "Add contact",
    update_contact: "Update contact",
    cancel_hint: "* to go back",
    keep_hint: "empty keeps the current value, - clears it",
    no_contacts: "No contact yet",
    no_matches: "Couldn't find a name with",
    added: "Contact added successfully",
    updated_ok: "Contact updated successfully",
    deleted: "Contact deleted successfully",
    cancelled: "Nothing changed",
    bye: "Bye!",
};

const UK: Labels = Labels {
    title: "Контакти",
    search: "Пошук",
    edit: "редагувати",
    delete: "видалити",
    add_new: "Додати новий контакт",
    name: "Ім'я",
    phone_number: "Номер телефону",
    email: "Електронна пошта",
    address: "Адреса",
    created: "Створено",
    updated: "Оновлено",
    add_contact: "Додати контакт",
    update_contact: "Оновити контакт",
    cancel_hint: "* щоб повернутися",
    keep_hint: "порожнє значення залишає поточне, - очищує його",
    no_contacts: "Контактів ще немає",
    no_matches: "Не знайдено імені з",
    added: "Контакт додано",
    updated_ok: "Контакт оновлено",
    deleted: "Контакт видалено",
    cancelled: "Нічого не змінено",
    bye: "До побачення!",
};

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::Uk => &UK,
        }
    }
}
