pub use contacts_core::contact;
pub use contacts_core::validation;
