use super::Result;
use async_trait::async_trait;
use contacts_core::contact::{Contact, ContactId, NewContact};

/// Document store for contacts. Implementations share one connection across all callers and
/// don't coordinate concurrent writes to the same contact.
#[async_trait]
pub trait ContactStoreApi: Send + Sync {
    /// Returns all contacts in the store's natural order
    async fn get_all(&self) -> Result<Vec<Contact>>;
    /// Returns the contacts whose name or email contains the search term, ignoring case
    async fn search(&self, search_term: &str) -> Result<Vec<Contact>>;
    async fn get(&self, id: &ContactId) -> Result<Option<Contact>>;
    /// Stores a new contact, assigning it a fresh id
    async fn insert(&self, data: NewContact) -> Result<Contact>;
    /// Replaces the document of an existing contact, returns `None` if there is no such contact
    async fn update(&self, id: &ContactId, data: NewContact) -> Result<Option<Contact>>;
    /// Removes the contact, returns `false` if there was no such contact
    async fn delete(&self, id: &ContactId) -> Result<bool>;
}
