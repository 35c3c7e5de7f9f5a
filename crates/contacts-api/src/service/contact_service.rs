use super::{Error, Result};
use async_trait::async_trait;
use contacts_core::{
    contact::{Contact, ContactId, ContactPayload, NewContact},
    util,
};
use contacts_persistence::ContactStoreApi;
use log::debug;
#[cfg(test)]
use mockall::automock;
use std::sync::Arc;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContactServiceApi: Send + Sync {
    /// Returns all contacts, or only the ones whose name or email contains the search term
    async fn search_contacts(&self, search_term: Option<String>) -> Result<Vec<Contact>>;

    /// Applies the storage schema to the payload and stores the resulting contact
    async fn create_contact(&self, payload: ContactPayload) -> Result<Contact>;

    async fn get_contact(&self, id: &str) -> Result<Contact>;

    /// Applies the supplied fields to the stored contact and returns the updated contact
    async fn update_contact(&self, id: &str, payload: ContactPayload) -> Result<Contact>;

    async fn delete_contact(&self, id: &str) -> Result<()>;
}

/// The contact service is responsible for managing the stored contacts
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStoreApi>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStoreApi>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ContactServiceApi for ContactService {
    async fn search_contacts(&self, search_term: Option<String>) -> Result<Vec<Contact>> {
        let contacts = match search_term.filter(|term| !term.is_empty()) {
            Some(term) => self.store.search(&term).await?,
            None => self.store.get_all().await?,
        };
        Ok(contacts)
    }

    async fn create_contact(&self, payload: ContactPayload) -> Result<Contact> {
        let new_contact = NewContact::from_payload(payload, util::now())?;
        let contact = self.store.insert(new_contact).await?;
        debug!("Created contact {}", contact.id);
        Ok(contact)
    }

    async fn get_contact(&self, id: &str) -> Result<Contact> {
        let id = ContactId::parse(id)?;
        self.store.get(&id).await?.ok_or(Error::NotFound)
    }

    async fn update_contact(&self, id: &str, payload: ContactPayload) -> Result<Contact> {
        let id = ContactId::parse(id)?;
        let existing = self.store.get(&id).await?.ok_or(Error::NotFound)?;
        let merged = existing.merge(payload)?;
        // the contact can vanish between reading and writing it
        let updated = self.store.update(&id, merged).await?.ok_or(Error::NotFound)?;
        debug!("Updated contact {id}");
        Ok(updated)
    }

    async fn delete_contact(&self, id: &str) -> Result<()> {
        let id = ContactId::parse(id)?;
        if !self.store.delete(&id).await? {
            return Err(Error::NotFound);
        }
        debug!("Deleted contact {id}");
        Ok(())
    }
}
