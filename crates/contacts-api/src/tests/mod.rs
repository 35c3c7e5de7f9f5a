#[cfg(test)]
#[allow(clippy::module_inception)]
pub mod tests {
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use contacts_core::contact::{Contact, ContactId, NewContact};
    use contacts_persistence::{ContactStoreApi, Result};

    // Need to wrap mocks, because traits are in a different crate
    mockall::mock! {
        pub ContactStoreApiMock {}

        #[async_trait]
        impl ContactStoreApi for ContactStoreApiMock {
            async fn get_all(&self) -> Result<Vec<Contact>>;
            async fn search(&self, search_term: &str) -> Result<Vec<Contact>>;
            async fn get(&self, id: &ContactId) -> Result<Option<Contact>>;
            async fn insert(&self, data: NewContact) -> Result<Contact>;
            async fn update(&self, id: &ContactId, data: NewContact) -> Result<Option<Contact>>;
            async fn delete(&self, id: &ContactId) -> Result<bool>;
        }
    }

    pub fn get_baseline_contact() -> Contact {
        Contact {
            id: ContactId::generate(),
            name: "John Smith".to_string(),
            email: "john@smith.com".to_string(),
            phone_number: "+43 660 1234567".to_string(),
            address: Some("Main Street 1, Vienna".to_string()),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }
}
