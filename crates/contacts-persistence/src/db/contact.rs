use super::super::{Error, Result};
use crate::constants::{DB_SEARCH_TERM, DB_TABLE};
use crate::contact::ContactStoreApi;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contacts_core::contact::{Contact, ContactId, NewContact};
use serde::{Deserialize, Serialize};
use surrealdb::{Surreal, engine::any::Any, sql::Thing};

#[derive(Clone)]
pub struct SurrealContactStore {
    db: Surreal<Any>,
}

impl SurrealContactStore {
    const TABLE: &'static str = "contacts";

    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactStoreApi for SurrealContactStore {
    async fn get_all(&self) -> Result<Vec<Contact>> {
        let result: Vec<ContactDb> = self.db.select(Self::TABLE).await?;
        result.into_iter().map(|c| c.try_into()).collect()
    }

    async fn search(&self, search_term: &str) -> Result<Vec<Contact>> {
        let result: Vec<ContactDb> = self
            .db
            .query(
                "SELECT * FROM type::table($table) WHERE \
                 string::contains(string::lowercase(name), $search_term) \
                 OR string::contains(string::lowercase(email), $search_term)",
            )
            .bind((DB_TABLE, Self::TABLE))
            .bind((DB_SEARCH_TERM, search_term.to_lowercase()))
            .await?
            .take(0)?;
        result.into_iter().map(|c| c.try_into()).collect()
    }

    async fn get(&self, id: &ContactId) -> Result<Option<Contact>> {
        let result: Option<ContactDb> = self.db.select((Self::TABLE, id.to_string())).await?;
        result.map(|c| c.try_into()).transpose()
    }

    async fn insert(&self, data: NewContact) -> Result<Contact> {
        let id = ContactId::generate();
        let entity = ContactDb::new(Self::TABLE, &id, data);
        let created: Option<ContactDb> = self
            .db
            .create((Self::TABLE, id.to_string()))
            .content(entity)
            .await?;
        match created {
            Some(contact) => contact.try_into(),
            None => Err(Error::InsertFailed(format!("contact {id}"))),
        }
    }

    async fn update(&self, id: &ContactId, data: NewContact) -> Result<Option<Contact>> {
        let entity = ContactDb::new(Self::TABLE, id, data);
        let updated: Option<ContactDb> = self
            .db
            .update((Self::TABLE, id.to_string()))
            .content(entity)
            .await?;
        updated.map(|c| c.try_into()).transpose()
    }

    async fn delete(&self, id: &ContactId) -> Result<bool> {
        let deleted: Option<ContactDb> = self.db.delete((Self::TABLE, id.to_string())).await?;
        Ok(deleted.is_some())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContactDb {
    id: Thing,
    name: String,
    email: String,
    phone_number: String,
    address: Option<String>,
    created_at: DateTime<Utc>,
}

impl ContactDb {
    fn new(table: &str, id: &ContactId, data: NewContact) -> Self {
        Self {
            id: Thing::from((table, id.to_string().as_str())),
            name: data.name,
            email: data.email,
            phone_number: data.phone_number,
            address: data.address,
            created_at: data.created_at,
        }
    }
}

impl TryFrom<ContactDb> for Contact {
    type Error = Error;

    fn try_from(value: ContactDb) -> Result<Self> {
        Ok(Self {
            id: ContactId::parse(&value.id.id.to_raw())?,
            name: value.name,
            email: value.email,
            phone_number: value.phone_number,
            address: value.address,
            created_at: value.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::tests::{get_memory_db, new_contact};

    async fn get_store() -> SurrealContactStore {
        SurrealContactStore::new(get_memory_db().await)
    }

    #[tokio::test]
    async fn test_insert_and_get_contact() {
        let store = get_store().await;
        let created = store
            .insert(new_contact("Jane Smith", "jane@smith.com"))
            .await
            .expect("could not insert contact");
        assert_eq!(created.name, "Jane Smith");
        assert_eq!(created.email, "jane@smith.com");

        let fetched = store
            .get(&created.id)
            .await
            .expect("could not get contact")
            .expect("contact is missing");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_insert_assigns_distinct_ids() {
        let store = get_store().await;
        let first = store
            .insert(new_contact("Jane Smith", "jane@smith.com"))
            .await
            .unwrap();
        let second = store
            .insert(new_contact("Jane Smith", "jane@smith.com"))
            .await
            .unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(store.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_unknown_contact() {
        let store = get_store().await;
        let result = store.get(&ContactId::generate()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_search_contacts() {
        let store = get_store().await;
        store
            .insert(new_contact("John Smith", "john@example.com"))
            .await
            .unwrap();
        store
            .insert(new_contact("Anna Berger", "anna.smithson@example.com"))
            .await
            .unwrap();
        store
            .insert(new_contact("Peter Parker", "peter@example.com"))
            .await
            .unwrap();

        let mut names: Vec<String> = store
            .search("SMITH")
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["Anna Berger", "John Smith"]);

        assert!(store.search("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_is_literal() {
        let store = get_store().await;
        store
            .insert(new_contact("John Smith", "john@example.com"))
            .await
            .unwrap();
        assert!(store.search("j.hn").await.unwrap().is_empty());
        assert_eq!(store.search("n s").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_contact() {
        let store = get_store().await;
        let created = store
            .insert(new_contact("Jane Smith", "jane@smith.com"))
            .await
            .unwrap();
        let updated = store
            .update(&created.id, new_contact("Jane Doe", "jane@doe.com"))
            .await
            .unwrap()
            .expect("contact is missing");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Jane Doe");

        let fetched = store.get(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.email, "jane@doe.com");
    }

    #[tokio::test]
    async fn test_update_unknown_contact() {
        let store = get_store().await;
        let result = store
            .update(&ContactId::generate(), new_contact("Jane", "jane@doe.com"))
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_contact() {
        let store = get_store().await;
        let created = store
            .insert(new_contact("Jane Smith", "jane@smith.com"))
            .await
            .unwrap();
        assert!(store.delete(&created.id).await.unwrap());
        assert!(store.get(&created.id).await.unwrap().is_none());
        assert!(!store.delete(&created.id).await.unwrap());
    }
}
