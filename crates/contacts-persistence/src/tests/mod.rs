#[cfg(test)]
#[allow(clippy::module_inception)]
pub mod tests {
    use crate::db::{SurrealDbConfig, get_surreal_db};
    use chrono::{TimeZone, Utc};
    use contacts_core::contact::{ContactPayload, NewContact};
    use surrealdb::{Surreal, engine::any::Any};

    pub async fn get_memory_db() -> Surreal<Any> {
        get_surreal_db(&SurrealDbConfig::new("mem://", "test", "test"))
            .await
            .expect("could not create memory db")
    }

    pub fn new_contact(name: &str, email: &str) -> NewContact {
        NewContact::from_payload(
            ContactPayload {
                name: Some(name.to_string()),
                email: Some(email.to_string()),
                phone_number: Some("+43 660 1234567".to_string()),
                address: None,
                created_at: None,
            },
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        )
        .expect("valid contact")
    }
}
