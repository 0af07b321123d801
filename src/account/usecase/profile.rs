use async_trait::async_trait;
use std::sync::Arc;

use crate::account::domain::identity::Identity;
use crate::account::domain::profile::Profile;
use crate::account::outbound::store::{ProfileStore, StoreError};

/// Keeps one remote profile document in sync per identity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileSync: Send + Sync {
    /// Returns the stored profile, creating the default record on first use.
    async fn get_or_create(&self, identity: &Identity) -> Result<Profile, StoreError>;

    /// Overwrites the stored document wholesale and returns what was written.
    async fn save(&self, identity: &Identity, profile: Profile) -> Result<Profile, StoreError>;
}

pub struct ProfileSyncService {
    store: Arc<dyn ProfileStore>,
}

impl ProfileSyncService {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProfileSync for ProfileSyncService {
    async fn get_or_create(&self, identity: &Identity) -> Result<Profile, StoreError> {
        if self.store.exists(&identity.uid).await? {
            // Stored records are returned verbatim, without migration or
            // merging.
            if let Some(profile) = self.store.fetch(&identity.uid).await? {
                return Ok(profile);
            }
        }

        let profile = Profile::default_for(&identity.email);
        self.store.put(&identity.uid, &profile).await?;

        Ok(profile)
    }

    async fn save(&self, identity: &Identity, mut profile: Profile) -> Result<Profile, StoreError> {
        // The form may edit the email locally like any other field, but the
        // stored document always carries the identity's own address.
        profile.email = identity.email.clone();

        self.store.put(&identity.uid, &profile).await?;

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::outbound::store::MockProfileStore;

    fn identity() -> Identity {
        Identity {
            uid: "u1".to_string(),
            email: "a@x.com".to_string(),
        }
    }

    #[tokio::test]
    async fn get_or_create_writes_the_default_record_on_first_use() {
        let mut store = MockProfileStore::new();
        store.expect_exists().returning(|_| Ok(false));
        store
            .expect_put()
            .withf(|uid, profile| uid == "u1" && *profile == Profile::default_for("a@x.com"))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ProfileSyncService::new(Arc::new(store));

        let profile = service.get_or_create(&identity()).await.unwrap();

        assert_eq!(profile, Profile::default_for("a@x.com"));
    }

    #[tokio::test]
    async fn get_or_create_returns_the_stored_record_verbatim() {
        let mut stored = Profile::default_for("a@x.com");
        stored.first_name = "Jane".to_string();
        stored.age = "not a number".to_string();

        let mut store = MockProfileStore::new();
        store.expect_exists().returning(|_| Ok(true));
        let fetched = stored.clone();
        store.expect_fetch().returning(move |_| Ok(Some(fetched.clone())));
        store.expect_put().never();

        let service = ProfileSyncService::new(Arc::new(store));

        // Repeated calls do not mutate the store.
        let first = service.get_or_create(&identity()).await.unwrap();
        let second = service.get_or_create(&identity()).await.unwrap();

        assert_eq!(first, stored);
        assert_eq!(second, stored);
    }

    #[tokio::test]
    async fn save_forces_the_email_to_the_identity_address() {
        let mut store = MockProfileStore::new();
        store
            .expect_put()
            .withf(|uid, profile| uid == "u1" && profile.email == "a@x.com" && profile.first_name == "Jane")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ProfileSyncService::new(Arc::new(store));

        let mut edited = Profile::default_for("someone-else@x.com");
        edited.first_name = "Jane".to_string();

        let saved = service.save(&identity(), edited).await.unwrap();

        assert_eq!(saved.email, "a@x.com");
        assert_eq!(saved.first_name, "Jane");
    }

    #[tokio::test]
    async fn save_propagates_store_failures() {
        let mut store = MockProfileStore::new();
        store.expect_put().returning(|_, _| {
            let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
            Err(StoreError::Document(json_err))
        });

        let service = ProfileSyncService::new(Arc::new(store));

        let result = service.save(&identity(), Profile::default_for("a@x.com")).await;

        assert!(result.is_err());
    }
}
