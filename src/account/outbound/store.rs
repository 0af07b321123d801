use async_trait::async_trait;
use bb8_redis::{RedisConnectionManager, bb8};
use redis::AsyncCommands;
use thiserror::Error;

use crate::account::domain::profile::Profile;
use crate::account::outbound::model::ProfileDocument;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis operation failed")]
    Redis(#[from] redis::RedisError),

    #[error("Redis connection pool error")]
    Pool(#[from] bb8::RunError<redis::RedisError>),

    #[error("Failed to encode or decode a profile document")]
    Document(#[from] serde_json::Error),
}

/// Key-value document interface over the remote profile collection.
///
/// One document per identity, keyed by uid. `put` is a full overwrite; there
/// are no partial updates and no retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn fetch(&self, uid: &str) -> Result<Option<Profile>, StoreError>;
    async fn put(&self, uid: &str, profile: &Profile) -> Result<(), StoreError>;
    async fn exists(&self, uid: &str) -> Result<bool, StoreError>;
}

pub struct RedisProfileStore {
    pool: bb8::Pool<RedisConnectionManager>,
    collection: String,
}

impl RedisProfileStore {
    pub fn new(pool: bb8::Pool<RedisConnectionManager>, collection: String) -> Self {
        Self { pool, collection }
    }

    fn key(&self, uid: &str) -> String {
        format!("{}:{}", self.collection, uid)
    }
}

#[async_trait]
impl ProfileStore for RedisProfileStore {
    async fn fetch(&self, uid: &str) -> Result<Option<Profile>, StoreError> {
        let mut conn = self.pool.get().await?;
        let raw: Option<String> = conn.get(self.key(uid)).await?;

        match raw {
            Some(raw) => {
                let document: ProfileDocument = serde_json::from_str(&raw)?;
                Ok(Some(document.into()))
            },
            None => Ok(None),
        }
    }

    async fn put(&self, uid: &str, profile: &Profile) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await?;
        let raw = serde_json::to_string(&ProfileDocument::from(profile.clone()))?;
        let _: () = conn.set(self.key(uid), raw).await?;
        Ok(())
    }

    async fn exists(&self, uid: &str) -> Result<bool, StoreError> {
        let mut conn = self.pool.get().await?;
        let exists: bool = conn.exists(self.key(uid)).await?;
        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn keys_are_namespaced_by_collection() {
        let manager = RedisConnectionManager::new("redis://127.0.0.1:1").unwrap();
        let pool = bb8::Pool::builder().build_unchecked(manager);
        let store = RedisProfileStore::new(pool, "users".to_string());

        assert_eq!(store.key("u1"), "users:u1");
    }
}
