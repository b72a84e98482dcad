use async_trait::async_trait;

use super::domain::User;
use crate::errors::ServiceError;

/// Storage collaborator for user records.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored record in ascending id order.
    async fn find_all(&self) -> Result<Vec<User>, ServiceError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ServiceError>;

    /// Persist `user`: insert and assign an id when `user.id` is `None`,
    /// otherwise overwrite the existing row. Overwriting an unknown id is
    /// [`ServiceError::NotFound`].
    async fn save(&self, user: User) -> Result<User, ServiceError>;

    /// Remove a record; unknown ids are a silent no-op.
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;

    /// First record whose username matches exactly, lowest id first.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ServiceError>;
}

/// In-memory repository for tests and doc examples
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::RwLock;
    use tracing::debug;

    #[derive(Debug)]
    struct Table {
        rows: BTreeMap<i64, User>,
        next_id: i64,
    }

    #[derive(Debug)]
    pub struct InMemoryUserRepository {
        table: RwLock<Table>,
    }

    impl Default for InMemoryUserRepository {
        fn default() -> Self {
            Self { table: RwLock::new(Table { rows: BTreeMap::new(), next_id: 1 }) }
        }
    }

    impl InMemoryUserRepository {
        pub fn new() -> Self { Self::default() }

        pub async fn len(&self) -> usize { self.table.read().await.rows.len() }

        pub async fn is_empty(&self) -> bool { self.len().await == 0 }
    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn find_all(&self) -> Result<Vec<User>, ServiceError> {
            Ok(self.table.read().await.rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<User>, ServiceError> {
            Ok(self.table.read().await.rows.get(&id).cloned())
        }

        async fn save(&self, mut user: User) -> Result<User, ServiceError> {
            let mut table = self.table.write().await;
            match user.id {
                Some(id) => {
                    let row = table.rows.get_mut(&id).ok_or_else(|| ServiceError::not_found("user"))?;
                    *row = user.clone();
                }
                None => {
                    let id = table.next_id;
                    table.next_id += 1;
                    user.id = Some(id);
                    table.rows.insert(id, user.clone());
                    debug!(user_id = id, "memory_insert");
                }
            }
            Ok(user)
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
            self.table.write().await.rows.remove(&id);
            Ok(())
        }

        async fn find_by_username(&self, username: &str) -> Result<Option<User>, ServiceError> {
            let table = self.table.read().await;
            Ok(table.rows.values().find(|u| u.username == username).cloned())
        }
    }
}
