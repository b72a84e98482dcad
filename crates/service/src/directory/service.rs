use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{UpdateOutcome, User};
use super::repository::UserRepository;
use crate::errors::ServiceError;

/// Directory business service independent of web framework.
///
/// Holds no state of its own beyond the storage handle; every call is a
/// single storage round trip except [`DirectoryService::update_user`],
/// which reads then writes without any lock between the two.
pub struct DirectoryService<R: UserRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: UserRepository + ?Sized> DirectoryService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
        let users = self.repo.find_all().await?;
        debug!(count = users.len(), "list_users");
        Ok(users)
    }

    /// `Ok(None)` for ids that do not exist.
    pub async fn get_user(&self, id: i64) -> Result<Option<User>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    /// Store a new record. Any id on the input is discarded.
    ///
    /// # Examples
    /// ```
    /// use service::directory::{DirectoryService, User};
    /// use service::directory::repository::memory::InMemoryUserRepository;
    /// use std::sync::Arc;
    /// let svc = DirectoryService::new(Arc::new(InMemoryUserRepository::new()));
    /// let input = User { id: Some(42), ..User::new("alice", "a@x.com", "student") };
    /// let created = tokio_test::block_on(svc.create_user(input)).unwrap();
    /// assert_eq!(created.id, Some(1));
    /// assert_eq!(created.username, "alice");
    /// ```
    #[instrument(skip(self, user), fields(username = %user.username))]
    pub async fn create_user(&self, mut user: User) -> Result<User, ServiceError> {
        user.id = None;
        let created = self.repo.save(user).await?;
        info!(user_id = ?created.id, "user_created");
        Ok(created)
    }

    /// Replace username, email and role of an existing record.
    ///
    /// Never creates: an unknown id yields [`UpdateOutcome::NotFound`] and
    /// storage is left untouched.
    ///
    /// # Examples
    /// ```
    /// use service::directory::{DirectoryService, UpdateOutcome, User};
    /// use service::directory::repository::memory::InMemoryUserRepository;
    /// use std::sync::Arc;
    /// let svc = DirectoryService::new(Arc::new(InMemoryUserRepository::new()));
    /// let outcome = tokio_test::block_on(svc.update_user(999, User::new("x", "x@x.com", "admin"))).unwrap();
    /// assert_eq!(outcome, UpdateOutcome::NotFound);
    /// ```
    #[instrument(skip(self, changes))]
    pub async fn update_user(&self, id: i64, changes: User) -> Result<UpdateOutcome, ServiceError> {
        let Some(mut existing) = self.repo.find_by_id(id).await? else {
            debug!("user_update_target_missing");
            return Ok(UpdateOutcome::NotFound);
        };
        existing.replace_fields(changes);
        match self.repo.save(existing).await {
            Ok(updated) => {
                info!(user_id = id, "user_updated");
                Ok(UpdateOutcome::Updated(updated))
            }
            // deleted between the read and the write
            Err(ServiceError::NotFound(_)) => Ok(UpdateOutcome::NotFound),
            Err(e) => Err(e),
        }
    }

    /// Remove a record. Absent ids succeed without doing anything.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        info!(user_id = id, "user_deleted");
        Ok(())
    }
}
