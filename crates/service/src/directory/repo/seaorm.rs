use sea_orm::DatabaseConnection;

use crate::directory::domain::User;
use crate::directory::repository::UserRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, ServiceError> {
        let rows = models::user::list_all(&self.db).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ServiceError> {
        Ok(models::user::find(&self.db, id).await?.map(User::from))
    }

    async fn save(&self, user: User) -> Result<User, ServiceError> {
        let saved = match user.id {
            None => models::user::create(&self.db, &user.username, &user.email, &user.role).await?,
            Some(id) => models::user::overwrite(&self.db, id, &user.username, &user.email, &user.role).await?,
        };
        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        models::user::hard_delete(&self.db, id).await?;
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ServiceError> {
        Ok(models::user::find_by_username(&self.db, username).await?.map(User::from))
    }
}
