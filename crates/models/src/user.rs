use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a row; the id comes from the database sequence.
pub async fn create(db: &DatabaseConnection, username: &str, email: &str, role: &str) -> Result<Model, ModelError> {
    let am = ActiveModel {
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        role: Set(role.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// All rows, ascending by id.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// First row carrying `username`, lowest id wins when several do.
pub async fn find_by_username(db: &DatabaseConnection, username: &str) -> Result<Option<Model>, ModelError> {
    let found = Entity::find()
        .filter(Column::Username.eq(username))
        .order_by_asc(Column::Id)
        .one(db)
        .await?;
    Ok(found)
}

/// Overwrite every mutable column of row `id`.
///
/// Fails with [`ModelError::NotFound`] when no row has that id; never inserts.
pub async fn overwrite(db: &DatabaseConnection, id: i64, username: &str, email: &str, role: &str) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(id),
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        role: Set(role.to_string()),
    };
    Ok(am.update(db).await?)
}

/// Remove row `id`; returns how many rows went away (0 or 1).
pub async fn hard_delete(db: &DatabaseConnection, id: i64) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected)
}
