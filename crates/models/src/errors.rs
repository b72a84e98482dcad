use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<sea_orm::DbErr> for ModelError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e {
            sea_orm::DbErr::RecordNotFound(msg) => ModelError::NotFound(msg),
            sea_orm::DbErr::RecordNotUpdated => ModelError::NotFound("no row updated".into()),
            other => ModelError::Db(other.to_string()),
        }
    }
}
