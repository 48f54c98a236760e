use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("{0}")]
    Custom(String),
}

impl RepositoryError {
    /// Uniqueness, foreign key and check violations rejected by the store.
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self,
            RepositoryError::AlreadyExists(_)
                | RepositoryError::ForeignKey(_)
                | RepositoryError::Constraint(_)
        )
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message().to_string();

                if db_err.is_unique_violation() {
                    RepositoryError::AlreadyExists(msg)
                } else if db_err.is_foreign_key_violation() {
                    RepositoryError::ForeignKey(msg)
                } else if db_err.is_check_violation() {
                    RepositoryError::Constraint(msg)
                } else {
                    RepositoryError::Sqlx(sqlx::Error::Database(db_err))
                }
            }
            other => RepositoryError::Sqlx(other),
        }
    }
}
