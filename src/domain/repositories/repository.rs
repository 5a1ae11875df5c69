use thiserror::Error;

pub type RepositoryResult<T> = core::result::Result<T, RepositoryError>;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Account {0} already exists")]
    DuplicateKey(i64),
    #[error("Account {0} does not exist")]
    NotFound(i64),
    #[error(transparent)]
    Database(#[from] surrealdb::Error),
    #[error("Malformed record: {0}")]
    Decode(String),
}
