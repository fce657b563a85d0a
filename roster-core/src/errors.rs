use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("user {id} not found")]
    NotFound { id: i64 },
}

pub type RegistryResult<T> = Result<T, RegistryError>;
