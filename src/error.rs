use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("transformation matrix is not invertible (determinant is 0)")]
    InvalidTransform,
}

pub type Result<T> = std::result::Result<T, Error>;
