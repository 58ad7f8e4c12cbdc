//! Error types for `hotel-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("employee {0} cannot supervise themselves")]
  SelfSupervision(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
