mod flight_repo;
mod repo_error;

pub use flight_repo::*;
pub use repo_error::RepositoryError;
