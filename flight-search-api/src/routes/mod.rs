pub(crate) mod error;
pub(crate) mod flights;

pub(crate) use error::ApiError;
