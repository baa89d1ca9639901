#![allow(clippy::must_use_candidate)]

mod error;
mod response;

pub use error::HttpError;
pub use response::ErrorResponse;
