pub mod client;
pub mod endpoints;
pub mod error;
pub mod traits;

pub use client::HttpMovieApi;
pub use error::{ApiError, Result};
pub use traits::MovieApi;
