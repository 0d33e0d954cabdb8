//! Backend access: HTTP client, its errors, and the photo cache injected into it.

mod backend;
mod error;
mod image_cache;

pub use backend::BackendClient;
pub use error::ClientError;
pub use image_cache::{Image, ImageCache, ImageKind};
