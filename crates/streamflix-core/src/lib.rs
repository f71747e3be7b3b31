//! streamflix-core: Core traits and types for the StreamFlix catalog layer
//!
//! This crate provides the foundational types and traits shared by the
//! storage, transport and facade crates: catalog payloads, the error
//! taxonomy, the remote client contract, cache keys and metrics hooks.

mod error;
mod images;
mod traits;
mod types;

pub use error::{CatalogError, Result};
pub use images::{DEFAULT_IMAGE_BASE_URL, ImageSize, build_image_url};
pub use traits::*;
pub use types::*;
