//! Catalog of software tools.
//!
//! - `model`: tool records and the catalog document shape
//! - `source`: loading from file or URL with degrade-to-empty
//! - `store`: the catalog plus the user's favorite set

pub mod model;
pub mod source;
pub mod store;

pub use model::{Catalog, LocalizedText, Tool};
pub use source::CatalogSource;
pub use store::CatalogStore;
