//! Article catalog
//!
//! Holds articles (field schemas plus attribute values) and the shop floor
//! entries collected against them. The catalog is constructed explicitly at
//! startup and handed to whoever needs it.

mod errors;
mod loader;
mod models;
mod store;

pub use errors::{CatalogError, CatalogResult};
pub use loader::ArticleLoader;
pub use models::{Article, ArticleSnapshot, Entry, NewArticle};
pub use store::Catalog;
