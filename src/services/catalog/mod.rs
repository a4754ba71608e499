/// Catalog data sources
///
/// The scorer never owns its book list. It receives whatever a provider hands
/// out, which keeps scoring testable against synthetic catalogs and lets the
/// service swap the built-in demo list for a file on disk.
use crate::{error::AppResult, models::BookRecord};

pub mod demo;
pub mod json_file;

pub use demo::DemoCatalog;
pub use json_file::JsonFileCatalog;

/// Trait for catalog providers
///
/// Providers hand out the full catalog in a stable order. Callers treat the
/// returned books as read-only.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Returns every book in catalog order
    async fn catalog(&self) -> AppResult<Vec<BookRecord>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
