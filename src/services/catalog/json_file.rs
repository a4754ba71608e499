use std::path::Path;

use super::CatalogProvider;
use crate::{error::AppResult, models::BookRecord};

/// Catalog read once from a JSON array of book records
pub struct JsonFileCatalog {
    books: Vec<BookRecord>,
}

impl JsonFileCatalog {
    /// Reads and validates the catalog file
    ///
    /// Fails if the file cannot be read, is not a JSON array of books, or any
    /// record breaks the catalog invariants.
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await?;
        let books = Self::parse(&raw)?;

        tracing::info!(
            path = %path.display(),
            book_count = books.len(),
            "Loaded catalog file"
        );

        Ok(Self { books })
    }

    fn parse(raw: &str) -> AppResult<Vec<BookRecord>> {
        let books: Vec<BookRecord> = serde_json::from_str(raw)?;

        for book in &books {
            book.validate()?;
        }

        Ok(books)
    }
}

#[async_trait::async_trait]
impl CatalogProvider for JsonFileCatalog {
    async fn catalog(&self) -> AppResult<Vec<BookRecord>> {
        Ok(self.books.clone())
    }

    fn name(&self) -> &'static str {
        "json_file"
    }
}
