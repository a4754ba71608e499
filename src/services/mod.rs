pub mod catalog;
pub mod prompt;
pub mod recommendations;

pub use catalog::{CatalogProvider, DemoCatalog, JsonFileCatalog};
pub use recommendations::Recommender;
