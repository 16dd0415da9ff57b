mod catalog;
mod changelog;
mod trends;

pub use catalog::{CatalogAction, CatalogComponent};
pub use changelog::ChangelogComponent;
pub use trends::TrendsComponent;
