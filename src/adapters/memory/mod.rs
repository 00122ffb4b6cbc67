pub mod catalog;
pub mod loader;

pub use catalog::InMemoryCatalog;
pub use loader::{LoadError, load_books};
