//! Topic catalog - the categorized cards shown on the home page

mod builtin;
mod error;
pub mod loader;
mod model;

pub use builtin::builtin;
pub use error::CatalogError;
pub use model::{Catalog, Category, Group, Link};
