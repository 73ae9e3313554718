//! Helper functions for page rendering
//!
//! URL resolution against the site root and small HTML snippets
//! shared by the card renderer and the page layout.

mod html;
mod url;

pub use html::*;
pub use url::*;
