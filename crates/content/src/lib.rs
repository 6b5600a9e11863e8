#![forbid(unsafe_code)]

//! Static content catalog: bundled JSON documents parsed into domain types
//! behind the [`ContentSource`] trait.

pub mod bundled;
pub mod docs;
pub mod source;

pub use bundled::BundledCatalog;
pub use docs::ContentError;
pub use source::{ContentSource, InMemoryCatalog};
