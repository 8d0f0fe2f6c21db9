//! Provider clients for the popcorn movie tracker.
//!
//! The OMDb client implements the [`traits::MovieCatalog`] trait, allowing
//! the session and runtime layers to stay provider-agnostic.

pub mod error;
pub mod omdb;
pub mod traits;

pub use error::CatalogError;
pub use omdb::{OmdbClient, OmdbConfig};
