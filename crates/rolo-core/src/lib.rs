//! rolo-core — contact records, dataset loading, and the search engine.
//!
//! This crate holds everything below the HTTP surface: the record types, the
//! static dataset resource, and the query engine that filters and paginates.
//!
//! # Architecture
//!
//! ```text
//! Dataset ──► Search ──► HTTP (rolo-http)
//! ```
//!
//! The dataset is loaded and normalised once at process start and shared
//! read-only; [`search::search`] is a pure function over the record slice.

pub mod config;
pub mod dataset;
pub mod search;
pub mod types;

pub use dataset::{Dataset, DatasetError};
pub use search::{search, SearchError, SearchPage, SearchRequest, DEFAULT_PAGE_SIZE};
pub use types::{Contact, Field, RawContact, UnknownFieldError};
