//! In-memory data table engine
//!
//! Search filtering, faceted filtering, single-column sorting and pagination
//! over a static row set, with a query state store that re-derives the visible
//! page on every change.

pub mod config;
pub mod context;
pub mod error;
pub mod facet;
pub mod model;
pub mod query;
pub mod table;

pub use config::*;
pub use context::TableContext;
pub use error::*;
pub use facet::*;
pub use table::*;
