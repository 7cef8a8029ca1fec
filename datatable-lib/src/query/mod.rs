//! Query pipeline.
//!
//! Pure functions applied in a fixed order: search, facets, sort. Pagination
//! slices the fully filtered and sorted rows as a separate last step.
//!
//! # Example
//!
//! ```
//! use datatable_lib::model::{Column, Row};
//! use datatable_lib::query::{apply_facets, apply_search, apply_sort, paginate};
//! use datatable_lib::query::{Pagination, SortSpec};
//!
//! let columns = vec![Column::new("name", "Name")];
//! let rows = vec![
//!     Row::new().set("id", 1i64).set("name", "Bee"),
//!     Row::new().set("id", 2i64).set("name", "ant"),
//!     Row::new().set("id", 3i64).set("name", "bee"),
//! ];
//!
//! let matched = apply_search(rows.iter().collect(), Some("name"), "be");
//! let matched = apply_facets(matched, &[]);
//! let matched = apply_sort(matched, Some(&SortSpec::asc("name")), &columns);
//! let page = paginate(&matched, &Pagination::new(0, 10));
//!
//! assert_eq!(page.len(), 2);
//! ```

mod filter;
mod order;
mod page;
mod search;

pub use filter::*;
pub use order::*;
pub use page::*;
pub use search::*;
