//! FILENAME: core/query-engine/src/lib.rs
//! Table query subsystem.
//!
//! Turns a record snapshot plus a query state into one page of rows and
//! the counts a pagination control needs. Pure: nothing here retains the
//! snapshot past a single call.
//!
//! Layers:
//! - `definition`: Serializable query state and its transitions (what the user asked for)
//! - `view`: The computed page (WHAT we display)
//! - `engine`: Search, filter, sort, paginate (HOW we compute)
//! - `table`: Stateful wrapper that remembers the last page for next/previous

pub mod definition;
pub mod view;
pub mod engine;
pub mod table;

pub use definition::*;
pub use view::*;
pub use engine::{compare_values, matches_search, run_query};
pub use table::TableQueryEngine;
