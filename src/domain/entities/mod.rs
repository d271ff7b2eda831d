//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation
//! inputs use separate `New*` structs so the store controls generated
//! columns (timestamps, counters, sequence ids).

pub mod link;
pub mod visit;

pub use link::{Link, NewLink};
pub use visit::{NewVisit, Visit};
