//! Narrowing a ticket collection to a user's selection
//!
//! A [`FilterSelection`] is a declarative description of which tickets to keep. [`apply`]
//! evaluates it against a collection and returns an order-preserving view of borrowed tickets;
//! the source collection is never modified.
//!
//! Set-valued criteria are exact-membership tests. An empty set therefore matches nothing,
//! mirroring a multiselect widget with every option cleared. Optional criteria (date range,
//! search text) only apply when present.

mod engine;
mod filter_options;
mod filter_selection;

pub use engine::{apply, sorted_by_created_desc};
pub use filter_options::FilterOptions;
pub use filter_selection::FilterSelection;
