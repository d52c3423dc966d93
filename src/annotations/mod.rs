//! Annotation layer
//!
//! Stores media bindings separately from the text, linked by ranges.
//!
//! - `store`: the interval store and its non-overlap gate
//! - `binder`: bind a candidate to media, unbind by id

pub mod binder;
pub mod store;

pub use binder::MediaBinder;
pub use store::IntervalStore;
