//! The authoritative task collection.
//!
//! `TaskStore` owns the in-memory task list and is the only component
//! that writes through the persistence gateway. Every mutating operation
//! re-sorts the collection into comparator order and saves it whole.

mod task_store;

pub use task_store::TaskStore;
