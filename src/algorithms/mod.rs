//! Sorting and searching over slices.

pub mod search;
pub mod sort;
