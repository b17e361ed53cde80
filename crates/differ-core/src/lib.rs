//! Diff primitives for ordered sequences and unordered collections.
//!
//! The core of the crate is the LCS path: [`lcs_table`] builds the
//! dynamic-programming length table and [`sequential_diff`] backtraces it
//! into a minimal edit script. [`character_diff`] runs the same machinery at
//! character granularity and coalesces runs. The map, set, and object
//! differs are independent membership comparators that bypass the LCS path
//! entirely.
//!
//! Every operation is a pure function of its inputs: structures are built
//! per call, computed synchronously, and returned by value.
//!
//! # Key Types
//!
//! - [`LcsTable`] -- LCS length table for a sequence pair
//! - [`DiffEntry`] -- one same/add/delete step of an edit script
//! - [`MapDiffEntry`] / [`SetDiffEntry`] -- membership diffs for maps and sets
//! - [`ObjectDiffEntry`] -- recursive record diff addressed by key path

pub mod character;
pub mod lcs;
pub mod map;
pub mod object;
pub mod sequence;
pub mod set;

pub use character::character_diff;
pub use lcs::{lcs_table, lcs_table_by, LcsTable};
pub use map::{diff_maps, diff_maps_by, MapDiffEntry};
pub use object::{
    diff_objects, diff_objects_by, format_object_diff, ObjectDiffEntry, ObjectDiffOptions,
};
pub use sequence::{sequential_diff, sequential_diff_by, DiffEntry, DiffOptions, EntryKind};
pub use set::{diff_sets, SetDiffEntry};
