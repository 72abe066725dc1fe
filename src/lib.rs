//! Graph coloring by reordering: Greedy colorings under several vertex orders

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// error taxonomy
pub mod error;

/// containers used by the graph builder and the traversals
pub mod collections;

/// shared coloring types, solutions and checker
pub mod color;

/// read DIMACS edge lists
pub mod dimacs;

/// graph representation and builder
pub mod graph;

/// helper and utility methods for executables
pub mod util;

/// orderings, coloring algorithms and experiments
pub mod search;
