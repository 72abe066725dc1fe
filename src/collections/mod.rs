//! Containers used by the graph builder and the bipartite check.

/// arena-backed singly linked list (also used as a FIFO queue)
pub mod list;

/// string-keyed hash dictionary with chained buckets
pub mod dict;
