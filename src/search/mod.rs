//! Orderings and colorings of a [`Graph`](crate::graph::Graph).

/// vertex ordering strategies and the two mutation primitives
pub mod order;

/// greedy coloring following the current order
pub mod greedy;

/// breadth-first 2-coloring
pub mod bipartite;

/// seeded reorder / recolor experiments
pub mod experiment;
