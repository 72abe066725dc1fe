use std::collections::TryReserveError;

use thiserror::Error as ThisError;

use crate::color::{Color, VertexName};

/// result type used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/** errors reported by the loader, the graph builder and the graph operations */
#[derive(ThisError, Debug)]
pub enum Error {
    /// a heap allocation could not be satisfied
    #[error("allocation failure")]
    Allocation(#[from] TryReserveError),
    /// the edge list does not describe a valid simple graph
    #[error("malformed input: {0}")]
    MalformedInput(MalformedInput),
    /// a position, color or rank given to an operation is out of range
    #[error("invalid argument: {0}")]
    InvalidArgument(InvalidArgument),
    /// the DIMACS text could not be parsed
    #[error("parse error at line {line}: {reason}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// what was expected
        reason: String,
    },
    /// the instance or output file could not be accessed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/** structural problems detected while building a graph */
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum MalformedInput {
    /// zero vertices or zero edges declared
    #[error("the graph declares no vertices or no edges")]
    EmptyGraph,
    /// the number of edges given differs from the declared one
    #[error("{declared} edges declared, {found} given")]
    EdgeCountMismatch {
        /// declared number of edges
        declared: usize,
        /// number of edges actually given
        found: usize,
    },
    /// an edge joins a vertex to itself
    #[error("self-loop on vertex {name}")]
    SelfLoop {
        /// name of the looping vertex
        name: VertexName,
    },
    /// more distinct names than declared vertices
    #[error("more than {declared} distinct vertices")]
    TooManyVertices {
        /// declared number of vertices
        declared: usize,
    },
    /// fewer distinct names than declared vertices
    #[error("{declared} vertices declared, {found} found")]
    VertexCountMismatch {
        /// declared number of vertices
        declared: usize,
        /// number of distinct names found
        found: usize,
    },
    /// the same edge appears twice
    #[error("vertex {name} has a repeated neighbor")]
    DuplicateNeighbor {
        /// name of the vertex owning the parallel edge
        name: VertexName,
    },
}

/** out of range arguments given to graph queries and mutators */
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// order position not in `0..nb_vertices`
    #[error("position {position} out of range (nb vertices: {nb_vertices})")]
    PositionOutOfRange {
        /// given position
        position: usize,
        /// number of vertices of the graph
        nb_vertices: usize,
    },
    /// color not in `0..nb_colors`
    #[error("color {color} out of range (nb colors: {nb_colors})")]
    ColorOutOfRange {
        /// given color
        color: Color,
        /// number of colors currently used
        nb_colors: usize,
    },
    /// neighbor rank not in `0..degree`
    #[error("neighbor {rank} out of range (degree: {degree})")]
    NeighborOutOfRange {
        /// given rank
        rank: usize,
        /// degree of the vertex
        degree: usize,
    },
    /// a textual value (order name, command line value) is not recognized
    #[error("unrecognized value `{value}` for {argument}")]
    UnrecognizedValue {
        /// what the value was meant for
        argument: String,
        /// given value
        value: String,
    },
}

impl From<MalformedInput> for Error {
    fn from(e: MalformedInput) -> Self {
        Self::MalformedInput(e)
    }
}

impl From<InvalidArgument> for Error {
    fn from(e: InvalidArgument) -> Self {
        Self::InvalidArgument(e)
    }
}
