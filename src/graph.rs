use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::collections::dict::Dict;
use crate::color::{Color, Solution, VertexId, VertexName};
use crate::dimacs::read_from_file;
use crate::error::{InvalidArgument, MalformedInput, Result};


/** validated edge list, as delivered by a loader */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    /// declared number of vertices
    pub nb_vertices: usize,
    /// declared number of edges
    pub nb_edges: usize,
    /// endpoints (vertex names) of each edge
    pub edges: Vec<(VertexName, VertexName)>,
}

impl EdgeList {
    /// edge list whose declared counts are the ones of the given edges
    pub fn new(edges:Vec<(VertexName, VertexName)>) -> Self {
        let names:BTreeSet<VertexName> = edges.iter()
            .flat_map(|&(a,b)| std::iter::once(a).chain(std::iter::once(b)))
            .collect();
        Self { nb_vertices: names.len(), nb_edges: edges.len(), edges }
    }
}


/** vertex of a [`Graph`] */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    /// external name
    pub(crate) name: VertexName,
    /// current color (None while a coloring algorithm has not reached it)
    pub(crate) color: Option<Color>,
    /// internal ids of the neighbors (sorted, fixed after construction)
    pub(crate) neighbors: Vec<VertexId>,
}

impl Vertex {
    /// external name
    pub fn name(&self) -> VertexName { self.name }

    /// number of neighbors
    pub fn degree(&self) -> usize { self.neighbors.len() }

    /// current color
    pub fn color(&self) -> Option<Color> { self.color }

    /// internal ids of the neighbors
    pub fn neighbors(&self) -> &[VertexId] { &self.neighbors }
}


/**
Undirected simple graph with a current vertex order and a current coloring.

Vertices are stored by internal id and never move; orderings only permute
`order`, where `order[k]` is the internal id of the vertex at position `k`.
A graph is always colored: the builder runs Greedy once, and every
operation leaves a complete coloring behind.

Cloning makes an independent deep copy, use it to explore orders without
disturbing a baseline.
*/
#[derive(Debug, Clone)]
pub struct Graph {
    nb_edges: usize,
    /// maximum degree (Δ)
    pub(crate) max_degree: usize,
    /// number of colors of the current coloring
    pub(crate) nb_colors: usize,
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) order: Vec<VertexId>,
    /// color_class_sizes[c]: number of vertices of color c (length Δ+1)
    pub(crate) color_class_sizes: Vec<usize>,
}

impl Graph {

    /**
    builds a graph from an edge list.
     1. resolves every endpoint name to a dense internal id (first occurrence
        gets the next id) and counts degrees
     2. allocates the neighbor arrays and fills them back to front
     3. rejects parallel edges
     4. computes Δ
     5. sets the identity order and runs Greedy once

    Nothing is returned unless every step succeeds.
    */
    pub fn from_edge_list(list:&EdgeList) -> Result<Self> {
        let n = list.nb_vertices;
        if n == 0 || list.nb_edges == 0 {
            return Err(MalformedInput::EmptyGraph.into());
        }
        if list.edges.len() != list.nb_edges {
            return Err(MalformedInput::EdgeCountMismatch {
                declared: list.nb_edges, found: list.edges.len()
            }.into());
        }
        // resolve names. m edges name at most 2m vertices, a larger declared
        // count is reported as a mismatch once the names are resolved
        let capacity = n.min(2 * list.edges.len());
        let mut resolver:Dict<VertexId> = Dict::new()?;
        let mut vertices:Vec<Vertex> = Vec::new();
        vertices.try_reserve_exact(capacity)?;
        let mut degrees:Vec<usize> = Vec::new();
        degrees.try_reserve_exact(capacity)?;
        let mut resolved:Vec<(VertexId, VertexId)> = Vec::new();
        resolved.try_reserve_exact(list.edges.len())?;
        for &(a,b) in &list.edges {
            if a == b {
                warn!(vertex = a, "self-loop in the edge list");
                return Err(MalformedInput::SelfLoop { name: a }.into());
            }
            let mut ids = [0; 2];
            for (id, &name) in ids.iter_mut().zip([a, b].iter()) {
                let key = name.to_string();
                *id = match resolver.get(&key) {
                    Some(&known) => {
                        degrees[known] += 1;
                        known
                    }
                    None => {
                        let new_id = vertices.len();
                        if new_id == n {
                            return Err(MalformedInput::TooManyVertices { declared: n }.into());
                        }
                        resolver.put(&key, new_id)?;
                        vertices.push(Vertex { name, color: None, neighbors: Vec::new() });
                        degrees.push(1);
                        new_id
                    }
                };
            }
            resolved.push((ids[0], ids[1]));
        }
        drop(resolver);
        if vertices.len() != n {
            warn!(declared = n, found = vertices.len(), "vertex count mismatch");
            return Err(MalformedInput::VertexCountMismatch {
                declared: n, found: vertices.len()
            }.into());
        }
        // cross-link neighbors, remaining[v] counts the free slots of v
        for (v, &d) in vertices.iter_mut().zip(&degrees) {
            v.neighbors.try_reserve_exact(d)?;
            v.neighbors.resize(d, 0);
        }
        let mut remaining = degrees;
        for &(a,b) in &resolved {
            remaining[a] -= 1;
            vertices[a].neighbors[remaining[a]] = b;
            remaining[b] -= 1;
            vertices[b].neighbors[remaining[b]] = a;
        }
        // parallel edges
        for v in vertices.iter_mut() {
            v.neighbors.sort_unstable();
            if v.neighbors.windows(2).any(|w| w[0] == w[1]) {
                warn!(vertex = v.name, "parallel edges in the edge list");
                return Err(MalformedInput::DuplicateNeighbor { name: v.name }.into());
            }
        }
        let max_degree = vertices.iter().map(Vertex::degree).max().unwrap_or(0);
        let mut order = Vec::new();
        order.try_reserve_exact(n)?;
        order.extend(0..n);
        let mut color_class_sizes = Vec::new();
        color_class_sizes.try_reserve_exact(max_degree + 1)?;
        color_class_sizes.resize(max_degree + 1, 0);
        let mut res = Self {
            nb_edges: list.nb_edges,
            max_degree,
            nb_colors: 0,
            vertices,
            order,
            color_class_sizes,
        };
        let nb_colors = res.greedy();
        info!(nb_vertices = n, nb_edges = res.nb_edges, max_degree, nb_colors, "graph built");
        Ok(res)
    }

    /// creates a graph from a DIMACS file
    pub fn from_file(filename:&str) -> Result<Self> {
        Self::from_edge_list(&read_from_file(filename)?)
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.vertices.len() }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.nb_edges }

    /// number of colors of the current coloring
    pub fn nb_colors(&self) -> usize { self.nb_colors }

    /// maximum degree (Δ)
    pub fn max_degree(&self) -> usize { self.max_degree }

    /// current order: internal id of the vertex at each position
    pub fn order(&self) -> &[VertexId] { &self.order }

    /// number of vertices of each color (length Δ+1, colors ≥ nb_colors have size 0)
    pub fn color_class_sizes(&self) -> &[usize] { &self.color_class_sizes }

    /// vertices, by internal id
    pub fn vertices(&self) -> &[Vertex] { &self.vertices }

    /// vertex by internal id
    pub fn vertex(&self, id:VertexId) -> Option<&Vertex> { self.vertices.get(id) }

    /// edges as pairs of internal ids (a < b)
    pub fn edges(&self) -> impl Iterator<Item=(VertexId, VertexId)> + '_ {
        self.vertices.iter().enumerate().flat_map(|(a, v)| {
            v.neighbors.iter().filter(move |&&b| a < b).map(move |&b| (a, b))
        })
    }

    fn vertex_at(&self, position:usize) -> Result<&Vertex> {
        let id = *self.order.get(position).ok_or(InvalidArgument::PositionOutOfRange {
            position, nb_vertices: self.nb_vertices()
        })?;
        Ok(&self.vertices[id])
    }

    fn neighbor_at(&self, position:usize, rank:usize) -> Result<&Vertex> {
        let v = self.vertex_at(position)?;
        let id = *v.neighbors.get(rank).ok_or(InvalidArgument::NeighborOutOfRange {
            rank, degree: v.degree()
        })?;
        Ok(&self.vertices[id])
    }

    /// name of the vertex at a position of the current order
    pub fn name_at(&self, position:usize) -> Result<VertexName> {
        Ok(self.vertex_at(position)?.name)
    }

    /// color of the vertex at a position of the current order
    pub fn color_at(&self, position:usize) -> Result<Option<Color>> {
        Ok(self.vertex_at(position)?.color)
    }

    /// degree of the vertex at a position of the current order
    pub fn degree_at(&self, position:usize) -> Result<usize> {
        Ok(self.vertex_at(position)?.degree())
    }

    /// name of the rank-th neighbor of the vertex at a position
    pub fn neighbor_name_at(&self, position:usize, rank:usize) -> Result<VertexName> {
        Ok(self.neighbor_at(position, rank)?.name)
    }

    /// color of the rank-th neighbor of the vertex at a position
    pub fn neighbor_color_at(&self, position:usize, rank:usize) -> Result<Option<Color>> {
        Ok(self.neighbor_at(position, rank)?.color)
    }

    /// degree of the rank-th neighbor of the vertex at a position
    pub fn neighbor_degree_at(&self, position:usize, rank:usize) -> Result<usize> {
        Ok(self.neighbor_at(position, rank)?.degree())
    }

    /// recomputes nb_colors and the color class sizes from the vertex colors
    pub(crate) fn recount_color_classes(&mut self) {
        for size in self.color_class_sizes.iter_mut() { *size = 0; }
        let mut nb_colors = 0;
        for c in self.vertices.iter().filter_map(|v| v.color) {
            self.color_class_sizes[c] += 1;
            nb_colors = nb_colors.max(c + 1);
        }
        self.nb_colors = nb_colors;
    }

    /// current coloring as a partition (res[c]: names of the vertices colored c, in order)
    pub fn solution(&self) -> Solution {
        let mut res = vec![Vec::new(); self.nb_colors];
        for &id in &self.order {
            let v = &self.vertices[id];
            if let Some(c) = v.color {
                res[c].push(v.name);
            }
        }
        res
    }

    /** writes a string encoding the solution (use this to export the solution).
    each line corresponds to a color. */
    pub fn solution_to_string(&self) -> String {
        let mut res = String::default();
        for class in self.solution() {
            for name in class {
                res += format!("{} ", name).as_str();
            }
            res += "\n";
        }
        res
    }
}
