use bit_set::BitSet;

use crate::graph::Graph;

/** Vertex Id (dense internal index in `0..n`) */
pub type VertexId = usize;

/** Vertex name (as found in the instance) */
pub type VertexName = u32;

/** Color (colors are numbered from 0) */
pub type Color = usize;

/** Solution of a graph coloring problem
(represented as a partition of the vertex names, one class per color).
*/
pub type Solution = Vec<Vec<VertexName>>;


/**
checks the coloring currently stored in the graph.

returns None if the coloring is infeasible or inconsistent:
 - a vertex is uncolored or uses a color ≥ the number of colors
 - some color in `0..nb_colors` is unused
 - the color class sizes do not match the vertex colors
 - two adjacent vertices share a color

returns the number of colors otherwise
*/
pub fn checker(graph:&Graph) -> Option<usize> {
    let nb_colors = graph.nb_colors();
    let mut sizes = vec![0; nb_colors];
    let mut used = BitSet::with_capacity(nb_colors);
    for v in graph.vertices() {
        let c = v.color()?;
        if c >= nb_colors { return None; }
        sizes[c] += 1;
        used.insert(c);
    }
    if used.len() != nb_colors { return None; }
    if graph.color_class_sizes().get(..nb_colors)? != sizes.as_slice() { return None; }
    // check conflicts
    let vertices = graph.vertices();
    if graph.edges().any(|(a,b)| vertices[a].color() == vertices[b].color()) {
        return None;
    }
    Some(nb_colors)
}
