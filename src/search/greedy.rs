use tracing::debug;

use crate::graph::Graph;

impl Graph {

    /**
    Greedy coloring following the current vertex order: each vertex gets the
    smallest color not used by its already colored neighbors.

    Never uses more than Δ+1 colors. Updates the color class sizes and the
    number of colors, and returns the latter.
    */
    pub fn greedy(&mut self) -> usize {
        for v in self.vertices.iter_mut() { v.color = None; }
        for size in self.color_class_sizes.iter_mut() { *size = 0; }
        // used[c]: some colored neighbor of the current vertex has color c
        let mut used = vec![false; self.max_degree + 1];
        let mut nb_colors = 0;
        for &id in &self.order {
            let mut max_seen = None;
            for &u in &self.vertices[id].neighbors {
                if let Some(c) = self.vertices[u].color {
                    used[c] = true;
                    max_seen = max_seen.max(Some(c));
                }
            }
            let mut color = 0;
            while used[color] { color += 1; }
            self.vertices[id].color = Some(color);
            self.color_class_sizes[color] += 1;
            nb_colors = nb_colors.max(color + 1);
            // only slots up to the largest neighbor color were touched
            if let Some(m) = max_seen {
                for b in &mut used[..=m] { *b = false; }
            }
        }
        self.nb_colors = nb_colors;
        debug!(nb_colors, "greedy coloring");
        nb_colors
    }
}
