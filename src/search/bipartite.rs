use serde::Serialize;
use tracing::{debug, warn};

use crate::collections::list::LinkedList;
use crate::color::{Color, VertexId};
use crate::error::Result;
use crate::graph::Graph;
use crate::search::order::VertexOrder;

/** outcome of the bipartite check */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Bipartition {
    /// the graph is now 2-colored
    Bipartite,
    /// some edge is monochromatic in every 2-coloring
    NotBipartite,
    /// the traversal queue could not grow, reported as not bipartite
    Degraded,
}

impl Bipartition {
    /// true iff a 2-coloring was found
    pub fn is_bipartite(self) -> bool { self == Bipartition::Bipartite }
}

impl Graph {

    /**
    checks whether the graph is bipartite with a breadth-first 2-coloring of
    each connected component.

    This modifies the graph in every case:
     - bipartite: the graph keeps the 2-coloring (2 colors), order unchanged
     - otherwise: the vertices are put in Welsh-Powell order and recolored by Greedy

    Use `is_bipartite` to get the answer without touching the graph.
    */
    pub fn bipartite(&mut self) -> Bipartition {
        self.bipartite_with_queue(LinkedList::new())
    }

    fn bipartite_with_queue(&mut self, mut queue:LinkedList<(VertexId, Color)>) -> Bipartition {
        for v in self.vertices.iter_mut() { v.color = None; }
        let outcome = match self.two_color(&mut queue) {
            Err(e) => {
                warn!(error = %e, "bipartite traversal aborted");
                Bipartition::Degraded
            }
            Ok(()) if self.has_monochromatic_edge() => Bipartition::NotBipartite,
            Ok(()) => Bipartition::Bipartite,
        };
        if outcome.is_bipartite() {
            self.recount_color_classes();
        } else {
            if let Err(e) = self.reorder(VertexOrder::WelshPowell) {
                warn!(error = %e, "Welsh-Powell reorder failed, recoloring in the current order");
            }
            self.greedy();
        }
        debug!(?outcome, nb_colors = self.nb_colors, "bipartite check");
        outcome
    }

    /// same answer as `bipartite`, computed on a private copy
    pub fn is_bipartite(&self) -> bool {
        self.clone().bipartite().is_bipartite()
    }

    /// colors every component from an uncolored root, alternating colors 0 and 1
    fn two_color(&mut self, queue:&mut LinkedList<(VertexId, Color)>) -> Result<()> {
        let mut next_root = 0;
        while let Some(root) = (next_root..self.vertices.len())
            .find(|&id| self.vertices[id].color.is_none())
        {
            next_root = root + 1;
            self.vertices[root].color = Some(0);
            queue.push_back((root, 0))?;
            while let Some((v, color)) = queue.pop_front() {
                for k in 0..self.vertices[v].neighbors.len() {
                    let u = self.vertices[v].neighbors[k];
                    if self.vertices[u].color.is_none() {
                        self.vertices[u].color = Some(1 - color);
                        queue.push_back((u, 1 - color))?;
                    }
                }
            }
        }
        Ok(())
    }

    fn has_monochromatic_edge(&self) -> bool {
        self.edges().any(|(a,b)| self.vertices[a].color == self.vertices[b].color)
    }
}
