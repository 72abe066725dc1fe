use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::color::{Color, VertexId};
use crate::error::{Error, InvalidArgument, Result};
use crate::graph::{Graph, Vertex};

/** vertex ordering strategies */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VertexOrder {
    /// increasing names
    Natural,
    /// non-increasing degrees
    WelshPowell,
    /// color blocks, color 0 first
    RmbcNormal,
    /// color blocks, highest color first
    RmbcRevert,
    /// color blocks, smallest block first
    RmbcSmallToLarge,
}

impl VertexOrder {
    /// every strategy
    pub const ALL: [VertexOrder; 5] = [
        VertexOrder::Natural,
        VertexOrder::WelshPowell,
        VertexOrder::RmbcNormal,
        VertexOrder::RmbcRevert,
        VertexOrder::RmbcSmallToLarge,
    ];

    /// strategies grouping vertices by color block
    pub const RMBC: [VertexOrder; 3] = [
        VertexOrder::RmbcNormal,
        VertexOrder::RmbcRevert,
        VertexOrder::RmbcSmallToLarge,
    ];

    /// name used on the command line and in reports
    pub fn name(self) -> &'static str {
        match self {
            VertexOrder::Natural => "natural",
            VertexOrder::WelshPowell => "welsh-powell",
            VertexOrder::RmbcNormal => "rmbc-normal",
            VertexOrder::RmbcRevert => "rmbc-revert",
            VertexOrder::RmbcSmallToLarge => "rmbc-small-to-large",
        }
    }
}

impl fmt::Display for VertexOrder {
    fn fmt(&self, f:&mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VertexOrder {
    type Err = Error;

    fn from_str(s:&str) -> Result<Self> {
        Self::ALL.iter().copied()
            .find(|order| order.name() == s)
            .ok_or_else(|| InvalidArgument::UnrecognizedValue {
                argument: String::from("vertex order"),
                value: s.to_string(),
            }.into())
    }
}


impl Graph {

    /**
    reorders the vertices. The coloring is left untouched, call `greedy` to
    recolor following the new order.
    */
    pub fn reorder(&mut self, strategy:VertexOrder) -> Result<()> {
        match strategy {
            VertexOrder::Natural => self.sort_order_by_key(Vertex::name)?,
            VertexOrder::WelshPowell => self.sort_order_by_key(|v| Reverse(v.degree()))?,
            VertexOrder::RmbcNormal => self.sort_order_by_key(Vertex::color)?,
            VertexOrder::RmbcRevert => self.sort_order_by_key(|v| Reverse(v.color()))?,
            VertexOrder::RmbcSmallToLarge => self.order_small_to_large()?,
        }
        debug!(%strategy, "vertices reordered");
        Ok(())
    }

    /**
    tags each vertex (scanned by internal id) with a key, stable sorts by key,
    and writes the ids back to the order. The result only depends on the keys,
    not on the previous order.
    */
    fn sort_order_by_key<K:Ord, F:Fn(&Vertex) -> K>(&mut self, key:F) -> Result<()> {
        let mut tagged:Vec<(VertexId, K)> = Vec::new();
        tagged.try_reserve_exact(self.vertices.len())?;
        tagged.extend(self.vertices.iter().enumerate().map(|(id,v)| (id, key(v))));
        tagged.sort_by(|a,b| a.1.cmp(&b.1));
        for (slot, (id,_)) in self.order.iter_mut().zip(tagged) {
            *slot = id;
        }
        Ok(())
    }

    /**
    orders color blocks by increasing size (ties: smaller color first).
    Within a block, vertices appear by increasing internal id: blocks are filled
    downward while ids are scanned downward (scanning ids upward would reverse
    every block).
    */
    fn order_small_to_large(&mut self) -> Result<()> {
        let nb_colors = self.nb_colors;
        let mut sizes:Vec<usize> = Vec::new();
        sizes.try_reserve_exact(nb_colors)?;
        sizes.resize(nb_colors, 0);
        for c in self.vertices.iter().filter_map(|v| v.color) {
            sizes[c] += 1;
        }
        let mut blocks:Vec<(Color, usize)> = Vec::new();
        blocks.try_reserve_exact(nb_colors)?;
        blocks.extend(sizes.iter().copied().enumerate());
        blocks.sort_by_key(|&(_,size)| size);
        // ends[c]: one past the last position of the block of color c
        let mut ends = sizes;
        let mut nb_placed = 0;
        for &(c,size) in &blocks {
            nb_placed += size;
            ends[c] = nb_placed;
        }
        // fill each block downwards, scanning ids downwards
        for (id,v) in self.vertices.iter().enumerate().rev() {
            if let Some(c) = v.color {
                ends[c] -= 1;
                self.order[ends[c]] = id;
            }
        }
        Ok(())
    }

    /// swaps the vertices at positions i and j of the order
    pub fn switch_vertices(&mut self, i:usize, j:usize) -> Result<()> {
        let nb_vertices = self.nb_vertices();
        for &position in [i, j].iter() {
            if position >= nb_vertices {
                return Err(InvalidArgument::PositionOutOfRange { position, nb_vertices }.into());
            }
        }
        self.order.swap(i, j);
        Ok(())
    }

    /**
    exchanges the colors i and j: every vertex colored i gets j and
    conversely. The class sizes follow, nothing is recolored.
    */
    pub fn switch_colors(&mut self, i:Color, j:Color) -> Result<()> {
        let nb_colors = self.nb_colors;
        for &color in [i, j].iter() {
            if color >= nb_colors {
                return Err(InvalidArgument::ColorOutOfRange { color, nb_colors }.into());
            }
        }
        if i == j { return Ok(()); }
        let mut remaining = self.color_class_sizes[i] + self.color_class_sizes[j];
        for v in self.vertices.iter_mut() {
            if remaining == 0 { break; }
            if v.color == Some(i) {
                v.color = Some(j);
                remaining -= 1;
            } else if v.color == Some(j) {
                v.color = Some(i);
                remaining -= 1;
            }
        }
        self.color_class_sizes.swap(i, j);
        Ok(())
    }
}
