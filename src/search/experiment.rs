//! Seeded experiments exploring colorings by reordering and recoloring.

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::graph::Graph;
use crate::search::bipartite::Bipartition;
use crate::search::order::VertexOrder;

/** parameters of an experiment run */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// pseudo-random seed
    pub seed: u64,
    /// number of RMBC iterations
    pub iterations: usize,
    /// number of random vertex switches
    pub switch_rounds: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self { seed: 0, iterations: 1000, switch_rounds: 500 }
    }
}

/** number of colors obtained by Greedy after one reordering */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderResult {
    /// strategy applied before Greedy
    pub order: VertexOrder,
    /// number of colors obtained
    pub nb_colors: usize,
}

/** summary of the RMBC iterations */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RmbcResult {
    /// best number of colors seen
    pub best: usize,
    /// number of colors after the last iteration
    pub last: usize,
    /// false if some iteration used more colors than the previous one
    pub monotone: bool,
}

/** everything measured by [`run`] */
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperimentReport {
    /// colors of the initial (natural order) coloring
    pub initial_colors: usize,
    /// bipartite check outcome
    pub bipartite: Bipartition,
    /// one reordering followed by one Greedy, for each strategy
    pub one_order_one_greedy: Vec<OrderResult>,
    /// best coloring found by random vertex switches
    pub best_switch_vertices: Option<usize>,
    /// RMBC iterations started from a Welsh-Powell coloring
    pub rmbc: Option<RmbcResult>,
    /// best number of colors over all experiments
    pub best: usize,
    /// number of colors of the returned coloring
    pub solution_colors: usize,
}


/// applies each strategy to its own copy of the graph, then runs Greedy
pub fn one_order_one_greedy(graph:&Graph) -> Result<Vec<OrderResult>> {
    VertexOrder::ALL.iter().map(|&order| {
        let mut copy = graph.clone();
        copy.reorder(order)?;
        Ok(OrderResult { order, nb_colors: copy.greedy() })
    }).collect()
}

/**
swaps two random positions of the order and recolors, `rounds` times.
returns the best number of colors seen (including the initial coloring).
*/
pub fn random_switch_vertices<R:Rng>(graph:&mut Graph, rounds:usize, rng:&mut R) -> Result<usize> {
    let n = graph.nb_vertices();
    let mut best = graph.nb_colors();
    for _ in 0..rounds {
        let i = rng.gen_range(0..n);
        let j = rng.gen_range(0..n);
        graph.switch_vertices(i, j)?;
        best = best.min(graph.greedy());
    }
    Ok(best)
}

/**
picks a random RMBC strategy and recolors, `iterations` times. Before an
RMBC-normal reordering, two random colors are switched first (otherwise the
order would not change).

Greedy on an order grouping color blocks never needs more colors than there
are blocks, so the number of colors should never increase.
*/
pub fn random_rmbc<R:Rng>(graph:&mut Graph, iterations:usize, rng:&mut R) -> Result<RmbcResult> {
    let mut previous = graph.nb_colors();
    let mut res = RmbcResult { best: previous, last: previous, monotone: true };
    for _ in 0..iterations {
        let strategy = VertexOrder::RMBC[rng.gen_range(0..VertexOrder::RMBC.len())];
        if strategy == VertexOrder::RmbcNormal {
            let nb_colors = graph.nb_colors();
            let i = rng.gen_range(0..nb_colors);
            let j = rng.gen_range(0..nb_colors);
            graph.switch_colors(i, j)?;
        }
        graph.reorder(strategy)?;
        let current = graph.greedy();
        if current > previous { res.monotone = false; }
        res.best = res.best.min(current);
        res.last = current;
        previous = current;
    }
    Ok(res)
}

/**
runs the experiment suite on copies of the graph and returns the report with
the coloring to export:
 - bipartite graphs stop after the check (2 colors is optimal)
 - otherwise: one order / one Greedy per strategy, random vertex switches,
   then RMBC iterations started from a Welsh-Powell coloring. The returned
   graph holds the RMBC result.
*/
pub fn run(graph:&Graph, config:&ExperimentConfig) -> Result<(ExperimentReport, Graph)> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let initial_colors = graph.nb_colors();
    let mut checked = graph.clone();
    let bipartite = checked.bipartite();
    if bipartite.is_bipartite() {
        info!("bipartite graph, nothing to explore");
        let nb_colors = checked.nb_colors();
        let report = ExperimentReport {
            initial_colors,
            bipartite,
            one_order_one_greedy: Vec::new(),
            best_switch_vertices: None,
            rmbc: None,
            best: nb_colors.min(initial_colors),
            solution_colors: nb_colors,
        };
        return Ok((report, checked));
    }
    let one_order_one_greedy = one_order_one_greedy(graph)?;
    let mut switched = graph.clone();
    let best_switch = random_switch_vertices(&mut switched, config.switch_rounds, &mut rng)?;
    let mut best_graph = graph.clone();
    best_graph.reorder(VertexOrder::WelshPowell)?;
    best_graph.greedy();
    let rmbc = random_rmbc(&mut best_graph, config.iterations, &mut rng)?;
    let best = one_order_one_greedy.iter()
        .map(|r| r.nb_colors)
        .chain(vec![initial_colors, best_switch, rmbc.best])
        .min()
        .unwrap_or(initial_colors);
    info!(best, rmbc_best = rmbc.best, switch_best = best_switch, "experiments done");
    let report = ExperimentReport {
        initial_colors,
        bipartite,
        one_order_one_greedy,
        best_switch_vertices: Some(best_switch),
        rmbc: Some(rmbc),
        best,
        solution_colors: best_graph.nb_colors(),
    };
    Ok((report, best_graph))
}
