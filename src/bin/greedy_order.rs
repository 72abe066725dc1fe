use std::time::Instant;

use clap::{App, load_yaml};
use serde_json::json;

use rmbc_color::error::Result;
use rmbc_color::search::order::VertexOrder;
use rmbc_color::util::{export_results, init_logging, parse_value, read_params};


/** colors a graph with Greedy after applying the requested vertex order */
fn solve() -> Result<()> {
    // parse arguments
    let yaml = load_yaml!("greedy_order.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let order:VertexOrder = parse_value(&main_args, "order")?;
    let (inst_filename, mut graph, sol_file, perf_file) = read_params(&main_args)?;

    // solve it
    let t_start = Instant::now();
    graph.reorder(order)?;
    let nb_colors = graph.greedy();
    let duration = t_start.elapsed().as_secs_f32();
    println!("{} + greedy took {:.3} seconds. Nb colors: {}", order, duration, nb_colors);
    let stats = json!({
        "primal_list": vec![nb_colors],
        "time_searched": duration,
        "inst_name": inst_filename,
        "order": order,
    });

    // export results
    export_results(&graph, &stats, perf_file, sol_file, true)
}

/// entry point, exits with status 1 on error
pub fn main() {
    init_logging();
    if let Err(e) = solve() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
