//! Graph coloring by reordering: experiment runner


// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]

use std::time::Instant;

use clap::{App, load_yaml};
use serde_json::json;

use rmbc_color::error::Result;
use rmbc_color::search::experiment::run;
use rmbc_color::util::{experiment_config, export_results, init_logging, read_params};


/**
reads an instance, runs the seeded experiments, prints a summary and exports
the statistics and the best coloring found.
*/
fn solve() -> Result<()> {
    // parse arguments
    let yaml = load_yaml!("main_args.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    println!("=========================================================");
    let config = experiment_config(&main_args)?;
    let (inst_filename, graph, sol_file, perf_file) = read_params(&main_args)?;
    println!(
        "seed: {}\titerations: {}\tswitch rounds: {}",
        config.seed, config.iterations, config.switch_rounds
    );

    // experiments
    let t_start = Instant::now();
    let (report, best) = run(&graph, &config)?;
    let duration = t_start.elapsed().as_secs_f32();
    println!("{:>25}{:>10}", "initial colors:", report.initial_colors);
    println!("{:>25}{:>10}", "bipartite:", format!("{:?}", report.bipartite));
    for r in &report.one_order_one_greedy {
        println!("{:>25}{:>10}", format!("{}:", r.order), r.nb_colors);
    }
    if let Some(switch) = report.best_switch_vertices {
        println!("{:>25}{:>10}", "switch vertices:", switch);
    }
    if let Some(rmbc) = report.rmbc {
        println!("{:>25}{:>10}", "rmbc:", rmbc.best);
        if !rmbc.monotone {
            println!("warning: the number of colors increased during RMBC");
        }
    }
    println!("experiments took {:.3} seconds. Best nb colors: {}", duration, report.best);
    let stats = json!({
        "primal_list": vec![report.best],
        "time_searched": duration,
        "inst_name": inst_filename,
        "seed": config.seed,
        "report": report,
    });

    // export results
    export_results(&best, &stats, perf_file, sol_file, true)
}

/// entry point, exits with status 1 on error
pub fn main() {
    init_logging();
    if let Err(e) = solve() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
