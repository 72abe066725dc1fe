use std::io::Write;
use std::str::FromStr;

use clap::ArgMatches;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::color::checker;
use crate::error::{InvalidArgument, Result};
use crate::graph::Graph;
use crate::search::experiment::ExperimentConfig;

/// installs a tracing subscriber filtered by `RUST_LOG`
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/** parses the value of a command line argument */
pub fn parse_value<T:FromStr>(main_args:&ArgMatches, name:&str) -> Result<T> {
    let value = main_args.value_of(name).unwrap_or_default();
    value.parse::<T>().map_err(|_| InvalidArgument::UnrecognizedValue {
        argument: name.to_string(),
        value: value.to_string(),
    }.into())
}

/** reads the experiment parameters (seed, iterations, switch rounds) */
pub fn experiment_config(main_args:&ArgMatches) -> Result<ExperimentConfig> {
    Ok(ExperimentConfig {
        seed: parse_value(main_args, "seed")?,
        iterations: parse_value(main_args, "iterations")?,
        switch_rounds: parse_value(main_args, "switch_rounds")?,
    })
}

/** reads command line input and returns the instance name, graph, solution_filename, stats_filename */
pub fn read_params(main_args:&ArgMatches) -> Result<(String, Graph, Option<String>, Option<String>)> {
    let inst_filename = main_args.value_of("instance").unwrap_or_default();
    // read value of the solution filename
    let sol_file: Option<String> = match main_args.value_of("solution") {
        None => None,
        Some(e) => {
            println!("printing solutions in: {}", e);
            Some(e.to_string())
        }
    };
    // read value of the performance logs filename
    let perf_file: Option<String> = match main_args.value_of("perf") {
        None => None,
        Some(e) => {
            println!("printing perfs in: {}\n", e);
            Some(e.to_string())
        }
    };
    println!("reading instance: {}...", inst_filename);
    let graph = Graph::from_file(inst_filename)?;
    display_statistics(&graph);
    println!("=======================");
    Ok((inst_filename.to_string(), graph, sol_file, perf_file))
}

/// prints the size, degrees and current number of colors of a graph
pub fn display_statistics(graph:&Graph) {
    let min_degree = graph.vertices().iter().map(|v| v.degree()).min().unwrap_or(0);
    println!("{:>25}{:>10}", "nb vertices:", graph.nb_vertices());
    println!("{:>25}{:>10}", "nb edges:", graph.nb_edges());
    println!("{:>25}{:>10}", "min degree:", min_degree);
    println!("{:>25}{:>10}", "max degree:", graph.max_degree());
    println!("{:>25}{:>10}", "nb colors:", graph.nb_colors());
}

/// exports search results to files
pub fn export_results(
    graph:&Graph,
    stats:&Value,
    perf_file:Option<String>,
    sol_file:Option<String>,
    check_result:bool,
) -> Result<()> {
    // export statistics
    if let Some(filename) = perf_file {
        let mut file = std::fs::File::create(filename.as_str())?;
        file.write_all(stats.to_string().as_bytes())?;
    }
    // export solution
    if let Some(filename) = sol_file {
        if check_result && checker(graph).is_none() {
            println!("invalid solution (nb colors: {})", graph.nb_colors());
        }
        let mut file = std::fs::File::create(filename.as_str())?;
        file.write_all(graph.solution_to_string().as_bytes())?;
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use clap::{App, load_yaml};
    use serde_json::json;

    #[test]
    fn test_experiment_config() {
        let yaml = load_yaml!("main_args.yml");
        let main_args = App::from_yaml(yaml)
            .get_matches_from(vec!["rmbc-color", "insts/c4", "-s", "3", "--switch-rounds", "7"]);
        let config = experiment_config(&main_args).unwrap();
        assert_eq!(config, ExperimentConfig { seed: 3, iterations: 1000, switch_rounds: 7 });
        let main_args = App::from_yaml(yaml).get_matches_from(vec!["rmbc-color", "insts/c4"]);
        assert_eq!(experiment_config(&main_args).unwrap(), ExperimentConfig::default());
        let main_args = App::from_yaml(yaml)
            .get_matches_from(vec!["rmbc-color", "insts/c4", "-r", "many"]);
        assert!(experiment_config(&main_args).is_err());
    }

    #[test]
    fn test_export_results() {
        let graph = Graph::from_file("insts/triangle").unwrap();
        let dir = std::env::temp_dir();
        let perf = dir.join(format!("rmbc_color_perf_{}.json", std::process::id()));
        let sol = dir.join(format!("rmbc_color_sol_{}.txt", std::process::id()));
        export_results(
            &graph,
            &json!({"nb_colors": 3}),
            Some(perf.to_string_lossy().to_string()),
            Some(sol.to_string_lossy().to_string()),
            true,
        ).unwrap();
        let stats:Value = serde_json::from_str(&std::fs::read_to_string(&perf).unwrap()).unwrap();
        assert_eq!(stats["nb_colors"], 3);
        assert_eq!(std::fs::read_to_string(&sol).unwrap(), "1 \n2 \n3 \n");
        std::fs::remove_file(perf).unwrap();
        std::fs::remove_file(sol).unwrap();
    }
}
