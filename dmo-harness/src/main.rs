use anyhow::Result;
use clap::{arg, Command};
use dmo_harness::{run_experiment, RunSettings};
use rand::{rngs::StdRng, SeedableRng};
use std::{fs, path::PathBuf};

fn cli() -> Command {
    Command::new("dmo-harness")
        .about("Runs a dynamic multi-objective optimization experiment")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Runs one experiment")
                .arg(
                    arg!(<SETTINGS> "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--seed [SEED] "Overrides the seed from the settings")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the run report will be saved to this file path as json")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("run", sub_m)) => run(
            sub_m.get_one::<String>("SETTINGS").unwrap().clone(),
            sub_m.get_one::<u64>("seed").copied(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        _ => Ok(()),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(settings: String, seed_override: Option<u64>, output_file: Option<PathBuf>) -> Result<()> {
    let settings = load_settings(&settings);
    let seed = seed_override.or(settings.seed);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = run_experiment(&settings, &mut rng)?;
    println!(
        "mean igd {:.6}  mean sp {:.6}  mean ms {:.6}",
        report.mean_igd, report.mean_sp, report.mean_ms
    );
    if let Some(path) = output_file {
        fs::write(&path, serde_json::to_string_pretty(&report)?)?;
        println!("report written to: {:?}", path);
    }
    Ok(())
}

fn load_settings(settings: &str) -> RunSettings {
    let settings = if settings.ends_with(".json") {
        fs::read_to_string(settings).unwrap_or_else(|_| {
            eprintln!("Failed to read settings file: {}", settings);
            std::process::exit(1);
        })
    } else {
        settings.to_string()
    };

    serde_json::from_str::<RunSettings>(&settings).unwrap_or_else(|_| {
        eprintln!("Failed to parse settings");
        std::process::exit(1);
    })
}
