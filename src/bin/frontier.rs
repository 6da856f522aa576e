//! Frontier Binary
//!
//! Runs one pass over the Pareto regret frontier and optionally dumps it.
//!
//! Subcommands: table, sample, pair, classify

use clap::Parser;
use pareto::*;
use pareto::game::RegretVector;
use pareto::oracle::Oracle;
use pareto::save::Disk;
use pareto::survey::Mode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Command {
    #[command(about = "Search the boundary surface on an integer lattice", alias = "tab")]
    Table {
        #[arg(long, default_value_t = 1)]
        rounds: Round,
        #[arg(long, default_value_t = GRANULARITY_DEFAULT)]
        granularity: usize,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        json: Option<PathBuf>,
    },
    #[command(about = "Classify basis combinations by brute force", alias = "smp")]
    Sample {
        #[arg(long, default_value_t = 1)]
        rounds: Round,
        #[arg(long)]
        resolution: Option<usize>,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        json: Option<PathBuf>,
    },
    #[command(about = "List vertices of the two-expert frontier")]
    Pair {
        #[arg(long, default_value_t = 2)]
        rounds: Round,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        json: Option<PathBuf>,
    },
    #[command(about = "Classify one regret vector, e.g. \"0.5 1 1.5\"", alias = "cls")]
    Classify {
        #[arg(required = true)]
        regret: String,
        #[arg(long, default_value_t = 1)]
        rounds: Round,
        #[arg(long, default_value_t = ORACLE_GRANULARITY)]
        granularity: usize,
    },
}

fn main() -> anyhow::Result<()> {
    log();
    match Command::parse() {
        Command::Table {
            rounds,
            granularity,
            output,
            json,
        } => survey(Mode::Table { rounds, granularity }, output, json),
        Command::Sample {
            rounds,
            resolution,
            output,
            json,
        } => {
            let resolution = resolution.unwrap_or(match rounds {
                1 => RESOLUTION_MESH,
                _ => RESOLUTION_RATIONAL,
            });
            survey(Mode::Sample { rounds, resolution }, output, json)
        }
        Command::Pair {
            rounds,
            output,
            json,
        } => survey(Mode::Pair { rounds }, output, json),
        Command::Classify {
            regret,
            rounds,
            granularity,
        } => {
            let regret = RegretVector::try_from(regret.as_str())?;
            let oracle = Oracle::new(granularity);
            println!("{} with {} rounds left: {}", regret, rounds, oracle.classify(&regret, rounds));
            if rounds > 0 {
                if let Some(prob) = oracle.strategy(&regret, rounds) {
                    println!("strategy {}", prob);
                }
            }
            Ok(())
        }
    }
}

fn survey(mode: Mode, output: Option<PathBuf>, json: Option<PathBuf>) -> anyhow::Result<()> {
    let survey = mode.run()?;
    if let Some(ref path) = output {
        survey.points().save(path)?;
    }
    if let Some(ref path) = json {
        survey.save(path)?;
    }
    if output.is_none() && json.is_none() {
        print!("{}", survey);
    }
    Ok(())
}
