//! Reconstruct secrets from share set documents

use std::{
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use log::info;
use shamir_rec::{share::ShareSet, MajorityRec};

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Reconstruct the secret from a JSON share set by majority vote over all threshold-sized subsets of shares."
)]
struct Args {
    /// Share set files, standard input if none are given
    files: Vec<PathBuf>,

    /// Override the reconstruction threshold k from the share set
    #[arg(short, long)]
    threshold: Option<usize>,

    /// Also print vote counts and suspicious shares
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn read_input(file: Option<&Path>) -> Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read standard input")?;
    Ok(input)
}

fn find_secret(file: Option<&Path>, args: &Args) -> Result<()> {
    let input = read_input(file)?;
    let set = ShareSet::from_json(&input)?;
    let rec = MajorityRec::new(args.threshold.unwrap_or(set.k));
    let res = rec.rec(&set.points())?;
    info!("Secret found with {} of {} votes", res.votes, res.subsets);
    if let Some(path) = file {
        println!("{}", path.display());
    }
    println!("SECRET: {}", res.secret);
    if args.verbose {
        println!("threshold: {}", rec.threshold());
        println!("votes: {} of {} subsets", res.votes, res.subsets);
        println!("subsets with integer result: {}", res.valid_subsets);
        println!("distinct candidates: {}", res.candidates);
        if !res.suspects.is_empty() {
            let suspects = res.suspects.iter().format(", ");
            println!("suspicious shares: {suspects}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let files = if args.files.is_empty() {
        vec![None]
    } else {
        Vec::from_iter(args.files.iter().map(|f| Some(f.as_path())))
    };
    let mut status = ExitCode::SUCCESS;
    for file in files {
        if let Err(err) = find_secret(file, &args) {
            match file {
                Some(path) => eprintln!("Error: {}: {err:#}", path.display()),
                None => eprintln!("Error: {err:#}"),
            }
            status = ExitCode::FAILURE;
        }
    }
    status
}
