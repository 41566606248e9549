use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::Level;

use markov_gen_core::{ChainModel, Generator};

/// Generate second-order Markov text from a plain-text file.
#[derive(Parser, Debug)]
#[command(
    name = "markov-gen",
    about = "Build a word-bigram Markov chain from a text file and print one generated text",
    long_about = None
)]
struct Cli {
    /// UTF-8 text file to build the chain from.
    file: PathBuf,

    /// RNG seed; the same seed on the same file reproduces the output.
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Read the whole source file as one UTF-8 string.
    let text = fs::read_to_string(&cli.file)?;

    // Build the chain model, then walk it once.
    let model = ChainModel::build(&text)?;
    let generator = Generator::new(&model)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("{}", generator.generate(&mut rng));
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    if let Err(error) = run(&cli) {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
