//! CLI for the phonebook strategy benchmarks.
//!
//! Usage:
//!   phonebook-bench run                      # Run all strategies
//!   phonebook-bench run quick-binary         # Run one strategy
//!   phonebook-bench list                     # List available strategies
//!   phonebook-bench generate --dir assets    # Write synthetic inputs

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use phonebook_bench::datagen::DataGen;
use phonebook_bench::errors::BenchError;
use phonebook_bench::harness::{run_all, run_strategy};
use phonebook_bench::source::{FileSource, LineSource};
use phonebook_bench::strategy::Strategy;
use phonebook_bench::tui;

#[derive(Parser)]
#[command(
    name = "phonebook-bench",
    about = "Benchmarks of sorting and searching strategies over a flat-text phonebook",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the benchmark strategies against a phonebook and query list
    Run {
        /// Phonebook file, one `<number> <name>` record per line
        #[arg(short, long, default_value = "directory.txt")]
        phonebook: PathBuf,

        /// Query file, one target name per line
        #[arg(short, long, default_value = "find.txt")]
        find: PathBuf,

        /// Strategy id to run (omit for all, in the fixed order)
        strategy: Option<String>,

        /// Print a cross-strategy summary table after the run
        #[arg(long)]
        summary: bool,
    },

    /// List the available strategies
    List,

    /// Generate a synthetic phonebook and query list
    Generate {
        /// Output directory for directory.txt and find.txt
        #[arg(long, default_value = "assets")]
        dir: PathBuf,

        /// Number of phonebook entries
        #[arg(long, default_value_t = 10_000)]
        entries: usize,

        /// Number of query names
        #[arg(long, default_value_t = 500)]
        queries: usize,

        /// Fraction of queries drawn from the phonebook
        #[arg(long, default_value_t = 0.7)]
        hit_rate: f64,

        /// Seed for reproducible data
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Run {
            phonebook,
            find,
            strategy,
            summary,
        } => run(phonebook, find, strategy.as_deref(), summary),
        Commands::List => {
            tui::print_available_strategies();
            Ok(())
        }
        Commands::Generate {
            dir,
            entries,
            queries,
            hit_rate,
            seed,
        } => generate(dir, entries, queries, hit_rate, seed),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    phonebook: PathBuf,
    find: PathBuf,
    strategy: Option<&str>,
    summary: bool,
) -> Result<(), BenchError> {
    let phonebook = FileSource::new(phonebook);
    let find = FileSource::new(find);
    let mut console = tui::Console;

    tui::print_header();

    let reports = match strategy {
        Some(id) => {
            let Some(strategy) = Strategy::find(id) else {
                eprintln!("Strategy '{}' not found.", id);
                tui::print_available_strategies();
                std::process::exit(1);
            };
            phonebook.ensure_available()?;
            find.ensure_available()?;
            vec![run_strategy(strategy, &phonebook, &find, &mut console)?]
        }
        None => run_all(&phonebook, &find, &mut console)?,
    };

    if summary {
        tui::print_summary(&reports);
    }
    Ok(())
}

fn generate(
    dir: PathBuf,
    entries: usize,
    queries: usize,
    hit_rate: f64,
    seed: u64,
) -> Result<(), BenchError> {
    let mut gen = DataGen::new(seed);
    let book = gen.phonebook(entries);
    let finds = gen.queries(&book, queries, hit_rate);

    fs::create_dir_all(&dir)?;
    let book_path = dir.join("directory.txt");
    let find_path = dir.join("find.txt");
    fs::write(&book_path, book.join("\n") + "\n")?;
    fs::write(&find_path, finds.join("\n") + "\n")?;

    println!(
        "Wrote {} entries to {} and {} queries to {}",
        entries,
        book_path.display(),
        queries,
        find_path.display()
    );
    Ok(())
}
