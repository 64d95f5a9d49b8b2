use clap::{Parser, ValueEnum};
use std::time::{Duration, Instant};

use nqueens_perm::NQueensError;
use nqueens_perm::logging;
use nqueens_perm::search::config::{Schedule, SearchConfig, DEFAULT_CHUNK_SIZE};
use nqueens_perm::search::parallel::{run_parallel_search, ParallelConfig, ParallelResult};
use nqueens_perm::search::result::SearchStatistics;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "nqueens")]
#[command(about = "Count n-queens solutions by brute-force permutation enumeration")]
#[command(version)]
#[command(arg_required_else_help = true)]
struct Args {
    /// Board size n (0 to 20)
    board_size: usize,
    /// Number of worker threads
    workers: usize,

    /// How the index range is split across workers
    #[arg(long, value_enum, default_value = "dynamic")]
    schedule: CliSchedule,
    /// Indices per unit of work (also the stop-check interval)
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: u64,
    /// Stop after this many seconds and report a partial count
    #[arg(long)]
    timeout: Option<u64>,
    /// Print up to this many solutions after the count
    #[arg(long, default_value_t = 0)]
    show_solutions: usize,
    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

/// CLI schedule selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliSchedule {
    /// One contiguous slice per worker
    Static,
    /// Workers claim chunks from a shared cursor
    Dynamic,
}

impl From<CliSchedule> for Schedule {
    fn from(cli: CliSchedule) -> Self {
        match cli {
            CliSchedule::Static => Schedule::Static,
            CliSchedule::Dynamic => Schedule::Dynamic,
        }
    }
}

/// Exit code for a run that hit its timeout. clap already uses 2 for usage errors.
const EXIT_INCOMPLETE: i32 = 3;

fn run(args: &Args) -> Result<ParallelResult, NQueensError> {
    let search_config = SearchConfig::new(args.board_size)
        .with_schedule(args.schedule.into())
        .with_chunk_size(args.chunk_size)
        .with_collect_solutions(args.show_solutions);

    let parallel_config = ParallelConfig::default()
        .with_exact_workers(args.workers)
        .with_timeout_option(args.timeout.map(Duration::from_secs));

    run_parallel_search(&search_config, &parallel_config)
}

/// Print search statistics
fn print_search_statistics(total: &SearchStatistics, workers: &[(usize, SearchStatistics)]) {
    println!("\nSearch Statistics:");
    for line in total.format_summary().lines() {
        println!("  {}", line);
    }
    println!("\nPer-worker breakdown:");
    for (worker_id, stats) in workers {
        println!(
            "  worker {:>3}: {} candidates, {} solutions, {} chunks, {:.2?}",
            worker_id,
            stats.candidates_evaluated,
            stats.solutions_found,
            stats.chunks_processed,
            stats.elapsed_time
        );
    }
}

// --- Main Function ---
fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init_logging(args.verbose) {
        eprintln!("Warning: {}", e);
    }

    let start_time = Instant::now();
    let parallel = match run(&args) {
        Ok(parallel) => parallel,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let elapsed = start_time.elapsed();

    let result = &parallel.result;
    println!("The execution time is {} sec", elapsed.as_secs_f64());
    println!("Total number of solutions found: {}", result.total_solutions);

    if !result.solutions.is_empty() {
        println!("\nSolutions:");
        for board in &result.solutions {
            println!("  {}", board);
        }
    }

    if args.verbose {
        print_search_statistics(&result.statistics, &parallel.worker_statistics);
    }

    if !result.completed {
        eprintln!(
            "Warning: search stopped early; count covers {} of {} permutations ({:.2}%)",
            result.statistics.candidates_evaluated,
            result.search_space,
            result.coverage() * 100.0
        );
        std::process::exit(EXIT_INCOMPLETE);
    }
}
