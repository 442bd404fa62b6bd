use algobench::{BenchConfig, Benchmark, WorkerPool, config, corpus, preview_lines};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "algobench")]
#[command(about = "Times linear search, binary search, insertion sort and the library sort across dataset sizes", long_about = None)]
struct BenchArgs {
    /// Dataset sizes, strictly ascending (comma-separated)
    #[arg(short, long, value_delimiter = ',', default_values_t = config::DEFAULT_SIZES)]
    sizes: Vec<usize>,

    /// Number of trials per dataset size
    #[arg(short = 'n', long, default_value_t = config::DEFAULT_SAMPLE_SIZE)]
    samples: usize,

    /// CSV report path (overwritten)
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Worker threads (defaults to available cores)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Seed for reproducible datasets and search keys
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file of {"brand", "models"} entries used to name records
    #[arg(short, long)]
    corpus: Option<PathBuf>,

    /// URL the name corpus is downloaded from when no --corpus file is given
    #[arg(long, default_value = corpus::DEFAULT_CORPUS_URL)]
    corpus_url: String,

    /// Use the embedded name corpus instead of downloading one
    #[arg(long, conflicts_with = "corpus_url")]
    builtin_corpus: bool,

    /// Records of the largest dataset to print before running (even; 0 disables)
    #[arg(short, long, default_value_t = config::DEFAULT_PREVIEW_COUNT)]
    preview: usize,

    /// Do not echo report rows to stdout
    #[arg(short, long)]
    quiet: bool,
}

impl BenchArgs {
    fn into_config(self) -> BenchConfig {
        BenchConfig {
            sizes: self.sizes,
            sample_size: self.samples,
            output: self.output,
            threads: self.threads.unwrap_or_else(WorkerPool::default_threads),
            seed: self.seed,
            corpus: self.corpus,
            corpus_url: (!self.builtin_corpus).then_some(self.corpus_url),
            preview_count: self.preview,
            echo_rows: !self.quiet,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = BenchArgs::parse().into_config();
    println!("=== Algorithm Benchmark ===\n");
    println!("Dataset sizes: {:?}", config.sizes);
    println!(
        "Trials per size: {} ({} total)",
        config.sample_size,
        config.total_trials()
    );
    println!("Worker threads: {}", config.threads);
    println!("Output: {}", config.output.display());
    println!();

    let benchmark = Benchmark::prepare(config)?;

    let preview_count = benchmark.config().preview_count;
    if preview_count > 0 {
        println!("Largest dataset preview:");
        for line in preview_lines(benchmark.datasets().largest(), preview_count) {
            println!("{}", line);
        }
        println!();
    }

    let output = benchmark.config().output.clone();
    let echo_rows = benchmark.config().echo_rows;
    let run = benchmark.execute()?;

    run.report.write_to_path(&output)?;

    if echo_rows {
        for row in run.report.rows() {
            println!("{}", row);
        }
    }

    println!(
        "\nStarted {}, seed {}, {} rows written to {}",
        run.started_at.format("%Y-%m-%d %H:%M:%S"),
        run.seed,
        run.report.len(),
        output.display()
    );
    println!("Complete, took {}s.", run.elapsed.as_secs());

    Ok(())
}
