use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use rotate::config::BenchConfig;
use rotate::harness::{Harness, Table};
use rotate::workload::Workload;
use rotate::Algorithm;

#[derive(Debug, Clone, Args)]
pub struct Bench {
    /// Algorithms to time, overriding the config (repeatable)
    #[clap(short, long = "algorithm")]
    pub algorithms: Vec<Algorithm>,

    /// Region sizes to time, overriding the config (repeatable)
    #[clap(short, long = "size")]
    pub sizes: Vec<usize>,

    #[clap(short, long)]
    pub workload: Option<Workload>,

    /// Print measurements as JSON instead of a table
    #[clap(long)]
    pub json: bool,
}

pub fn bench(args: &Bench, mut config: BenchConfig) -> eyre::Result<()> {
    if !args.algorithms.is_empty() {
        config.algorithms = args.algorithms.clone();
    }

    if !args.sizes.is_empty() {
        config.sizes = args.sizes.clone();
    }

    if let Some(workload) = args.workload {
        config.workload = workload;
    }

    tracing::info!(
        sizes = ?config.sizes,
        algorithms = ?config.algorithms,
        workload = %config.workload,
        "Benchmarking"
    );

    let mut harness = Harness::new(config);
    let sizes: Vec<_> = harness.sizes().collect();

    let pb = ProgressBar::new(sizes.len() as u64).with_message("Timing rotations...");
    pb.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} {msg} [{elapsed_precise}] [{wide_bar:.green}] {pos:>3}/{len:3}")
        .expect("Could not create progress bar"));

    let mut results = vec![];
    for size in sizes {
        pb.set_message(format!("Timing {size} items..."));
        results.extend(harness.measure_size(size));
        pb.inc(1);
    }

    pb.finish_and_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", Table(&results));
    }

    Ok(())
}
