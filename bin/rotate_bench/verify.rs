use std::time::Instant;

use clap::Args;
use rotate::check::{self, Trials};
use rotate::Algorithm;

#[derive(Debug, Clone, Args)]
pub struct Verify {
    /// Algorithms to check, defaults to all of them (repeatable)
    #[clap(short, long = "algorithm")]
    pub algorithms: Vec<Algorithm>,

    #[clap(short, long)]
    pub trials: Option<u64>,

    #[clap(long)]
    pub max_len: Option<usize>,

    #[clap(long)]
    pub seed: Option<u64>,

    /// Also check every split of every region up to this length
    #[clap(long)]
    pub exhaustive: Option<usize>,
}

pub fn verify(args: &Verify, mut trials: Trials) -> eyre::Result<()> {
    let algorithms = if args.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        args.algorithms.clone()
    };

    trials.trials = args.trials.unwrap_or(trials.trials);
    trials.max_len = args.max_len.unwrap_or(trials.max_len);
    trials.seed = args.seed.unwrap_or(trials.seed);

    let now = Instant::now();

    if let Some(max_len) = args.exhaustive {
        tracing::info!(max_len, "Checking every split");

        for len in 0..=max_len {
            check::every_split(&algorithms, len)?;
        }
    }

    tracing::info!(?trials, "Running random trials");
    let checked = check::random_trials(&algorithms, &trials)?;

    let elapsed = now.elapsed();
    tracing::info!(checked, ?elapsed, "All rotations agree with the reference");

    println!("OK: {checked} rotations checked");

    Ok(())
}
