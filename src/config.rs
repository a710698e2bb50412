use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::check::Trials;
use crate::workload::Workload;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bench: BenchConfig,
    #[serde(default)]
    pub verify: Trials,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    // Region sizes to time, in elements
    #[serde(default = "default::sizes")]
    pub sizes: Vec<usize>,

    #[serde(default = "default::algorithms")]
    pub algorithms: Vec<Algorithm>,

    // Capacity of the source buffer; larger sizes are skipped
    #[serde(default = "default::max_values")]
    pub max_values: usize,

    // Time budget scale, divided by size squared to get the pass count
    #[serde(default = "default::max_time_ns")]
    pub max_time_ns: u64,

    // Above this size only every `(size - 1) / sparse_above`th split is timed;
    // zero times every split
    #[serde(default = "default::sparse_above")]
    pub sparse_above: usize,

    #[serde(default)]
    pub workload: Workload,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: default::sizes(),
            algorithms: default::algorithms(),
            max_values: default::max_values(),
            max_time_ns: default::max_time_ns(),
            sparse_above: default::sparse_above(),
            workload: Workload::default(),
        }
    }
}

mod default {
    use crate::algorithm::Algorithm;

    pub fn sizes() -> Vec<usize> {
        vec![
            10, 50, 100, 500, 1000, 5000, 10000, 50000, 100000, 500000,
            1000000,
        ]
    }

    pub fn algorithms() -> Vec<Algorithm> {
        Algorithm::DEFAULT_BENCH.to_vec()
    }

    pub fn max_values() -> usize {
        2_000_000
    }

    pub fn max_time_ns() -> u64 {
        50_000_000_000
    }

    pub fn sparse_above() -> usize {
        100_000
    }
}
