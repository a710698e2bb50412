use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::config::BenchConfig;

const RULE: &str = "=======================================================";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub items: usize,
    pub rotations: u64,
    pub nanos_per_rotate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub passes: u64,
    pub gap: usize,
}

impl Schedule {
    pub fn new(config: &BenchConfig, size: usize) -> Self {
        let size = size.max(1);

        let mut passes = config.max_time_ns / (size as u64 * size as u64);

        // Cheap sizes would otherwise run for far longer than large ones
        let div = (400 / size as u64).max(1);
        passes = (passes / div).max(1);

        // Zero disables sparse sampling
        let gap = if config.sparse_above > 0 && size > config.sparse_above {
            ((size - 1) / config.sparse_above).max(1)
        } else {
            1
        };

        Self { passes, gap }
    }
}

pub struct Harness {
    config: BenchConfig,
    buffer: Vec<u32>,
}

impl Harness {
    pub fn new(config: BenchConfig) -> Self {
        let buffer = config.workload.generate(config.max_values);

        Self { config, buffer }
    }

    /// Sizes from the config that fit in the source buffer.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.config
            .sizes
            .iter()
            .copied()
            .filter(|&size| size <= self.buffer.len())
    }

    #[tracing::instrument(skip(self), level = "debug")]
    pub fn measure(&mut self, algorithm: Algorithm, size: usize) -> Measurement {
        let Schedule { passes, gap } = Schedule::new(&self.config, size);
        let rotate = algorithm.function::<u32>();

        let mut rotations = 0_u64;
        let start = Instant::now();

        for _ in 0..passes {
            for i in (1..size).step_by(gap) {
                rotate(&mut self.buffer, i, size - i);
                rotations += 1;
            }
        }

        let elapsed = start.elapsed();

        Measurement {
            algorithm,
            items: size,
            rotations,
            nanos_per_rotate: nanos_per(elapsed, rotations),
        }
    }

    /// Measures every configured algorithm at `size`.
    pub fn measure_size(&mut self, size: usize) -> Vec<Measurement> {
        let algorithms = self.config.algorithms.clone();

        algorithms
            .into_iter()
            .map(|algorithm| {
                let measurement = self.measure(algorithm, size);

                tracing::info!(
                    %algorithm,
                    size,
                    rotations = measurement.rotations,
                    ns = measurement.nanos_per_rotate,
                    "Measured"
                );

                measurement
            })
            .collect()
    }

    pub fn run(&mut self) -> Vec<Measurement> {
        let sizes: Vec<_> = self.sizes().collect();

        sizes
            .into_iter()
            .flat_map(|size| self.measure_size(size))
            .collect()
    }
}

fn nanos_per(elapsed: Duration, rotations: u64) -> f64 {
    if rotations == 0 {
        return 0.0;
    }

    elapsed.as_nanos() as f64 / rotations as f64
}

pub struct Table<'a>(pub &'a [Measurement]);

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current = None;

        for m in self.0 {
            if current != Some(m.items) {
                current = Some(m.items);

                writeln!(f)?;
                writeln!(f, "{RULE}")?;
                writeln!(f, "         NAME                 ITEMS         TIME/ROTATE")?;
                writeln!(f, "{RULE}")?;
            }

            writeln!(f, "{m}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<24}    {:>7}        {:>10.3}ns",
            self.algorithm.name(),
            self.items,
            self.nanos_per_rotate
        )
    }
}
