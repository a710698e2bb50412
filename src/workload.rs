use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[serde(tag = "kind")]
pub enum Workload {
    /// `a[i] = i`
    #[default]
    Sequential,
    /// Seeded uniform random values
    Random { seed: u64 },
}

impl Workload {
    pub fn fill(&self, v: &mut [u32]) {
        match self {
            Workload::Sequential => {
                for (i, x) in v.iter_mut().enumerate() {
                    *x = i as u32;
                }
            }
            Workload::Random { seed } => {
                let mut rng = StdRng::seed_from_u64(*seed);
                rng.fill(v);
            }
        }
    }

    pub fn generate(&self, len: usize) -> Vec<u32> {
        let mut v = vec![0; len];
        self.fill(&mut v);
        v
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Workload::Sequential => write!(f, "sequential"),
            Workload::Random { seed } => write!(f, "random:{}", seed),
        }
    }
}

impl FromStr for Workload {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "sequential" {
            Ok(Workload::Sequential)
        } else if let Some(seed) = s.strip_prefix("random:") {
            let seed = seed
                .parse()
                .map_err(|_| Error::UnknownWorkload(s.to_string()))?;
            Ok(Workload::Random { seed })
        } else {
            Err(Error::UnknownWorkload(s.to_string()))
        }
    }
}
