use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::error::Error;
use crate::reference;

/// Rotates a copy of `region` with `algorithm` and compares it with the
/// reference, then rotates back with the complementary split and expects the
/// original input.
///
/// Elements past `na + nb` must come through untouched.
pub fn verify<T: Copy + PartialEq>(
    algorithm: Algorithm,
    region: &[T],
    na: usize,
    nb: usize,
) -> Result<(), Error> {
    let n = na + nb;

    let mut expected = reference::rotated(region, na, nb);
    expected.extend_from_slice(&region[n..]);

    let mut actual = region.to_vec();
    algorithm.rotate(&mut actual, na, nb);

    if let Some(index) = actual.iter().zip(&expected).position(|(a, e)| a != e)
    {
        return Err(Error::Mismatch {
            algorithm,
            na,
            nb,
            index,
        });
    }

    algorithm.rotate(&mut actual, nb, na);

    if actual != region {
        return Err(Error::NotInvolutive { algorithm, na, nb });
    }

    Ok(())
}

pub fn every_split(algorithms: &[Algorithm], len: usize) -> Result<(), Error> {
    let region: Vec<u32> = (0..len as u32).collect();

    algorithms.par_iter().try_for_each(|&algorithm| {
        (0..=len).try_for_each(|na| verify(algorithm, &region, na, len - na))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trials {
    pub trials: u64,
    pub max_len: usize,
    pub seed: u64,
}

impl Default for Trials {
    fn default() -> Self {
        Self {
            trials: 1000,
            max_len: 10_000,
            seed: 0,
        }
    }
}

/// Runs seeded random trials in parallel, each on its own buffer.
///
/// Returns the number of rotations checked.
#[tracing::instrument(skip(algorithms), level = "debug")]
pub fn random_trials(
    algorithms: &[Algorithm],
    trials: &Trials,
) -> Result<u64, Error> {
    (0..trials.trials).into_par_iter().try_for_each(|trial| {
        let mut rng = StdRng::seed_from_u64(trials.seed.wrapping_add(trial));

        let len = rng.gen_range(0..=trials.max_len);
        let na = rng.gen_range(0..=len);
        let slack = rng.gen_range(0..4);
        let region: Vec<u64> = (0..len + slack).map(|_| rng.gen()).collect();

        for &algorithm in algorithms {
            verify(algorithm, &region, na, len - na).map_err(|err| {
                tracing::error!(trial, len, na, %err, "Verification failed");
                err
            })?;
        }

        Ok(())
    })?;

    Ok(trials.trials * algorithms.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_accepts_every_algorithm() {
        let region: Vec<u32> = (0..257).collect();

        for algorithm in Algorithm::ALL {
            for na in [0, 1, 16, 17, 100, 128, 200, 256] {
                verify(algorithm, &region[..256], na, 256 - na).unwrap();
                verify(algorithm, &region, na, 256 - na).unwrap();
            }
        }
    }

    #[test]
    fn every_split_passes() {
        every_split(&Algorithm::ALL, 97).unwrap();
    }

    #[test]
    fn random_trials_count_checks() {
        let trials = Trials {
            trials: 50,
            max_len: 500,
            seed: 3,
        };

        let checked = random_trials(&Algorithm::ALL, &trials).unwrap();

        assert_eq!(checked, 50 * Algorithm::ALL.len() as u64);
    }

    #[test]
    fn trials_from_toml() {
        const TOML: &str = indoc::indoc! {
            r#"
            trials = 10
            max_len = 64
            seed = 9
            "#
        };

        let trials: Trials = toml::from_str(TOML).unwrap();

        assert_eq!(
            trials,
            Trials {
                trials: 10,
                max_len: 64,
                seed: 9
            }
        );
    }
}
