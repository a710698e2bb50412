//! The registry of rotation algorithms.
//!
//! Every algorithm honours the same contract: given a region and a split
//! `(na, nb)` with `na + nb <= region.len()`, it permutes `region[..na + nb]`
//! in place into `region[na..na + nb] ++ region[..na]` and leaves the rest of
//! the region untouched. A zero-length block is a no-op, and rotating back with
//! the complementary split `(nb, na)` restores the input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::{auxiliary, reversal, successive, triple_shift};

/// An in-place rotation of `region[..na + nb]` split at `na`.
pub type RotateFn<T> = fn(&mut [T], usize, usize);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    TripleShift,
    TripleShiftV2,
    Reversal,
    ContRev,
    Trinity,
    HalfReverse,
    Bridge,
    Auxiliary,
    Juggling,
    GriesMills,
    Grail,
    Piston,
    Helix,
    Drill,
    Forsort,
}

impl Algorithm {
    /// Every algorithm, in the order results are reported.
    pub const ALL: [Algorithm; 15] = [
        Algorithm::TripleShift,
        Algorithm::TripleShiftV2,
        Algorithm::Reversal,
        Algorithm::ContRev,
        Algorithm::Trinity,
        Algorithm::HalfReverse,
        Algorithm::Bridge,
        Algorithm::Auxiliary,
        Algorithm::Juggling,
        Algorithm::GriesMills,
        Algorithm::Grail,
        Algorithm::Piston,
        Algorithm::Helix,
        Algorithm::Drill,
        Algorithm::Forsort,
    ];

    pub const DEFAULT_BENCH: [Algorithm; 4] = [
        Algorithm::ContRev,
        Algorithm::Trinity,
        Algorithm::TripleShift,
        Algorithm::TripleShiftV2,
    ];

    /// Display name used in results tables.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::TripleShift => "Triple Shift Rotate",
            Algorithm::TripleShiftV2 => "Triple Shift Rotate V2",
            Algorithm::Reversal => "Triple-Reverse Rotate",
            Algorithm::ContRev => "ContRev Rotation",
            Algorithm::Trinity => "Trinity Rotation",
            Algorithm::HalfReverse => "Half Reverse Rotate",
            Algorithm::Bridge => "Bridge Rotate (N/3 Aux)",
            Algorithm::Auxiliary => "Aux Rotation (N/2 Aux)",
            Algorithm::Juggling => "Juggling Rotation",
            Algorithm::GriesMills => "Gries-Mills Rotation",
            Algorithm::Grail => "Grail Rotation",
            Algorithm::Piston => "Piston Rotation",
            Algorithm::Helix => "Helix Rotation",
            Algorithm::Drill => "Drill Rotation",
            Algorithm::Forsort => "Old Forsort Rotation",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::TripleShift => "triple_shift",
            Algorithm::TripleShiftV2 => "triple_shift_v2",
            Algorithm::Reversal => "reversal",
            Algorithm::ContRev => "cont_rev",
            Algorithm::Trinity => "trinity",
            Algorithm::HalfReverse => "half_reverse",
            Algorithm::Bridge => "bridge",
            Algorithm::Auxiliary => "auxiliary",
            Algorithm::Juggling => "juggling",
            Algorithm::GriesMills => "gries_mills",
            Algorithm::Grail => "grail",
            Algorithm::Piston => "piston",
            Algorithm::Helix => "helix",
            Algorithm::Drill => "drill",
            Algorithm::Forsort => "forsort",
        }
    }

    pub fn uses_heap(&self) -> bool {
        matches!(self, Algorithm::Bridge | Algorithm::Auxiliary)
    }

    pub fn function<T: Copy>(&self) -> RotateFn<T> {
        match self {
            Algorithm::TripleShift => triple_shift::triple_shift_rotate,
            Algorithm::TripleShiftV2 => triple_shift::triple_shift_rotate_v2,
            Algorithm::Reversal => reversal::reversal_rotation,
            Algorithm::ContRev => reversal::contrev_rotation,
            Algorithm::Trinity => reversal::trinity_rotation,
            Algorithm::HalfReverse => reversal::half_reverse_rotation,
            Algorithm::Bridge => auxiliary::bridge_rotation,
            Algorithm::Auxiliary => auxiliary::auxiliary_rotation,
            Algorithm::Juggling => auxiliary::juggling_rotation,
            Algorithm::GriesMills => successive::gries_mills_rotation,
            Algorithm::Grail => successive::grail_rotation,
            Algorithm::Piston => successive::piston_rotation,
            Algorithm::Helix => successive::helix_rotation,
            Algorithm::Drill => successive::drill_rotation,
            Algorithm::Forsort => successive::forsort_rotation,
        }
    }

    /// Rotates `v[..na + nb]` so that the `nb` block precedes the `na` block.
    ///
    /// # Panics
    ///
    /// If `na + nb > v.len()`.
    #[inline]
    pub fn rotate<T: Copy>(&self, v: &mut [T], na: usize, nb: usize) {
        (self.function::<T>())(v, na, nb)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.name())
        } else {
            write!(f, "{}", self.id())
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase().replace('-', "_");

        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.id() == s)
            .ok_or(Error::UnknownAlgorithm(s))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use test_case::test_case;

    use super::*;

    #[test_case("triple_shift" => Algorithm::TripleShift)]
    #[test_case("triple-shift-v2" => Algorithm::TripleShiftV2)]
    #[test_case(" Trinity " => Algorithm::Trinity)]
    #[test_case("gries_mills" => Algorithm::GriesMills)]
    fn parse(s: &str) -> Algorithm {
        s.parse().unwrap()
    }

    #[test]
    fn parse_unknown() {
        let err = "bogo".parse::<Algorithm>().unwrap_err();

        assert_eq!(err, Error::UnknownAlgorithm("bogo".to_string()));
    }

    #[test]
    fn ids_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn serde_matches_display() -> eyre::Result<()> {
        for algorithm in Algorithm::ALL {
            let json = serde_json::to_string(&algorithm)?;

            assert_eq!(json, format!("\"{algorithm}\""));
            assert_eq!(serde_json::from_str::<Algorithm>(&json)?, algorithm);
        }

        Ok(())
    }

    #[test]
    fn registry_is_complete_and_unique() {
        let ids: HashSet<_> = Algorithm::ALL.iter().map(|a| a.id()).collect();
        let names: HashSet<_> = Algorithm::ALL.iter().map(|a| a.name()).collect();

        assert_eq!(ids.len(), Algorithm::ALL.len());
        assert_eq!(names.len(), Algorithm::ALL.len());
    }

    #[test]
    fn dispatch_rotates() {
        for algorithm in Algorithm::ALL {
            let mut v = [1, 2, 3, 4, 5, 6];

            algorithm.rotate(&mut v, 2, 4);

            assert_eq!(v, [3, 4, 5, 6, 1, 2], "{algorithm:#}");
        }
    }
}
