//! In-place block rotation.
//!
//! Turns a region `[A, B]` into `[B, A]` without allocating, the centrepiece
//! being [`triple_shift_rotate`]. The other rotations in the crate satisfy the
//! same contract (see [`algorithm`]) and exist to be compared against it.
//!
//! ```
//! use rotate::{triple_shift_rotate, Algorithm};
//!
//! let mut v = [1, 2, 3, 4, 5, 6];
//! triple_shift_rotate(&mut v, 2, 4);
//! assert_eq!(v, [3, 4, 5, 6, 1, 2]);
//!
//! Algorithm::Trinity.rotate(&mut v, 4, 2);
//! assert_eq!(v, [1, 2, 3, 4, 5, 6]);
//! ```

pub mod algorithm;
pub mod auxiliary;
pub mod check;
pub mod config;
pub mod error;
pub mod harness;
pub mod primitives;
pub mod reference;
pub mod reversal;
pub mod scratch;
pub mod successive;
pub mod triple_shift;
pub mod workload;

pub use crate::algorithm::{Algorithm, RotateFn};
pub use crate::error::Error;
pub use crate::scratch::{MIN_OVERLAP, SMALL_ROTATE_SIZE};
pub use crate::triple_shift::{triple_shift_rotate, triple_shift_rotate_v2};
