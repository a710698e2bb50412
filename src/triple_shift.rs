//! Triple shift block rotation.
//!
//! A successive-swap rotation in the Gries-Mills line that moves three blocks
//! per pass instead of two. When one block is at least twice the other
//! (remainder scenario) each pass settles the smaller block at both ends of the
//! region, collapsing it by twice the smaller length. When the blocks are
//! close in size (overflow scenario) a three-way pass over the difference plus
//! a two-way pass over the rest settles the whole larger block, leaving a
//! sub-problem split at the difference.
//!
//! Near-equal and tiny splits, which would otherwise degrade toward one element
//! per pass, finish through the scratch rotators.

use crate::primitives::{three_way_swap, three_way_swap_back, two_way_swap};
use crate::scratch::{
    rotate_overlap, rotate_small, MIN_OVERLAP, SMALL_ROTATE_SIZE,
};

#[inline]
fn is_overlap(nc: usize) -> bool {
    (MIN_OVERLAP..=SMALL_ROTATE_SIZE).contains(&nc)
}

/// Rotates `v[..na + nb]` so that the `nb` block precedes the `na` block.
///
/// # Panics
///
/// If `na + nb > v.len()`.
pub fn triple_shift_rotate<T: Copy>(v: &mut [T], na: usize, nb: usize) {
    let v = &mut v[..na + nb];

    let (mut na, mut nb) = (na, nb);
    let (mut pa, mut pb, mut pe) = (0, na, na + nb);

    loop {
        debug_assert_eq!(pb - pa, na);
        debug_assert_eq!(pe - pb, nb);

        if na == nb {
            return two_way_swap(v, pa, pb, na);
        }

        if na < nb {
            let nc = nb - na;

            if na <= SMALL_ROTATE_SIZE {
                return rotate_small(&mut v[pa..pe], na);
            }

            if nc < na {
                // Overflow
                if is_overlap(nc) {
                    return rotate_overlap(&mut v[pa..pe], na);
                }

                three_way_swap(v, pb - nc, pb, pe - nc, nc);
                two_way_swap(v, pa, pb + nc, na - nc);

                na -= nc;
                pe = pb;
                pb -= nc;
                nb = nc;
            } else {
                // Remainder
                three_way_swap(v, pa, pb, pe - na, na);

                pa = pb;
                pb += na;
                pe -= na;
                nb -= 2 * na;
            }
        } else {
            let nc = na - nb;

            if nb <= SMALL_ROTATE_SIZE {
                return rotate_small(&mut v[pa..pe], na);
            }

            if nc < nb {
                // Overflow
                if is_overlap(nc) {
                    return rotate_overlap(&mut v[pa..pe], na);
                }

                three_way_swap(v, pb, pb - nc, pa, nc);
                two_way_swap(v, pb + nc, pa + nc, nb - nc);

                pa = pb;
                na = nc;
                pb += nc;
                nb -= nc;
            } else {
                // Remainder
                three_way_swap(v, pb, pb - nb, pa, nb);

                pe = pb;
                pb -= nb;
                pa += nb;
                na -= 2 * nb;
            }
        }
    }
}

/// Triple shift rotation with the remainder and overflow steps merged.
///
/// Each reduction is one pass: a three-way swap over `k = min(smaller, delta)`
/// elements followed by a two-way swap over the `smaller - k` left over, which
/// is empty in the remainder case. Only the state update depends on which
/// case was taken. Produces exactly the same moves as [`triple_shift_rotate`].
///
/// # Panics
///
/// If `na + nb > v.len()`.
pub fn triple_shift_rotate_v2<T: Copy>(v: &mut [T], na: usize, nb: usize) {
    let v = &mut v[..na + nb];

    let (mut na, mut nb) = (na, nb);
    let (mut pa, mut pb, mut pe) = (0, na, na + nb);

    loop {
        if na == nb {
            return two_way_swap(v, pa, pb, na);
        }

        let ns = na.min(nb);
        let nc = na.abs_diff(nb);

        if ns <= SMALL_ROTATE_SIZE {
            return rotate_small(&mut v[pa..pe], na);
        }

        if nc < ns && is_overlap(nc) {
            return rotate_overlap(&mut v[pa..pe], na);
        }

        let k = ns.min(nc);

        if na < nb {
            three_way_swap(v, pb - k, pb, pe - k, k);
            two_way_swap(v, pa, pb + k, ns - k);

            if k == ns {
                pa = pb;
                pb += k;
                pe -= k;
                nb -= 2 * k;
            } else {
                pe = pb;
                pb -= k;
                na -= k;
                nb = k;
            }
        } else {
            three_way_swap_back(v, pb, pb - k, pa, k);
            two_way_swap(v, pb + k, pa + k, ns - k);

            if k == ns {
                pe = pb;
                pb -= k;
                pa += k;
                na -= 2 * k;
            } else {
                pa = pb;
                pb += k;
                na = k;
                nb -= k;
            }
        }
    }
}
