//! Rotators backed by a bounded on-stack scratch array.
//!
//! Both helpers finish a rotation in a couple of bulk moves when one block,
//! or the difference between the blocks, is tiny. They are the terminal cases
//! of the triple-shift loop and are also usable on their own.

use crate::primitives::two_way_swap;

/// Largest block (or block difference) the scratch rotators handle.
pub const SMALL_ROTATE_SIZE: usize = 16;

/// Smallest block difference handed to [`rotate_overlap`].
pub const MIN_OVERLAP: usize = 3;

const _: () = assert!(SMALL_ROTATE_SIZE >= 1);
const _: () = assert!(MIN_OVERLAP <= SMALL_ROTATE_SIZE);

/// Rotates `v` split at `na` when the smaller side fits in scratch.
///
/// The smaller block is copied out, the larger block is shifted over it with
/// one `copy_within`, and the saved block is copied into the vacated end.
///
/// # Panics
///
/// If `na > v.len()` or `min(na, v.len() - na) > SMALL_ROTATE_SIZE`.
pub fn rotate_small<T: Copy>(v: &mut [T], na: usize) {
    let nb = v.len() - na;

    if na == 0 || nb == 0 {
        return;
    }

    if na == nb {
        return two_way_swap(v, 0, na, na);
    }

    assert!(na.min(nb) <= SMALL_ROTATE_SIZE);

    let mut buf = [v[0]; SMALL_ROTATE_SIZE];

    if na < nb {
        buf[..na].copy_from_slice(&v[..na]);
        v.copy_within(na.., 0);
        v[nb..].copy_from_slice(&buf[..na]);
    } else {
        buf[..nb].copy_from_slice(&v[na..]);
        v.copy_within(..na, nb);
        v[..nb].copy_from_slice(&buf[..nb]);
    }
}

/// Rotates `v` split at `na` when the two blocks differ by at most
/// [`SMALL_ROTATE_SIZE`] elements.
///
/// The overhang of the larger block goes to scratch, the rest of it is
/// shifted by the difference, the two now equal-length blocks are swapped and
/// the overhang is copied into its final place.
///
/// # Panics
///
/// If `na > v.len()` or `|na - nb| > SMALL_ROTATE_SIZE`.
pub fn rotate_overlap<T: Copy>(v: &mut [T], na: usize) {
    let nb = v.len() - na;

    if na == nb {
        return two_way_swap(v, 0, na, na);
    }

    let nc = na.abs_diff(nb);
    assert!(nc <= SMALL_ROTATE_SIZE);

    let mut buf = [v[0]; SMALL_ROTATE_SIZE];
    let pe = v.len();

    if na < nb {
        let pb = na;
        let pc = pb + nc;

        buf[..nc].copy_from_slice(&v[pe - nc..]);
        v.copy_within(pb..pb + na, pc);
        two_way_swap(v, 0, pc, na);
        v[pb..pc].copy_from_slice(&buf[..nc]);
    } else {
        let pb = na;
        let pc = pb - nc;

        buf[..nc].copy_from_slice(&v[pc..pb]);
        v.copy_within(pb.., pc);
        two_way_swap(v, 0, pc, nb);
        v[pe - nc..].copy_from_slice(&buf[..nc]);
    }
}
