use crate::primitives::{
    bridge_down, bridge_up, contrev, justrev, reverse_block, shiftrev_down,
    shiftrev_up, two_way_swap,
};
use crate::scratch::rotate_small;

/// Largest block trinity rotation copies through its stack array.
pub const MAX_AUX: usize = 8;

/// Bridges at or below this length are cheaper through the contrev passes.
const MIN_BRIDGE: usize = 3;

const _: () = assert!(MIN_BRIDGE < MAX_AUX);

/// Classic three reversal rotation: reverse A, reverse B, reverse both.
pub fn reversal_rotation<T>(v: &mut [T], na: usize, nb: usize) {
    let v = &mut v[..na + nb];

    reverse_block(&mut v[..na]);
    reverse_block(&mut v[na..]);
    reverse_block(v);
}

/// Conjoined triple reversal.
///
/// Runs the three reversals as a single four-cursor pass while both blocks
/// have unreversed pairs, then a three-cursor pass over the larger block, then
/// a plain reversal of whatever remains in the middle.
pub fn contrev_rotation<T: Copy>(v: &mut [T], na: usize, nb: usize) {
    let v = &mut v[..na + nb];

    if na == nb {
        return two_way_swap(v, 0, na, na);
    }

    contrev_passes(v, na, nb);
}

fn contrev_passes<T: Copy>(v: &mut [T], na: usize, nb: usize) {
    let (mut pa, mut pb, mut pc, mut pd) = (0, na, na, na + nb);

    if na > nb {
        let n = nb / 2;
        contrev(v, pa, pb, pc, pd, n);
        pa += n;
        pb -= n;
        pd -= n;

        let n = (pb - pa) / 2;
        shiftrev_down(v, pa, pb, pd, n);
        pa += n;
        pd -= n;
    } else {
        let n = na / 2;
        contrev(v, pa, pb, pc, pd, n);
        pa += n;
        pc += n;
        pd -= n;

        let n = (pd - pc) / 2;
        shiftrev_up(v, pa, pc, pd, n);
        pa += n;
        pd -= n;
    }

    let n = (pd - pa) / 2;
    justrev(v, pa, pd, n);
}

/// Trinity rotation: conjoined triple reversal plus a bridge.
///
/// Tiny blocks go through a stack copy, blocks differing by a short bridge are
/// moved with the bridge saved on the stack, everything else takes the
/// contrev passes.
pub fn trinity_rotation<T: Copy>(v: &mut [T], na: usize, nb: usize) {
    let v = &mut v[..na + nb];
    let n = na + nb;

    if na == nb {
        return two_way_swap(v, 0, na, na);
    }

    if na.min(nb) <= MAX_AUX {
        return rotate_small(v, na);
    }

    let bridge = na.abs_diff(nb);
    if bridge <= MIN_BRIDGE || bridge > MAX_AUX {
        return contrev_passes(v, na, nb);
    }

    let mut swap = [v[0]; MAX_AUX];

    if na < nb {
        swap[..bridge].copy_from_slice(&v[na..nb]);
        bridge_down(v, na, nb, n, na);
        v[..bridge].copy_from_slice(&swap[..bridge]);
    } else {
        swap[..bridge].copy_from_slice(&v[nb..na]);
        bridge_up(v, 0, na, nb, nb);
        v[n - bridge..].copy_from_slice(&swap[..bridge]);
    }
}

/// Half reverse rotation.
///
/// Only the larger block is reversed on its own. A single fused pass then
/// shifts the smaller block straight to its destination, four elements per
/// step, while mirroring the reversed larger block back into order; the part
/// of the larger block with no partner in the smaller block is reversed in
/// place.
pub fn half_reverse_rotation<T: Copy>(v: &mut [T], na: usize, nb: usize) {
    let v = &mut v[..na + nb];
    let n = na + nb;

    if na == 0 || nb == 0 {
        return;
    }

    if na == nb {
        return two_way_swap(v, 0, na, na);
    }

    if na < nb {
        reverse_block(&mut v[na..]);

        // p -> p + nb -> na - 1 - p -> n - 1 - p -> p
        for p in 0..na / 2 {
            let (w, x, y, z) = (p, p + nb, na - 1 - p, n - 1 - p);
            let t = v[z];
            v[z] = v[y];
            v[y] = v[x];
            v[x] = v[w];
            v[w] = t;
        }

        if na % 2 == 1 {
            let c = na / 2;
            v.swap(c, c + nb);
        }

        reverse_block(&mut v[na..nb]);
    } else {
        reverse_block(&mut v[..na]);

        // na + k -> k -> n - 1 - k -> nb - 1 - k -> na + k
        for k in 0..nb / 2 {
            let (z, w, y, x) = (na + k, k, n - 1 - k, nb - 1 - k);
            let t = v[x];
            v[x] = v[y];
            v[y] = v[w];
            v[w] = v[z];
            v[z] = t;
        }

        if nb % 2 == 1 {
            let c = nb / 2;
            v.swap(c, c + na);
        }

        reverse_block(&mut v[nb..na]);
    }
}
