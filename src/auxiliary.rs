use crate::primitives::{bridge_down, bridge_up, two_way_swap};

/// Copies the smaller block to a heap buffer, moves the larger block over it
/// and copies the buffer back.
pub fn auxiliary_rotation<T: Copy>(v: &mut [T], na: usize, nb: usize) {
    let v = &mut v[..na + nb];

    if na < nb {
        let swap = v[..na].to_vec();
        v.copy_within(na.., 0);
        v[nb..].copy_from_slice(&swap);
    } else {
        let swap = v[na..].to_vec();
        v.copy_within(..na, nb);
        v[..nb].copy_from_slice(&swap);
    }
}

/// Bridge rotation (2021).
///
/// When the difference between the blocks (the bridge) is shorter than the
/// smaller block, only the bridge is buffered and both blocks are moved past
/// it in a single pass. Otherwise falls back to [`auxiliary_rotation`].
pub fn bridge_rotation<T: Copy>(v: &mut [T], na: usize, nb: usize) {
    let v = &mut v[..na + nb];
    let n = na + nb;

    if na == nb {
        return two_way_swap(v, 0, na, na);
    }

    let bridge = na.abs_diff(nb);
    if bridge >= na.min(nb) {
        return auxiliary_rotation(v, na, nb);
    }

    if na < nb {
        let swap = v[na..nb].to_vec();
        bridge_down(v, na, nb, n, na);
        v[..bridge].copy_from_slice(&swap);
    } else {
        let swap = v[nb..na].to_vec();
        bridge_up(v, 0, na, nb, nb);
        v[n - bridge..].copy_from_slice(&swap);
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Juggling (dolphin) rotation (1965): walks the `gcd(na, na + nb)` cycles of
/// the permutation, moving every element exactly once.
pub fn juggling_rotation<T: Copy>(v: &mut [T], na: usize, nb: usize) {
    let v = &mut v[..na + nb];
    let n = na + nb;

    if na == 0 || nb == 0 {
        return;
    }

    for leader in 0..gcd(na, n) {
        let t = v[leader];
        let mut a = leader;

        loop {
            let mut b = a + na;

            if b >= n {
                b -= n;

                if b == leader {
                    break;
                }
            }

            v[a] = v[b];
            a = b;
        }

        v[a] = t;
    }
}
