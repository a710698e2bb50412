use crate::primitives::{backward_block_swap, forward_block_swap, two_way_swap};
use crate::scratch::rotate_small;

/// Gries-Mills rotation (1981).
pub fn gries_mills_rotation<T>(v: &mut [T], na: usize, nb: usize) {
    let v = &mut v[..na + nb];

    let (mut left, mut right) = (na, nb);
    let mut start = 0;

    while left > 0 && right > 0 {
        if left <= right {
            loop {
                forward_block_swap(v, start, start + left, left);
                start += left;
                right -= left;

                if left > right {
                    break;
                }
            }
        } else {
            loop {
                forward_block_swap(v, start + left - right, start + left, right);
                left -= right;

                if right > left {
                    break;
                }
            }
        }
    }
}

/// Grail rotation: Gries-Mills with a stack copy once a block is down to a
/// single element.
pub fn grail_rotation<T: Copy>(v: &mut [T], na: usize, nb: usize) {
    let v = &mut v[..na + nb];

    let (mut left, mut right) = (na, nb);
    let mut min = left.min(right);
    let mut start = 0;

    while min > 1 {
        if left <= right {
            loop {
                forward_block_swap(v, start, start + left, left);
                start += left;
                right -= left;

                if left > right {
                    break;
                }
            }

            min = right;
        } else {
            loop {
                backward_block_swap(v, start + left - right, start + left, right);
                left -= right;

                if right > left {
                    break;
                }
            }

            min = left;
        }
    }

    if min > 0 {
        rotate_small(&mut v[start..start + left + right], left);
    }
}

/// Piston rotation: settles the smaller block alternately at the back and the
/// front of the shrinking region.
pub fn piston_rotation<T>(v: &mut [T], na: usize, nb: usize) {
    let v = &mut v[..na + nb];

    let (mut left, mut right) = (na, nb);
    let mut start = 0;

    while left > 0 {
        while left <= right {
            forward_block_swap(v, start, start + right, left);
            right -= left;
        }

        if right == 0 {
            break;
        }

        loop {
            forward_block_swap(v, start, start + left, right);
            left -= right;
            start += right;

            if right > left {
                break;
            }
        }
    }
}

/// Helix rotation: swaps the whole smaller-or-larger block across the region
/// in one sweep, letting the overlap wrap, then reduces modulo the other side.
pub fn helix_rotation<T: Copy>(v: &mut [T], na: usize, nb: usize) {
    let v = &mut v[..na + nb];

    let (mut left, mut right) = (na, nb);
    let (mut start, mut mid, mut end) = (0, na, na + nb);

    loop {
        if left > right {
            if right <= 1 {
                break;
            }

            while mid > start {
                mid -= 1;
                end -= 1;
                v.swap(mid, end);
            }

            left %= right;
            mid += left;
            right = end - mid;
        } else {
            if left <= 1 {
                break;
            }

            while mid < end {
                v.swap(mid, start);
                mid += 1;
                start += 1;
            }

            right %= left;
            mid -= right;
            left = mid - start;
        }
    }

    if left > 0 && right > 0 {
        rotate_small(&mut v[start..end], left);
    }
}

/// Drill rotation: grail derived, with piston and helix style sweeps.
pub fn drill_rotation<T: Copy>(v: &mut [T], na: usize, nb: usize) {
    let v = &mut v[..na + nb];

    let (mut left, mut right) = (na, nb);
    let (mut start, mut mid, mut end) = (0, na, na + nb);

    while left > 1 {
        if left <= right {
            right %= left;
            let stop = end - right;

            while mid < stop {
                v.swap(mid, start);
                mid += 1;
                start += 1;
            }
        }

        if right <= 1 {
            break;
        }

        left %= right;
        let stop = start + left;

        while mid > stop {
            mid -= 1;
            end -= 1;
            v.swap(mid, end);
        }
    }

    if left > 0 && right > 0 {
        rotate_small(&mut v[start..end], left);
    }
}

/// Forsort successive swap: settle the smaller block at the far
/// end of the larger one, shrink, repeat.
pub fn forsort_rotation<T>(v: &mut [T], na: usize, nb: usize) {
    let v = &mut v[..na + nb];

    let (mut na, mut nb) = (na, nb);
    let mut pa = 0;

    while na > 0 && nb > 0 {
        if na < nb {
            two_way_swap(v, pa, pa + nb, na);
            nb -= na;
        } else {
            two_way_swap(v, pa + na, pa, nb);
            pa += nb;
            na -= nb;
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::reference;

    type Rotate = fn(&mut [u16], usize, usize);

    #[test_case(gries_mills_rotation ; "gries mills")]
    #[test_case(grail_rotation ; "grail")]
    #[test_case(piston_rotation ; "piston")]
    #[test_case(helix_rotation ; "helix")]
    #[test_case(drill_rotation ; "drill")]
    #[test_case(forsort_rotation ; "forsort")]
    fn matches_reference_on_all_small_splits(f: Rotate) {
        for na in 0..=64 {
            for nb in 0..=64 {
                let mut v: Vec<u16> = (0..(na + nb) as u16).collect();
                let expected = reference::rotated(&v, na, nb);

                f(&mut v, na, nb);

                assert_eq!(v, expected, "na = {na}, nb = {nb}");
            }
        }
    }

    #[test_case(helix_rotation, 3, 2 => vec![4, 5, 1, 2, 3] ; "helix left heavy")]
    #[test_case(helix_rotation, 2, 3 => vec![3, 4, 5, 1, 2] ; "helix right heavy")]
    #[test_case(drill_rotation, 3, 2 => vec![4, 5, 1, 2, 3] ; "drill left heavy")]
    fn known(f: Rotate, na: usize, nb: usize) -> Vec<u16> {
        let mut v = vec![1, 2, 3, 4, 5];

        f(&mut v, na, nb);

        v
    }
}
