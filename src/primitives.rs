/// Exchanges `v[a + i]` with `v[b + i]` for `i` in `0..n`, ascending.
///
/// Overlapping streams are swapped element by element so the result matches a
/// sequential pointer walk.
#[inline]
pub fn two_way_swap<T>(v: &mut [T], a: usize, b: usize, n: usize) {
    if n == 0 {
        return;
    }

    if a + n <= b {
        let (lo, hi) = v.split_at_mut(b);
        lo[a..a + n].swap_with_slice(&mut hi[..n]);
    } else if b + n <= a {
        let (lo, hi) = v.split_at_mut(a);
        hi[..n].swap_with_slice(&mut lo[b..b + n]);
    } else {
        for i in 0..n {
            v.swap(a + i, b + i);
        }
    }
}

/// Cyclic move over three equal-length streams: `a <- b`, `b <- c`, `c <- a`.
///
/// Streams are walked in ascending order.
#[inline]
pub fn three_way_swap<T: Copy>(
    v: &mut [T],
    a: usize,
    b: usize,
    c: usize,
    n: usize,
) {
    for i in 0..n {
        let t = v[a + i];
        v[a + i] = v[b + i];
        v[b + i] = v[c + i];
        v[c + i] = t;
    }
}

#[inline]
pub fn three_way_swap_back<T: Copy>(
    v: &mut [T],
    a: usize,
    b: usize,
    c: usize,
    n: usize,
) {
    for i in (0..n).rev() {
        let t = v[a + i];
        v[a + i] = v[b + i];
        v[b + i] = v[c + i];
        v[c + i] = t;
    }
}

#[inline]
pub fn reverse_block<T>(block: &mut [T]) {
    if block.is_empty() {
        return;
    }

    let (mut i, mut j) = (0, block.len() - 1);
    while i < j {
        block.swap(i, j);
        i += 1;
        j -= 1;
    }
}

#[inline]
pub fn forward_block_swap<T>(
    v: &mut [T],
    start1: usize,
    start2: usize,
    n: usize,
) {
    two_way_swap(v, start1, start2, n);
}

#[inline]
pub fn backward_block_swap<T>(
    v: &mut [T],
    start1: usize,
    start2: usize,
    n: usize,
) {
    for i in (0..n).rev() {
        v.swap(start1 + i, start2 + i);
    }
}

// Conjoined reversal combinators. `pb` and `pd` are exclusive ends that are
// pre-decremented before each access; `pa` and `pc` are inclusive starts.

/// Runs the three reversals of A, B and the whole region as one pass:
/// `pb-1 <- pa <- pc <- pd-1 <- pb-1` per step.
#[inline]
pub fn contrev<T: Copy>(
    v: &mut [T],
    mut pa: usize,
    mut pb: usize,
    mut pc: usize,
    mut pd: usize,
    n: usize,
) {
    for _ in 0..n {
        pb -= 1;
        pd -= 1;
        let t = v[pb];
        v[pb] = v[pa];
        v[pa] = v[pc];
        v[pc] = v[pd];
        v[pd] = t;
        pa += 1;
        pc += 1;
    }
}

#[inline]
pub fn shiftrev_up<T: Copy>(
    v: &mut [T],
    mut pa: usize,
    mut pc: usize,
    mut pd: usize,
    n: usize,
) {
    for _ in 0..n {
        pd -= 1;
        let t = v[pc];
        v[pc] = v[pd];
        v[pd] = v[pa];
        v[pa] = t;
        pa += 1;
        pc += 1;
    }
}

#[inline]
pub fn shiftrev_down<T: Copy>(
    v: &mut [T],
    mut pa: usize,
    mut pb: usize,
    mut pd: usize,
    n: usize,
) {
    for _ in 0..n {
        pb -= 1;
        pd -= 1;
        let t = v[pb];
        v[pb] = v[pa];
        v[pa] = v[pd];
        v[pd] = t;
        pa += 1;
    }
}

#[inline]
pub fn justrev<T>(v: &mut [T], mut pa: usize, mut pb: usize, n: usize) {
    for _ in 0..n {
        pb -= 1;
        v.swap(pa, pb);
        pa += 1;
    }
}

#[inline]
pub fn bridge_down<T: Copy>(
    v: &mut [T],
    mut pb: usize,
    mut pc: usize,
    mut pd: usize,
    n: usize,
) {
    for _ in 0..n {
        pb -= 1;
        pc -= 1;
        pd -= 1;
        v[pc] = v[pd];
        v[pd] = v[pb];
    }
}

#[inline]
pub fn bridge_up<T: Copy>(
    v: &mut [T],
    mut pa: usize,
    mut pb: usize,
    mut pc: usize,
    n: usize,
) {
    for _ in 0..n {
        v[pc] = v[pa];
        v[pa] = v[pb];
        pa += 1;
        pb += 1;
        pc += 1;
    }
}
