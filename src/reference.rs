/// Returns `v[na..na + nb] ++ v[..na]` as a new vector.
pub fn rotated<T: Clone>(v: &[T], na: usize, nb: usize) -> Vec<T> {
    let region = &v[..na + nb];

    region[na..].iter().chain(&region[..na]).cloned().collect()
}

pub fn rotate<T: Copy>(v: &mut [T], na: usize, nb: usize) {
    let out = rotated(v, na, nb);
    v[..na + nb].copy_from_slice(&out);
}
