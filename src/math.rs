//! Small helpers over per-particle slices.

/// Writes `a - b` into `out` and returns the Euclidean norm of the result.
#[inline]
pub fn displacement_into(a: &[f64], b: &[f64], out: &mut [f64]) -> f64 {
    let mut d2 = 0.0;
    for ((o, x), y) in out.iter_mut().zip(a).zip(b) {
        *o = x - y;
        d2 += *o * *o;
    }
    d2.sqrt()
}

#[inline]
pub fn norm_squared(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum()
}

/// Integer ceiling division for positive divisors.
pub fn div_ceil(n: usize, d: usize) -> usize {
    (n + d - 1) / d
}
