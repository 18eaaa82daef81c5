//! Small numeric helpers: the threshold step used by propagation, and
//! Hamming distance for comparing recalled patterns.

/// Threshold step: `active` if `x > threshold`, else `inactive`.
#[inline]
pub fn step(x: f32, threshold: f32, active: f32, inactive: f32) -> f32 {
    if x > threshold {
        active
    } else {
        inactive
    }
}

/// Number of positions where two equal-length patterns differ.
///
/// # Panics
/// If the lengths differ.
pub fn hamming_distance<'a, A, B>(a: A, b: B) -> usize
where
    A: IntoIterator<Item = &'a f32>,
    B: IntoIterator<Item = &'a f32>,
    A::IntoIter: ExactSizeIterator,
    B::IntoIter: ExactSizeIterator,
{
    let a = a.into_iter();
    let b = b.into_iter();
    assert_eq!(a.len(), b.len(), "patterns must have the same length");
    a.zip(b).filter(|(x, y)| x != y).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_is_strict() {
        assert_eq!(step(0.5, 0.5, 1.0, 0.0), 0.0);
        assert_eq!(step(0.51, 0.5, 1.0, 0.0), 1.0);
        assert_eq!(step(-3.0, 0.5, 1.0, -1.0), -1.0);
    }

    #[test]
    fn test_hamming_distance() {
        let a = [1.0, 0.0, 1.0, 0.0];
        let b = [1.0, 1.0, 1.0, 1.0];
        assert_eq!(hamming_distance(&a, &b), 2);
        assert_eq!(hamming_distance(&a, &a), 0);
    }

    #[test]
    #[should_panic]
    fn test_hamming_length_mismatch() {
        hamming_distance(&[1.0, 0.0], &[1.0]);
    }
}
