//! Vector Similarity Functions
//!
//! Dot product, normalization and cosine similarity over f32 slices.

/// Compute dot product of two vectors
///
/// Uses unrolled loop for better CPU performance.
#[inline]
pub fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "Vector dimensions must match");

    let len = a.len();
    let mut sum = 0.0f32;

    // Process 4 elements at a time (manual unrolling)
    let chunks = len / 4;
    let remainder = len % 4;

    for i in 0..chunks {
        let idx = i * 4;
        sum += a[idx] * b[idx];
        sum += a[idx + 1] * b[idx + 1];
        sum += a[idx + 2] * b[idx + 2];
        sum += a[idx + 3] * b[idx + 3];
    }

    // Handle remainder
    for i in (len - remainder)..len {
        sum += a[i] * b[i];
    }

    sum
}

/// Euclidean norm of a vector
#[inline]
pub fn magnitude(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Return a unit-length copy of `v`
///
/// Zero vectors are returned unchanged rather than dividing by zero.
pub fn normalized(v: &[f32]) -> Vec<f32> {
    let mut result = v.to_vec();
    let mag = magnitude(v);
    if mag > 0.0 {
        for x in result.iter_mut() {
            *x /= mag;
        }
    }
    result
}

/// Normalize every row of a row-major matrix to unit length
///
/// `matrix.len()` must be a multiple of `dim`. Zero rows stay zero, so
/// they score 0 against every query instead of producing NaN.
pub fn unit_rows(matrix: &[f32], dim: usize) -> Vec<f32> {
    let mut unit = matrix.to_vec();
    if dim == 0 {
        return unit;
    }

    debug_assert_eq!(matrix.len() % dim, 0, "matrix length must be a multiple of dim");

    for row in unit.chunks_mut(dim) {
        let mag = magnitude(row);
        if mag > 0.0 {
            for x in row.iter_mut() {
                *x /= mag;
            }
        }
    }
    unit
}

/// Compute cosine similarity between two vectors
///
/// Returns value in range [-1, 1] where 1 means identical direction.
/// Zero vectors yield 0.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "Vector dimensions must match");

    let dot = dot_product(a, b);
    let denom = magnitude(a) * magnitude(b);
    if denom > 0.0 {
        dot / denom
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_product() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![4.0, 5.0, 6.0];
        assert!((dot_product(&a, &b) - 32.0).abs() < 1e-6);
    }

    #[test]
    fn test_dot_product_unrolled_lengths() {
        // Exercise both the unrolled chunks and the remainder path
        let a: Vec<f32> = (0..7).map(|i| i as f32).collect();
        let expected: f32 = a.iter().map(|x| x * x).sum();
        assert!((dot_product(&a, &a) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_identical() {
        let a = vec![1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![0.0, 1.0, 0.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_opposite() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![-1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_zero_vector() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 0.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_normalize() {
        let n = normalized(&[3.0, 4.0, 0.0]);
        assert!((n[0] - 0.6).abs() < 1e-6);
        assert!((n[1] - 0.8).abs() < 1e-6);
        assert!(n[2].abs() < 1e-6);
    }

    #[test]
    fn test_unit_rows() {
        let matrix = vec![3.0, 4.0, 0.0, 0.0, 0.0, 5.0];
        let unit = unit_rows(&matrix, 2);

        assert!((unit[0] - 0.6).abs() < 1e-6);
        assert!((unit[1] - 0.8).abs() < 1e-6);
        // Zero row unchanged
        assert_eq!(&unit[2..4], &[0.0, 0.0]);
        assert!((unit[5] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_unit_rows_magnitudes() {
        let matrix = vec![1.0, 2.0, 3.0, -4.0, 0.5, 0.5];
        let unit = unit_rows(&matrix, 3);
        for row in unit.chunks(3) {
            assert!((magnitude(row) - 1.0).abs() < 1e-5);
        }
    }
}
