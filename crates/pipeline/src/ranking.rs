//! Similarity ranking within a filtered subset.
//!
//! The subset's centroid acts as a synthetic profile of everything that
//! matched the filters; the rows closest to it in cosine distance are the
//! recommendations.

use catalog::RowIndex;
use codec::FeatureMatrix;
use rayon::prelude::*;

/// A row found by a nearest-neighbor search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Position within the searched subset
    pub local: usize,
    /// Cosine distance to the query, in [0, 2]
    pub distance: f32,
}

impl Neighbor {
    /// `1 - distance`, clamped to [0, 1]
    pub fn similarity(&self) -> f32 {
        (1.0 - self.distance).clamp(0.0, 1.0)
    }
}

#[inline]
fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[inline]
fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine distance `1 - (a·b)/(|a||b|)`.
///
/// A zero vector has no direction; its similarity to anything is 0, so its
/// distance is 1.
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }
    let similarity = (dot_product(a, b) / (norm_a * norm_b)).clamp(-1.0, 1.0);
    1.0 - similarity
}

/// Arithmetic mean of the given rows.
///
/// Accumulates in f64 so large subsets don't drift.
pub fn centroid(matrix: &FeatureMatrix, rows: &[RowIndex]) -> Vec<f32> {
    let mut sums = vec![0.0f64; matrix.n_cols()];
    for &row in rows {
        for (sum, &x) in sums.iter_mut().zip(matrix.row(row)) {
            *sum += x as f64;
        }
    }
    let n = rows.len().max(1) as f64;
    sums.into_iter().map(|s| (s / n) as f32).collect()
}

/// Brute-force cosine nearest-neighbor index over a subset of matrix rows.
///
/// Built per request over the filtered rows only; positions it returns are
/// local to `rows`.
pub struct SubsetIndex<'a> {
    matrix: &'a FeatureMatrix,
    rows: &'a [RowIndex],
}

impl<'a> SubsetIndex<'a> {
    pub fn new(matrix: &'a FeatureMatrix, rows: &'a [RowIndex]) -> Self {
        Self { matrix, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Centroid of the indexed rows
    pub fn centroid(&self) -> Vec<f32> {
        centroid(self.matrix, self.rows)
    }

    /// The `k` rows closest to `query`, nearest first.
    ///
    /// `k` is clamped to the subset size. Equal distances are ordered by
    /// subset position, so the result is deterministic.
    pub fn kneighbors(&self, query: &[f32], k: usize) -> Vec<Neighbor> {
        let k = k.min(self.rows.len());
        if k == 0 {
            return Vec::new();
        }

        let mut neighbors: Vec<Neighbor> = self
            .rows
            .par_iter()
            .enumerate()
            .map(|(local, &row)| Neighbor {
                local,
                distance: cosine_distance(self.matrix.row(row), query),
            })
            .collect();

        neighbors.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.local.cmp(&b.local))
        });
        neighbors.truncate(k);
        neighbors
    }

    /// Map a local position back to its catalog row
    pub fn global(&self, neighbor: &Neighbor) -> RowIndex {
        self.rows[neighbor.local]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f32>>) -> FeatureMatrix {
        let n_cols = rows.first().map(|r| r.len()).unwrap_or(0);
        let columns = (0..n_cols).map(|i| format!("f{}", i)).collect();
        FeatureMatrix::from_rows(columns, rows).unwrap()
    }

    #[test]
    fn test_cosine_distance() {
        assert!(cosine_distance(&[1.0, 0.0], &[2.0, 0.0]).abs() < 1e-6);
        assert!((cosine_distance(&[1.0, 0.0], &[0.0, 1.0]) - 1.0).abs() < 1e-6);
        assert!((cosine_distance(&[1.0, 0.0], &[-1.0, 0.0]) - 2.0).abs() < 1e-6);
        assert_eq!(cosine_distance(&[0.0, 0.0], &[1.0, 1.0]), 1.0);
    }

    #[test]
    fn test_similarity_is_clamped() {
        let opposite = Neighbor {
            local: 0,
            distance: 2.0,
        };
        assert_eq!(opposite.similarity(), 0.0);

        let noisy = Neighbor {
            local: 0,
            distance: -1e-7,
        };
        assert_eq!(noisy.similarity(), 1.0);
    }

    #[test]
    fn test_centroid() {
        let m = matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![100.0, 100.0]]);
        assert_eq!(centroid(&m, &[0, 1]), vec![2.0, 3.0]);
    }

    #[test]
    fn test_kneighbors_nearest_first() {
        let m = matrix(vec![
            vec![1.0, 0.0],  // 0
            vec![0.0, 1.0],  // 1
            vec![1.0, 0.1],  // 2
            vec![-1.0, 0.0], // 3
        ]);
        let rows = vec![0, 1, 2, 3];
        let index = SubsetIndex::new(&m, &rows);

        let neighbors = index.kneighbors(&[1.0, 0.0], 3);
        let locals: Vec<usize> = neighbors.iter().map(|n| n.local).collect();
        assert_eq!(locals, vec![0, 2, 1]);
        assert!(neighbors.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn test_kneighbors_searches_subset_only() {
        let m = matrix(vec![
            vec![1.0, 0.0], // 0: identical to query, but outside the subset
            vec![0.0, 1.0], // 1
            vec![1.0, 1.0], // 2
        ]);
        let rows = vec![1, 2];
        let index = SubsetIndex::new(&m, &rows);

        let neighbors = index.kneighbors(&[1.0, 0.0], 5);
        assert_eq!(neighbors.len(), 2, "k is clamped to the subset size");
        assert_eq!(neighbors[0].local, 1);
        assert_eq!(index.global(&neighbors[0]), 2);
        assert_eq!(index.global(&neighbors[1]), 1);
    }

    #[test]
    fn test_ties_break_by_position() {
        let m = matrix(vec![vec![1.0, 2.0], vec![1.0, 2.0], vec![1.0, 2.0]]);
        let rows = vec![2, 0, 1];
        let index = SubsetIndex::new(&m, &rows);

        let neighbors = index.kneighbors(&index.centroid(), 3);
        let locals: Vec<usize> = neighbors.iter().map(|n| n.local).collect();
        assert_eq!(locals, vec![0, 1, 2]);
    }

    #[test]
    fn test_zero_k() {
        let m = matrix(vec![vec![1.0]]);
        let rows = vec![0];
        assert!(SubsetIndex::new(&m, &rows).kneighbors(&[1.0], 0).is_empty());
    }
}
