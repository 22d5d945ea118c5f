//! Permutation tables and sub-component layouts of the decomposed functions

use std::ops::Range;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::error::{LayoutError, PermutationError};

/// A bijection over `[0, n)` assigning input dimensions to sub-components
///
/// Position `j` of the permuted vector reads input coordinate `indices[j]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    indices: Vec<usize>,
}

impl Permutation {
    /// Build a permutation from 0-based indices, checking it is a bijection
    pub fn new(indices: Vec<usize>) -> Result<Self, PermutationError> {
        let len = indices.len();
        let mut seen = vec![false; len];
        for (position, &value) in indices.iter().enumerate() {
            if value >= len {
                return Err(PermutationError::OutOfRange {
                    position,
                    value,
                    len,
                });
            }
            if seen[value] {
                return Err(PermutationError::Duplicate { value });
            }
            seen[value] = true;
        }
        Ok(Self { indices })
    }

    /// The identity permutation of length `n`
    pub fn identity(n: usize) -> Self {
        Self {
            indices: (0..n).collect(),
        }
    }

    /// Shuffle in place; the result is still a bijection
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.indices.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Input coordinate read by permuted position `j`
    pub fn get(&self, j: usize) -> usize {
        self.indices[j]
    }

    /// The inverse bijection
    pub fn inverse(&self) -> Self {
        let mut inv = vec![0; self.indices.len()];
        for (j, &i) in self.indices.iter().enumerate() {
            inv[i] = j;
        }
        Self { indices: inv }
    }
}

/// Sizes, weights and overlap of the sub-components of a decomposed function
///
/// Sub-component `i` covers permuted positions
/// `[Σ_{k<i} s_k − i·overlap, Σ_{k≤i} s_k − i·overlap)`, so consecutive
/// groups share `overlap` positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubComponentSpec {
    sizes: Vec<usize>,
    weights: Vec<f64>,
    overlap: usize,
}

impl SubComponentSpec {
    pub fn new(sizes: Vec<usize>, weights: Vec<f64>, overlap: usize) -> Result<Self, LayoutError> {
        if sizes.is_empty() {
            return Err(LayoutError::Empty);
        }
        if sizes.len() != weights.len() {
            return Err(LayoutError::WeightCount {
                sizes: sizes.len(),
                weights: weights.len(),
            });
        }
        if let Some((index, &size)) = sizes.iter().enumerate().find(|&(_, &s)| s <= overlap) {
            return Err(LayoutError::TooSmall {
                index,
                size,
                overlap,
            });
        }
        Ok(Self {
            sizes,
            weights,
            overlap,
        })
    }

    /// Number of sub-components
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Permuted index ranges of every sub-component, in evaluation order
    pub fn ranges(&self) -> Vec<Range<usize>> {
        let mut consumed = 0;
        self.sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                let start = consumed - i * self.overlap;
                consumed += size;
                start..start + size
            })
            .collect()
    }

    /// Number of permuted positions covered by the sub-components
    pub fn covered(&self) -> usize {
        let total: usize = self.sizes.iter().sum();
        total - (self.sizes.len() - 1) * self.overlap
    }

    /// Check the layout against a vector of length `dim`
    ///
    /// With a residual part the groups may leave a tail uncovered, otherwise
    /// they must cover `dim` exactly.
    pub fn check_fits(&self, dim: usize, residual: bool) -> Result<(), LayoutError> {
        let covered = self.covered();
        if residual && covered > dim {
            return Err(LayoutError::Overflow { covered, dim });
        }
        if !residual && covered != dim {
            return Err(LayoutError::Coverage {
                covered,
                expected: dim,
            });
        }
        Ok(())
    }

    /// Distinct sizes in ascending order, one rotation matrix each
    pub fn distinct_sizes(&self) -> Vec<usize> {
        let mut sizes = self.sizes.clone();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }
}
