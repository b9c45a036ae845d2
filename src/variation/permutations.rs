//! Permutations of slot indices in lexicographic order.

/// Iterator over the orderings of `0..n`, in lexicographic order.
///
/// The first item is always the identity `[0, 1, .., n-1]`. For `n == 0`
/// the single empty ordering is yielded.
///
/// Indices may be grouped into classes of interchangeable slots with
/// [`with_classes`](Self::with_classes). Then only orderings that keep the
/// indices of every class in ascending order are yielded: exactly one per
/// distinct arrangement of the classes, namely its lexicographically
/// smallest ordering.
///
/// # Example
/// ```
/// use paratree::variation::permutations::Permutations;
///
/// let all: Vec<Vec<usize>> = Permutations::new(3).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec![0, 1, 2]);
/// assert_eq!(all[1], vec![0, 2, 1]);
/// assert_eq!(all[5], vec![2, 1, 0]);
///
/// // Slots 0 and 1 are interchangeable
/// let distinct: Vec<Vec<usize>> = Permutations::with_classes(vec![0, 0, 1]).collect();
/// assert_eq!(distinct, vec![vec![0, 1, 2], vec![0, 2, 1], vec![2, 0, 1]]);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations {
    /// Class of each slot index
    classes: Vec<usize>,
    current: Option<Vec<usize>>,
}

impl Permutations {
    /// Creates an iterator over all orderings of `0..n`.
    pub fn new(n: usize) -> Self {
        Self::with_classes((0..n).collect())
    }

    /// Creates an iterator over the distinct arrangements of slots, where
    /// slot `i` belongs to class `classes[i]`.
    pub fn with_classes(classes: Vec<usize>) -> Self {
        Permutations {
            current: Some((0..classes.len()).collect()),
            classes,
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        let mut successor = current.clone();
        if advance(&mut successor, &self.classes) {
            self.current = Some(successor);
        }
        Some(current)
    }
}

/// Rearranges `indices` into the lexicographically next ordering that keeps
/// every class ascending.
///
/// Returns `false` if `indices` already was the last such ordering.
fn advance(indices: &mut [usize], classes: &[usize]) -> bool {
    for pivot in (0..indices.len().saturating_sub(1)).rev() {
        let mut available = indices[pivot..].to_vec();
        available.sort_unstable();

        // Only the smallest remaining index of a class may come next
        let next = available.iter().copied().find(|&index| {
            index > indices[pivot]
                && available
                    .iter()
                    .find(|&&other| classes[other] == classes[index])
                    == Some(&index)
        });

        if let Some(next) = next {
            indices[pivot] = next;
            available.retain(|&index| index != next);
            indices[pivot + 1..].copy_from_slice(&available);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(Permutations::new(0).count(), 1);
        assert_eq!(Permutations::new(1).count(), 1);
        assert_eq!(Permutations::new(2).count(), 2);
        assert_eq!(Permutations::new(4).count(), 24);
        assert_eq!(Permutations::new(5).count(), 120);
    }

    #[test]
    fn test_lexicographic_order() {
        let all: Vec<Vec<usize>> = Permutations::new(3).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn test_classes_keep_discovery_order() {
        // Same relative order as the full enumeration, duplicates dropped
        let classes = vec![0, 1, 0, 1];
        let full: Vec<Vec<usize>> = Permutations::new(4).collect();
        let canonical: Vec<Vec<usize>> = full
            .into_iter()
            .filter(|ordering| {
                (0..4).all(|i| {
                    (i + 1..4).all(|j| {
                        classes[ordering[i]] != classes[ordering[j]] || ordering[i] < ordering[j]
                    })
                })
            })
            .collect();
        let distinct: Vec<Vec<usize>> = Permutations::with_classes(classes).collect();
        assert_eq!(distinct, canonical);
        assert_eq!(distinct.len(), 6);
    }

    #[test]
    fn test_single_class_yields_identity_only() {
        let all: Vec<Vec<usize>> = Permutations::with_classes(vec![0; 10]).collect();
        assert_eq!(all, vec![(0..10).collect::<Vec<usize>>()]);
    }

    #[test]
    fn test_all_distinct() {
        let mut all: Vec<Vec<usize>> = Permutations::new(4).collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 24);
    }
}
