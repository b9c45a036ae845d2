//! Generation of tree variations by permuting coordinate groups.

use crate::bracket;
use crate::error::Error;
use crate::model::Tree;
use crate::variation::detector::CoordinateGroup;
use crate::variation::permutations::Permutations;
use indexmap::IndexSet;

/// Generates flattened variations of `tree` by reordering the noun phrases
/// of each coordinate group.
///
/// Groups are processed in the given order. For each group, every string
/// collected so far (the original included) is re-parsed and each
/// non-identity permutation of the group's slots is applied to it, so
/// reorderings of independent groups compound. Results are deduplicated by
/// their flattened form and kept in discovery order.
///
/// A collected tree is skipped for a group if the group's run is not found
/// there at the same positions, which happens for a group nested inside a
/// noun phrase that an earlier group moved. Orderings that only exchange
/// equal noun phrases are not tried, since they reproduce the same tree.
///
/// As soon as more than `limit` distinct strings (original included) have
/// been collected, generation stops, even in the middle of a group.
/// The original is then removed and at most `limit` variations returned.
///
/// # Arguments
/// * `tree` - Tree the groups were detected on
/// * `groups` - Coordinate groups of `tree`, in detection order
/// * `limit` - Maximum number of variations to return
///
/// # Errors
/// [Error::MalformedTree] if a collected string fails to parse again, which
/// does not happen for trees that flatten to valid bracketed notation.
///
/// # Panics
/// Panics if `limit` is zero.
pub fn generate(
    tree: &Tree,
    groups: &[CoordinateGroup],
    limit: usize,
) -> Result<IndexSet<String>, Error> {
    assert!(limit > 0, "limit must be positive");

    let original = tree.flatten();
    let mut variations = IndexSet::new();
    variations.insert(original.clone());

    'groups: for group in groups {
        // Variations added for this group are not permuted again by it
        let snapshot: Vec<String> = variations.iter().cloned().collect();

        for flat in &snapshot {
            let working = bracket::parse_str(flat)?;
            if !group.resolves_on(&working) {
                continue;
            }

            let classes = slot_classes(&working, group)?;

            for permutation in Permutations::with_classes(classes).skip(1) {
                let candidate = permute(&working, group, &permutation)?;
                variations.insert(candidate.flatten());

                if variations.len() > limit {
                    break 'groups;
                }
            }
        }
    }

    variations.shift_remove(&original);
    variations.truncate(limit);
    Ok(variations)
}

/// Class of each slot: the index of the first slot holding an equal subtree.
fn slot_classes(working: &Tree, group: &CoordinateGroup) -> Result<Vec<usize>, Error> {
    let subtrees = group
        .iter()
        .map(|slot| working.subtree_at(slot))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(subtrees
        .iter()
        .map(|subtree| {
            subtrees
                .iter()
                .position(|other| other == subtree)
                .unwrap_or_default()
        })
        .collect())
}

/// Applies one permutation of a group's slots to `working`.
///
/// Slot `i` receives the subtree that `working` holds at slot
/// `permutation[i]`. Replacement subtrees are always taken from `working`
/// itself, never from the partially permuted candidate.
///
/// # Errors
/// [Error::InvalidPosition] if a slot does not exist in `working`.
pub fn permute(
    working: &Tree,
    group: &CoordinateGroup,
    permutation: &[usize],
) -> Result<Tree, Error> {
    let mut candidate = working.clone();
    for (slot, &source) in group.iter().zip(permutation) {
        let replacement = working.subtree_at(&group[source])?;
        candidate = candidate.substitute(slot, replacement)?;
    }
    Ok(candidate)
}
