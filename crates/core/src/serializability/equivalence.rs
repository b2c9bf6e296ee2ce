//! Grouping serializable schedules by the serial order they match.
//!
//! Two serializable schedules are equivalent iff they carry the same
//! [`EquivalentOrder`]. Schedules of one transaction pair cannot mix
//! [`EquivalentOrder::Either`] with the one-directional tags: whether any
//! conflicting pair exists is a property of the transactions, not of the
//! interleaving, so grouping by tag is an equivalence relation.

use alloc::collections::{BTreeMap, BTreeSet};

use super::{ClassificationResult, EquivalentOrder};

/// Schedule indices per tag, for serializable schedules only.
#[must_use]
pub fn classes(results: &[ClassificationResult]) -> BTreeMap<EquivalentOrder, BTreeSet<usize>> {
    let mut classes: BTreeMap<EquivalentOrder, BTreeSet<usize>> = BTreeMap::new();
    for result in results.iter().filter(|result| result.is_serializable()) {
        classes
            .entry(result.equivalent_order)
            .or_default()
            .insert(result.schedule_index);
    }
    classes
}

/// For every serializable schedule, the indices of the *other* schedules
/// equivalent to it. Unserializable schedules get no entry and never occur
/// in any set.
#[must_use]
pub fn group(results: &[ClassificationResult]) -> BTreeMap<usize, BTreeSet<usize>> {
    let classes = classes(results);
    results
        .iter()
        .filter_map(|result| {
            let mut equivalents = classes.get(&result.equivalent_order)?.clone();
            equivalents.remove(&result.schedule_index);
            Some((result.schedule_index, equivalents))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(orders: &[EquivalentOrder]) -> Vec<ClassificationResult> {
        orders
            .iter()
            .enumerate()
            .map(|(index, &order)| ClassificationResult::new(index, order))
            .collect()
    }

    #[test]
    fn test_group_excludes_self_and_unserializable() {
        let results = results(&[
            EquivalentOrder::T1ThenT2,
            EquivalentOrder::None,
            EquivalentOrder::T1ThenT2,
            EquivalentOrder::T2ThenT1,
            EquivalentOrder::T1ThenT2,
        ]);
        let groups = group(&results);

        assert_eq!(groups.len(), 4);
        assert!(!groups.contains_key(&1));
        assert_eq!(groups[&0], [2, 4].into());
        assert_eq!(groups[&2], [0, 4].into());
        assert_eq!(groups[&4], [0, 2].into());
        assert_eq!(groups[&3], BTreeSet::new());
        assert!(groups.values().all(|set| !set.contains(&1)));
    }

    #[test]
    fn test_classes() {
        let results = results(&[
            EquivalentOrder::Either,
            EquivalentOrder::Either,
            EquivalentOrder::Either,
        ]);
        let classes = classes(&results);
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[&EquivalentOrder::Either], [0, 1, 2].into());
    }

    #[test]
    fn test_symmetric() {
        let results = results(&[
            EquivalentOrder::T2ThenT1,
            EquivalentOrder::T1ThenT2,
            EquivalentOrder::None,
            EquivalentOrder::T2ThenT1,
            EquivalentOrder::T1ThenT2,
            EquivalentOrder::T2ThenT1,
        ]);
        let groups = group(&results);
        for (index, equivalents) in &groups {
            for other in equivalents {
                assert!(groups[other].contains(index));
            }
        }
    }

    #[test]
    fn test_empty() {
        assert!(group(&[]).is_empty());
    }
}
