//! Deterministic pairing of entities into nested loop blocks.

use serde::Serialize;

use crate::entities::EntityNameList;

/// One unordered pair, ordered by list position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollisionPair {
    pub outer: String,
    pub inner: String,
}

/// One outer loop block and the entities nested inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairGroup {
    pub outer: String,
    pub inners: Vec<String>,
}

/// All outer loop blocks, in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollisionPlan {
    pub groups: Vec<PairGroup>,
}

impl CollisionPlan {
    /// Flatten groups into pairs, preserving emission order.
    pub fn pairs(&self) -> Vec<CollisionPair> {
        self.groups
            .iter()
            .flat_map(|group| {
                group.inners.iter().map(|inner| CollisionPair {
                    outer: group.outer.clone(),
                    inner: inner.clone(),
                })
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Build the plan: entity `i` opens a block for every `i < n - 1` and
/// nests every entity after it.
///
/// Lists shorter than two produce an empty plan rather than an error.
pub fn plan_collisions(entities: &EntityNameList) -> CollisionPlan {
    let names = entities.names();
    let groups = (0..names.len().saturating_sub(1))
        .map(|i| PairGroup {
            outer: names[i].clone(),
            inners: names[i + 1..].to_vec(),
        })
        .collect();
    CollisionPlan { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::entities;

    #[test]
    fn four_entities_yield_six_pairs_in_index_order() {
        let plan = plan_collisions(&entities(&["a", "b", "c", "d"]));
        let pairs: Vec<(String, String)> = plan
            .pairs()
            .into_iter()
            .map(|pair| (pair.outer, pair.inner))
            .collect();
        let expected = [
            ("a", "b"),
            ("a", "c"),
            ("a", "d"),
            ("b", "c"),
            ("b", "d"),
            ("c", "d"),
        ]
        .map(|(a, b)| (a.to_string(), b.to_string()));
        assert_eq!(pairs, expected);
    }

    #[test]
    fn block_counts_follow_list_length() {
        for n in 2..8 {
            let names: Vec<String> = (0..n).map(|i| format!("e{i}")).collect();
            let plan = plan_collisions(&EntityNameList::new(names));
            assert_eq!(plan.groups.len(), n - 1);
            assert_eq!(plan.pairs().len(), n * (n - 1) / 2);
        }
    }

    #[test]
    fn short_lists_produce_empty_plan() {
        assert!(plan_collisions(&entities(&[])).is_empty());
        assert!(plan_collisions(&entities(&["solo"])).is_empty());
    }
}
